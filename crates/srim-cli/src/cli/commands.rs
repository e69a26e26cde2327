use super::CliError;
use super::helpers::print_json;
use serde::Serialize;
use srim_core::domain::OutputKind;
use srim_core::output::{CollisionLog, OutputReader, Results, SrResults, extract_target_composition};
use srim_core::output::parser::read_output_file;
use srim_core::settings::load_trim_calculation;
use std::path::PathBuf;

#[derive(clap::Args)]
pub(super) struct ResultsArgs {
    /// TRIM output directory
    #[arg(value_name = "DIR")]
    directory: PathBuf,

    /// Print header fields and table sizes instead of the full tables
    #[arg(long)]
    summary: bool,
}

#[derive(clap::Args)]
pub(super) struct StoppingArgs {
    /// SR output directory
    #[arg(value_name = "DIR")]
    directory: PathBuf,

    /// Summary file name inside the directory
    #[arg(long, default_value = "SR_OUTPUT.txt")]
    file: String,
}

#[derive(clap::Args)]
pub(super) struct CollisionsArgs {
    /// Collision log path
    #[arg(value_name = "FILE")]
    path: PathBuf,

    /// Zero-based ion record to print; only the record count is printed when omitted
    #[arg(long)]
    record: Option<usize>,
}

#[derive(clap::Args)]
pub(super) struct CompositionArgs {
    /// Any TRIM distribution file
    #[arg(value_name = "FILE")]
    path: PathBuf,
}

#[derive(clap::Args)]
pub(super) struct OutputsArgs {
    /// TRIM calculation settings (JSON)
    #[arg(value_name = "SETTINGS")]
    settings: PathBuf,
}

#[derive(Serialize)]
struct ResultsSummary<'a> {
    ion: &'a str,
    energy_ev: f64,
    num_ions: u64,
    depth_bins: usize,
    target_elements: usize,
    novac: bool,
}

#[derive(Serialize)]
struct CollisionLogSummary {
    path: PathBuf,
    records: usize,
}

pub(super) fn run_results_command(args: ResultsArgs) -> Result<i32, CliError> {
    let results = Results::from_dir(&args.directory)?;
    if args.summary {
        print_json(&ResultsSummary {
            ion: results.ioniz.ion().symbol(),
            energy_ev: results.ioniz.ion().energy(),
            num_ions: results.ioniz.num_ions(),
            depth_bins: results.ioniz.depth().len(),
            target_elements: results.vacancy.vacancies().len(),
            novac: results.novac.is_some(),
        })?;
    } else {
        print_json(&results)?;
    }
    Ok(0)
}

pub(super) fn run_stopping_command(args: StoppingArgs) -> Result<i32, CliError> {
    let results = SrResults::from_file(args.directory.join(&args.file))?;
    print_json(&results)?;
    Ok(0)
}

pub(super) fn run_collisions_command(args: CollisionsArgs) -> Result<i32, CliError> {
    let log = CollisionLog::open(&args.path)?;
    tracing::debug!(records = log.len(), "opened collision log");
    match args.record {
        Some(index) => print_json(&log.record(index)?)?,
        None => print_json(&CollisionLogSummary {
            path: args.path,
            records: log.len(),
        })?,
    }
    Ok(0)
}

pub(super) fn run_composition_command(args: CompositionArgs) -> Result<i32, CliError> {
    let bytes = read_output_file(&args.path)?;
    print_json(&extract_target_composition(&bytes)?)?;
    Ok(0)
}

pub(super) fn run_outputs_command(args: OutputsArgs) -> Result<i32, CliError> {
    let calculation = load_trim_calculation(&args.settings)?;
    let files: Vec<&str> = calculation
        .expected_outputs()
        .into_iter()
        .map(OutputKind::file_name)
        .collect();
    print_json(&files)?;
    Ok(0)
}
