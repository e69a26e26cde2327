mod commands;
mod helpers;

use clap::Parser;
use srim_core::domain::SrimError;

pub fn run_from_env() -> i32 {
    helpers::init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(args) {
        Ok(code) => code,
        Err(error) => {
            let srim_error = error.as_srim_error();
            eprintln!("{}", srim_error.diagnostic_line());
            srim_error.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once("srim-rs".to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();

    match Cli::try_parse_from(&full_args) {
        Ok(cli) => dispatch_parsed(cli.command),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(name = "srim-rs", about = "Inspect SRIM/TRIM calculation outputs")]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Read every TRIM distribution file in an output directory
    Results(commands::ResultsArgs),
    /// Read the stopping-power summary of an SR run
    Stopping(commands::StoppingArgs),
    /// Index a collision log and print one ion record
    Collisions(commands::CollisionsArgs),
    /// Print the target composition declared in a TRIM output header
    Composition(commands::CompositionArgs),
    /// Validate a TRIM calculation file and list the outputs it produces
    Outputs(commands::OutputsArgs),
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Results(args) => commands::run_results_command(args),
        CliCommand::Stopping(args) => commands::run_stopping_command(args),
        CliCommand::Collisions(args) => commands::run_collisions_command(args),
        CliCommand::Composition(args) => commands::run_composition_command(args),
        CliCommand::Outputs(args) => commands::run_outputs_command(args),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Srim(#[from] SrimError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn as_srim_error(&self) -> SrimError {
        match self {
            Self::Usage(message) => SrimError::validation("INPUT.CLI_USAGE", message.clone()),
            Self::Srim(error) => error.clone(),
            Self::Internal(error) => SrimError::io_system("IO.CLI", format!("{error:#}")),
        }
    }
}
