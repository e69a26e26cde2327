use srim_core::domain::SrimErrorCategory;
use srim_core::output::{
    EnergyToRecoils, Ioniz, NoVacancy, OutputReader, Phonons, Range, Results, Vacancy,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const TARGET_ELEMENTS: usize = 2;

struct OutputFile {
    name: &'static str,
    title: &'static str,
    columns: usize,
}

const OUTPUT_FILES: [OutputFile; 6] = [
    OutputFile {
        name: "IONIZ.txt",
        title: "Ion and Recoil IONIZATION",
        columns: 3,
    },
    OutputFile {
        name: "VACANCY.txt",
        title: "Vacancy Distribution",
        columns: 2 + TARGET_ELEMENTS,
    },
    OutputFile {
        name: "NOVAC.txt",
        title: "Replacement Collisions",
        columns: 2,
    },
    OutputFile {
        name: "E2RECOIL.txt",
        title: "Energy Transferred to Recoils",
        columns: 2 + TARGET_ELEMENTS,
    },
    OutputFile {
        name: "PHONON.txt",
        title: "Distribution of Phonons",
        columns: 3,
    },
    OutputFile {
        name: "RANGE.txt",
        title: "Final Distribution of Ions/Recoils",
        columns: 2 + TARGET_ELEMENTS,
    },
];

fn distribution_file(file: &OutputFile, kinchin_pease: bool) -> String {
    let mut text = String::new();
    text.push_str(" ==================================================================\r\n");
    text.push_str(&format!("              {}\r\n", file.title));
    text.push_str(" ==================================================================\r\n");
    text.push_str("  SRIM version ---> SRIM-2013.00\r\n");
    if kinchin_pease {
        text.push_str(" ==== Recoil/Damage Calculations made with Kinchin-Pease Estimates ====\r\n");
    } else {
        text.push_str(" ========= Recoil/Damage Calculations made with Full Cascades =========\r\n");
    }
    text.push_str(" Ion    =  Au   Energy = 1200.0 keV\r\n");
    text.push_str(" ============= TARGET MATERIAL ======================================\r\n");
    text.push_str(" Layer 1 : Nickel Iron\r\n");
    text.push_str(" Layer Width = 1.E+04 A ;\r\n");
    text.push_str("   Layer #1- Density = 8.5E22 atoms/cm3 = 7.9 g/cm3\r\n");
    text.push_str("   Layer #1- Ni = 80.0  Atomic Percent = 80.8  Mass Percent\r\n");
    text.push_str("   Layer #1- Fe = 20.0  Atomic Percent = 19.2  Mass Percent\r\n");
    text.push_str(" ====================================================================\r\n");
    text.push_str(" Total Ions calculated =250.50\r\n");
    text.push_str(" ====================================================================\r\n");
    text.push_str("\r\n   TARGET      COLUMN      COLUMN\r\n   DEPTH       VALUES      VALUES\r\n");
    text.push_str(&vec!["-----------"; file.columns].join("  "));
    text.push_str("\r\n");
    for row in 1..=100 {
        let mut values = vec![format!("{:.2}", row as f64 * 100.0)];
        values.extend((1..file.columns).map(|column| format!("{:.4E}", (row * column) as f64 * 1.0e-3)));
        text.push_str(&values.join("  "));
        text.push_str("\r\n");
    }
    text
}

fn write_output_dir(directory: &Path, kinchin_pease: bool) {
    for file in &OUTPUT_FILES {
        let content = if kinchin_pease && file.name == "NOVAC.txt" {
            let mut text = distribution_file(file, true);
            text.truncate(text.find("   TARGET").unwrap_or(text.len()));
            text
        } else {
            distribution_file(file, kinchin_pease)
        };
        fs::write(directory.join(file.name), content).expect("fixture should be written");
    }
}

#[test]
fn ioniz_reads_full_table_and_converts_header_energy() {
    let temp = TempDir::new().expect("tempdir should be created");
    write_output_dir(temp.path(), false);

    let ioniz = Ioniz::from_dir(temp.path()).expect("IONIZ should parse");
    assert_eq!(ioniz.depth().len(), 100);
    assert_eq!(ioniz.ions().len(), 100);
    assert_eq!(ioniz.recoils().len(), 100);
    assert_eq!(ioniz.ion().symbol(), "Au");
    assert_eq!(ioniz.ion().energy(), 1_200_000.0);
    assert_eq!(ioniz.num_ions(), 250);
    assert_eq!(ioniz.depth()[99], 10_000.0);
}

#[test]
fn full_cascade_directory_loads_every_reader() {
    let temp = TempDir::new().expect("tempdir should be created");
    write_output_dir(temp.path(), false);

    let results = Results::from_dir(temp.path()).expect("results should load");
    let novac = results.novac.as_ref().expect("NOVAC present for full cascades");
    assert_eq!(novac.number().len(), 100);
    assert_eq!(results.vacancy.vacancies().len(), TARGET_ELEMENTS);
    assert_eq!(results.etorecoils.absorbed().len(), TARGET_ELEMENTS);
    assert_eq!(results.range.elements().len(), TARGET_ELEMENTS);
    assert_eq!(results.phonons.recoils().len(), 100);
}

#[test]
fn kinchin_pease_directory_reports_novac_absent() {
    let temp = TempDir::new().expect("tempdir should be created");
    write_output_dir(temp.path(), true);

    let error = NoVacancy::from_dir(temp.path()).expect_err("NOVAC is not applicable");
    assert_eq!(error.category(), SrimErrorCategory::NotApplicable);

    let results = Results::from_dir(temp.path()).expect("results should load");
    assert!(results.novac.is_none());
    assert_eq!(results.ioniz.depth().len(), 100);
    assert_eq!(results.vacancy.depth().len(), 100);
    assert_eq!(results.etorecoils.depth().len(), 100);
    assert_eq!(results.phonons.depth().len(), 100);
    assert_eq!(results.range.depth().len(), 100);
}

#[test]
fn aggregator_propagates_other_failures() {
    let temp = TempDir::new().expect("tempdir should be created");
    write_output_dir(temp.path(), false);

    let phonon = distribution_file(&OUTPUT_FILES[4], false);
    let truncated: String = phonon.lines().take(60).collect::<Vec<_>>().join("\r\n");
    fs::write(temp.path().join("PHONON.txt"), truncated).expect("truncate PHONON");
    let error = Results::from_dir(temp.path()).expect_err("short PHONON table");
    assert_eq!(error.category(), SrimErrorCategory::ParseError);
    assert_eq!(error.code(), "PARSE.TABLE");

    fs::remove_file(temp.path().join("RANGE.txt")).expect("remove RANGE");
    fs::write(
        temp.path().join("PHONON.txt"),
        distribution_file(&OUTPUT_FILES[4], false),
    )
    .expect("restore PHONON");
    let error = Results::from_dir(temp.path()).expect_err("missing RANGE");
    assert_eq!(error.category(), SrimErrorCategory::IoSystemError);
}

#[test]
fn header_failures_identify_the_step() {
    let temp = TempDir::new().expect("tempdir should be created");
    let text = distribution_file(&OUTPUT_FILES[0], false);

    let no_ion = text.replace("Ion    =  Au", "Projectile");
    fs::write(temp.path().join("IONIZ.txt"), no_ion).expect("write IONIZ");
    assert_eq!(
        Ioniz::from_dir(temp.path()).expect_err("no ion").code(),
        "PARSE.ION_HEADER"
    );

    let no_count = text.replace("Total Ions calculated", "Total calculated");
    fs::write(temp.path().join("IONIZ.txt"), no_count).expect("write IONIZ");
    assert_eq!(
        Ioniz::from_dir(temp.path()).expect_err("no count").code(),
        "PARSE.ION_COUNT"
    );
}

#[test]
fn readers_are_idempotent_over_the_same_bytes() {
    let temp = TempDir::new().expect("tempdir should be created");
    write_output_dir(temp.path(), false);

    assert_eq!(
        Ioniz::from_dir(temp.path()).expect("first"),
        Ioniz::from_dir(temp.path()).expect("second")
    );
    assert_eq!(
        Vacancy::from_dir(temp.path()).expect("first"),
        Vacancy::from_dir(temp.path()).expect("second")
    );
    assert_eq!(
        EnergyToRecoils::from_dir(temp.path()).expect("first"),
        EnergyToRecoils::from_dir(temp.path()).expect("second")
    );
    assert_eq!(
        Phonons::from_dir(temp.path()).expect("first"),
        Phonons::from_dir(temp.path()).expect("second")
    );
    assert_eq!(
        Range::from_dir(temp.path()).expect("first"),
        Range::from_dir(temp.path()).expect("second")
    );
    assert_eq!(
        Results::from_dir(temp.path()).expect("first"),
        Results::from_dir(temp.path()).expect("second")
    );
}

#[test]
fn target_composition_is_available_from_any_output() {
    let bytes = distribution_file(&OUTPUT_FILES[1], false).into_bytes();
    let layers = srim_core::output::extract_target_composition(&bytes).expect("composition");
    let layer = &layers[&1_u32];
    assert_eq!(layer.name, "Nickel Iron");
    assert_eq!(layer.atom_density, Some(8.5e22));
    let symbols: Vec<&str> = layer.elements.iter().map(|e| e.symbol.as_str()).collect();
    assert_eq!(symbols, ["Ni", "Fe"]);
}
