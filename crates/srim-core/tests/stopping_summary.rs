use srim_core::domain::SrimErrorCategory;
use srim_core::output::{OutputReader, SrResults};
use srim_core::settings::SrSettings;
use std::fs;
use tempfile::TempDir;

fn sr_output(rows: &[&str]) -> String {
    let mut text = String::from(
        " ==================================================================\r\n\
         \x20             Calculation using SRIM-2006\r\n\
         \x20             SRIM version ---> SRIM-2013.00\r\n\
         \x20==================================================================\r\n\
         \r\n\
         \x20Disk File Name = SRIM Outputs\\Helium in Silicon Carbide\r\n\
         \r\n\
         \x20Ion = Helium [2] , Mass = 4.003 amu\r\n\
         \r\n\
         \x20Target Density =  3.2100E+00 g/cm3 = 9.6430E+22 atoms/cm3\r\n\
         \x20======= Target  Composition ========\r\n\
         \x20   Atom   Atom   Atomic    Mass\r\n\
         \x20   Name   Numb   Percent   Percent\r\n\
         \x20   ----   ----   -------   -------\r\n\
         \x20    Si     14    050.00    070.05\r\n\
         \x20    C      06    050.00    029.95\r\n\
         \x20====================================\r\n\
         \x20Bragg Correction = 0.00%\r\n\
         \x20Stopping Units =  eV / Angstrom \r\n\
         \x20See bottom of Table for other Stopping units\r\n\
         \r\n\
         \x20  Ion        dE/dx      dE/dx     Projected  Longitudinal   Lateral\r\n\
         \x20 Energy      Elec.      Nuclear     Range     Straggling   Straggling\r\n\
         -----------  ---------- ---------- ----------  ----------  ----------\r\n",
    );
    for row in rows {
        text.push_str(row);
        text.push_str("\r\n");
    }
    text.push_str("-----------------------------------------------------------\r\n");
    text.push_str(" Multiply Stopping by        for Stopping Units\r\n");
    text.push_str(" -------------------        ------------------\r\n");
    text.push_str("  1.0000E+00                 eV / Angstrom\r\n");
    text
}

const ROWS: [&str; 4] = [
    "999.999 eV   2.180E+00  1.402E-01      79 A         75 A         58 A",
    "10.00 keV   6.893E+00  3.090E-02     1.05 um      999 A        832 A",
    "2.25 MeV   2.561E+01  7.590E-04     4.13 um     1.61 nm       2.02 nm",
    "1.00 GeV   4.012E-01  1.000E-07      2.50 mm     0.01 cm       1.00 m",
];

#[test]
fn summary_reader_normalizes_rows() {
    let temp = TempDir::new().expect("tempdir should be created");
    fs::write(temp.path().join("SR_OUTPUT.txt"), sr_output(&ROWS)).expect("write SR output");

    let results = SrResults::from_dir(temp.path()).expect("SR output should parse");
    assert_eq!(results.units(), "eV/Angstrom");
    assert_eq!(results.ion().symbol(), "He");
    assert_eq!(results.ion().mass(), 4.003);

    let target = results.target();
    assert_eq!(target.mass_density, 3.21);
    assert_eq!(target.composition.len(), 2);
    assert_eq!(target.composition[1].symbol, "C");
    assert_eq!(target.composition[1].atomic_number, 6);
    assert_eq!(target.composition[0].mass_percent, 70.05);

    let data = results.data();
    assert_eq!(data.len(), 4);
    assert_eq!(data.energy, vec![999.999, 1.0e4, 2.25e6, 1.0e9]);
    assert_eq!(data.nuclear[0], 0.1402);
    assert_eq!(data.projected_range[0], 79.0);
    assert!((data.projected_range[1] - 1.05e4).abs() < 1.0e-9);
    assert!((data.longitudinal_straggling[2] - 16.1).abs() < 1.0e-9);
    assert_eq!(data.projected_range[3], 2.5e7);
    assert_eq!(data.longitudinal_straggling[3], 0.01 * 1.0e8);
    assert_eq!(data.lateral_straggling[3], 1.0e10);
}

#[test]
fn configured_output_filename_is_read() {
    let temp = TempDir::new().expect("tempdir should be created");
    let settings = SrSettings {
        output_filename: "helium_in_sic.txt".to_string(),
        ..SrSettings::default()
    };
    settings.validate().expect("settings");
    fs::write(temp.path().join(&settings.output_filename), sr_output(&ROWS[..1]))
        .expect("write SR output");

    let results = SrResults::from_file(temp.path().join(&settings.output_filename))
        .expect("SR output should parse");
    assert_eq!(results.data().len(), 1);
    assert_eq!(
        SrResults::from_dir(temp.path())
            .expect_err("default name is absent")
            .category(),
        SrimErrorCategory::IoSystemError
    );
}

#[test]
fn malformed_rows_are_rejected() {
    let bad_row = ["10.00 keV   6.893E+00  3.090E-02     1.05 um      999 A"];
    let error = SrResults::from_bytes(sr_output(&bad_row).as_bytes()).expect_err("short row");
    assert_eq!(error.code(), "PARSE.SR_TABLE");

    let bad_unit = ["10.00 TeV   6.893E+00  3.090E-02     1.05 um      999 A        832 A"];
    let error = SrResults::from_bytes(sr_output(&bad_unit).as_bytes()).expect_err("unknown unit");
    assert_eq!(error.category(), SrimErrorCategory::ParseError);

    let empty = SrResults::from_bytes(sr_output(&[]).as_bytes()).expect_err("no rows");
    assert_eq!(empty.code(), "PARSE.SR_TABLE");
}

#[test]
fn repeated_reads_are_identical() {
    let bytes = sr_output(&ROWS).into_bytes();
    assert_eq!(
        SrResults::from_bytes(&bytes).expect("first"),
        SrResults::from_bytes(&bytes).expect("second")
    );
}
