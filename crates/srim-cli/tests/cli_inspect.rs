use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_srim-rs"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("srim-rs should launch")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

fn write_collision_log(path: &Path, ions: usize) {
    let bar = '\u{b3}';
    let mut text = String::from(" ==== Collision Details ====\r\n");
    for ion in 1..=ions {
        text.push_str("  Ion    Energy    Depth      Lateral-Distance\r\n");
        text.push_str(&format!(
            "{bar}{ion:07}{bar}1.0E+03{bar}1.0E+02{bar}0.0{bar}0.0{bar}10.0{bar} Si {bar}5.0E+01{bar}  {bar}\r\n"
        ));
        text.push_str(" Displacements = 1.0  Avg = 1.0  Replacements = 0.0  Avg = 0.0\r\n");
        text.push_str(" Vacancies = 1.0  Avg = 1.0  Interstitials = 0.0  Avg = 0.0\r\n");
        text.push_str(" Sputtered = 0.0  Avg = 0.0  Transmitted = 0.0  Avg = 0.0\r\n");
    }
    let bytes: Vec<u8> = text.chars().map(|c| c as u32 as u8).collect();
    fs::write(path, bytes).expect("collision log should be written");
}

#[test]
fn collisions_command_reports_record_count_and_records() {
    let temp = TempDir::new().expect("tempdir should be created");
    let path = temp.path().join("COLLISON.txt");
    write_collision_log(&path, 3);
    let path_arg = path.to_str().expect("utf-8 path");

    let output = run_cli(&["collisions", path_arg]);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(stdout_json(&output)["records"], 3);

    let output = run_cli(&["collisions", path_arg, "--record", "2"]);
    assert!(output.status.success(), "{output:?}");
    let record = stdout_json(&output);
    assert_eq!(record["ion_number"], 3);
    assert_eq!(record["collisions"][0]["atom"], "Si");
    assert_eq!(record["summary"]["vacancies"], 1.0);
}

#[test]
fn out_of_range_record_exits_with_bounds_code() {
    let temp = TempDir::new().expect("tempdir should be created");
    let path = temp.path().join("COLLISON.txt");
    write_collision_log(&path, 1);

    let output = run_cli(&["collisions", path.to_str().expect("utf-8 path"), "--record", "5"]);
    assert_eq!(output.status.code(), Some(6));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: [OUTPUT.COLLISION_INDEX]"), "{stderr}");
}

#[test]
fn outputs_command_lists_expected_files() {
    let temp = TempDir::new().expect("tempdir should be created");
    let settings = temp.path().join("trim.json");
    fs::write(&settings, r#"{ "mode": 2, "settings": { "collisions": 1 } }"#)
        .expect("settings should be written");

    let output = run_cli(&["outputs", settings.to_str().expect("utf-8 path")]);
    assert!(output.status.success(), "{output:?}");
    let files = stdout_json(&output);
    let names: Vec<&str> = files
        .as_array()
        .expect("array")
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert!(names.contains(&"NOVAC.txt"));
    assert!(names.contains(&"COLLISON.txt"));
}

#[test]
fn missing_directory_and_bad_usage_map_to_exit_codes() {
    let temp = TempDir::new().expect("tempdir should be created");
    let output = run_cli(&["results", temp.path().to_str().expect("utf-8 path")]);
    assert_eq!(output.status.code(), Some(7));

    let output = run_cli(&["collisions"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("INPUT.CLI_USAGE"));

    let output = run_cli(&["--help"]);
    assert!(output.status.success());
}
