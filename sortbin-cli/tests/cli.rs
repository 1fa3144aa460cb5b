use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use predicates::str::contains;

fn cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("sortbin");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn mobile_goes_to_ewaste() {
    cmd()
        .args(["--label", "mobile"])
        .assert()
        .success()
        .stdout("Detected Waste: mobile\nRecommended Bin: E-Waste Bin\n");
}

#[test]
fn sanitary_goes_to_sanitary_bin() {
    cmd()
        .args(["--label", "sanitary"])
        .assert()
        .success()
        .stdout(contains("Recommended Bin: Sanitary Waste Bin"));
}

#[test]
fn unknown_material_is_rejected() {
    cmd()
        .args(["--label", "unknown_material"])
        .assert()
        .success()
        .stdout("Detected Waste: unknown_material\nRecommended Bin: Reject Waste Bin\n");
}

#[test]
fn leading_whitespace_is_not_trimmed() {
    cmd()
        .args(["--label", " plastic"])
        .assert()
        .success()
        .stdout(contains("Recommended Bin: Reject Waste Bin"));
}

#[test]
fn default_run_prints_two_report_lines() {
    let pattern = predicate::str::is_match(r"\ADetected Waste: [^\n]+\nRecommended Bin: [^\n]+ Bin\n\z").unwrap();
    cmd().assert().success().stdout(pattern);
}

#[test]
fn seeded_runs_are_reproducible() {
    let first = cmd().args(["--seed", "11"]).output().unwrap();
    let second = cmd().args(["--seed", "11"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn json_report() {
    let out = cmd()
        .args(["--label", "Battery", "--json", "--guidance"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["detected_waste"], "Battery");
    assert_eq!(value["recommended_bin"], "Hazardous Waste Bin");
    assert_eq!(value["category"], "hazardous");
    assert!(value["detected_at"].is_string());
    assert!(value["guidance"].as_array().is_some_and(|steps| !steps.is_empty()));
}

#[test]
fn guidance_is_printed_after_report() {
    cmd()
        .args(["--label", "vegetable", "--guidance"])
        .assert()
        .success()
        .stdout(contains("Recommended Bin: Wet Waste Bin\n\nWet Waste: Organic/biodegradable materials"))
        .stdout(contains("1. Place in green composting bin"));
}

#[test]
fn logs_stay_off_stdout() {
    cmd()
        .env("RUST_LOG", "debug")
        .args(["--label", "laptop"])
        .assert()
        .success()
        .stdout("Detected Waste: laptop\nRecommended Bin: E-Waste Bin\n")
        .stderr(contains("waste detected"));
}

#[test]
fn rules_subcommand_lists_table() {
    cmd()
        .arg("rules")
        .assert()
        .success()
        .stdout(contains("battery"))
        .stdout(contains("Hazardous Waste Bin"))
        .stdout(contains("(anything else)"));
}

#[test]
fn bins_subcommand_lists_categories() {
    cmd()
        .arg("bins")
        .assert()
        .success()
        .stdout(contains("Sanitary Waste Bin [sanitary]"))
        .stdout(contains("Thermocol"));
}

#[test]
fn label_conflicts_with_seed() {
    cmd()
        .args(["--label", "glass", "--seed", "3"])
        .assert()
        .failure();
}
