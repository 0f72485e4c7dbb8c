use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn overbooking_reports_reference_scenario() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("overbooking-roi");
    cmd.env_remove("OVERBOOKING_ROI_CONFIG");
    cmd.arg("overbooking");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Capacity: 120"))
        .stdout(predicate::str::contains("Current risk: 4.26%"))
        .stdout(predicate::str::contains("Recommended max sold: 130"))
        .stdout(predicate::str::contains("130 | 4.26"));
}

#[test]
fn overbooking_writes_yaml_and_plot() {
    let output_file = assert_fs::NamedTempFile::new("overbooking.yaml").unwrap();
    let plot_file = assert_fs::NamedTempFile::new("overbooking.png").unwrap();
    let output_arg = output_file.path().to_str().unwrap();
    let plot_arg = plot_file.path().to_str().unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("overbooking-roi");
    cmd.env_remove("OVERBOOKING_ROI_CONFIG");
    cmd.args([
        "overbooking",
        "-p",
        "90",
        "-s",
        "125",
        "-m",
        "160",
        "-o",
        output_arg,
        "--plot",
        plot_arg,
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Overbooking result written to {output_arg}"
        )))
        .stdout(predicate::str::contains(format!("Risk curve written to {plot_arg}")));

    let output = fs::read_to_string(output_arg).unwrap();
    assert!(output.contains("capacity: 120"));
    assert!(output.contains("current_sold: 125"));
    assert!(output.contains("curve:"));
    assert!(output.contains("sold: 160"));
    assert!(output.contains("recommended_max_sold: 128"));
    assert!(fs::metadata(plot_arg).unwrap().len() > 0);
}

#[test]
fn overbooking_json_output_parses() {
    let output_file = assert_fs::NamedTempFile::new("overbooking.json").unwrap();
    let output_arg = output_file.path().to_str().unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("overbooking-roi");
    cmd.env_remove("OVERBOOKING_ROI_CONFIG");
    cmd.args(["overbooking", "-m", "140", "-o", output_arg, "-f", "json"]);
    cmd.assert().success();

    let output = fs::read_to_string(output_arg).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["curve"].as_array().unwrap().len(), 20);
    assert_eq!(value["current_sold"], 130);
}

#[test]
fn overbooking_reads_scenario_config() {
    let config_file = assert_fs::NamedTempFile::new("scenario.yaml").unwrap();
    config_file
        .write_str("overbooking:\n  capacity: 10\n  show_up_percent: 50\n  sold: 12\n  risk_threshold_percent: null\n")
        .unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("overbooking-roi");
    cmd.args([
        "overbooking",
        "--config",
        config_file.path().to_str().unwrap(),
    ]);

    // P(X > 10), X ~ Bin(12, 0.5) = 13 / 4096
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Capacity: 10"))
        .stdout(predicate::str::contains("Current risk: 0.32%"))
        .stdout(predicate::str::contains("Risk threshold: n/a"));
}

#[test]
fn overbooking_rejects_sold_below_capacity() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("overbooking-roi");
    cmd.env_remove("OVERBOOKING_ROI_CONFIG");
    cmd.args(["overbooking", "-s", "100"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid parameter `sold`"));
}
