use predicates::prelude::*;
use std::fs;

#[test]
fn roi_reports_reference_scenario() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("overbooking-roi");
    cmd.env_remove("OVERBOOKING_ROI_CONFIG");
    cmd.arg("roi");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ROI Simulation Report"))
        .stdout(predicate::str::contains("Samples: 5000"))
        .stdout(predicate::str::contains("Seed: 42"))
        .stdout(predicate::str::contains("Prob. ROI >= 50.0%"));
}

#[test]
fn roi_runs_are_reproducible() {
    let run = || {
        let mut cmd = assert_cmd::cargo_bin_cmd!("overbooking-roi");
        cmd.env_remove("OVERBOOKING_ROI_CONFIG");
        cmd.args(["roi", "-n", "2000", "--seed", "7"]);
        let output = cmd.output().unwrap();
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap()
    };

    assert_eq!(run(), run());
}

#[test]
fn roi_writes_output_and_histogram() {
    let output_file = assert_fs::NamedTempFile::new("roi.yaml").unwrap();
    let histogram_file = assert_fs::NamedTempFile::new("roi.png").unwrap();
    let output_arg = output_file.path().to_str().unwrap();
    let histogram_arg = histogram_file.path().to_str().unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("overbooking-roi");
    cmd.env_remove("OVERBOOKING_ROI_CONFIG");
    cmd.args([
        "roi",
        "-n",
        "500",
        "--parallel",
        "-o",
        output_arg,
        "--histogram",
        histogram_arg,
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Simulation result for 500 samples written to {output_arg}"
        )))
        .stdout(predicate::str::contains(format!(
            "ROI histogram written to {histogram_arg}"
        )));

    let output = fs::read_to_string(output_arg).unwrap();
    assert!(output.contains("mean_roi:"));
    assert!(output.contains("probability_negative:"));
    assert!(output.contains("probability_meets_target:"));
    assert!(output.contains("samples:"));
    assert!(fs::metadata(histogram_arg).unwrap().len() > 0);
}

#[test]
fn roi_degenerate_revenue_is_certain() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("overbooking-roi");
    cmd.env_remove("OVERBOOKING_ROI_CONFIG");
    cmd.args(["roi", "--std-dev", "0", "-n", "500"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Mean ROI: 140.00%"))
        .stdout(predicate::str::contains("Min ROI: 140.00%"))
        .stdout(predicate::str::contains("Max ROI: 140.00%"))
        .stdout(predicate::str::contains("Prob. ROI < 0: 0.00%"))
        .stdout(predicate::str::contains("Prob. ROI >= 50.0%: 100.00%"));
}

#[test]
fn roi_warns_outside_usual_ranges() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("overbooking-roi");
    cmd.env_remove("OVERBOOKING_ROI_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd.args(["roi", "-n", "100"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("sample_count = 100 is outside the usual range"));
}

#[test]
fn roi_rejects_zero_investment() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("overbooking-roi");
    cmd.env_remove("OVERBOOKING_ROI_CONFIG");
    cmd.args(["roi", "--investment", "0"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid parameter `investment`"));
}
