// tests/cli_test.rs
//
// End-to-end runs of the batch CLI against generated WAV files.

mod test_utils;

use std::fs;
use test_utils::*;

#[test]
fn test_directory_report_on_stdout() {
    let dir = tempfile::tempdir().unwrap();
    write_tone(dir.path(), "Na01.wav");
    write_bell(dir.path(), "Tin01.wav");

    let output = run_quiet(dir.path());
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let report = stdout_report(&output);
    let map = report.as_object().unwrap();
    assert_eq!(map.len(), 2);

    let na = &report["Na"];
    assert!((na["fundamental_freq"].as_f64().unwrap() - 200.0).abs() <= 5.0);
    assert_eq!(na["attack_time"].as_f64().unwrap(), 0.0);
    assert_eq!(na["sample_rate"].as_u64().unwrap(), 44100);

    let tin = &report["Tin"];
    assert!((tin["fundamental_freq"].as_f64().unwrap() - 440.0).abs() <= 5.0);
    let harmonics: Vec<f64> = tin["harmonics"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h.as_f64().unwrap())
        .collect();
    assert_eq!(harmonics.len(), 2);
    assert!((harmonics[0] - 2.0).abs() < 0.02);
    assert!((harmonics[1] - 3.0).abs() < 0.02);
}

#[test]
fn test_report_written_to_file() {
    let dir = tempfile::tempdir().unwrap();
    write_tone(dir.path(), "Dha01.wav");
    let report_path = dir.path().join("report.json");

    let output = run_analyzer(dir.path())
        .arg("-o")
        .arg(&report_path)
        .output()
        .unwrap();
    assert!(output.status.success());

    // Console summary moves to stdout when the report goes to a file
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Dha"));
    assert!(stdout.contains("1 sample(s) analyzed"));

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert!(report.get("Dha").is_some());
}

#[test]
fn test_single_file_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_bell(dir.path(), "Ge01.wav");

    let output = run_quiet(&path);
    assert!(output.status.success());
    let report = stdout_report(&output);
    assert!(report.get("Ge").is_some());
}

#[test]
fn test_failed_file_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write_tone(dir.path(), "Na01.wav");
    write_silence(dir.path(), "Mute01.wav");
    fs::write(dir.path().join("Broken01.wav"), b"not a riff file").unwrap();

    let output = run_analyzer(dir.path()).output().unwrap();
    assert!(output.status.success());

    let report = stdout_report(&output);
    let map = report.as_object().unwrap();
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["Na"]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("2 failed"));
}

#[test]
fn test_all_failed_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    write_silence(dir.path(), "Mute01.wav");

    let output = run_quiet(dir.path());
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_empty_directory_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("notes.txt"), "no audio here").unwrap();

    let output = run_quiet(dir.path());
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No audio files found"));
}

#[test]
fn test_config_overrides() {
    let dir = tempfile::tempdir().unwrap();
    write_tone(dir.path(), "Na01.wav");
    let config_path = dir.path().join("analysis.json");
    fs::write(&config_path, r#"{ "decay_mode": "sustained" }"#).unwrap();

    let output = run_analyzer(dir.path())
        .arg("--quiet")
        .arg("--config")
        .arg(&config_path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let decay = stdout_report(&output)["Na"]["decay_time"].as_f64().unwrap();
    assert!((0.1..=0.15).contains(&decay), "decay {}", decay);

    // Command-line flags win over the file
    let output = run_analyzer(dir.path())
        .arg("--quiet")
        .arg("--config")
        .arg(&config_path)
        .arg("--decay-mode")
        .arg("first_crossing")
        .output()
        .unwrap();
    let decay = stdout_report(&output)["Na"]["decay_time"].as_f64().unwrap();
    assert!(decay < 0.005, "decay {}", decay);
}

#[test]
fn test_invalid_override_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write_tone(dir.path(), "Na01.wav");

    let output = run_quiet_with(dir.path(), &["--top-peaks", "0"]);
    assert!(!output.status.success());
}

#[test]
fn test_oversized_padding_factor_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write_tone(dir.path(), "Na01.wav");

    let output = run_quiet_with(dir.path(), &["--zero-pad-factor", "18446744073709551615"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("zero_pad_factor"), "stderr: {}", stderr);
    assert!(!stderr.contains("panicked"));
}

fn run_quiet_with(input: &std::path::Path, extra: &[&str]) -> std::process::Output {
    run_analyzer(input).arg("--quiet").args(extra).output().unwrap()
}
