// Shared helpers for CLI integration tests
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use percussion_analyzer::testgen::{self, WavFormat};

pub fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_percussion-analyzer"))
}

pub fn run_analyzer<P: AsRef<std::ffi::OsStr>>(input: P) -> Command {
    let mut cmd = Command::new(get_binary_path());
    cmd.arg(input);
    // Keep logs out of captured stderr unless a test asks for them
    cmd.env("RUST_LOG", "error");
    cmd.env_remove("PERCUSSION_ANALYZER_CONFIG");
    cmd
}

pub fn run_quiet<P: AsRef<std::ffi::OsStr>>(input: P) -> Output {
    run_analyzer(input)
        .arg("--quiet")
        .output()
        .expect("Failed to execute analyzer")
}

/// Parse the JSON report printed on stdout
pub fn stdout_report(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("invalid JSON ({}): {}", e, stdout))
}

/// 200 Hz struck tone, 16-bit mono
pub fn write_tone(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let samples = testgen::decaying_tone(200.0, 0.05, 44100, 0.5);
    testgen::write_wav(&path, &samples, 44100, 1, WavFormat::Int16).expect("write wav");
    path
}

/// 440 Hz with 2nd and 3rd partials, float stereo
pub fn write_bell(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let mono = testgen::partial_series(440.0, &[(1.0, 1.0), (2.0, 0.5), (3.0, 0.3)], 44100, 0.5);
    let samples = testgen::interleave(&[mono.clone(), mono]);
    testgen::write_wav(&path, &samples, 44100, 2, WavFormat::Float32).expect("write wav");
    path
}

pub fn write_silence(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    testgen::write_wav(&path, &[0.0; 4410], 44100, 1, WavFormat::Int16).expect("write wav");
    path
}
