//! Console and JSON output for CLI results

use anyhow::{Context, Result};
use colorful::Colorful;
use std::collections::BTreeMap;
use std::path::Path;

use crate::core::AnalysisResult;

/// Label → result, serialized with sorted keys
pub type Report = BTreeMap<String, AnalysisResult>;

/// Per-sample console block
pub fn format_result(label: &str, file: &Path, result: &AnalysisResult) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} {}\n",
        label.to_string().bold(),
        format!("({})", file.display()).dim()
    ));

    let fundamental = if result.fundamental_freq > 0.0 {
        format!("{} Hz", result.fundamental_freq).green().to_string()
    } else {
        "none detected".yellow().to_string()
    };
    output.push_str(&format!("  Fundamental: {}\n", fundamental));
    output.push_str(&format!("  Harmonics: {:?}\n", result.harmonics));
    output.push_str(&format!("  Attack: {:.1}ms\n", result.attack_time * 1000.0));
    output.push_str(&format!("  Decay: {:.0}ms\n", result.decay_time * 1000.0));

    output
}

pub fn format_failure(file: &Path, error: &anyhow::Error) -> String {
    format!(
        "{} {}\n  {}\n",
        "✗".red(),
        file.display(),
        format!("{:#}", error).red()
    )
}

pub fn format_summary(analyzed: usize, failed: usize) -> String {
    let mut output = format!("\n{} sample(s) analyzed", analyzed);
    if failed > 0 {
        output.push_str(&format!(", {}", format!("{} failed", failed).red()));
    }
    output.push('\n');
    output
}

pub fn format_json(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report")
}

pub fn write_report(path: &Path, report: &Report) -> Result<()> {
    let json = format_json(report)?;
    std::fs::write(path, json + "\n")
        .with_context(|| format!("Failed to write report: {}", path.display()))
}
