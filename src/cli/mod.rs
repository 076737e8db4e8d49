// src/cli/mod.rs
//
// Command-line interface: discover samples, analyze them in parallel, print
// a per-sample summary and emit the JSON report.

mod args;
mod discover;
mod output;

pub use args::Args;
pub use discover::{assign_labels, collect_audio_files, label_for, SampleFile};
pub use output::{format_failure, format_json, format_result, format_summary, write_report, Report};

use anyhow::{bail, Context, Result};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::Path;

use crate::core::{decode_audio, AnalysisResult, SampleAnalyzer};

/// Decode and analyze one file
pub fn analyze_file(analyzer: &SampleAnalyzer, path: &Path) -> Result<AnalysisResult> {
    let audio = decode_audio(path)?;
    analyzer
        .analyze(&audio)
        .with_context(|| format!("Failed to analyze {}", path.display()))
}

/// Run the CLI
pub fn run(args: &Args) -> Result<()> {
    let config = args.analysis_config()?;
    log::debug!("analysis config: {:?}", config);
    let analyzer = SampleAnalyzer::new(config)?;

    let files = collect_audio_files(&args.input, &args.extensions, args.recursive)?;
    if files.is_empty() {
        bail!("No audio files found in {}", args.input.display());
    }
    let samples = assign_labels(files, &args.strip);
    log::info!("Found {} sample(s)", samples.len());

    if let Some(jobs) = args.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .context("Failed to configure worker threads")?;
    }

    let progress = if args.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(samples.len() as u64).with_style(
            ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {elapsed}")?
                .progress_chars("=> "),
        )
    };

    let outcomes: Vec<(&SampleFile, Result<AnalysisResult>)> = samples
        .par_iter()
        .progress_with(progress.clone())
        .map(|sample| (sample, analyze_file(&analyzer, &sample.path)))
        .collect();
    progress.finish_and_clear();

    // Console goes to stderr when the report itself is on stdout
    let console = |text: &str| {
        if args.quiet {
            return;
        }
        if args.output.is_some() {
            print!("{}", text);
        } else {
            eprint!("{}", text);
        }
    };

    let mut report = Report::new();
    let mut failed = 0;
    for (sample, outcome) in outcomes {
        match outcome {
            Ok(result) => {
                console(&format_result(&sample.label, &sample.path, &result));
                report.insert(sample.label.clone(), result);
            }
            Err(e) => {
                log::warn!("{}: {:#}", sample.path.display(), e);
                console(&format_failure(&sample.path, &e));
                failed += 1;
            }
        }
    }
    console(&format_summary(report.len(), failed));

    if report.is_empty() {
        bail!("All {} sample(s) failed to analyze", failed);
    }

    match &args.output {
        Some(path) => {
            write_report(path, &report)?;
            log::info!("Report written to {}", path.display());
        }
        None => println!("{}", format_json(&report)?),
    }

    Ok(())
}
