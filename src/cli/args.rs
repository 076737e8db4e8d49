//! Command-line arguments

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::config::{AnalysisConfig, AnalysisConfigBuilder, DecayMode};

#[derive(Parser, Debug)]
#[command(name = "percussion-analyzer", version)]
#[command(about = "Extract fundamental, harmonic ratios, attack and decay from percussive samples")]
pub struct Args {
    /// Input file or directory
    pub input: PathBuf,

    /// Write the JSON report here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON file with analysis parameters
    #[arg(long, env = "PERCUSSION_ANALYZER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Attack window length in seconds
    #[arg(long)]
    pub attack_window: Option<f64>,

    /// FFT length as a multiple of the attack window
    #[arg(long)]
    pub zero_pad_factor: Option<usize>,

    /// Minimum peak height relative to the spectrum maximum
    #[arg(long)]
    pub peak_height: Option<f64>,

    /// Minimum distance between spectral peaks, in bins
    #[arg(long)]
    pub peak_distance: Option<usize>,

    /// Number of ranked peaks (fundamental + harmonics)
    #[arg(long)]
    pub top_peaks: Option<usize>,

    /// Decay threshold relative to peak amplitude
    #[arg(long)]
    pub decay_threshold: Option<f64>,

    /// Decay end definition (first_crossing, sustained)
    #[arg(long, value_parser = parse_decay_mode)]
    pub decay_mode: Option<DecayMode>,

    /// Pattern removed from file stems to form labels
    #[arg(long, default_value = "01")]
    pub strip: String,

    /// File extensions to pick up from directories
    #[arg(long, value_delimiter = ',', default_value = "wav")]
    pub extensions: Vec<String>,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Worker threads (defaults to the number of CPUs)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// No per-sample output or progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_decay_mode(s: &str) -> Result<DecayMode, String> {
    DecayMode::from_name(s).ok_or_else(|| {
        format!("unknown decay mode '{}' (expected first_crossing or sustained)", s)
    })
}

impl Args {
    /// Defaults, then the config file, then individual flags
    pub fn analysis_config(&self) -> Result<AnalysisConfig> {
        let base = match &self.config {
            Some(path) => AnalysisConfig::from_json_file(path)?,
            None => AnalysisConfig::default(),
        };

        let mut builder = AnalysisConfigBuilder::from_config(base);
        if let Some(v) = self.attack_window {
            builder = builder.attack_window_seconds(v);
        }
        if let Some(v) = self.zero_pad_factor {
            builder = builder.zero_pad_factor(v);
        }
        if let Some(v) = self.peak_height {
            builder = builder.peak_height_ratio(v);
        }
        if let Some(v) = self.peak_distance {
            builder = builder.peak_min_distance_bins(v);
        }
        if let Some(v) = self.top_peaks {
            builder = builder.top_peak_count(v);
        }
        if let Some(v) = self.decay_threshold {
            builder = builder.decay_threshold_ratio(v);
        }
        if let Some(v) = self.decay_mode {
            builder = builder.decay_mode(v);
        }

        builder.build().context("Invalid analysis parameters")
    }
}
