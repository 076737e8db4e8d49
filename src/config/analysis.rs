// src/config/analysis.rs
//
// Tunable analysis parameters. Defaults reproduce the fixed policy that was
// tuned for single-note percussive recordings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::AnalysisError;

pub const DEFAULT_ATTACK_WINDOW_SECONDS: f64 = 0.05;
pub const DEFAULT_ZERO_PAD_FACTOR: usize = 4;
pub const DEFAULT_PEAK_HEIGHT_RATIO: f64 = 0.1;
pub const DEFAULT_PEAK_MIN_DISTANCE_BINS: usize = 20;
pub const DEFAULT_TOP_PEAK_COUNT: usize = 5;
pub const DEFAULT_DECAY_THRESHOLD_RATIO: f64 = 0.1;

/// Largest accepted zero-padding factor; the transform length is window × factor
pub const MAX_ZERO_PAD_FACTOR: usize = 64;

/// How the end of the decay is located after the amplitude peak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecayMode {
    /// First sample whose magnitude drops below the threshold
    #[default]
    FirstCrossing,
    /// One past the last sample whose magnitude is still at or above the
    /// threshold. Follows the envelope of oscillating signals instead of
    /// stopping at their first zero crossing.
    Sustained,
}

impl DecayMode {
    pub fn name(&self) -> &'static str {
        match self {
            DecayMode::FirstCrossing => "first_crossing",
            DecayMode::Sustained => "sustained",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().replace('-', "_").as_str() {
            "first_crossing" | "first" => Some(DecayMode::FirstCrossing),
            "sustained" | "last" => Some(DecayMode::Sustained),
            _ => None,
        }
    }
}

/// Analysis parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Length of the attack region fed to the spectrum, in seconds
    pub attack_window_seconds: f64,
    /// FFT length as a multiple of the attack window length
    pub zero_pad_factor: usize,
    /// Minimum peak magnitude relative to the spectrum maximum
    pub peak_height_ratio: f64,
    /// Minimum spacing between accepted peaks, in (zero-padded) bins
    pub peak_min_distance_bins: usize,
    /// Number of ranked peaks kept: the fundamental plus harmonics
    pub top_peak_count: usize,
    /// Decay end threshold relative to the peak amplitude
    pub decay_threshold_ratio: f64,
    pub decay_mode: DecayMode,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            attack_window_seconds: DEFAULT_ATTACK_WINDOW_SECONDS,
            zero_pad_factor: DEFAULT_ZERO_PAD_FACTOR,
            peak_height_ratio: DEFAULT_PEAK_HEIGHT_RATIO,
            peak_min_distance_bins: DEFAULT_PEAK_MIN_DISTANCE_BINS,
            top_peak_count: DEFAULT_TOP_PEAK_COUNT,
            decay_threshold_ratio: DEFAULT_DECAY_THRESHOLD_RATIO,
            decay_mode: DecayMode::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::new()
    }

    /// Load a configuration from JSON. Keys that are absent keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("Malformed analysis config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Reject values that would make the analysis meaningless.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if !(self.attack_window_seconds.is_finite() && self.attack_window_seconds > 0.0) {
            return Err(AnalysisError::InvalidConfig(format!(
                "attack_window_seconds must be positive, got {}",
                self.attack_window_seconds
            )));
        }
        if !(1..=MAX_ZERO_PAD_FACTOR).contains(&self.zero_pad_factor) {
            return Err(AnalysisError::InvalidConfig(format!(
                "zero_pad_factor must be within [1, {}], got {}",
                MAX_ZERO_PAD_FACTOR, self.zero_pad_factor
            )));
        }
        if !(0.0..=1.0).contains(&self.peak_height_ratio) {
            return Err(AnalysisError::InvalidConfig(format!(
                "peak_height_ratio must be within [0, 1], got {}",
                self.peak_height_ratio
            )));
        }
        if self.peak_min_distance_bins == 0 {
            return Err(AnalysisError::InvalidConfig(
                "peak_min_distance_bins must be at least 1".to_string(),
            ));
        }
        if self.top_peak_count == 0 {
            return Err(AnalysisError::InvalidConfig(
                "top_peak_count must be at least 1".to_string(),
            ));
        }
        if !(self.decay_threshold_ratio > 0.0 && self.decay_threshold_ratio <= 1.0) {
            return Err(AnalysisError::InvalidConfig(format!(
                "decay_threshold_ratio must be within (0, 1], got {}",
                self.decay_threshold_ratio
            )));
        }
        Ok(())
    }
}

/// Fluent overrides on top of the defaults
pub struct AnalysisConfigBuilder {
    config: AnalysisConfig,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: AnalysisConfig::default(),
        }
    }

    pub fn from_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn attack_window_seconds(mut self, seconds: f64) -> Self {
        self.config.attack_window_seconds = seconds;
        self
    }

    pub fn zero_pad_factor(mut self, factor: usize) -> Self {
        self.config.zero_pad_factor = factor;
        self
    }

    pub fn peak_height_ratio(mut self, ratio: f64) -> Self {
        self.config.peak_height_ratio = ratio;
        self
    }

    pub fn peak_min_distance_bins(mut self, bins: usize) -> Self {
        self.config.peak_min_distance_bins = bins;
        self
    }

    pub fn top_peak_count(mut self, count: usize) -> Self {
        self.config.top_peak_count = count;
        self
    }

    pub fn decay_threshold_ratio(mut self, ratio: f64) -> Self {
        self.config.decay_threshold_ratio = ratio;
        self
    }

    pub fn decay_mode(mut self, mode: DecayMode) -> Self {
        self.config.decay_mode = mode;
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, AnalysisError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for AnalysisConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
