// src/core/analyzer.rs
//
// Single-sample analysis: preprocessing, attack spectrum, peak ranking and
// envelope timing, in that order.

use serde::{Deserialize, Serialize};

use super::analysis::{EnvelopeTimer, EnvelopeTiming, PeakRanker, PeakRanking};
use super::decoder::AudioData;
use super::dsp::{round_to, SpectralEstimate, SpectralEstimator};
use super::error::AnalysisError;
use super::preprocess::WaveformBuffer;
use crate::config::{AnalysisConfig, AnalysisConfigBuilder};

/// Synthesis parameters extracted from one recording
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Hz, 0 when no spectral peak was found
    pub fundamental_freq: f64,
    /// Frequency ratios to the fundamental, most prominent first
    pub harmonics: Vec<f64>,
    /// Seconds from the start to the amplitude peak
    pub attack_time: f64,
    /// Seconds from the peak until the amplitude falls below the threshold
    pub decay_time: f64,
    /// Seconds
    pub duration: f64,
    pub sample_rate: u32,
}

/// Intermediate products of every stage, for inspection and debugging
#[derive(Debug, Clone)]
pub struct SampleAnalysis {
    pub spectrum: SpectralEstimate,
    pub ranking: PeakRanking,
    pub timing: EnvelopeTiming,
    pub result: AnalysisResult,
}

/// Stateless analyzer; one instance can be shared across threads
#[derive(Debug, Clone, Default)]
pub struct SampleAnalyzer {
    config: AnalysisConfig,
}

impl SampleAnalyzer {
    pub fn new(config: AnalysisConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfig::builder()
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze decoded audio
    pub fn analyze(&self, audio: &AudioData) -> Result<AnalysisResult, AnalysisError> {
        self.analyze_interleaved(&audio.samples, audio.channels, audio.sample_rate)
    }

    /// Analyze raw interleaved samples
    pub fn analyze_interleaved(
        &self,
        samples: &[f32],
        channels: usize,
        sample_rate: u32,
    ) -> Result<AnalysisResult, AnalysisError> {
        let buffer = WaveformBuffer::from_interleaved(samples, channels, sample_rate)?;
        Ok(self.analyze_buffer(&buffer).result)
    }

    /// Run all stages on an already-normalized buffer
    pub fn analyze_buffer(&self, buffer: &WaveformBuffer) -> SampleAnalysis {
        let config = &self.config;

        let spectrum = SpectralEstimator::new(config.attack_window_seconds, config.zero_pad_factor)
            .estimate(buffer);

        let ranking = PeakRanker::new(
            config.peak_height_ratio,
            config.peak_min_distance_bins,
            config.top_peak_count,
        )
        .rank(&spectrum);

        let timing = EnvelopeTimer::new(config.decay_threshold_ratio, config.decay_mode).measure(buffer);

        let result = AnalysisResult {
            fundamental_freq: round_to(ranking.fundamental_freq, 1),
            harmonics: ranking.harmonics.clone(),
            attack_time: round_to(timing.attack_time, 4),
            decay_time: round_to(timing.decay_time, 3),
            duration: round_to(buffer.duration_secs(), 3),
            sample_rate: buffer.sample_rate(),
        };

        SampleAnalysis {
            spectrum,
            ranking,
            timing,
            result,
        }
    }
}

/// Analyze interleaved samples with the default parameters
pub fn analyze(
    samples: &[f32],
    channels: usize,
    sample_rate: u32,
) -> Result<AnalysisResult, AnalysisError> {
    SampleAnalyzer::default().analyze_interleaved(samples, channels, sample_rate)
}
