// src/core/preprocess.rs
//
// Channel collapse and peak normalization.

use super::decoder::AudioData;
use super::dsp::peak_amplitude;
use super::error::AnalysisError;

/// Normalized mono waveform. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveformBuffer {
    samples: Vec<f64>,
    sample_rate: u32,
}

impl WaveformBuffer {
    /// Collapse interleaved multi-channel data to mono and peak-normalize it.
    pub fn from_interleaved(
        samples: &[f32],
        channels: usize,
        sample_rate: u32,
    ) -> Result<Self, AnalysisError> {
        if sample_rate == 0 {
            return Err(AnalysisError::InvalidSampleRate(sample_rate));
        }
        if channels == 0 || samples.len() % channels != 0 {
            return Err(AnalysisError::InvalidChannelLayout {
                samples: samples.len(),
                channels,
            });
        }
        if samples.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
            return Err(AnalysisError::NonFiniteSample { index });
        }

        let mono: Vec<f64> = samples
            .chunks_exact(channels)
            .map(|frame| frame.iter().map(|&s| s as f64).sum::<f64>() / channels as f64)
            .collect();

        Self::normalized(mono, sample_rate)
    }

    /// Normalize an already-mono buffer.
    pub fn from_mono(samples: &[f64], sample_rate: u32) -> Result<Self, AnalysisError> {
        if sample_rate == 0 {
            return Err(AnalysisError::InvalidSampleRate(sample_rate));
        }
        if samples.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
            return Err(AnalysisError::NonFiniteSample { index });
        }
        Self::normalized(samples.to_vec(), sample_rate)
    }

    fn normalized(mut samples: Vec<f64>, sample_rate: u32) -> Result<Self, AnalysisError> {
        let peak = peak_amplitude(&samples);
        if peak == 0.0 {
            return Err(AnalysisError::SilentInput);
        }

        samples.iter_mut().for_each(|s| *s /= peak);

        Ok(Self {
            samples,
            sample_rate,
        })
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

impl TryFrom<&AudioData> for WaveformBuffer {
    type Error = AnalysisError;

    fn try_from(audio: &AudioData) -> Result<Self, Self::Error> {
        Self::from_interleaved(&audio.samples, audio.channels, audio.sample_rate)
    }
}
