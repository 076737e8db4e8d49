//! Zero-padded magnitude spectrum of the attack region

use num_complex::Complex;
use rustfft::FftPlanner;

use crate::config::MAX_ZERO_PAD_FACTOR;
use crate::core::preprocess::WaveformBuffer;

/// Positive-frequency magnitude spectrum
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralEstimate {
    /// Bin centre frequencies in Hz, strictly increasing
    pub frequencies: Vec<f64>,
    /// Magnitudes, parallel to `frequencies`
    pub magnitudes: Vec<f64>,
    /// Samples analyzed from the start of the buffer
    pub window_len: usize,
    /// Transform length after zero-padding
    pub fft_len: usize,
    /// Frequency spacing between adjacent bins
    pub bin_width_hz: f64,
    /// True when the buffer was shorter than the nominal attack window
    pub window_clamped: bool,
}

impl SpectralEstimate {
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }
}

/// Spectrum of the first `attack_window_seconds` of a buffer, no window function
#[derive(Debug, Clone, Copy)]
pub struct SpectralEstimator {
    attack_window_seconds: f64,
    zero_pad_factor: usize,
}

impl SpectralEstimator {
    pub fn new(attack_window_seconds: f64, zero_pad_factor: usize) -> Self {
        Self {
            attack_window_seconds,
            zero_pad_factor: zero_pad_factor.clamp(1, MAX_ZERO_PAD_FACTOR),
        }
    }

    /// Nominal attack window length in samples for a given rate
    pub fn nominal_window_len(&self, sample_rate: u32) -> usize {
        (self.attack_window_seconds * sample_rate as f64).floor() as usize
    }

    pub fn estimate(&self, buffer: &WaveformBuffer) -> SpectralEstimate {
        let sample_rate = buffer.sample_rate() as f64;
        let nominal = self.nominal_window_len(buffer.sample_rate());

        let window_clamped = nominal > buffer.len();
        if window_clamped {
            log::warn!(
                "buffer of {} samples is shorter than the {}-sample attack window; analyzing whole buffer",
                buffer.len(),
                nominal
            );
        }
        let window_len = nominal.min(buffer.len()).max(1);
        let window = &buffer.samples()[..window_len];

        let fft_len = window_len * self.zero_pad_factor;
        let spectrum = compute_fft(window, fft_len);

        let bin_width_hz = sample_rate / fft_len as f64;
        // Bins 1..ceil(N/2) carry strictly positive frequencies
        let positive = 1..(fft_len + 1) / 2;

        let frequencies: Vec<f64> = positive.clone().map(|k| k as f64 * bin_width_hz).collect();
        let magnitudes: Vec<f64> = spectrum[positive].iter().map(|c| c.norm()).collect();

        log::debug!(
            "spectrum: window {} samples, fft {} points, {} positive bins of {:.3} Hz",
            window_len,
            fft_len,
            magnitudes.len(),
            bin_width_hz
        );

        SpectralEstimate {
            frequencies,
            magnitudes,
            window_len,
            fft_len,
            bin_width_hz,
            window_clamped,
        }
    }
}

/// Forward transform of `samples` zero-padded to `fft_len` points
fn compute_fft(samples: &[f64], fft_len: usize) -> Vec<Complex<f64>> {
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(fft_len);

    let mut buffer: Vec<Complex<f64>> = samples
        .iter()
        .take(fft_len)
        .map(|&s| Complex::new(s, 0.0))
        .collect();
    buffer.resize(fft_len, Complex::new(0.0, 0.0));

    fft.process(&mut buffer);
    buffer
}
