// src/core/analysis/ranking.rs
//
// Spectral peak selection: fundamental plus magnitude-ranked harmonic ratios.

use crate::core::dsp::{find_peaks, round_to, SpectralEstimate};

/// A surviving spectral peak
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakCandidate {
    /// Index into the positive-frequency spectrum
    pub bin: usize,
    pub frequency: f64,
    pub magnitude: f64,
}

/// Outcome of peak ranking
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeakRanking {
    /// Top peaks, most prominent first
    pub peaks: Vec<PeakCandidate>,
    /// Frequency of the strongest peak, 0 when nothing survived filtering
    pub fundamental_freq: f64,
    /// `frequency / fundamental` for the remaining top peaks, 2 decimals,
    /// in descending-magnitude order
    pub harmonics: Vec<f64>,
    /// Peaks that passed height and distance filtering before truncation
    pub detected_count: usize,
}

impl PeakRanking {
    pub fn fundamental(&self) -> Option<&PeakCandidate> {
        self.peaks.first()
    }

    /// Harmonic ratios re-sorted by ascending frequency
    pub fn harmonics_by_frequency(&self) -> Vec<f64> {
        let mut sorted = self.harmonics.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }
}

/// Ranks spectral peaks by magnitude
#[derive(Debug, Clone, Copy)]
pub struct PeakRanker {
    height_ratio: f64,
    min_distance_bins: usize,
    top_count: usize,
}

impl PeakRanker {
    pub fn new(height_ratio: f64, min_distance_bins: usize, top_count: usize) -> Self {
        Self {
            height_ratio,
            min_distance_bins,
            top_count: top_count.max(1),
        }
    }

    pub fn rank(&self, spectrum: &SpectralEstimate) -> PeakRanking {
        let magnitudes = &spectrum.magnitudes;
        let max_magnitude = magnitudes.iter().copied().fold(0.0f64, f64::max);

        if max_magnitude <= 0.0 {
            log::debug!("spectrum is empty or all-zero; no peaks");
            return PeakRanking::default();
        }

        let height = max_magnitude * self.height_ratio;
        let detected = find_peaks(magnitudes, Some(height), self.min_distance_bins);

        let mut peaks: Vec<PeakCandidate> = detected
            .iter()
            .map(|&bin| PeakCandidate {
                bin,
                frequency: spectrum.frequencies[bin],
                magnitude: magnitudes[bin],
            })
            .collect();

        // Stable: exact ties keep ascending-frequency order
        peaks.sort_by(|a, b| b.magnitude.total_cmp(&a.magnitude));
        peaks.truncate(self.top_count);

        let fundamental_freq = peaks.first().map(|p| p.frequency).unwrap_or(0.0);

        let harmonics: Vec<f64> = peaks
            .iter()
            .skip(1)
            .map(|p| {
                if fundamental_freq > 0.0 {
                    round_to(p.frequency / fundamental_freq, 2)
                } else {
                    0.0
                }
            })
            .collect();

        log::debug!(
            "peaks: {} detected above {:.4}, fundamental {:.2} Hz, harmonics {:?}",
            detected.len(),
            height,
            fundamental_freq,
            harmonics
        );

        PeakRanking {
            peaks,
            fundamental_freq,
            harmonics,
            detected_count: detected.len(),
        }
    }
}
