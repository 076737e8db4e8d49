// src/core/analysis/envelope.rs
//
// Attack and decay timing measured directly on the normalized waveform.

use crate::config::DecayMode;
use crate::core::dsp::argmax_abs;
use crate::core::preprocess::WaveformBuffer;

/// Envelope timing of a buffer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeTiming {
    /// Index of the global absolute-amplitude peak
    pub peak_index: usize,
    /// Absolute amplitude at the peak
    pub peak_amplitude: f64,
    /// Samples from the peak to the end of the decay
    pub decay_samples: usize,
    /// False when the signal never dropped below the threshold before the end
    pub decayed: bool,
    /// Seconds from the start of the buffer to the peak
    pub attack_time: f64,
    /// Seconds from the peak to the end of the decay
    pub decay_time: f64,
}

/// Locates the amplitude peak and the point where the signal falls below a
/// fraction of it
#[derive(Debug, Clone, Copy)]
pub struct EnvelopeTimer {
    threshold_ratio: f64,
    mode: DecayMode,
}

impl EnvelopeTimer {
    pub fn new(threshold_ratio: f64, mode: DecayMode) -> Self {
        Self {
            threshold_ratio,
            mode,
        }
    }

    pub fn measure(&self, buffer: &WaveformBuffer) -> EnvelopeTiming {
        let samples = buffer.samples();
        let sample_rate = buffer.sample_rate() as f64;

        let peak_index = argmax_abs(samples).unwrap_or(0);
        let peak_amplitude = samples.get(peak_index).map(|s| s.abs()).unwrap_or(0.0);
        let threshold = peak_amplitude * self.threshold_ratio;
        let tail = samples.get(peak_index..).unwrap_or(&[]);

        let (decay_samples, decayed) = match self.mode {
            DecayMode::FirstCrossing => match tail.iter().position(|s| s.abs() < threshold) {
                Some(offset) => (offset, true),
                None => (tail.len(), false),
            },
            DecayMode::Sustained => {
                // The peak itself is always at or above threshold
                let last_loud = tail.iter().rposition(|s| s.abs() >= threshold).unwrap_or(0);
                let end = last_loud + 1;
                (end, end < tail.len())
            }
        };

        let timing = EnvelopeTiming {
            peak_index,
            peak_amplitude,
            decay_samples,
            decayed,
            attack_time: peak_index as f64 / sample_rate,
            decay_time: decay_samples as f64 / sample_rate,
        };

        log::debug!(
            "envelope: peak at sample {} ({:.4}s), decay {} samples ({:.4}s, {})",
            timing.peak_index,
            timing.attack_time,
            timing.decay_samples,
            timing.decay_time,
            if timing.decayed { "decayed" } else { "ran to end of clip" }
        );

        timing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(samples: &[f64], sample_rate: u32) -> WaveformBuffer {
        WaveformBuffer::from_mono(samples, sample_rate).unwrap()
    }

    #[test]
    fn test_impulse_decays_immediately() {
        let mut samples = vec![0.0; 1000];
        samples[250] = -0.6;
        let timing = EnvelopeTimer::new(0.1, DecayMode::FirstCrossing).measure(&buffer(&samples, 1000));

        assert_eq!(timing.peak_index, 250);
        assert!((timing.peak_amplitude - 1.0).abs() < 1e-12);
        assert_eq!(timing.decay_samples, 1);
        assert!(timing.decayed);
        assert!((timing.attack_time - 0.25).abs() < 1e-12);
        assert!((timing.decay_time - 0.001).abs() < 1e-12);
    }

    #[test]
    fn test_sustained_signal_runs_to_end() {
        let samples: Vec<f64> = (0..800).map(|i| if i % 2 == 0 { 0.5 } else { -0.4 }).collect();
        for mode in [DecayMode::FirstCrossing, DecayMode::Sustained] {
            let timing = EnvelopeTimer::new(0.1, mode).measure(&buffer(&samples, 8000));
            assert_eq!(timing.peak_index, 0);
            assert_eq!(timing.decay_samples, 800);
            assert!(!timing.decayed);
            assert!((timing.decay_time - 0.1).abs() < 1e-12);
        }
    }

    #[test]
    fn test_linear_ramp_down() {
        // 1.0 at 100, falling 0.013 per sample: first value below 0.1 is at +70
        let samples: Vec<f64> = (0..400)
            .map(|i| {
                if i < 100 {
                    i as f64 / 100.0 * 0.5
                } else {
                    (1.0 - (i - 100) as f64 * 0.013).max(0.0)
                }
            })
            .collect();
        let timing = EnvelopeTimer::new(0.1, DecayMode::FirstCrossing).measure(&buffer(&samples, 1000));
        assert_eq!(timing.peak_index, 100);
        assert_eq!(timing.decay_samples, 70);
    }

    #[test]
    fn test_sustained_mode_ignores_zero_crossings() {
        // Oscillation with a slowly falling envelope: first crossing is the
        // first zero, sustained mode waits for the envelope
        let samples: Vec<f64> = (0..2000)
            .map(|i| {
                let env = (1.0 - i as f64 / 1000.0).max(0.0);
                let sign = if i % 10 < 5 { 1.0 } else { -1.0 };
                let gate = if i % 5 == 0 { 0.0 } else { 1.0 };
                env * sign * gate
            })
            .collect();
        let first = EnvelopeTimer::new(0.1, DecayMode::FirstCrossing).measure(&buffer(&samples, 1000));
        let sustained = EnvelopeTimer::new(0.1, DecayMode::Sustained).measure(&buffer(&samples, 1000));

        assert_eq!(first.peak_index, 1);
        assert_eq!(first.decay_samples, 4);
        // Peak 0.999 at i=1; the last sample at or above 10% of it is i=899
        assert_eq!(sustained.decay_samples, 899);
        assert!(sustained.decayed);
    }

    #[test]
    fn test_modes_agree_on_impulse() {
        let mut samples = vec![0.0; 64];
        samples[10] = 1.0;
        let a = EnvelopeTimer::new(0.1, DecayMode::FirstCrossing).measure(&buffer(&samples, 64));
        let b = EnvelopeTimer::new(0.1, DecayMode::Sustained).measure(&buffer(&samples, 64));
        assert_eq!(a, b);
    }
}
