// src/testgen/mod.rs
//
// Synthetic percussive test signals and a WAV writer, used by the test
// suites and handy for checking analyzer settings against known input.

use anyhow::{Context, Result};
use hound::{SampleFormat, WavSpec, WavWriter};
use std::f64::consts::PI;
use std::path::Path;

/// Sample format written by [`write_wav`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavFormat {
    Int16,
    Float32,
}

fn frame_count(sample_rate: u32, secs: f64) -> usize {
    (sample_rate as f64 * secs).round() as usize
}

/// Steady sine starting at zero phase
pub fn sine(freq: f64, amplitude: f64, sample_rate: u32, secs: f64) -> Vec<f32> {
    (0..frame_count(sample_rate, secs))
        .map(|i| (amplitude * (2.0 * PI * freq * i as f64 / sample_rate as f64).sin()) as f32)
        .collect()
}

/// Sum of sines at integer or fractional multiples of `fundamental`.
/// `partials` holds `(multiple, amplitude)` pairs.
pub fn partial_series(
    fundamental: f64,
    partials: &[(f64, f64)],
    sample_rate: u32,
    secs: f64,
) -> Vec<f32> {
    (0..frame_count(sample_rate, secs))
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            partials
                .iter()
                .map(|&(multiple, amp)| amp * (2.0 * PI * fundamental * multiple * t).sin())
                .sum::<f64>() as f32
        })
        .collect()
}

/// Cosine at full amplitude on sample 0, decaying as `exp(-t / tau)`
pub fn decaying_tone(freq: f64, tau: f64, sample_rate: u32, secs: f64) -> Vec<f32> {
    (0..frame_count(sample_rate, secs))
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            ((-t / tau).exp() * (2.0 * PI * freq * t).cos()) as f32
        })
        .collect()
}

/// Single unit sample at `index`, zeros elsewhere
pub fn impulse(len: usize, index: usize) -> Vec<f32> {
    let mut samples = vec![0.0; len];
    if let Some(s) = samples.get_mut(index) {
        *s = 1.0;
    }
    samples
}

/// Square wave, never falls below its own amplitude
pub fn square(freq: f64, amplitude: f64, sample_rate: u32, secs: f64) -> Vec<f32> {
    (0..frame_count(sample_rate, secs))
        .map(|i| {
            let phase = (freq * i as f64 / sample_rate as f64).fract();
            if phase < 0.5 {
                amplitude as f32
            } else {
                -amplitude as f32
            }
        })
        .collect()
}

/// Interleave equal-length channels into one buffer
pub fn interleave(channels: &[Vec<f32>]) -> Vec<f32> {
    let frames = channels.iter().map(Vec::len).min().unwrap_or(0);
    (0..frames)
        .flat_map(|i| channels.iter().map(move |ch| ch[i]))
        .collect()
}

/// Write interleaved samples to a WAV file
pub fn write_wav(
    path: &Path,
    samples: &[f32],
    sample_rate: u32,
    channels: u16,
    format: WavFormat,
) -> Result<()> {
    let spec = match format {
        WavFormat::Int16 => WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        },
        WavFormat::Float32 => WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        },
    };

    let mut writer = WavWriter::create(path, spec)
        .with_context(|| format!("Failed to create WAV file: {}", path.display()))?;

    for &s in samples {
        match format {
            WavFormat::Int16 => {
                let v = (s.clamp(-1.0, 1.0) * i16::MAX as f32).round() as i16;
                writer.write_sample(v)?;
            }
            WavFormat::Float32 => writer.write_sample(s)?,
        }
    }

    writer
        .finalize()
        .with_context(|| format!("Failed to finalize WAV file: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths() {
        assert_eq!(sine(440.0, 1.0, 44100, 0.5).len(), 22050);
        assert_eq!(decaying_tone(200.0, 0.05, 44100, 1.0).len(), 44100);
        assert_eq!(impulse(10, 3).iter().filter(|&&s| s != 0.0).count(), 1);
        assert_eq!(impulse(10, 30), vec![0.0; 10]);
    }

    #[test]
    fn test_decaying_tone_starts_at_peak() {
        let tone = decaying_tone(200.0, 0.05, 44100, 0.1);
        assert_eq!(tone[0], 1.0);
        assert!(tone.iter().skip(1).all(|s| s.abs() < 1.0));
    }

    #[test]
    fn test_interleave() {
        let out = interleave(&[vec![1.0, 2.0], vec![-1.0, -2.0, -3.0]]);
        assert_eq!(out, vec![1.0, -1.0, 2.0, -2.0]);
    }

    #[test]
    fn test_square_amplitude() {
        let sq = square(100.0, 0.5, 8000, 0.1);
        assert!(sq.iter().all(|s| s.abs() == 0.5));
    }
}
