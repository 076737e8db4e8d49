//! Percussion Analyzer - synthesis parameters from percussive samples
//!
//! Extracts the parameters an additive/FM synthesizer needs to imitate a
//! short percussive recording: fundamental frequency, harmonic ratios,
//! attack time and decay time.
//!
//! ## Pipeline
//!
//! Each recording goes through four stages that share one normalized buffer:
//!
//! 1. **Preprocessing** - channels averaged to mono, peak-normalized to 1.0
//! 2. **Spectral estimate** - first 50 ms, zero-padded 4x, magnitude of the
//!    positive-frequency bins (no window function)
//! 3. **Peak ranking** - local maxima at least 10% of the spectrum maximum and
//!    20 bins apart, ranked by magnitude; the strongest is the fundamental, the
//!    next four become `frequency / fundamental` ratios
//! 4. **Envelope timing** - attack is the time to the global amplitude peak,
//!    decay the time from there until the signal drops below 10% of the peak
//!
//! All constants live in [`AnalysisConfig`].
//!
//! ## Module Structure
//!
//! - `core` - analysis stages, decoding and error types
//! - `config` - analysis parameters
//! - `cli` - batch command-line front end
//! - `testgen` - synthetic test signals
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use percussion_analyzer::{decode_audio, SampleAnalyzer};
//!
//! let audio = decode_audio(Path::new("samples/Na01.wav"))?;
//! let result = SampleAnalyzer::default().analyze(&audio)?;
//!
//! println!("{} Hz, harmonics {:?}", result.fundamental_freq, result.harmonics);
//! ```

// Core analysis functionality
pub mod core;

// Command-line interface
pub mod cli;

// Analysis parameters
pub mod config;

// Synthetic signals for tests and calibration
pub mod testgen;

pub use config::{AnalysisConfig, AnalysisConfigBuilder, DecayMode};
pub use self::core::{
    analyze, decode_audio, AnalysisError, AnalysisResult, AudioData, EnvelopeTimer,
    EnvelopeTiming, PeakCandidate, PeakRanker, PeakRanking, SampleAnalysis, SampleAnalyzer,
    SpectralEstimate, SpectralEstimator, WaveformBuffer,
};
