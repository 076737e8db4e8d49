//! Analysis stages operating on a normalized waveform
//!
//! - Peak ranking (fundamental and harmonic ratios from the attack spectrum)
//! - Envelope timing (attack and decay measured on the time-domain signal)

mod envelope;
mod ranking;

pub use envelope::{EnvelopeTimer, EnvelopeTiming};
pub use ranking::{PeakCandidate, PeakRanker, PeakRanking};
