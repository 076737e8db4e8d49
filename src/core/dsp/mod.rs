//! Digital Signal Processing utilities

pub mod fft;
pub mod peaks;
pub mod stats;

pub use fft::{SpectralEstimate, SpectralEstimator};
pub use peaks::find_peaks;
pub use stats::{argmax_abs, peak_amplitude, round_to};
