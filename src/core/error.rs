// src/core/error.rs
//
// Error taxonomy for single-sample analysis.

use thiserror::Error;

/// Structural problems with an input buffer or configuration.
///
/// Degenerate-but-valid outcomes (no spectral peaks, a signal that never
/// decays, a buffer shorter than the attack window) are not errors; they are
/// reported through the result values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("cannot normalize a silent recording")]
    SilentInput,

    #[error("input buffer contains no samples")]
    EmptyInput,

    #[error("invalid sample rate: {0} Hz")]
    InvalidSampleRate(u32),

    #[error("{samples} interleaved samples cannot be split into {channels} channel(s)")]
    InvalidChannelLayout { samples: usize, channels: usize },

    #[error("non-finite sample at index {index}")]
    NonFiniteSample { index: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
