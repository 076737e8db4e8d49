//! Core analysis modules

pub mod analysis;
pub mod analyzer;
pub mod decoder;
pub mod dsp;
pub mod error;
pub mod preprocess;

pub use analysis::{EnvelopeTimer, EnvelopeTiming, PeakCandidate, PeakRanker, PeakRanking};
pub use analyzer::{analyze, AnalysisResult, SampleAnalysis, SampleAnalyzer};
pub use decoder::{decode_audio, AudioData};
pub use dsp::{SpectralEstimate, SpectralEstimator};
pub use error::AnalysisError;
pub use preprocess::WaveformBuffer;
