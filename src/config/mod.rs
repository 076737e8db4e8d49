//! Configuration module for the percussion analyzer

mod analysis;

pub use analysis::{
    AnalysisConfig, AnalysisConfigBuilder, DecayMode, DEFAULT_ATTACK_WINDOW_SECONDS,
    DEFAULT_DECAY_THRESHOLD_RATIO, DEFAULT_PEAK_HEIGHT_RATIO, DEFAULT_PEAK_MIN_DISTANCE_BINS,
    DEFAULT_TOP_PEAK_COUNT, DEFAULT_ZERO_PAD_FACTOR, MAX_ZERO_PAD_FACTOR,
};
