//! Constants used throughout the classification pipeline.

/// Number of predictions returned when the caller does not ask for a
/// specific `k`.
pub const DEFAULT_TOP_K: usize = 5;

/// Number of images above which batch loading switches to parallel mode.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 8;
