// File: crates/chart-filter/src/error.rs
// Summary: Error type for point construction and option parsing.

use thiserror::Error;

/// Errors raised while building series or parsing plot options.
/// The per-draw pipeline itself never fails.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("point arity {0} is too small; every point needs at least x and y")]
    ArityTooSmall(usize),
    #[error("point {index} has {len} values, expected {arity}")]
    RaggedPoint { index: usize, len: usize, arity: usize },
    #[error("flat buffer of {len} values is not a multiple of arity {arity}")]
    TrailingValues { len: usize, arity: usize },
    #[error("pointsize {pointsize} needs {} slots per point but only {arity} are stored", .pointsize + 1)]
    PointsizeTooLarge { pointsize: usize, arity: usize },
    #[error("invalid plot options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FilterError>;
