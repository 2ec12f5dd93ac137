//! Error types for covariance construction.
use thiserror::Error;

/// Errors reported while validating a kernel specification.
///
/// Every variant is detected before any distance computation starts, so a
/// failed call never produces a partial result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CovError {
    /// The `type` tag of the kernel record matches none of the known
    /// covariance functions.
    #[error("unknown covariance function type '{0}'")]
    UnknownKernel(String),

    /// The length scale has the wrong number of entries for the input.
    #[error(
        "length scale must be a scalar or have one entry per input column (got {got}, expected 1 or {expected})"
    )]
    LengthScaleSize {
        /// Number of entries found in the record.
        got: usize,
        /// Number of input columns.
        expected: usize,
    },

    /// A piecewise-polynomial kernel was requested without its smoothness
    /// order field `l`.
    #[error("covariance function '{0}' requires the smoothness order field 'l'")]
    MissingSmoothness(&'static str),
}
