//! Kernel specification records.
use serde::{Deserialize, Serialize};

use crate::error::CovError;

/// Specification of a covariance function as supplied by the host.
///
/// Field names follow the host record (`type`, `magnSigma2`, `lengthScale`,
/// `l`), so a record arriving through serde maps onto this struct directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KernelSpec {
    /// Covariance function tag, e.g. `"gpcf_sexp"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Marginal variance, the kernel value at zero distance.
    #[serde(rename = "magnSigma2")]
    pub magn_sigma2: f64,
    /// Length scale(s) dividing each input dimension.
    #[serde(rename = "lengthScale")]
    pub length_scale: LengthScale,
    /// Smoothness order of the piecewise-polynomial kernels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub l: Option<f64>,
}

impl KernelSpec {
    /// Creates a specification with a scalar length scale and no
    /// smoothness order.
    pub fn new(kind: &str, magn_sigma2: f64, length_scale: f64) -> KernelSpec {
        KernelSpec {
            kind: kind.to_string(),
            magn_sigma2,
            length_scale: LengthScale::Scalar(length_scale),
            l: None,
        }
    }
}

/// A length scale shared by all input dimensions or given per dimension.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LengthScale {
    /// One scale for every dimension (isotropic).
    Scalar(f64),
    /// One scale per dimension (anisotropic). A single-entry vector acts
    /// like a scalar.
    Vector(Vec<f64>),
}

impl LengthScale {
    /// Squares the scales into one divisor per input column.
    ///
    /// A scalar (or single-entry vector) is broadcast to all `n` columns;
    /// any other vector must have exactly `n` entries.
    pub fn squared(&self, n: usize) -> Result<Vec<f64>, CovError> {
        match self {
            LengthScale::Scalar(l) => Ok(vec![l * l; n]),
            LengthScale::Vector(ls) if ls.len() == 1 => Ok(vec![ls[0] * ls[0]; n]),
            LengthScale::Vector(ls) => {
                if ls.len() != n {
                    return Err(CovError::LengthScaleSize {
                        got: ls.len(),
                        expected: n,
                    });
                }
                Ok(ls.iter().map(|l| l * l).collect())
            }
        }
    }
}
