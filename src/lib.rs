//! Build Gaussian process covariance matrices.
#![warn(missing_docs)]

mod cov;
mod dense;
mod distance;
mod error;
pub mod kernel;
pub mod sparse;
mod spec;

pub use crate::cov::{evaluate, Covariance};
pub use crate::error::CovError;
pub use crate::spec::{KernelSpec, LengthScale};
