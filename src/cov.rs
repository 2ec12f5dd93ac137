//! Covariance matrix evaluation.
use log::debug;
use ndarray::{Array2, ArrayView2};

use crate::dense;
use crate::error::CovError;
use crate::kernel::{CovFunction, Support};
use crate::sparse::{self, CscMatrix};
use crate::spec::KernelSpec;

/// A symmetric covariance matrix in the storage its kernel calls for.
#[derive(Clone, Debug)]
pub enum Covariance {
    /// Dense storage, produced by unbounded kernels.
    Dense(Array2<f64>),
    /// Compressed-column storage, produced by compactly supported kernels.
    Sparse(CscMatrix),
}

impl Covariance {
    /// Number of rows (and columns) of the matrix.
    pub fn nrows(&self) -> usize {
        match self {
            Covariance::Dense(c) => c.nrows(),
            Covariance::Sparse(c) => c.nrows,
        }
    }

    /// Borrows the dense matrix, if this is one.
    pub fn as_dense(&self) -> Option<&Array2<f64>> {
        match self {
            Covariance::Dense(c) => Some(c),
            Covariance::Sparse(_) => None,
        }
    }

    /// Borrows the sparse matrix, if this is one.
    pub fn as_sparse(&self) -> Option<&CscMatrix> {
        match self {
            Covariance::Dense(_) => None,
            Covariance::Sparse(c) => Some(c),
        }
    }
}

/// Evaluates the covariance matrix of the input rows under a kernel
/// specification.
///
/// Element `(j, k)` of the result is the covariance between rows `j` and
/// `k` of `x`. Unbounded kernels produce a dense matrix, compactly
/// supported kernels a sparse one. The specification is validated in full
/// before any distance work starts, so an error never leaves a partial
/// result behind.
pub fn evaluate(spec: &KernelSpec, x: ArrayView2<f64>) -> Result<Covariance, CovError> {
    let sq_scales = spec.length_scale.squared(x.ncols())?;
    let cov = CovFunction::from_spec(spec)?;
    debug!(
        "evaluating '{}' covariance of {} rows x {} columns",
        spec.kind,
        x.nrows(),
        x.ncols()
    );
    match cov.support() {
        Support::Unbounded => Ok(Covariance::Dense(dense::assemble(x, &cov, &sq_scales))),
        Support::Compact => Ok(Covariance::Sparse(sparse::assemble(x, &cov, &sq_scales))),
    }
}
