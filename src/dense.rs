//! Dense assembly for unbounded covariance functions.
use ndarray::{Array2, ArrayView2};

use crate::distance::scaled_sq_dist;
use crate::kernel::CovFunction;

/// Builds the dense symmetric covariance matrix of the input rows.
///
/// Only the strict upper triangle is evaluated; each value is mirrored
/// across the diagonal and the diagonal itself is set to the marginal
/// variance. Kernel values at or below machine epsilon are stored as
/// exactly zero.
pub fn assemble(x: ArrayView2<f64>, cov: &CovFunction, sq_scales: &[f64]) -> Array2<f64> {
    let m = x.nrows();
    let mut c = Array2::<f64>::zeros((m, m));
    for j in 0..m {
        for k in 0..j {
            let d = cov.value(scaled_sq_dist(x.row(j), x.row(k), sq_scales));
            let d = if d > f64::EPSILON { d } else { 0.0 };
            c[(k, j)] = d;
            c[(j, k)] = d;
        }
        c[(j, j)] = cov.magnitude();
    }
    c
}
