//! Scaled squared distances between input rows.
use ndarray::ArrayView1;

/// Computes the squared Euclidean distance between two input rows, with
/// each dimension divided by its squared length scale.
pub fn scaled_sq_dist(xj: ArrayView1<f64>, xk: ArrayView1<f64>, sq_scales: &[f64]) -> f64 {
    xj.iter()
        .zip(xk.iter())
        .zip(sq_scales.iter())
        .fold(0.0, |sum, ((&xji, &xki), &rr)| {
            let d = xji - xki;
            sum + d * d / rr
        })
}
