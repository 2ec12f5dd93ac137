//! Sparse assembly for compactly supported covariance functions.
pub mod builder;

pub use builder::TripletList;

use log::debug;
use ndarray::{Array2, ArrayView2};

use crate::distance::scaled_sq_dist;
use crate::kernel::CovFunction;

/// A sparse matrix in compressed-column storage.
#[derive(Clone, Debug, PartialEq)]
pub struct CscMatrix {
    /// Number of rows.
    pub nrows: usize,
    /// Number of columns.
    pub ncols: usize,
    /// Start offset of each column in `rowval` and `nzval`; the final
    /// entry is the total number of stored values.
    pub colptr: Vec<usize>,
    /// Row index of each stored value, ascending within a column.
    pub rowval: Vec<usize>,
    /// Stored values in column order.
    pub nzval: Vec<f64>,
}

impl CscMatrix {
    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.nzval.len()
    }

    /// Reads the entry at `(row, col)`; entries outside the stored pattern
    /// read as `0.0`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        let range = self.colptr[col]..self.colptr[col + 1];
        match self.rowval[range.clone()].binary_search(&row) {
            Ok(k) => self.nzval[range.start + k],
            Err(_) => 0.0,
        }
    }

    /// Expands to a dense array.
    pub fn to_dense(&self) -> Array2<f64> {
        let mut dense = Array2::<f64>::zeros((self.nrows, self.ncols));
        for j in 0..self.ncols {
            for k in self.colptr[j]..self.colptr[j + 1] {
                dense[(self.rowval[k], j)] = self.nzval[k];
            }
        }
        dense
    }
}

/// Builds the sparse symmetric covariance matrix of the input rows.
///
/// Pairs at scaled squared distance one or more lie outside the kernel's
/// support and are never stored. The surviving strict-upper-triangle
/// values are expanded into the full symmetric matrix, diagonal included,
/// by [`builder::build_symmetric_csc`].
pub fn assemble(x: ArrayView2<f64>, cov: &CovFunction, sq_scales: &[f64]) -> CscMatrix {
    let m = x.nrows();
    let mut triplets = TripletList::new(m);
    for j in 0..m {
        for k in 0..j {
            let c = scaled_sq_dist(x.row(j), x.row(k), sq_scales);
            if c < 1.0 {
                triplets.push(k, j, cov.value(c));
            }
        }
    }
    triplets.shrink_to_fit();
    debug!(
        "compact support kept {} strict-upper pairs of {} rows ({} stored values)",
        triplets.len(),
        m,
        2 * triplets.len() + m
    );
    builder::build_symmetric_csc(&triplets, m, cov.magnitude())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn sample() -> CscMatrix {
        // [[2, 5, 0], [5, 3, 1], [0, 1, 4]]
        CscMatrix {
            nrows: 3,
            ncols: 3,
            colptr: vec![0, 2, 5, 7],
            rowval: vec![0, 1, 0, 1, 2, 1, 2],
            nzval: vec![2.0, 5.0, 5.0, 3.0, 1.0, 1.0, 4.0],
        }
    }

    #[test]
    fn get_reads_stored_and_missing_entries() {
        let csc = sample();
        assert_eq!(csc.get(0, 1), 5.0);
        assert_eq!(csc.get(2, 2), 4.0);
        assert_eq!(csc.get(2, 0), 0.0);
        assert_eq!(csc.get(0, 2), 0.0);
    }

    #[test]
    fn to_dense_places_every_entry() {
        let dense = sample().to_dense();
        let expected = array![[2.0, 5.0, 0.0], [5.0, 3.0, 1.0], [0.0, 1.0, 4.0]];
        assert_eq!(dense, expected);
    }

    #[test]
    fn nnz_counts_stored_values() {
        assert_eq!(sample().nnz(), 7);
    }
}
