//! Compressed-column construction for symmetric matrices.
use super::CscMatrix;

/// Growable accumulator for strict-upper-triangle entries in coordinate
/// form.
///
/// Entries must be pushed in column order with rows ascending within each
/// column; [`build_symmetric_csc`] relies on that ordering.
#[derive(Clone, Debug, Default)]
pub struct TripletList {
    rows: Vec<usize>,
    cols: Vec<usize>,
    vals: Vec<f64>,
}

impl TripletList {
    /// Creates an accumulator sized for an expected 5% fill of an
    /// `m`-by-`m` matrix.
    pub fn new(m: usize) -> TripletList {
        let nmax = ((0.05 * (m * m) as f64).floor() as usize).max(1);
        TripletList {
            rows: Vec::with_capacity(nmax),
            cols: Vec::with_capacity(nmax),
            vals: Vec::with_capacity(nmax),
        }
    }

    /// Appends one strict-upper-triangle entry.
    pub fn push(&mut self, row: usize, col: usize, val: f64) {
        debug_assert!(row < col);
        self.rows.push(row);
        self.cols.push(col);
        self.vals.push(val);
    }

    /// Number of accumulated entries.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no entries have been accumulated.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Releases the slack capacity left over from growth.
    pub fn shrink_to_fit(&mut self) {
        self.rows.shrink_to_fit();
        self.cols.shrink_to_fit();
        self.vals.shrink_to_fit();
    }
}

/// Expands strict-upper-triangle triplets into a full symmetric
/// compressed-column matrix with a constant diagonal `diag`.
///
/// Column offsets come from counting row and column occurrences of the
/// triplets; the counts are prefix-summed in place and then reused as
/// running write cursors while three passes scatter the upper triangle,
/// the diagonal and the mirrored lower triangle into position. Row indices
/// come out ascending within every column.
pub fn build_symmetric_csc(triplets: &TripletList, m: usize, diag: f64) -> CscMatrix {
    debug_assert!(triplets.cols.windows(2).all(|p| p[0] <= p[1]));

    // per-row and per-column counts of the upper triangle
    let mut w = vec![0usize; m];
    let mut w2 = vec![0usize; m];
    for &r in &triplets.rows {
        w[r] += 1;
    }
    for &c in &triplets.cols {
        w2[c] += 1;
    }
    // full per-column degree: mirrored lower + upper + diagonal
    for k in 0..m {
        w[k] += w2[k] + 1;
    }

    // triplet range of each column
    let mut jc = vec![0usize; m + 1];
    cumsum2(&mut jc, &mut w2);

    let nnz = 2 * triplets.len() + m;
    let mut colptr = vec![0usize; m + 1];
    let mut rowval = vec![0usize; nnz];
    let mut nzval = vec![0.0f64; nnz];
    // w turns into the write cursor of each column
    cumsum2(&mut colptr, &mut w);

    // upper triangle
    for j in 0..m {
        for k in jc[j]..jc[j + 1] {
            let i = w[j];
            w[j] += 1;
            rowval[i] = triplets.rows[k];
            nzval[i] = triplets.vals[k];
        }
    }
    // diagonal
    for (j, cursor) in w.iter_mut().enumerate() {
        let i = *cursor;
        *cursor += 1;
        rowval[i] = j;
        nzval[i] = diag;
    }
    // mirrored lower triangle
    for j in 0..m {
        for k in jc[j]..jc[j + 1] {
            let r = triplets.rows[k];
            let i = w[r];
            w[r] += 1;
            rowval[i] = j;
            nzval[i] = triplets.vals[k];
        }
    }

    CscMatrix {
        nrows: m,
        ncols: m,
        colptr,
        rowval,
        nzval,
    }
}

/// Exclusive prefix sums: fills `offsets` with the running total of
/// `counts` (the last entry is the grand total) and overwrites each count
/// with its own offset so the caller can reuse `counts` as write cursors.
fn cumsum2(offsets: &mut [usize], counts: &mut [usize]) {
    debug_assert_eq!(offsets.len(), counts.len() + 1);
    let mut nz = 0;
    for (i, c) in counts.iter_mut().enumerate() {
        offsets[i] = nz;
        nz += *c;
        *c = offsets[i];
    }
    offsets[counts.len()] = nz;
}
