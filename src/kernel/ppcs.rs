//! Piecewise-polynomial covariance functions with compact support.

/// Precomputed coefficients of one piecewise-polynomial kernel.
///
/// For smoothness order `d` the kernel of polynomial degree `q` is
/// `(1 - r)^(d + q)` times a polynomial in `r` whose coefficients depend
/// only on `d`; those coefficients are fixed here once per evaluation run.
/// All four kernels vanish at scaled distance one and beyond.
#[derive(Clone, Copy, Debug)]
pub enum PiecewisePoly {
    /// Degree 0: `(1 - r)^d`.
    Q0 {
        /// Exponent `d`.
        e: f64,
    },
    /// Degree 1: `(1 - r)^(d+1) (c1 r + 1)`.
    Q1 {
        /// Exponent `d + 1`.
        e: f64,
        /// Coefficient of `r`.
        c1: f64,
    },
    /// Degree 2: `(1 - r)^(d+2) (c1 r^2 + c2 r + 3) / 3`.
    Q2 {
        /// Exponent `d + 2`.
        e: f64,
        /// Coefficient of `r^2`.
        c1: f64,
        /// Coefficient of `r`.
        c2: f64,
    },
    /// Degree 3: `(1 - r)^(d+3) (c1 r^3 + c2 r^2 + c3 r + 15) / 15`.
    Q3 {
        /// Exponent `d + 3`.
        e: f64,
        /// Coefficient of `r^3`.
        c1: f64,
        /// Coefficient of `r^2`.
        c2: f64,
        /// Coefficient of `r`.
        c3: f64,
    },
}

impl PiecewisePoly {
    /// Coefficients of the degree-0 kernel for smoothness order `d`.
    pub fn q0(d: f64) -> PiecewisePoly {
        PiecewisePoly::Q0 { e: d }
    }

    /// Coefficients of the degree-1 kernel for smoothness order `d`.
    pub fn q1(d: f64) -> PiecewisePoly {
        PiecewisePoly::Q1 {
            e: d + 1.0,
            c1: d + 1.0,
        }
    }

    /// Coefficients of the degree-2 kernel for smoothness order `d`.
    pub fn q2(d: f64) -> PiecewisePoly {
        PiecewisePoly::Q2 {
            e: d + 2.0,
            c1: d * d + 4.0 * d + 3.0,
            c2: 3.0 * d + 6.0,
        }
    }

    /// Coefficients of the degree-3 kernel for smoothness order `d`.
    pub fn q3(d: f64) -> PiecewisePoly {
        PiecewisePoly::Q3 {
            e: d + 3.0,
            c1: d * d * d + 9.0 * d * d + 23.0 * d + 15.0,
            c2: 6.0 * d * d + 36.0 * d + 45.0,
            c3: 15.0 * d + 45.0,
        }
    }

    /// Evaluates the kernel with marginal variance `ms` at scaled squared
    /// distance `c`.
    ///
    /// Returns exactly `0.0` outside the support (`c >= 1`), where the
    /// fractional power would otherwise be undefined.
    pub fn value(&self, ms: f64, c: f64) -> f64 {
        if !(c < 1.0) {
            return 0.0;
        }
        let r = c.sqrt();
        match *self {
            PiecewisePoly::Q0 { e } => ms * (1.0 - r).powf(e),
            PiecewisePoly::Q1 { e, c1 } => ms * (1.0 - r).powf(e) * (c1 * r + 1.0),
            PiecewisePoly::Q2 { e, c1, c2 } => {
                ms * (1.0 - r).powf(e) * (c1 * c + c2 * r + 3.0) / 3.0
            }
            PiecewisePoly::Q3 { e, c1, c2, c3 } => {
                ms * (1.0 - r).powf(e) * (c1 * c * r + c2 * c + c3 * r + 15.0) / 15.0
            }
        }
    }
}
