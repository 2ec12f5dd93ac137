//! Covariance functions.
pub mod ppcs;

pub use ppcs::PiecewisePoly;

use crate::error::CovError;
use crate::spec::KernelSpec;

/// Support of a covariance function.
///
/// Unbounded kernels are positive at every distance and produce dense
/// matrices; compactly supported kernels vanish at scaled distance one and
/// produce sparse ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Support {
    /// Positive at every distance.
    Unbounded,
    /// Exactly zero at scaled distance one and beyond.
    Compact,
}

/// The known covariance function families and their host tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KernelFamily {
    /// Squared exponential, `gpcf_sexp`.
    SqExp,
    /// Exponential (Ornstein-Uhlenbeck), `gpcf_exp`.
    Exp,
    /// Matern with smoothness 3/2, `gpcf_matern32`.
    Matern32,
    /// Matern with smoothness 5/2, `gpcf_matern52`.
    Matern52,
    /// Piecewise polynomial of degree 0, `gpcf_ppcs0`.
    Ppcs0,
    /// Piecewise polynomial of degree 1, `gpcf_ppcs1`.
    Ppcs1,
    /// Piecewise polynomial of degree 2, `gpcf_ppcs2`.
    Ppcs2,
    /// Piecewise polynomial of degree 3, `gpcf_ppcs3`.
    Ppcs3,
}

impl KernelFamily {
    /// Resolves a host type tag.
    pub fn from_tag(tag: &str) -> Result<KernelFamily, CovError> {
        match tag {
            "gpcf_sexp" => Ok(KernelFamily::SqExp),
            "gpcf_exp" => Ok(KernelFamily::Exp),
            "gpcf_matern32" => Ok(KernelFamily::Matern32),
            "gpcf_matern52" => Ok(KernelFamily::Matern52),
            "gpcf_ppcs0" => Ok(KernelFamily::Ppcs0),
            "gpcf_ppcs1" => Ok(KernelFamily::Ppcs1),
            "gpcf_ppcs2" => Ok(KernelFamily::Ppcs2),
            "gpcf_ppcs3" => Ok(KernelFamily::Ppcs3),
            _ => Err(CovError::UnknownKernel(tag.to_string())),
        }
    }

    /// The host type tag of this family.
    pub fn tag(&self) -> &'static str {
        match self {
            KernelFamily::SqExp => "gpcf_sexp",
            KernelFamily::Exp => "gpcf_exp",
            KernelFamily::Matern32 => "gpcf_matern32",
            KernelFamily::Matern52 => "gpcf_matern52",
            KernelFamily::Ppcs0 => "gpcf_ppcs0",
            KernelFamily::Ppcs1 => "gpcf_ppcs1",
            KernelFamily::Ppcs2 => "gpcf_ppcs2",
            KernelFamily::Ppcs3 => "gpcf_ppcs3",
        }
    }

    /// Support of this family, which decides the output storage.
    pub fn support(&self) -> Support {
        match self {
            KernelFamily::SqExp
            | KernelFamily::Exp
            | KernelFamily::Matern32
            | KernelFamily::Matern52 => Support::Unbounded,
            KernelFamily::Ppcs0
            | KernelFamily::Ppcs1
            | KernelFamily::Ppcs2
            | KernelFamily::Ppcs3 => Support::Compact,
        }
    }
}

/// Closed form of a prepared covariance function.
#[derive(Clone, Copy, Debug)]
enum Form {
    SqExp,
    Exp,
    Matern32,
    Matern52,
    Ppcs(PiecewisePoly),
}

/// A covariance function prepared for repeated evaluation.
///
/// Holds the marginal variance in both plain and log form so the
/// exponential families can fold it into a single `exp` call, plus the
/// polynomial coefficients of the compactly supported families.
#[derive(Clone, Debug)]
pub struct CovFunction {
    family: KernelFamily,
    form: Form,
    /// Log marginal variance.
    lms: f64,
    /// Marginal variance.
    ms: f64,
}

impl CovFunction {
    /// Prepares the covariance function described by a kernel record.
    ///
    /// Fails if the type tag is unknown or a piecewise-polynomial kernel
    /// lacks its smoothness order `l`.
    pub fn from_spec(spec: &KernelSpec) -> Result<CovFunction, CovError> {
        let family = KernelFamily::from_tag(&spec.kind)?;
        let smoothness = |l: Option<f64>| l.ok_or(CovError::MissingSmoothness(family.tag()));
        let form = match family {
            KernelFamily::SqExp => Form::SqExp,
            KernelFamily::Exp => Form::Exp,
            KernelFamily::Matern32 => Form::Matern32,
            KernelFamily::Matern52 => Form::Matern52,
            KernelFamily::Ppcs0 => Form::Ppcs(PiecewisePoly::q0(smoothness(spec.l)?)),
            KernelFamily::Ppcs1 => Form::Ppcs(PiecewisePoly::q1(smoothness(spec.l)?)),
            KernelFamily::Ppcs2 => Form::Ppcs(PiecewisePoly::q2(smoothness(spec.l)?)),
            KernelFamily::Ppcs3 => Form::Ppcs(PiecewisePoly::q3(smoothness(spec.l)?)),
        };
        let lms = spec.magn_sigma2.ln();
        Ok(CovFunction {
            family,
            form,
            lms,
            ms: lms.exp(),
        })
    }

    /// The family this function belongs to.
    pub fn family(&self) -> KernelFamily {
        self.family
    }

    /// Support of the underlying family.
    pub fn support(&self) -> Support {
        self.family.support()
    }

    /// Marginal variance, the covariance of an input row with itself.
    pub fn magnitude(&self) -> f64 {
        self.ms
    }

    /// Evaluates the covariance at scaled squared distance `c`.
    pub fn value(&self, c: f64) -> f64 {
        match self.form {
            Form::SqExp => (self.lms - c).exp(),
            Form::Exp => (self.lms - c.sqrt()).exp(),
            Form::Matern32 => {
                let t = (3.0 * c).sqrt();
                (1.0 + t) * (self.lms - t).exp()
            }
            Form::Matern52 => {
                let t = (5.0 * c).sqrt();
                (1.0 + t + 5.0 * c / 3.0) * (self.lms - t).exp()
            }
            Form::Ppcs(poly) => poly.value(self.ms, c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn prepared(kind: &str, l: Option<f64>) -> CovFunction {
        let mut spec = KernelSpec::new(kind, 2.0, 1.0);
        spec.l = l;
        CovFunction::from_spec(&spec).unwrap()
    }

    #[test]
    fn tags_round_trip() {
        for tag in [
            "gpcf_sexp",
            "gpcf_exp",
            "gpcf_matern32",
            "gpcf_matern52",
            "gpcf_ppcs0",
            "gpcf_ppcs1",
            "gpcf_ppcs2",
            "gpcf_ppcs3",
        ] {
            assert_eq!(KernelFamily::from_tag(tag).unwrap().tag(), tag);
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert_eq!(
            KernelFamily::from_tag("gpcf_periodic"),
            Err(CovError::UnknownKernel("gpcf_periodic".to_string()))
        );
    }

    #[test]
    fn piecewise_kernels_require_smoothness() {
        let spec = KernelSpec::new("gpcf_ppcs2", 1.0, 1.0);
        assert_eq!(
            CovFunction::from_spec(&spec).unwrap_err(),
            CovError::MissingSmoothness("gpcf_ppcs2")
        );
    }

    #[test]
    fn zero_distance_recovers_marginal_variance() {
        for (tag, l) in [
            ("gpcf_sexp", None),
            ("gpcf_exp", None),
            ("gpcf_matern32", None),
            ("gpcf_matern52", None),
            ("gpcf_ppcs0", Some(3.0)),
            ("gpcf_ppcs3", Some(3.0)),
        ] {
            let cov = prepared(tag, l);
            assert_abs_diff_eq!(cov.value(0.0), 2.0, epsilon = 1e-15);
            assert_abs_diff_eq!(cov.magnitude(), 2.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn closed_forms_match_hand_computation() {
        let c = 0.49;
        let r: f64 = 0.7;
        assert_abs_diff_eq!(
            prepared("gpcf_sexp", None).value(c),
            2.0 * (-c).exp(),
            epsilon = 1e-15
        );
        assert_abs_diff_eq!(
            prepared("gpcf_exp", None).value(c),
            2.0 * (-r).exp(),
            epsilon = 1e-15
        );
        let t3 = (3.0f64).sqrt() * r;
        assert_abs_diff_eq!(
            prepared("gpcf_matern32", None).value(c),
            2.0 * (1.0 + t3) * (-t3).exp(),
            epsilon = 1e-14
        );
        let t5 = (5.0f64).sqrt() * r;
        assert_abs_diff_eq!(
            prepared("gpcf_matern52", None).value(c),
            2.0 * (1.0 + t5 + 5.0 * c / 3.0) * (-t5).exp(),
            epsilon = 1e-14
        );
    }

    #[test]
    fn support_splits_the_families() {
        assert_eq!(KernelFamily::SqExp.support(), Support::Unbounded);
        assert_eq!(KernelFamily::Matern52.support(), Support::Unbounded);
        assert_eq!(KernelFamily::Ppcs0.support(), Support::Compact);
        assert_eq!(KernelFamily::Ppcs3.support(), Support::Compact);
    }
}
