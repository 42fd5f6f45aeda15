use log::debug;

use crate::{
    coefficient::Coefficients,
    error::{Result, SolveError::{InvalidArgumentType, ZeroLeadingCoefficient}},
    math::{is_zero::IsZero, quadratic::{self, Arg, Roots}, root_set::RootSet},
};

/// Validates coefficients and classifies roots, treating values within `eps` of zero as zero (both for the
/// leading coefficient and the discriminant).
///
/// The default tolerance is the type's machine epsilon (`f64::EPSILON` ≈ 2.22e-16), used as an absolute bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solver<D> {
    eps: D,
}

impl<D: Arg> Default for Solver<D> {
    fn default() -> Self {
        Solver { eps: D::epsilon() }
    }
}

impl<D: Arg> Solver<D> {
    pub fn with_tolerance(eps: D) -> Result<Self> {
        if eps.is_finite() && eps >= D::zero() {
            Ok(Solver { eps })
        } else {
            Err(InvalidArgumentType)
        }
    }

    pub fn eps(&self) -> D {
        self.eps
    }

    /// Finiteness is checked for all three coefficients before `a` is compared against zero.
    pub fn validate(&self, a: D, b: D, c: D) -> Result<()> {
        if ![ a, b, c ].into_iter().all(|v| v.is_finite()) {
            debug!("rejecting non-finite coefficients: {}, {}, {}", a, b, c);
            return Err(InvalidArgumentType);
        }
        if a.is_zero_eps(self.eps) {
            debug!("rejecting leading coefficient {} (eps {})", a, self.eps);
            return Err(ZeroLeadingCoefficient);
        }
        Ok(())
    }

    pub fn discriminant(&self, a: D, b: D, c: D) -> Result<D> {
        self.validate(a, b, c)?;
        Ok(quadratic::discriminant(a, b, c))
    }

    pub fn roots(&self, a: D, b: D, c: D) -> Result<Roots<D>> {
        self.validate(a, b, c)?;
        Ok(quadratic::quadratic(a, b, c, self.eps))
    }

    pub fn solve(&self, a: D, b: D, c: D) -> Result<RootSet<D>> {
        Ok(self.roots(a, b, c)?.reals())
    }
}

/// Real roots of `a·x² + b·x + c = 0`, using [`Solver::default`].
pub fn solve(a: f64, b: f64, c: f64) -> Result<RootSet<f64>> {
    Solver::default().solve(a, b, c)
}

/// Parse three coefficients from text, then [`solve`].
pub fn solve_str(a: &str, b: &str, c: &str) -> Result<RootSet<f64>> {
    Coefficients::parse(a, b, c)?.solve()
}
