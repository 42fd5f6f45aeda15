use std::fmt;

use approx::{AbsDiffEq, RelativeEq};
use log::{debug, trace};
use num_traits::Float;
use serde::Serialize;

use super::{is_zero::IsZero, root_set::RootSet};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum Roots<D> {
    /// `[ (-b + √d) / 2a, (-b - √d) / 2a ]`
    Distinct([ D; 2 ]),
    Repeated(D),
    NoReal,
}

use Roots::{Distinct, Repeated, NoReal};

impl<D: Clone> Roots<D> {
    pub fn reals(&self) -> RootSet<D> {
        RootSet(match self {
            Distinct(rs) => rs.to_vec(),
            Repeated(r) => vec![ r.clone() ],
            NoReal => vec![],
        })
    }

    pub fn len(&self) -> usize {
        match self {
            Distinct(_) => 2,
            Repeated(_) => 1,
            NoReal => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, NoReal)
    }
}

impl<D: AbsDiffEq> AbsDiffEq for Roots<D>
where D::Epsilon: Copy
{
    type Epsilon = D::Epsilon;
    fn default_epsilon() -> Self::Epsilon {
        D::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        match (self, other) {
            (Distinct([ l0, l1 ]), Distinct([ r0, r1 ])) => l0.abs_diff_eq(r0, epsilon) && l1.abs_diff_eq(r1, epsilon),
            (Repeated(r0), Repeated(r1)) => r0.abs_diff_eq(r1, epsilon),
            (NoReal, NoReal) => true,
            _ => false,
        }
    }
}

impl<D: RelativeEq> RelativeEq for Roots<D>
where D::Epsilon: Copy
{
    fn default_max_relative() -> Self::Epsilon {
        D::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        match (self, other) {
            (Distinct([ l0, l1 ]), Distinct([ r0, r1 ])) => l0.relative_eq(r0, epsilon, max_relative) && l1.relative_eq(r1, epsilon, max_relative),
            (Repeated(r0), Repeated(r1)) => r0.relative_eq(r1, epsilon, max_relative),
            (NoReal, NoReal) => true,
            _ => false,
        }
    }
}

pub trait Arg
: Float
+ fmt::Debug
+ fmt::Display
{}

impl Arg for f64 {}
impl Arg for f32 {}

/// `a1² - 4·a2·a0`
pub fn discriminant<D: Arg>(a2: D, a1: D, a0: D) -> D {
    let two = D::one() + D::one();
    let four = two + two;
    a1 * a1 - four * a2 * a0
}

/// Classify the real roots of `a2·x² + a1·x + a0`.
///
/// Discriminants within `eps` of zero (on either side) yield a single repeated root. `eps` is absolute,
/// not scaled by the coefficients' magnitudes. Coefficients are not validated here; a zero `a2` produces
/// infinities/NaNs (see [`crate::Solver`] for the checked entry point).
pub fn quadratic<D: Arg>(a2: D, a1: D, a0: D, eps: D) -> Roots<D> {
    let d = discriminant(a2, a1, a0);
    let two_a = a2 + a2;
    let roots = if d.gt_zero_eps(eps) {
        let sqrt_d = d.sqrt();
        Distinct([ (-a1 + sqrt_d) / two_a, (-a1 - sqrt_d) / two_a ])
    } else if d.is_zero_eps(eps) {
        Repeated(-a1 / two_a)
    } else {
        NoReal
    };
    debug!("quadratic({}, {}, {}): discriminant {} (eps {}), {} real root(s)", a2, a1, a0, d, eps, roots.len());
    trace!("  {:?}", roots);
    roots
}
