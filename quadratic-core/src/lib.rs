#[cfg_attr(not(test), allow(unused_imports))]
#[macro_use]
extern crate approx;

pub mod coefficient;
pub mod error;
pub mod math;
pub mod solver;

pub use math::quadratic;
pub use math::root_set;

// Re-export key types for external use
pub use coefficient::{Coefficient, Coefficients};
pub use error::SolveError;
pub use quadratic::Roots;
pub use root_set::RootSet;
pub use solver::{solve, solve_str, Solver};
