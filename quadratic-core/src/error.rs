#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// A coefficient was non-numeric, infinite, or NaN.
    #[error("All arguments must be numbers")]
    InvalidArgumentType,

    /// The leading coefficient is zero within the solver's tolerance.
    #[error("Coefficient a cannot be zero")]
    ZeroLeadingCoefficient,
}

pub type Result<T> = std::result::Result<T, SolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(SolveError::InvalidArgumentType.to_string(), "All arguments must be numbers");
        assert_eq!(SolveError::ZeroLeadingCoefficient.to_string(), "Coefficient a cannot be zero");
    }
}
