use std::convert::Infallible;

use thiserror::Error;

use crate::Float;

/// Errors that can occur while constructing a [`NelderMead`](`crate::algorithms::NelderMead`)
/// optimizer or running a search.
///
/// The generic `E` is the error type of the [`CostFunction`](`crate::traits::CostFunction`)
/// being minimized. Running out of iterations is not an error; see
/// [`NelderMeadResults::converged`](`crate::core::NelderMeadResults::converged`).
#[derive(Debug, Error)]
pub enum NelderMeadError<E = Infallible> {
    /// The optimizer was constructed for fewer than one dimension.
    #[error("dimension must be at least 1, got {0}")]
    InvalidDimension(usize),

    /// The starting point does not have one coordinate per dimension.
    #[error("starting point has {found} coordinates, expected {expected}")]
    InvalidArgument {
        /// The dimension of the optimizer.
        expected: usize,
        /// The length of the starting point that was passed.
        found: usize,
    },

    /// The convergence tolerance was not strictly positive.
    #[error("tolerance must be positive, got {0}")]
    InvalidTolerance(Float),

    /// The initial simplex scale was zero (or `NaN`), which would collapse the simplex.
    #[error("simplex scale must be nonzero, got {0}")]
    InvalidScale(Float),

    /// The cost function failed to evaluate a vertex.
    #[error("cost function evaluation failed")]
    Cost(#[source] E),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[derive(Debug, Error)]
    #[error("out of domain")]
    struct OutOfDomain;

    #[test]
    fn test_messages() {
        let err: NelderMeadError = NelderMeadError::InvalidArgument {
            expected: 3,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "starting point has 2 coordinates, expected 3"
        );
        let err: NelderMeadError = NelderMeadError::InvalidDimension(0);
        assert_eq!(err.to_string(), "dimension must be at least 1, got 0");
    }

    #[test]
    fn test_cost_error_is_chained() {
        let err = NelderMeadError::Cost(OutOfDomain);
        assert_eq!(err.to_string(), "cost function evaluation failed");
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("out of domain"));
    }
}
