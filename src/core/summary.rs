use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Float;

/// A struct that holds the outcome of the most recent search of a
/// [`NelderMead`](`crate::algorithms::NelderMead`) optimizer.
///
/// The record is owned by the optimizer and overwritten in place by every search. Before the first
/// search it holds zero counts, a zeroed position, and a `NaN` minimum.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct NelderMeadResults {
    /// The number of refinement iterations performed (at most the configured maximum).
    pub iteration_count: usize,
    /// The total number of objective evaluations, including the initial simplex and the final
    /// evaluation of the best vertex.
    pub eval_count: usize,
    /// The position of the best vertex found.
    pub min_values: Vec<Float>,
    /// The objective evaluated at [`NelderMeadResults::min_values`].
    pub min: Float,
    /// Whether the standard deviation of the vertex values fell below the tolerance. If `false`,
    /// the search stopped because it ran out of iterations.
    pub converged: bool,
}

impl NelderMeadResults {
    /// Create an empty record for a search space of the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self {
            iteration_count: 0,
            eval_count: 0,
            min_values: vec![0.0; dimension],
            min: Float::NAN,
            converged: false,
        }
    }
    /// Overwrite the record in place.
    pub(crate) fn update(
        &mut self,
        iteration_count: usize,
        eval_count: usize,
        min_values: &[Float],
        min: Float,
        converged: bool,
    ) {
        self.iteration_count = iteration_count;
        self.eval_count = eval_count;
        self.min_values.copy_from_slice(min_values);
        self.min = min;
        self.converged = converged;
    }
}

impl Display for NelderMeadResults {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "STATUS:    {}",
            if self.converged {
                "Converged"
            } else {
                "Iteration limit reached"
            }
        )?;
        writeln!(f, "F(X):      {:+.6e}", self.min)?;
        for (i, x) in self.min_values.iter().enumerate() {
            if i == 0 {
                writeln!(f, "X:         {x:+.6e}")?;
            } else {
                writeln!(f, "           {x:+.6e}")?;
            }
        }
        writeln!(f, "N_ITERS:   {}", self.iteration_count)?;
        write!(f, "N_F_EVALS: {}", self.eval_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_unset() {
        let results = NelderMeadResults::new(3);
        assert_eq!(results.min_values, vec![0.0; 3]);
        assert!(results.min.is_nan());
        assert_eq!(results.iteration_count, 0);
        assert_eq!(results.eval_count, 0);
        assert!(!results.converged);
    }

    #[test]
    fn test_update_overwrites_in_place() {
        let mut results = NelderMeadResults::new(2);
        let ptr = results.min_values.as_ptr();
        results.update(10, 25, &[1.0, -1.0], 0.5, true);
        assert_eq!(results.min_values, vec![1.0, -1.0]);
        assert_eq!(results.min_values.as_ptr(), ptr);
        assert_eq!(results.iteration_count, 10);
        assert_eq!(results.eval_count, 25);
        assert_eq!(results.min, 0.5);
        assert!(results.converged);
    }

    #[test]
    fn test_display() {
        let mut results = NelderMeadResults::new(2);
        results.update(3, 9, &[1.0, 2.0], 0.25, false);
        let s = format!("{}", results);
        assert!(s.contains("Iteration limit reached"));
        assert!(s.contains("N_ITERS:   3"));
        assert!(s.contains("N_F_EVALS: 9"));
    }
}
