use crate::{
    traits::{CostFunction, Projector},
    DVector, Float,
};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Evaluate `func` at `x`, counting the call in `evals`.
///
/// # Errors
///
/// Returns an `Err(E)` if the evaluation fails. The counter is incremented either way.
pub fn evaluate_counted<E, F>(func: &F, x: &[Float], evals: &mut usize) -> Result<Float, E>
where
    F: CostFunction<E> + ?Sized,
{
    *evals += 1;
    func.evaluate(x)
}

/// A point of a [`Simplex`](`crate::core::Simplex`): its position in parameter space together with
/// the cached value of the objective at that position.
///
/// The cached value is `NaN` until the vertex is first evaluated.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Vertex {
    /// The vertex's position.
    pub x: DVector<Float>,
    /// The objective evaluated at [`Vertex::x`].
    pub fx: Float,
}
impl Vertex {
    /// Create an unevaluated vertex at the origin of a space of the given dimension.
    pub fn zeros(dimension: usize) -> Self {
        Self {
            x: DVector::zeros(dimension),
            fx: Float::NAN,
        }
    }
    /// Map the vertex's position onto the feasible set, if a [`Projector`] is given.
    pub fn project(&mut self, projector: Option<&dyn Projector>) {
        if let Some(projector) = projector {
            projector.project(self.x.as_mut_slice());
        }
    }
    /// Evaluate `func` at the vertex's position and cache the result.
    ///
    /// Unlike a lazily-evaluated point, this always calls `func`, since the position may have
    /// been moved in place since the last evaluation.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails, leaving the cached value untouched.
    pub fn evaluate<E, F>(&mut self, func: &F, evals: &mut usize) -> Result<(), E>
    where
        F: CostFunction<E> + ?Sized,
    {
        self.fx = evaluate_counted(func, self.x.as_slice(), evals)?;
        Ok(())
    }
    /// Overwrite the vertex in place with the given position and value.
    pub fn replace(&mut self, x: &DVector<Float>, fx: Float) {
        self.x.copy_from(x);
        self.fx = fx;
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x: [")?;
        for (i, xi) in self.x.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{xi:+.6}")?;
        }
        write!(f, "], f(x): {:+.6e}", self.fx)
    }
}

impl From<&[Float]> for Vertex {
    fn from(value: &[Float]) -> Self {
        Self {
            x: DVector::from_column_slice(value),
            fx: Float::NAN,
        }
    }
}
