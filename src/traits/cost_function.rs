use std::convert::Infallible;

use crate::Float;

/// A trait which describes a function $`f(\mathbb{R}^n) \to \mathbb{R}`$
///
/// The `CostFunction` trait takes a generic `E` representing any possible errors that might be
/// returned during function execution. A failed evaluation aborts the search that requested it.
///
/// Any closure `Fn(&[Float]) -> Float` is an infallible `CostFunction`:
///
/// ```rust
/// use amoeba::prelude::*;
///
/// let f = |x: &[Float]| x.iter().map(|xi| xi * xi).sum::<Float>();
/// assert_eq!(f.evaluate(&[1.0, 2.0]), Ok(5.0));
/// ```
///
/// The search assumes that the function is deterministic for a given input.
pub trait CostFunction<E = Infallible> {
    /// The evaluation of the function at a point `x`.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. Users should implement this trait to return a
    /// [`std::convert::Infallible`] if the function evaluation never fails.
    fn evaluate(&self, x: &[Float]) -> Result<Float, E>;
}

impl<F> CostFunction for F
where
    F: Fn(&[Float]) -> Float,
{
    fn evaluate(&self, x: &[Float]) -> Result<Float, Infallible> {
        Ok(self(x))
    }
}
