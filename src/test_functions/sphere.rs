use std::convert::Infallible;

use crate::traits::CostFunction;
use crate::Float;

/// A sphere (sum of squares) centered on an arbitrary point, the simplest convex test function.
///
/// ```math
/// f(\vec{x}) = \sum_{i=1}^{n} (x_i - c_i)^2
/// ```
/// This function has a minimum at $`f(\vec{c}) = 0`$.
#[derive(Clone, Debug, Default)]
pub struct Sphere {
    /// The position of the minimum. Its length sets the dimension.
    pub center: Vec<Float>,
}
impl CostFunction for Sphere {
    fn evaluate(&self, x: &[Float]) -> Result<Float, Infallible> {
        Ok(x.iter()
            .zip(self.center.iter())
            .map(|(xi, ci)| (xi - ci).powi(2))
            .sum())
    }
}
