use std::convert::Infallible;

use crate::traits::CostFunction;
use crate::Float;

/// The distance from the intersection of two crossed parabolas.
///
/// ```math
/// f(x, y) = \sqrt{\left(b^2 - a - x^2 + y\right)^2 + \left(a^2 - b - y^2 + x\right)^2}
/// ```
///
/// Both residuals vanish at $`(x, y) = (b, a)`$, so $`f(b, a) = 0`$ is a global minimum (the
/// parabolas may cross elsewhere too). The square root makes the function non-smooth at every
/// crossing. Any coordinates past the first two are ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrossedParabolas {
    /// The second coordinate of the minimum.
    pub a: Float,
    /// The first coordinate of the minimum.
    pub b: Float,
}
impl Default for CrossedParabolas {
    fn default() -> Self {
        Self {
            a: -1.23456,
            b: 6.54321,
        }
    }
}
impl CostFunction for CrossedParabolas {
    fn evaluate(&self, x: &[Float]) -> Result<Float, Infallible> {
        let (a, b) = (self.a, self.b);
        #[allow(clippy::suboptimal_flops)]
        let v = b * b - a - (x[0] * x[0] - x[1]);
        #[allow(clippy::suboptimal_flops)]
        let w = a * a - b - (x[1] * x[1] - x[0]);
        Ok((v * v + w * w).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_crossed_parabolas() {
        let f = CrossedParabolas::default();
        assert!(f.evaluate(&[1.0, 1.0]).unwrap() > 0.0);
        assert_relative_eq!(f.evaluate(&[f.b, f.a]).unwrap(), 0.0, epsilon = 1e-12);
        let g = CrossedParabolas { a: 0.0, b: 0.0 };
        // residuals -5 and -13
        assert_relative_eq!(g.evaluate(&[3.0, 4.0]).unwrap(), (194.0 as Float).sqrt());
    }
}
