use crate::Float;

/// A trait which maps a point onto a feasible region, in place.
///
/// A projector is applied to every candidate vertex before the objective is evaluated there, so
/// the objective never sees an infeasible point. Implementations should move each coordinate to
/// the nearest feasible value and leave feasible points untouched.
///
/// [`Bounds`](`crate::core::Bounds`) is the usual projector. Any closure `Fn(&mut [Float])` is one
/// too:
///
/// ```rust
/// use amoeba::prelude::*;
///
/// let non_negative = |x: &mut [Float]| x.iter_mut().for_each(|xi| *xi = xi.max(0.0));
/// let mut x = [-1.0, 2.0];
/// non_negative.project(&mut x);
/// assert_eq!(x, [0.0, 2.0]);
/// ```
pub trait Projector {
    /// Replace any infeasible coordinates of `x` with the nearest feasible ones.
    fn project(&self, x: &mut [Float]);
}

impl<F> Projector for F
where
    F: Fn(&mut [Float]),
{
    fn project(&self, x: &mut [Float]) {
        self(x)
    }
}
