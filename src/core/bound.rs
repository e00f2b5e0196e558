use crate::{traits::Projector, Float};
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use std::{
    fmt::Display,
    ops::{Deref, DerefMut},
};

/// An enum that describes a bound/limit on a single parameter.
///
/// A set of [`Bound`]s (see [`Bounds`]) is the most common [`Projector`]: every coordinate of a
/// candidate point is clamped into its bound before the point is evaluated.
#[derive(Default, Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Bound {
    #[default]
    /// `(-inf, +inf)`
    NoBound,
    /// `(min, +inf)`
    LowerBound(Float),
    /// `(-inf, max)`
    UpperBound(Float),
    /// `(min, max)`
    LowerAndUpperBound(Float, Float),
}
impl Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lower(), self.upper())
    }
}
impl From<(Float, Float)> for Bound {
    /// Infinite ends map onto the open variants.
    ///
    /// # Panics
    ///
    /// This method will panic if the lower end is not strictly less than the upper end.
    fn from(value: (Float, Float)) -> Self {
        assert!(value.0 < value.1);
        match (value.0.is_finite(), value.1.is_finite()) {
            (true, true) => Self::LowerAndUpperBound(value.0, value.1),
            (true, false) => Self::LowerBound(value.0),
            (false, true) => Self::UpperBound(value.1),
            (false, false) => Self::NoBound,
        }
    }
}
impl From<(Option<Float>, Option<Float>)> for Bound {
    fn from(value: (Option<Float>, Option<Float>)) -> Self {
        match (value.0, value.1) {
            (Some(lb), Some(ub)) => Self::from((lb, ub)),
            (Some(lb), None) => Self::LowerBound(lb),
            (None, Some(ub)) => Self::UpperBound(ub),
            (None, None) => Self::NoBound,
        }
    }
}

impl Bound {
    /// Get a value in the uniform distribution between `lower` and `upper`.
    ///
    /// The result is not finite if either side of the bound is open.
    #[cfg(not(feature = "f32"))]
    pub fn get_uniform(&self, rng: &mut Rng) -> Float {
        (self.upper() - self.lower()).mul_add(rng.f64(), self.lower())
    }
    /// Get a value in the uniform distribution between `lower` and `upper`.
    ///
    /// The result is not finite if either side of the bound is open.
    #[cfg(feature = "f32")]
    pub fn get_uniform(&self, rng: &mut Rng) -> Float {
        (self.upper() - self.lower()).mul_add(rng.f32(), self.lower())
    }
    /// Checks whether the given `value` is compatible with the bound.
    pub fn contains(&self, value: Float) -> bool {
        match self {
            Self::NoBound => true,
            Self::LowerBound(lb) => value >= *lb,
            Self::UpperBound(ub) => value <= *ub,
            Self::LowerAndUpperBound(lb, ub) => value >= *lb && value <= *ub,
        }
    }
    /// Returns the closest value to `value` which lies inside the bound.
    ///
    /// `NaN` passes through unchanged.
    pub fn clamp(&self, value: Float) -> Float {
        let (lb, ub) = (self.lower(), self.upper());
        if value < lb {
            lb
        } else if value > ub {
            ub
        } else {
            value
        }
    }
    /// Returns the lower bound or `-inf` if there is none.
    pub const fn lower(&self) -> Float {
        match self {
            Self::NoBound => Float::NEG_INFINITY,
            Self::LowerBound(lb) => *lb,
            Self::UpperBound(_) => Float::NEG_INFINITY,
            Self::LowerAndUpperBound(lb, _) => *lb,
        }
    }
    /// Returns the upper bound or `+inf` if there is none.
    pub const fn upper(&self) -> Float {
        match self {
            Self::NoBound => Float::INFINITY,
            Self::LowerBound(_) => Float::INFINITY,
            Self::UpperBound(ub) => *ub,
            Self::LowerAndUpperBound(_, ub) => *ub,
        }
    }
    /// Checks if the given value is exactly equal to one of the bounds (which is where
    /// [`Bound::clamp`] leaves any value that was outside).
    pub fn at_bound(&self, value: Float) -> bool {
        match self {
            Self::NoBound => false,
            Self::LowerBound(lb) => value == *lb,
            Self::UpperBound(ub) => value == *ub,
            Self::LowerAndUpperBound(lb, ub) => value == *lb || value == *ub,
        }
    }
}

/// A struct that contains a list of [`Bound`]s, one per parameter.
///
/// Used as a [`Projector`], it clamps every coordinate of a point into the matching bound.
/// Coordinates past the end of the list are left untouched.
#[derive(Default, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Bounds(Vec<Bound>);

impl Bounds {
    /// Returns the inner Vector of bounds.
    pub fn into_inner(self) -> Vec<Bound> {
        self.0
    }
    /// Checks whether every coordinate of `x` lies inside its bound.
    pub fn contains(&self, x: &[Float]) -> bool {
        x.iter().zip(self.iter()).all(|(v, b)| b.contains(*v))
    }
    /// Draws a point uniformly from the box described by the bounds.
    ///
    /// Coordinates with an open bound are not finite.
    pub fn random_point(&self, rng: &mut Rng) -> Vec<Float> {
        self.iter().map(|b| b.get_uniform(rng)).collect()
    }
}

impl Projector for Bounds {
    fn project(&self, x: &mut [Float]) {
        for (v, b) in x.iter_mut().zip(self.iter()) {
            *v = b.clamp(*v);
        }
    }
}

impl From<Vec<Bound>> for Bounds {
    fn from(value: Vec<Bound>) -> Self {
        Self(value)
    }
}

impl From<Vec<(Float, Float)>> for Bounds {
    fn from(value: Vec<(Float, Float)>) -> Self {
        Self(value.into_iter().map(Bound::from).collect())
    }
}

impl Deref for Bounds {
    type Target = Vec<Bound>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Bounds {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
