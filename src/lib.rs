//! `amoeba` provides a derivative-free minimizer for functions $`f(\mathbb{R}^n) \to \mathbb{R}`$
//! based on the Nelder-Mead simplex method. The objective is any type implementing
//! [`CostFunction`](`traits::CostFunction`) (plain closures work too), and every candidate point can
//! optionally be forced into a feasible region by a [`Projector`](`traits::Projector`) before it is
//! evaluated.
//!
//! An optimizer is built once for a fixed dimension. All of the storage it needs (the simplex, the
//! scratch points used by each step, and the result record) is allocated up front, so the same
//! instance can run any number of searches with different starting points, tolerances, and
//! simplex scales without allocating again.
//!
//! # Table of Contents
//! - [Quick Start](#quick-start)
//! - [Projections](#projections)
//! - [Diagnostics](#diagnostics)
//!
//! # Quick Start
//!
//! ```rust
//! use amoeba::prelude::*;
//! use amoeba::test_functions::Rosenbrock;
//!
//! fn main() -> Result<(), NelderMeadError> {
//!     let problem = Rosenbrock { n: 2 };
//!     let mut nm = NelderMead::new(2, &problem, None)?;
//!     nm.set_max_iterations(10_000);
//!     let results = nm.search(&[-1.2, 1.0], 1e-10, 1.0)?;
//!     assert!(results.converged);
//!     assert!(results.min < 1e-4);
//!     println!("{}", results);
//!     Ok(())
//! }
//! ```
//!
//! # Projections
//!
//! Nelder-Mead is an unconstrained method. A [`Projector`](`traits::Projector`) maps every
//! candidate vertex onto the feasible set (in place) before the objective sees it. The simplest
//! projector is a set of [`Bounds`](`core::Bounds`), which clamps each coordinate into its
//! [`Bound`](`core::Bound`):
//!
//! ```rust
//! use amoeba::prelude::*;
//!
//! let f = |x: &[Float]| (x[0] - 3.0).powi(2) + (x[1] + 1.0).powi(2);
//! let bounds = Bounds::from(vec![(-1.0, 1.0), (-1.0, 1.0)]);
//! let mut nm = NelderMead::new(2, &f, Some(&bounds)).unwrap();
//! let results = nm.search(&[0.0, 0.0], 1e-12, 0.5).unwrap();
//! assert!(bounds.contains(&results.min_values));
//! ```
//!
//! # Diagnostics
//!
//! Per-iteration tracing is a runtime choice. Attach an [`Observer`](`traits::Observer`) such as
//! [`DebugObserver`](`observers::DebugObserver`) (prints every vertex at every iteration) or
//! [`TrackingObserver`](`observers::TrackingObserver`) (records the simplex history) with
//! [`NelderMead::with_observer`](`algorithms::NelderMead::with_observer`). Observers only read the
//! simplex; they never change the outcome of a search.
#![warn(
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::doc_markdown,
    clippy::doc_link_with_quotes,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::perf,
    clippy::style,
    missing_docs
)]

/// Module containing the Nelder-Mead search engine.
pub mod algorithms;
/// Module containing the data types shared by the search engine (vertices, simplices, bounds,
/// results, and errors).
pub mod core;
/// Module containing [`Observer`](`traits::Observer`) implementations.
pub mod observers;
/// Module containing standard functions for testing algorithms.
pub mod test_functions;
/// Module containing the traits at the seams of the search engine.
pub mod traits;

pub use nalgebra::DVector;

/// The floating-point type used throughout the crate (`f64` unless the `f32` feature is enabled).
#[cfg(not(feature = "f32"))]
pub type Float = f64;

/// The floating-point type used throughout the crate (`f64` unless the `f32` feature is enabled).
#[cfg(feature = "f32")]
pub type Float = f32;

/// Prelude module containing everything someone should need to use this crate for non-development
/// purposes.
pub mod prelude {
    pub use crate::{
        algorithms::{NelderMead, NelderMeadConfig},
        core::{Bound, Bounds, NelderMeadError, NelderMeadResults},
        traits::{CostFunction, Observer, Projector},
        Float,
    };
}
