use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::{core::Simplex, traits::Observer, Float};

/// A debugging observer which prints out the iteration number and every vertex of the simplex at
/// each iteration of a search.
///
/// # Usage:
///
/// ```rust
/// use amoeba::prelude::*;
/// use amoeba::observers::DebugObserver;
/// use amoeba::test_functions::Rosenbrock;
///
/// let problem = Rosenbrock { n: 2 };
/// let mut nm = NelderMead::new(2, &problem, None).unwrap().with_observer(DebugObserver);
/// let result = nm.search(&[2.3, 3.4], 1e-8, 1.0).unwrap();
/// // ^ This will print debug messages for each iteration
/// assert!(result.converged);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DebugObserver;
impl DebugObserver {
    /// Finalize the [`Observer`] by wrapping it in an [`Arc`] and [`RwLock`]
    pub fn build() -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(Self))
    }
}
impl Observer for DebugObserver {
    fn observe(&mut self, iteration: usize, simplex: &Simplex) {
        if iteration == 0 {
            println!("Initial simplex");
        } else {
            println!("Iteration: {iteration}");
        }
        for (i, vertex) in simplex.vertices().iter().enumerate() {
            println!("  v[{i}] {vertex}");
        }
    }
}

/// An observer which records a copy of the simplex at every iteration.
///
/// The history is [`Serialize`], so it can be written out (for instance with `serde_pickle`) and
/// plotted after the search.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TrackingObserver {
    /// The iteration numbers at which a simplex was recorded.
    pub iterations: Vec<usize>,
    /// The recorded simplices.
    pub simplices: Vec<Simplex>,
}
impl TrackingObserver {
    /// Finalize the [`Observer`] by wrapping it in an [`Arc`] and [`RwLock`]
    pub fn build() -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(Self::default()))
    }
    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.iterations.clear();
        self.simplices.clear();
    }
    /// The lowest vertex value seen at each recorded iteration.
    pub fn best_values(&self) -> Vec<Float> {
        self.simplices
            .iter()
            .map(|simplex| {
                simplex
                    .vertices()
                    .iter()
                    .map(|vertex| vertex.fx)
                    .fold(Float::INFINITY, Float::min)
            })
            .collect()
    }
}
impl Observer for TrackingObserver {
    fn observe(&mut self, iteration: usize, simplex: &Simplex) {
        self.iterations.push(iteration);
        self.simplices.push(simplex.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluated_simplex() -> Simplex {
        let mut simplex = Simplex::new(2);
        simplex.construct(&[0.0, 0.0], 1.0);
        let mut evals = 0;
        simplex
            .evaluate_all(&|x: &[Float]| x[0] + 2.0 * x[1], &mut evals)
            .unwrap();
        simplex
    }

    #[test]
    fn test_tracking_observer_records_history() {
        let simplex = evaluated_simplex();
        let mut tracker = TrackingObserver::default();
        tracker.observe(0, &simplex);
        tracker.observe(1, &simplex);
        assert_eq!(tracker.iterations, vec![0, 1]);
        assert_eq!(tracker.simplices.len(), 2);
        assert_eq!(tracker.simplices[1], simplex);
        assert_eq!(tracker.best_values(), vec![0.0, 0.0]);
        tracker.clear();
        assert!(tracker.iterations.is_empty());
        assert!(tracker.simplices.is_empty());
    }

    #[test]
    fn test_shared_observer_sees_observations() {
        let simplex = evaluated_simplex();
        let tracker = TrackingObserver::build();
        let mut handle: Box<dyn Observer> = Box::new(tracker.clone());
        handle.observe(3, &simplex);
        let mut copy = handle.clone();
        copy.observe(4, &simplex);
        assert_eq!(tracker.read().iterations, vec![3, 4]);
    }

    #[test]
    fn test_tracking_observer_pickles() {
        let simplex = evaluated_simplex();
        let mut tracker = TrackingObserver::default();
        tracker.observe(0, &simplex);
        let mut buffer = Vec::new();
        serde_pickle::to_writer(&mut buffer, &tracker, Default::default()).unwrap();
        assert!(!buffer.is_empty());
    }

    #[test]
    fn test_debug_observer_runs() {
        let simplex = evaluated_simplex();
        let mut observer = DebugObserver;
        observer.observe(0, &simplex);
        observer.observe(1, &simplex);
        let shared = DebugObserver::build();
        let mut shared_handle = shared.clone();
        shared_handle.observe(2, &simplex);
    }
}
