use std::sync::Arc;

use dyn_clone::DynClone;
use parking_lot::{Mutex, RwLock};

use crate::core::Simplex;

/// A trait for observers which are shown the working [`Simplex`] during a search.
///
/// [`Observer::observe`] is called once with `iteration == 0` after the initial simplex has been
/// projected and evaluated, and then once after every refinement iteration, before the
/// convergence test. Observers only get read access to the simplex, so attaching one never
/// changes the outcome of a search.
///
/// To read an observer's state after a search, share it through an [`Arc`] wrapped around a
/// [`RwLock`] or [`Mutex`], both of which also implement [`Observer`].
pub trait Observer: DynClone {
    /// An observation method which is called on each iteration of a search.
    fn observe(&mut self, iteration: usize, simplex: &Simplex);
}
dyn_clone::clone_trait_object!(Observer);

impl<O: Observer> Observer for Arc<RwLock<O>> {
    fn observe(&mut self, iteration: usize, simplex: &Simplex) {
        self.write().observe(iteration, simplex)
    }
}
impl<O: Observer> Observer for Arc<Mutex<O>> {
    fn observe(&mut self, iteration: usize, simplex: &Simplex) {
        self.lock().observe(iteration, simplex)
    }
}
