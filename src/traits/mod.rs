/// Module containing the [`CostFunction`] trait.
pub mod cost_function;
/// Module containing the [`Observer`] trait.
pub mod observer;
/// Module containing the [`Projector`] trait.
pub mod projector;

pub use cost_function::CostFunction;
pub use observer::Observer;
pub use projector::Projector;
