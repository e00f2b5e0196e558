/// [`Bound`] type for clamping variables to a range.
pub mod bound;
/// [`NelderMeadError`] type returned by a failed search.
pub mod error;
/// [`Simplex`] type holding the working vertices of a search.
pub mod simplex;
/// [`NelderMeadResults`] type holding the outcome of the most recent search.
pub mod summary;
/// [`Vertex`] type for a point in parameter space together with its cached value.
pub mod vertex;

pub use bound::{Bound, Bounds};
pub use error::NelderMeadError;
pub use simplex::Simplex;
pub use summary::NelderMeadResults;
pub use vertex::Vertex;
