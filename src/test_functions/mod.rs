/// Module containing the Rosenbrock test function.
pub mod rosenbrock;
pub use rosenbrock::Rosenbrock;

/// Module containing a shifted sphere.
pub mod sphere;
pub use sphere::Sphere;

/// Module containing the crossed-parabolas test function.
pub mod crossed_parabolas;
pub use crossed_parabolas::CrossedParabolas;
