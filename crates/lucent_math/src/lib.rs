// Re-export glam for convenience
pub use glam::*;

mod quadratic;
mod ray;
pub mod scalar;

pub use quadratic::{solve_quadratic, Roots};
pub use ray::Ray;
