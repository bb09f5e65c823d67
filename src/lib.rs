pub mod constants;
pub mod error;
pub mod math;
pub mod operators;
pub mod steering;
pub mod types;

pub use error::VectorError;
pub use types::{Operand, Vector2D};
