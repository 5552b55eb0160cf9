pub mod loader;
pub mod matrix;

pub use loader::*;
pub use matrix::*;
