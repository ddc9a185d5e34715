#![allow(dead_code)]

mod assertions;
mod fixtures;
mod helpers;

// Re-export
pub use assertions::{assert_finite, assert_vector_eq};
pub use fixtures::*;
pub use helpers::*;
