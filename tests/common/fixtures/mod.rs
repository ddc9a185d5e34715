mod backends;
mod extensions;
mod vehicles;

// Re-export test fixtures
pub use backends::*;
pub use extensions::*;
pub use vehicles::*;
