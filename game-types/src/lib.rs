pub mod errors;
pub mod game;
pub mod selection;

// Re-export all types
pub use errors::*;
pub use game::*;
pub use selection::*;
