pub mod feedback;
pub mod figure;
pub mod game_events;
pub mod game_state;
pub mod letters;
pub mod word_bank;

// Re-export main components
pub use feedback::*;
pub use figure::*;
pub use game_events::*;
pub use game_state::*;
pub use letters::*;
pub use word_bank::*;
