//! Move engine for Gobang

pub mod session;


// Re-exports
pub use session::{GameSession, MoveRecord};
