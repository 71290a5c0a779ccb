//! Game rules for Gobang
//!
//! The only rule beyond basic placement is the win condition: five stones
//! of one color in a row along any of the four scan axes.

pub mod win;

// Re-exports for convenient access
pub use win::{check_win, down_slant, horizontal, up_slant, vertical, WIN_LENGTH};
