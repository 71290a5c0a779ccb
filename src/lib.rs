//! Gobang (five-in-a-row) game engine with undo/redo
//!
//! A two-player Gomoku implementation on a fixed 15x15 board:
//! - Standard 5-in-a-row win condition, checked along four axes
//!   from the stone just placed
//! - Full regret ("undo") and undo-regret ("redo") move history
//! - A render-command stream decoupling game logic from drawing
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board representation with a flat cell array
//! - [`rules`]: Win detection along the four scan axes
//! - [`game`]: The [`GameSession`] move engine (place/undo/redo/reset)
//! - [`render`]: Render commands and the adapter trait the UI implements
//! - [`ui`]: eframe/egui application with two interchangeable board views
//!
//! # Quick Start
//!
//! ```
//! use gobang::{GameSession, Pos, Stone};
//!
//! let mut session = GameSession::new();
//!
//! // Black always moves first
//! assert_eq!(session.next_mover(), Stone::Black);
//! assert!(session.place(Pos::new(7, 7)));
//! assert_eq!(session.next_mover(), Stone::White);
//!
//! // Regret the move, then restore it
//! assert!(session.undo());
//! assert!(session.redo());
//! ```
//!
//! # Turn tracking
//!
//! Turn ownership is history-driven: `undo` hands the turn back to the
//! mover of the retracted record and `redo` advances past it again. This
//! is sound because successful placements alternate strictly between the
//! two colors.

pub mod board;
pub mod game;
pub mod render;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{BoardError, Grid, Pos, Stone, BOARD_SIZE};
pub use game::{GameSession, MoveRecord};
pub use render::{RenderAdapter, RenderCommand};
