//! Render commands and the adapter interface
//!
//! The move engine never draws anything itself. Every state change that
//! has a visual consequence is emitted as a [`RenderCommand`]; the UI
//! drains the queue each frame and feeds the commands to whichever
//! [`RenderAdapter`] is active. Adapters only consume commands and never
//! mutate game state.

use crate::board::{Pos, Stone};

/// Grid cell size in pixels
pub const CELL_SIZE: f32 = 40.0;

/// A drawing instruction emitted by [`crate::GameSession`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderCommand {
    /// Render a stone of `color` at the grid cell
    DrawStone { pos: Pos, color: Stone },
    /// Erase the stone at the grid cell (board truth already updated)
    RemoveStone { pos: Pos },
    /// Erase all stones (reset)
    ClearAll,
    /// One-time board-line rendering at session start
    DrawGrid { rows: usize, cell_size: f32 },
}

/// Capability interface every board renderer implements.
///
/// Implementations retain whatever display state they need; the provided
/// [`apply`](RenderAdapter::apply) dispatcher is how the UI feeds drained
/// commands through.
pub trait RenderAdapter {
    fn draw_stone(&mut self, pos: Pos, color: Stone);
    fn remove_stone(&mut self, pos: Pos);
    fn clear_all(&mut self);
    fn draw_grid(&mut self, rows: usize, cell_size: f32);

    fn apply(&mut self, cmd: &RenderCommand) {
        match *cmd {
            RenderCommand::DrawStone { pos, color } => self.draw_stone(pos, color),
            RenderCommand::RemoveStone { pos } => self.remove_stone(pos),
            RenderCommand::ClearAll => self.clear_all(),
            RenderCommand::DrawGrid { rows, cell_size } => self.draw_grid(rows, cell_size),
        }
    }
}
