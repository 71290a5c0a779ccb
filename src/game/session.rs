//! Game session: placement, regret, undo-regret and turn tracking

use log::{debug, info};

use crate::board::{Grid, Pos, Stone, BOARD_SIZE};
use crate::render::{RenderCommand, CELL_SIZE};
use crate::rules;

/// Record of one successful placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub pos: Pos,
    pub mover: Stone,
}

/// One independent game of Gobang.
///
/// Owns the grid, both history stacks, the turn flag and the game-over
/// latch; nothing else writes to them. All operations are synchronous and
/// run to completion, so a caller on multiple threads must serialize
/// access behind a single queue or mutex.
///
/// Operations that are declined for expected reasons (occupied cell,
/// empty history, game already over) return `false` and change nothing.
///
/// Visual side effects are queued as [`RenderCommand`]s; drain them with
/// [`take_commands`](Self::take_commands).
pub struct GameSession {
    grid: Grid,
    /// Moves currently on the board, most recent last
    moves: Vec<MoveRecord>,
    /// Regretted moves restorable by redo, most recent last
    undone: Vec<MoveRecord>,
    next_mover: Stone,
    game_over: bool,
    pending: Vec<RenderCommand>,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            moves: Vec::new(),
            undone: Vec::new(),
            next_mover: Stone::Black,
            game_over: false,
            pending: vec![RenderCommand::DrawGrid {
                rows: BOARD_SIZE,
                cell_size: CELL_SIZE,
            }],
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Whose turn is next. Black moves first in a fresh game.
    pub fn next_mover(&self) -> Stone {
        self.next_mover
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    pub fn undone(&self) -> &[MoveRecord] {
        &self.undone
    }

    pub fn can_undo(&self) -> bool {
        !self.moves.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Position of the most recent stone still on the board
    pub fn last_move(&self) -> Option<Pos> {
        self.moves.last().map(|rec| rec.pos)
    }

    /// Drain the queued render commands
    pub fn take_commands(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.pending)
    }

    /// Place a stone for the current mover.
    ///
    /// Declined when the game is over or the cell is occupied. A new
    /// placement invalidates the redo stack. On a winning placement the
    /// game-over latch is set and the turn flag stays with the winner;
    /// otherwise the turn flips.
    pub fn place(&mut self, pos: Pos) -> bool {
        if self.game_over {
            debug!("place at ({}, {}) declined: game over", pos.row, pos.col);
            return false;
        }
        if !self.grid.is_empty(pos) {
            debug!("place at ({}, {}) declined: occupied", pos.row, pos.col);
            return false;
        }

        let mover = self.next_mover;
        self.grid.place(pos, mover);
        self.moves.push(MoveRecord { pos, mover });
        self.undone.clear();
        self.pending.push(RenderCommand::DrawStone { pos, color: mover });

        if rules::check_win(&self.grid, pos, mover) {
            self.game_over = true;
            info!("{:?} wins at ({}, {})", mover, pos.row, pos.col);
        } else {
            self.next_mover = mover.opponent();
        }
        true
    }

    /// Regret the most recent move.
    ///
    /// The retracted record moves onto the redo stack and the turn goes
    /// back to its mover. The game-over latch is left as is.
    pub fn undo(&mut self) -> bool {
        let Some(rec) = self.moves.pop() else {
            debug!("undo declined: no moves");
            return false;
        };
        self.grid.place(rec.pos, Stone::Empty);
        self.pending.push(RenderCommand::RemoveStone { pos: rec.pos });
        self.next_mover = rec.mover;
        self.undone.push(rec);
        true
    }

    /// Restore the most recently regretted move.
    ///
    /// The record returns to the move stack and the turn advances past
    /// its mover again.
    pub fn redo(&mut self) -> bool {
        let Some(rec) = self.undone.pop() else {
            debug!("redo declined: nothing regretted");
            return false;
        };
        self.grid.place(rec.pos, rec.mover);
        self.pending.push(RenderCommand::DrawStone {
            pos: rec.pos,
            color: rec.mover,
        });
        self.next_mover = rec.mover.opponent();
        self.moves.push(rec);
        true
    }

    /// Start a fresh game: empty board, empty histories, Black to move.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.moves.clear();
        self.undone.clear();
        self.next_mover = Stone::Black;
        self.game_over = false;
        self.pending.push(RenderCommand::ClearAll);
        info!("game reset");
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
