//! Grid structure holding cell occupancy

use super::{BoardError, Pos, Stone, TOTAL_CELLS};

/// Fixed 15x15 occupancy map.
///
/// Every one of the 225 coordinates always holds a value; a fresh or reset
/// grid is all [`Stone::Empty`]. Stones are stored in a flat array indexed
/// by [`Pos::to_index`].
#[derive(Debug, Clone)]
pub struct Grid {
    cells: [Stone; TOTAL_CELLS],
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: [Stone::Empty; TOTAL_CELLS],
        }
    }

    /// Clear every cell back to Empty
    pub fn reset(&mut self) {
        self.cells = [Stone::Empty; TOTAL_CELLS];
    }

    /// Get stone at position
    #[inline]
    pub fn stone_at(&self, pos: Pos) -> Stone {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.stone_at(pos) == Stone::Empty
    }

    /// Overwrite the cell at position.
    /// Callers must check emptiness first when placing a game move.
    #[inline]
    pub fn place(&mut self, pos: Pos, stone: Stone) {
        self.cells[pos.to_index()] = stone;
    }

    /// Get stone at raw coordinates, range-checked
    #[inline]
    pub fn get(&self, row: i32, col: i32) -> Result<Stone, BoardError> {
        if Pos::is_valid(row, col) {
            Ok(self.stone_at(Pos::new(row as u8, col as u8)))
        } else {
            Err(BoardError::OutOfRange { row, col })
        }
    }

    /// Set stone at raw coordinates, range-checked
    #[inline]
    pub fn set(&mut self, row: i32, col: i32, stone: Stone) -> Result<(), BoardError> {
        if Pos::is_valid(row, col) {
            self.place(Pos::new(row as u8, col as u8), stone);
            Ok(())
        } else {
            Err(BoardError::OutOfRange { row, col })
        }
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s != Stone::Empty).count()
    }

    /// Check if board is empty
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
