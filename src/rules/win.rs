//! Win condition checking
//!
//! Five in a row wins, checked from the stone just placed along four axes:
//! horizontal, vertical, diagonal "\" and diagonal "/".
//!
//! The per-axis scan is a one-sided fallback count kept verbatim from the
//! legacy rule set, not a contiguous-run count. For each distance
//! `i = 1..=4` it probes the axis's primary side; only when that probe
//! misses (wrong color or off the board) does it probe the mirrored offset
//! at the same distance, and a miss on both sides resets the running
//! count. The asymmetry is observable: a stone placed into the middle of a
//! genuine five can go undetected, while a detached stone sitting at a
//! fallback distance can complete a "run". Replacing this with a symmetric
//! two-sided count would change win outcomes in mixed configurations, so
//! the scan order must not be "fixed".

use crate::board::{Grid, Pos, Stone};

/// Stones needed in a row to win (the placed stone plus 4 neighbors)
pub const WIN_LENGTH: usize = 5;

/// Offsets probed per axis: the placed stone itself is not re-counted
const SCAN_DEPTH: i32 = WIN_LENGTH as i32 - 1;

#[inline]
fn matches(grid: &Grid, row: i32, col: i32, color: Stone) -> bool {
    Pos::is_valid(row, col) && grid.stone_at(Pos::new(row as u8, col as u8)) == color
}

/// Horizontal axis (row fixed). Primary side: decreasing column.
pub fn horizontal(grid: &Grid, pos: Pos, color: Stone) -> bool {
    let (row, col) = (pos.row as i32, pos.col as i32);
    let mut count = 0;

    for i in 1..=SCAN_DEPTH {
        if matches(grid, row, col - i, color) {
            count += 1;
        } else if matches(grid, row, col + i, color) {
            count += 1;
        } else {
            count = 0;
        }
    }
    count >= SCAN_DEPTH
}

/// Vertical axis (column fixed). Primary side: decreasing row.
pub fn vertical(grid: &Grid, pos: Pos, color: Stone) -> bool {
    let (row, col) = (pos.row as i32, pos.col as i32);
    let mut count = 0;

    for i in 1..=SCAN_DEPTH {
        if matches(grid, row - i, col, color) {
            count += 1;
        } else if matches(grid, row + i, col, color) {
            count += 1;
        } else {
            count = 0;
        }
    }
    count >= SCAN_DEPTH
}

/// Diagonal "\" axis (row and column increase together).
/// Primary side: both increasing.
pub fn down_slant(grid: &Grid, pos: Pos, color: Stone) -> bool {
    let (row, col) = (pos.row as i32, pos.col as i32);
    let mut count = 0;

    for i in 1..=SCAN_DEPTH {
        if matches(grid, row + i, col + i, color) {
            count += 1;
        } else if matches(grid, row - i, col - i, color) {
            count += 1;
        } else {
            count = 0;
        }
    }
    count >= SCAN_DEPTH
}

/// Diagonal "/" axis (row increases while column decreases).
/// Primary side: row increasing.
pub fn up_slant(grid: &Grid, pos: Pos, color: Stone) -> bool {
    let (row, col) = (pos.row as i32, pos.col as i32);
    let mut count = 0;

    for i in 1..=SCAN_DEPTH {
        if matches(grid, row + i, col - i, color) {
            count += 1;
        } else if matches(grid, row - i, col + i, color) {
            count += 1;
        } else {
            count = 0;
        }
    }
    count >= SCAN_DEPTH
}

/// Check whether the stone just placed at `pos` completes a winning run
/// along any of the four axes.
pub fn check_win(grid: &Grid, pos: Pos, color: Stone) -> bool {
    horizontal(grid, pos, color)
        || vertical(grid, pos, color)
        || down_slant(grid, pos, color)
        || up_slant(grid, pos, color)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(stones: &[(u8, u8)], color: Stone) -> Grid {
        let mut grid = Grid::new();
        for &(row, col) in stones {
            grid.place(Pos::new(row, col), color);
        }
        grid
    }

    #[test]
    fn test_horizontal_win() {
        let mut grid = seeded(&[(7, 4), (7, 5), (7, 6), (7, 7)], Stone::Black);
        let placed = Pos::new(7, 8);
        grid.place(placed, Stone::Black);
        assert!(horizontal(&grid, placed, Stone::Black));
        assert!(check_win(&grid, placed, Stone::Black));
        assert!(!check_win(&grid, placed, Stone::White));
    }

    #[test]
    fn test_vertical_win() {
        let mut grid = seeded(&[(4, 7), (5, 7), (6, 7), (7, 7)], Stone::White);
        let placed = Pos::new(8, 7);
        grid.place(placed, Stone::White);
        assert!(vertical(&grid, placed, Stone::White));
        assert!(check_win(&grid, placed, Stone::White));
    }

    #[test]
    fn test_down_slant_win() {
        let mut grid = seeded(&[(3, 3), (4, 4), (5, 5), (6, 6)], Stone::Black);
        let placed = Pos::new(7, 7);
        grid.place(placed, Stone::Black);
        assert!(down_slant(&grid, placed, Stone::Black));
        assert!(check_win(&grid, placed, Stone::Black));
    }

    #[test]
    fn test_up_slant_win() {
        let mut grid = seeded(&[(8, 6), (9, 5), (10, 4), (11, 3)], Stone::Black);
        let placed = Pos::new(7, 7);
        grid.place(placed, Stone::Black);
        assert!(up_slant(&grid, placed, Stone::Black));
        assert!(check_win(&grid, placed, Stone::Black));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut grid = seeded(&[(7, 5), (7, 6), (7, 7)], Stone::Black);
        let placed = Pos::new(7, 8);
        grid.place(placed, Stone::Black);
        assert!(!check_win(&grid, placed, Stone::Black));
    }

    #[test]
    fn test_opponent_stone_blocks_run() {
        let mut grid = seeded(&[(7, 4), (7, 5), (7, 7)], Stone::Black);
        grid.place(Pos::new(7, 6), Stone::White);
        let placed = Pos::new(7, 8);
        grid.place(placed, Stone::Black);
        assert!(!check_win(&grid, placed, Stone::Black));
    }

    #[test]
    fn test_win_at_board_edge_via_fallback() {
        // Primary side is off the board for every i, so each probe falls
        // back to the increasing-column side.
        let mut grid = seeded(&[(0, 1), (0, 2), (0, 3), (0, 4)], Stone::Black);
        let placed = Pos::new(0, 0);
        grid.place(placed, Stone::Black);
        assert!(horizontal(&grid, placed, Stone::Black));
    }

    #[test]
    fn test_center_fill_missed_by_scan() {
        // Cols 4..=8 of row 7 form a real five once (7,6) is filled, but
        // the one-sided fallback scan sees col-1, col-2, then misses both
        // sides at distance 3 and resets. Kept behavior: no win reported.
        let mut grid = seeded(&[(7, 4), (7, 5), (7, 7), (7, 8)], Stone::Black);
        let placed = Pos::new(7, 6);
        grid.place(placed, Stone::Black);
        assert!(!horizontal(&grid, placed, Stone::Black));
        assert!(!check_win(&grid, placed, Stone::Black));
    }

    #[test]
    fn test_fallback_counts_detached_stone() {
        // Only four stones are contiguous (cols 4..=7), but the miss at
        // col 3 falls back to col 11 at distance 4 and the count still
        // reaches four. Kept behavior: win reported.
        let mut grid = seeded(&[(7, 4), (7, 5), (7, 6), (7, 11)], Stone::Black);
        let placed = Pos::new(7, 7);
        grid.place(placed, Stone::Black);
        assert!(horizontal(&grid, placed, Stone::Black));
    }

    #[test]
    fn test_empty_board_no_win() {
        let grid = Grid::new();
        assert!(!check_win(&grid, Pos::new(7, 7), Stone::Black));
    }

    #[test]
    fn test_down_slant_win_at_corner() {
        let mut grid = seeded(&[(10, 10), (11, 11), (12, 12), (13, 13)], Stone::White);
        let placed = Pos::new(14, 14);
        grid.place(placed, Stone::White);
        assert!(down_slant(&grid, placed, Stone::White));
    }
}
