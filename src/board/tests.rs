use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(7, 7);
    assert_eq!(pos.row, 7);
    assert_eq!(pos.col, 7);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(pos.to_index(), 112);

    let pos2 = Pos::from_index(112);
    assert_eq!(pos2.row, 7);
    assert_eq!(pos2.col, 7);
}

#[test]
fn test_pos_index_injective() {
    // Every coordinate maps to a distinct index and back to itself
    let mut seen = [false; TOTAL_CELLS];
    for row in 0..BOARD_SIZE as u8 {
        for col in 0..BOARD_SIZE as u8 {
            let pos = Pos::new(row, col);
            let idx = pos.to_index();
            assert!(!seen[idx], "index {} hit twice", idx);
            seen[idx] = true;
            assert_eq!(Pos::from_index(idx), pos);
        }
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(0, 14).to_index(), 14);
    assert_eq!(Pos::new(14, 0).to_index(), 210);
    assert_eq!(Pos::new(14, 14).to_index(), 224);
}

#[test]
fn test_grid_starts_empty() {
    let grid = Grid::new();
    assert!(grid.is_board_empty());
    assert_eq!(grid.stone_count(), 0);
    for idx in 0..TOTAL_CELLS {
        assert_eq!(grid.stone_at(Pos::from_index(idx)), Stone::Empty);
    }
}

#[test]
fn test_grid_place_and_get() {
    let mut grid = Grid::new();
    let pos = Pos::new(3, 11);
    grid.place(pos, Stone::Black);
    assert_eq!(grid.stone_at(pos), Stone::Black);
    assert!(!grid.is_empty(pos));
    assert_eq!(grid.stone_count(), 1);

    // Overwrite is unconditional
    grid.place(pos, Stone::White);
    assert_eq!(grid.stone_at(pos), Stone::White);
    assert_eq!(grid.stone_count(), 1);
}

#[test]
fn test_grid_get_out_of_range() {
    let grid = Grid::new();
    assert_eq!(grid.get(7, 7), Ok(Stone::Empty));
    assert_eq!(
        grid.get(-1, 7),
        Err(BoardError::OutOfRange { row: -1, col: 7 })
    );
    assert_eq!(
        grid.get(7, 15),
        Err(BoardError::OutOfRange { row: 7, col: 15 })
    );
}

#[test]
fn test_grid_set_out_of_range() {
    let mut grid = Grid::new();
    assert!(grid.set(0, 0, Stone::Black).is_ok());
    assert_eq!(grid.get(0, 0), Ok(Stone::Black));
    assert_eq!(
        grid.set(15, 0, Stone::Black),
        Err(BoardError::OutOfRange { row: 15, col: 0 })
    );
    // Failed set leaves the board untouched
    assert_eq!(grid.stone_count(), 1);
}

#[test]
fn test_grid_reset() {
    let mut grid = Grid::new();
    grid.place(Pos::new(0, 0), Stone::Black);
    grid.place(Pos::new(14, 14), Stone::White);
    grid.reset();
    assert!(grid.is_board_empty());
}
