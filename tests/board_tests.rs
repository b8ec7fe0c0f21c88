//! Board tests - occupancy, bounds and line clearing

use blockfall::core::Board;
use blockfall::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i32) {
    for x in 0..board.width() {
        board.set(Cell::new(x, y), true);
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert!(board.is_empty());
    assert_eq!(board.len(), 0);

    for y in 0..BOARD_HEIGHT {
        for x in 0..BOARD_WIDTH {
            let cell = Cell::new(x, y);
            assert!(board.is_in_bounds(cell), "Cell {} should be in bounds", cell);
            assert!(!board.is_occupied(cell));
        }
    }
}

#[test]
fn test_board_bounds() {
    let board = Board::new();

    // Sides and bottom are enforced
    assert!(!board.is_in_bounds(Cell::new(-1, 0)));
    assert!(!board.is_in_bounds(Cell::new(BOARD_WIDTH, 0)));
    assert!(!board.is_in_bounds(Cell::new(0, BOARD_HEIGHT)));

    // The top is open
    assert!(board.is_in_bounds(Cell::new(0, -1)));
    assert!(board.is_in_bounds(Cell::new(9, -5)));
}

#[test]
fn test_board_set_and_occupied() {
    let mut board = Board::new();

    assert!(board.set(Cell::new(5, 10), true));
    assert!(board.is_occupied(Cell::new(5, 10)));

    assert!(board.set(Cell::new(5, 10), false));
    assert!(!board.is_occupied(Cell::new(5, 10)));

    // Out of bounds cannot be set or occupied
    assert!(!board.set(Cell::new(-1, 0), true));
    assert!(!board.set(Cell::new(0, -1), true));
    assert!(!board.set(Cell::new(0, BOARD_HEIGHT), true));
    assert!(!board.is_occupied(Cell::new(-1, 0)));
}

#[test]
fn test_add_cells_ignores_duplicates() {
    let mut board = Board::new();
    let cells = [Cell::new(3, 5), Cell::new(4, 5), Cell::new(3, 6), Cell::new(4, 6)];

    assert_eq!(board.add_cells(&cells), 0);
    assert_eq!(board.add_cells(&cells[..2]), 0);
    assert_eq!(board.len(), 4);

    let mut resting = board.resting_cells();
    resting.sort();
    let mut expected = cells.to_vec();
    expected.sort();
    assert_eq!(resting, expected);
}

#[test]
fn test_row_full_detection() {
    let mut board = Board::new();
    for x in 0..9 {
        board.set(Cell::new(x, 19), true);
    }
    assert_eq!(board.row_count(19), 9);
    assert!(!board.is_row_full(19));

    board.set(Cell::new(9, 19), true);
    assert!(board.is_row_full(19));
    assert!(!board.is_row_full(20));
    assert!(!board.is_row_full(-1));
}

#[test]
fn test_clear_full_rows_none_full_is_noop() {
    let mut board = Board::new();
    for x in 0..9 {
        board.set(Cell::new(x, 19), true);
    }
    board.set(Cell::new(4, 3), true);
    let before = board.clone();

    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_clear_row_five_compacts_above_only() {
    let mut board = Board::new();
    fill_row(&mut board, 5);
    let above = [Cell::new(0, 0), Cell::new(3, 2), Cell::new(7, 4)];
    let below = [Cell::new(1, 6), Cell::new(8, 19)];
    board.add_cells(&above);
    board.add_cells(&below);

    assert_eq!(board.clear_full_rows(), 1);
    assert_eq!(board.row_count(5), 1); // (7,4) fell into row 5
    assert_eq!(board.len(), above.len() + below.len());

    for cell in above {
        assert!(board.is_occupied(cell.offset(0, 1)), "{} should fall one row", cell);
    }
    for cell in below {
        assert!(board.is_occupied(cell), "{} should stay put", cell);
    }
    assert!(!board.is_occupied(Cell::new(0, 0)));
}

#[test]
fn test_clear_multiple_rows() {
    let mut board = Board::new();
    fill_row(&mut board, 16);
    fill_row(&mut board, 17);
    fill_row(&mut board, 19);
    board.set(Cell::new(2, 18), true);
    board.set(Cell::new(5, 15), true);

    assert_eq!(board.clear_full_rows(), 3);
    assert_eq!(board.len(), 2);
    assert!(board.is_occupied(Cell::new(2, 19)));
    assert!(board.is_occupied(Cell::new(5, 18)));
}

#[test]
fn test_clear_row_bounds() {
    let mut board = Board::new();
    assert!(!board.clear_row(-1));
    assert!(!board.clear_row(BOARD_HEIGHT));

    board.set(Cell::new(0, 0), true);
    assert!(board.clear_row(0));
    assert!(board.is_empty());
}

#[test]
fn test_custom_size() {
    let mut board = Board::with_size(6, 8);
    assert_eq!(board.width(), 6);
    assert_eq!(board.height(), 8);
    assert!(!board.is_in_bounds(Cell::new(6, 0)));
    fill_row(&mut board, 7);
    assert_eq!(board.clear_full_rows(), 1);
    assert!(board.is_empty());
}

#[test]
fn test_clear_empties_board() {
    let mut board = Board::new();
    fill_row(&mut board, 19);
    board.set(Cell::new(4, 2), true);

    board.clear();
    assert!(board.is_empty());
    assert!(!board.is_occupied(Cell::new(4, 2)));
}
