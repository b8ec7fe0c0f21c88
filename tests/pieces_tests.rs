//! Piece tests - templates, candidates and the validity oracle

use blockfall::core::{is_valid, shape_template, Board, Piece, Positioned};
use blockfall::types::{Cell, ShapeKind, SPAWN_PIVOT};

// ============== Template Tests ==============

#[test]
fn test_templates() {
    assert_eq!(
        shape_template(ShapeKind::Square),
        [(0, -1), (0, 0), (1, -1), (1, 0)]
    );
    assert_eq!(
        shape_template(ShapeKind::Straight),
        [(-1, 0), (0, 0), (1, 0), (2, 0)]
    );
    assert_eq!(
        shape_template(ShapeKind::L),
        [(-1, 0), (-1, -1), (0, -1), (1, -1)]
    );
    assert_eq!(
        shape_template(ShapeKind::J),
        [(-1, -1), (0, -1), (1, -1), (1, 0)]
    );
    assert_eq!(
        shape_template(ShapeKind::S),
        [(0, 0), (0, -1), (-1, 0), (1, -1)]
    );
    assert_eq!(
        shape_template(ShapeKind::Z),
        [(0, 0), (-1, -1), (0, -1), (1, 0)]
    );
    assert_eq!(
        shape_template(ShapeKind::T),
        [(0, 0), (-1, 0), (1, 0), (0, -1)]
    );
}

#[test]
fn test_every_template_has_four_distinct_cells() {
    for kind in ShapeKind::ALL {
        let piece = Piece::from_template(kind, SPAWN_PIVOT);
        let mut cells = piece.cells().to_vec();
        cells.sort();
        cells.dedup();
        assert_eq!(cells.len(), 4, "{kind}");
    }
}

// ============== Spawn Tests ==============

#[test]
fn test_spawn_valid_on_empty_board_for_all_kinds() {
    let board = Board::new();
    for kind in ShapeKind::ALL {
        let piece = Piece::from_template(kind, Cell::new(2, 1));
        assert!(is_valid(&piece, &board), "{kind} should spawn");
        assert!(piece.can_occupy(&board));
    }
}

// ============== Candidate Tests ==============

#[test]
fn test_straight_cells_after_moves() {
    let piece = Piece::from_template(ShapeKind::Straight, Cell::new(2, 1));
    let moved = piece.translated(1, 2);
    assert_eq!(
        moved.cell_array(),
        [Cell::new(2, 3), Cell::new(3, 3), Cell::new(4, 3), Cell::new(5, 3)]
    );

    let vertical = moved.rotated();
    assert_eq!(
        vertical.cell_array(),
        [Cell::new(3, 4), Cell::new(3, 3), Cell::new(3, 2), Cell::new(3, 1)]
    );
}

#[test]
fn test_rotation_cycle_restores_cells() {
    for kind in ShapeKind::ALL {
        let piece = Piece::from_template(kind, Cell::new(4, 8));
        let mut current = piece;
        for _ in 0..4 {
            current = current.rotated();
        }
        assert_eq!(current.cell_array(), piece.cell_array(), "{kind}");
    }
}

// ============== Oracle Tests ==============

#[test]
fn test_invalid_against_walls_and_floor() {
    let board = Board::new();
    let piece = Piece::from_template(ShapeKind::Straight, Cell::new(2, 1));

    assert!(!is_valid(&piece.translated(-2, 0), &board)); // x = -1
    assert!(!is_valid(&piece.translated(6, 0), &board)); // x = 10
    assert!(!is_valid(&piece.translated(0, 19), &board)); // y = 20
    assert!(is_valid(&piece.translated(0, 18), &board));
}

#[test]
fn test_invalid_on_overlap_valid_above_top() {
    let mut board = Board::new();
    board.set(Cell::new(3, 1), true);

    let piece = Piece::from_template(ShapeKind::T, Cell::new(2, 1));
    assert!(!is_valid(&piece, &board));

    // Cells above row 0 are allowed
    let high = Piece::from_template(ShapeKind::T, Cell::new(6, 0));
    assert!(high.cell_array().iter().any(|c| c.y < 0));
    assert!(is_valid(&high, &board));
}
