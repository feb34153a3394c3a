//! Field and lock tests

use blockfall::core::{clear_full_rows, lock_piece, ActivePiece, Field};
use blockfall::types::{PieceKind, Rotation, FIELD_HEIGHT, FIELD_WIDTH};

fn fill_row_except(field: &mut Field, y: i32, gaps: &[i32]) {
    for x in 0..field.width() as i32 {
        if !gaps.contains(&x) {
            field.set_cell(x, y, Some(PieceKind::J));
        }
    }
}

#[test]
fn test_field_new_empty() {
    let field = Field::standard();
    assert_eq!(field.width(), FIELD_WIDTH);
    assert_eq!(field.height(), FIELD_HEIGHT);

    for y in 0..FIELD_HEIGHT as i32 {
        for x in 0..FIELD_WIDTH as i32 {
            assert_eq!(field.cell_at(x, y), Some(None));
            assert!(field.is_free(x, y));
        }
    }
}

#[test]
fn test_field_get_out_of_bounds() {
    let field = Field::standard();
    assert_eq!(field.cell_at(-1, 0), None);
    assert_eq!(field.cell_at(0, -1), None);
    assert_eq!(field.cell_at(FIELD_WIDTH as i32, 0), None);
    assert_eq!(field.cell_at(0, FIELD_HEIGHT as i32), None);
    assert!(!field.is_free(-1, 0));
}

#[test]
fn test_field_set_and_get() {
    let mut field = Field::standard();
    field.set_cell(5, 10, Some(PieceKind::T));
    assert_eq!(field.cell_at(5, 10), Some(Some(PieceKind::T)));

    field.set_cell(5, 10, None);
    assert_eq!(field.cell_at(5, 10), Some(None));
}

#[test]
#[should_panic(expected = "outside")]
fn test_field_set_out_of_bounds_panics() {
    let mut field = Field::standard();
    field.set_cell(FIELD_WIDTH as i32, 0, Some(PieceKind::T));
}

#[test]
fn test_single_row_clear_shifts_row_above_down() {
    let mut field = Field::standard();
    fill_row_except(&mut field, 19, &[0]);
    field.set_cell(5, 18, Some(PieceKind::Z));
    field.set_cell(6, 18, Some(PieceKind::Z));

    // Vertical I in the gap at column 0, rows 16..=19.
    let piece = ActivePiece::new(PieceKind::I, Rotation::new(3), -1, 16);
    let mut expected = field.clone();
    for (x, y) in piece.blocks() {
        expected.set_cell(x, y, Some(piece.kind));
    }

    let outcome = lock_piece(&mut field, &piece);

    assert_eq!(outcome.lines_cleared, 1);
    assert_eq!(outcome.cleared_rows.as_slice(), &[19]);
    assert_eq!(field.row(19), expected.row(18));
    assert!(field.row(0).iter().all(|cell| cell.is_none()));
}

#[test]
fn test_four_row_clear_empties_field() {
    let mut field = Field::standard();
    for y in 16..20 {
        fill_row_except(&mut field, y, &[9]);
    }
    let piece = ActivePiece::new(PieceKind::I, Rotation::new(1), 7, 16);

    let outcome = lock_piece(&mut field, &piece);

    assert_eq!(outcome.lines_cleared, 4);
    assert!(field.is_empty());
}

#[test]
fn test_non_adjacent_rows_clear_in_one_pass() {
    let mut field = Field::standard();
    fill_row_except(&mut field, 17, &[]);
    field.set_cell(2, 18, Some(PieceKind::S));
    fill_row_except(&mut field, 19, &[]);

    let outcome = clear_full_rows(&mut field);

    assert_eq!(outcome.lines_cleared, 2);
    assert_eq!(field.occupied_count(), 1);
    assert_eq!(field.cell_at(2, 19), Some(Some(PieceKind::S)));
}

#[test]
#[should_panic(expected = "outside the field")]
fn test_lock_outside_field_panics() {
    let mut field = Field::standard();
    let piece = ActivePiece::new(PieceKind::O, Rotation::SPAWN, 3, 19);
    lock_piece(&mut field, &piece);
}
