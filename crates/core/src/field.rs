//! Field module - the grid that accumulates locked pieces
//!
//! The field is a width x height grid where each cell is empty or holds the kind
//! of the piece that was locked there. Storage is a flat row-major `Vec` owned by
//! the session; a new field is allocated for every game.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use crate::types::{Cell, FIELD_HEIGHT, FIELD_WIDTH};

/// The playing field - flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Field {
    /// Create an empty field of the given size
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Create an empty 10x20 field
    pub fn standard() -> Self {
        Self::new(FIELD_WIDTH, FIELD_HEIGHT)
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether (x, y) lies inside `[0, width) x [0, height)`
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Get the occupant at (x, y)
    /// Returns None if out of bounds
    pub fn cell_at(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Check if position is inside the field and empty
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        matches!(self.cell_at(x, y), Some(None))
    }

    /// Write an occupant at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the field.
    pub fn set_cell(&mut self, x: i32, y: i32, cell: Cell) {
        let Some(idx) = self.index(x, y) else {
            panic!(
                "set_cell({x}, {y}) outside {}x{} field",
                self.width, self.height
            );
        };
        self.cells[idx] = cell;
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Remove row `y`: every row above shifts down by one and row 0 is cleared.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not a row of the field.
    pub fn collapse_row(&mut self, y: usize) {
        assert!(
            y < self.height as usize,
            "collapse_row({y}) outside field of height {}",
            self.height
        );
        let width = self.width as usize;

        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }

        self.cells[..width].fill(None);
    }

    /// Cells of row `y`, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not a row of the field.
    pub fn row(&self, y: usize) -> &[Cell] {
        let width = self.width as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    /// Iterate over rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Clear the entire field
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Create from text rows for testing (`.` is empty, a piece letter is occupied)
    #[cfg(test)]
    pub fn from_rows(rows: &[&str]) -> Self {
        use crate::types::PieceKind;

        let height = rows.len() as u8;
        let width = rows.first().map_or(0, |r| r.len()) as u8;
        let mut field = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width as usize);
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    '.' => None,
                    other => PieceKind::from_str(&other.to_string()),
                };
                field.set_cell(x as i32, y as i32, cell);
            }
        }
        field
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::standard()
    }
}
