use thiserror::Error;

use crate::cell::Cell;
use crate::cell::Status;

pub type GridResult<T> = Result<T, GridError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("({row}, {col}) is outside of the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Offsets of the 8 surrounding positions.
///
///   (-1, -1) (-1, 0) (-1, 1)
///   ( 0, -1)    x    ( 0, 1)
///   ( 1, -1) ( 1, 0) ( 1, 1)
///
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, -1),
    (1, 1),
    (1, -1),
];

/// A fixed size board of `rows * cols` cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Create a grid where every cell is dead and has no scheduled transition
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);

        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::dead(row, col));
            }
        }

        Self { cells, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row of the grid, left to right. Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    pub fn cell(&self, row: usize, col: usize) -> GridResult<&Cell> {
        let i = self.index(row, col)?;
        Ok(&self.cells[i])
    }

    /// Current status of the cell at `(row, col)`
    pub fn status(&self, row: usize, col: usize) -> GridResult<Status> {
        self.cell(row, col).map(|cell| cell.current)
    }

    pub fn set_current(&mut self, row: usize, col: usize, status: Status) -> GridResult<()> {
        let i = self.index(row, col)?;
        self.cells[i].current = status;

        Ok(())
    }

    /// Schedule a transition for the cell at `(row, col)`
    pub fn set_next(&mut self, row: usize, col: usize, status: Status) -> GridResult<()> {
        let i = self.index(row, col)?;
        self.cells[i].next = Some(status);

        Ok(())
    }

    /// Copy the scheduled transition of a single cell into its current status. A cell without a
    /// scheduled transition is left as is.
    pub fn commit(&mut self, row: usize, col: usize) -> GridResult<bool> {
        let i = self.index(row, col)?;
        Ok(self.cells[i].commit())
    }

    /// Forget every scheduled transition
    pub fn clear_next(&mut self) {
        for cell in &mut self.cells {
            cell.next = None;
        }
    }

    /// Neighbor probe: is the cell at `(row + row_offset, col + col_offset)` alive?
    ///
    /// Unlike [`Grid::status`], positions outside of the grid are not an error, they are simply
    /// dead.
    pub fn is_alive(&self, row: usize, col: usize, row_offset: isize, col_offset: isize) -> bool {
        let (Some(r), Some(c)) = (
            row.checked_add_signed(row_offset),
            col.checked_add_signed(col_offset),
        ) else {
            return false;
        };

        if r >= self.rows || c >= self.cols {
            return false;
        }

        self.cells[r * self.cols + c].is_alive()
    }

    /// Number of alive cells among the 8 positions surrounding `(row, col)`
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        NEIGHBORS
            .iter()
            .filter(|&&(dr, dc)| self.is_alive(row, col, dr, dc))
            .count() as u8
    }

    /// Count the cells that are currently alive. This walks the whole grid.
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    fn index(&self, row: usize, col: usize) -> GridResult<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }

        Ok(row * self.cols + col)
    }
}
