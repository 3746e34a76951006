// grid.rs - Grid type for the automaton

use std::fmt;

use crate::boundary::BoundaryPolicy;
use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::render;

/// A fixed `rows x cols` array of cells, stored row-major.
///
/// Dimensions are set at construction and never change. Stepping never
/// mutates a grid that is being read; each generation is a new `Grid`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid from explicit row vectors.
    ///
    /// Fails with [`Error::InvalidDimensions`] if either dimension is zero,
    /// the number of rows differs from `rows`, or any row is not `cols` long.
    pub fn new(rows: usize, cols: usize, values: Vec<Vec<Cell>>) -> Result<Self> {
        let invalid = |actual_rows, actual_cols| Error::InvalidDimensions {
            expected_rows: rows,
            expected_cols: cols,
            actual_rows,
            actual_cols,
        };

        if rows == 0 || cols == 0 || values.len() != rows {
            let actual_cols = values.first().map_or(0, Vec::len);
            return Err(invalid(values.len(), actual_cols));
        }
        if let Some(ragged) = values.iter().find(|row| row.len() != cols) {
            return Err(invalid(values.len(), ragged.len()));
        }

        Ok(Self { rows, cols, cells: values.into_iter().flatten().collect() })
    }

    /// Builds a grid whose dimensions are taken from the literal itself.
    pub fn from_rows(values: Vec<Vec<Cell>>) -> Result<Self> {
        let rows = values.len();
        let cols = values.first().map_or(0, Vec::len);
        Self::new(rows, cols, values)
    }

    /// Builds a grid from numeric rows (`0` dead, `1` faction A, `2` faction B).
    pub fn from_numeric(values: &[&[u8]]) -> Result<Self> {
        let rows = values
            .iter()
            .map(|row| row.iter().map(|&v| Cell::try_from(v)).collect::<Result<Vec<_>>>())
            .collect::<Result<Vec<_>>>()?;
        Self::from_rows(rows)
    }

    /// Builds a grid from a fixed-size literal; the shape is checked at compile time.
    pub fn from_array<const R: usize, const C: usize>(values: [[Cell; C]; R]) -> Self {
        const { assert!(R > 0 && C > 0, "grid literals need at least one row and column") };
        Self { rows: R, cols: C, cells: values.into_iter().flatten().collect() }
    }

    /// An all-dead grid.
    pub fn dead(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimensions {
                expected_rows: rows.max(1),
                expected_cols: cols.max(1),
                actual_rows: rows,
                actual_cols: cols,
            });
        }
        Ok(Self { rows, cols, cells: vec![Cell::Dead; rows * cols] })
    }

    /// Dead grid with the same shape as `self`.
    pub(crate) fn blank_like(&self) -> Self {
        Self { rows: self.rows, cols: self.cols, cells: vec![Cell::Dead; self.rows * self.cols] }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        Self { rows, cols, cells }
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index_of(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) is outside a {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Value at an in-range coordinate.
    ///
    /// # Panics
    /// If `(row, col)` is outside the grid. Out-of-range lookups go
    /// through [`Grid::get_with`].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index_of(row, col)]
    }

    /// Value at a possibly out-of-range coordinate: wrapped under
    /// `Toroidal`, rejected (`None`) under `Clipped`.
    pub fn get_with(&self, row: isize, col: isize, policy: BoundaryPolicy) -> Option<Cell> {
        let (r, c) = policy.resolve(row, col, self.dimensions())?;
        Some(self.get(r, c))
    }

    /// Writes one cell.
    ///
    /// # Panics
    /// If `(row, col)` is outside the grid.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Cell) {
        let idx = self.index_of(row, col);
        self.cells[idx] = value;
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        let start = self.index_of(row, 0);
        &self.cells[start..start + self.cols]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates `(row, col, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let cols = self.cols;
        self.cells.iter().enumerate().map(move |(i, &cell)| (i / cols, i % cols, cell))
    }

    /// Number of non-dead cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn count(&self, value: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == value).count()
    }

    /// Coordinates of every non-dead cell, row-major.
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.iter().filter(|(_, _, c)| c.is_alive()).map(|(r, c, _)| (r, c)).collect()
    }

    /// Checks the storage length against the declared dimensions.
    pub(crate) fn check_consistent(&self) -> Result<()> {
        let expected = self.rows * self.cols;
        if self.cells.len() != expected {
            return Err(Error::DimensionMismatch { expected, actual: self.cells.len() });
        }
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render_text(self))
    }
}
