// error.rs - Error types for grid construction and stepping

use thiserror::Error;

use crate::cell::Cell;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(
        "invalid dimensions: expected {expected_rows}x{expected_cols}, got {actual_rows}x{actual_cols}"
    )]
    InvalidDimensions {
        expected_rows: usize,
        expected_cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },

    #[error("dimension mismatch: grid declares {expected} cells but holds {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("invalid cell value {0}: expected 0 (dead), 1 (faction A) or 2 (faction B)")]
    InvalidCell(u8),

    #[error("invalid distribution: {0}")]
    InvalidDistribution(String),

    #[error("invalid scale {0}: must be at least 1")]
    InvalidScale(usize),

    #[error("pattern {pattern} spans {height}x{width} but the grid is only {rows}x{cols}")]
    PatternOutOfBounds {
        pattern: &'static str,
        height: usize,
        width: usize,
        rows: usize,
        cols: usize,
    },

    #[error("{cell:?} is outside the {domain} domain")]
    CellOutOfDomain { cell: Cell, domain: &'static str },
}
