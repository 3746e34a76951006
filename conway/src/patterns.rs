// patterns.rs - Preset boards and a catalog of named patterns

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::grid::Grid;

const D: Cell = Cell::Dead;
const A: Cell = Cell::ALIVE;

/// A named shape given as live-cell offsets from its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 1), (1, 2), (0, 2), (2, 1), (2, 0)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

/// Case-insensitive catalog lookup.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

impl Pattern {
    /// `(height, width)` of the bounding box.
    pub fn extent(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }

    /// Stamps the pattern onto a dead `rows x cols` grid with its corner at
    /// `origin`, wrapping around the edges.
    pub fn place(&self, rows: usize, cols: usize, origin: (usize, usize)) -> Result<Grid> {
        let (height, width) = self.extent();
        if height > rows || width > cols {
            return Err(Error::PatternOutOfBounds { pattern: self.name, height, width, rows, cols });
        }
        let mut grid = Grid::dead(rows, cols)?;
        for &(r, c) in self.cells {
            grid.set((origin.0 + r) % rows, (origin.1 + c) % cols, Cell::ALIVE);
        }
        Ok(grid)
    }

    /// Places the pattern in the middle of the grid.
    pub fn centered(&self, rows: usize, cols: usize) -> Result<Grid> {
        let (height, width) = self.extent();
        let origin = (rows.saturating_sub(height) / 2, cols.saturating_sub(width) / 2);
        self.place(rows, cols, origin)
    }
}

/// One live cell in the middle of an otherwise dead grid.
pub fn single_cell(rows: usize, cols: usize) -> Result<Grid> {
    let mut grid = Grid::dead(rows, cols)?;
    grid.set(rows / 2, cols / 2, Cell::ALIVE);
    Ok(grid)
}

/// 5x4 board with a vertical three-cell line in column 2.
pub fn line_oscillator() -> Grid {
    Grid::from_array([
        [D, D, D, D],
        [D, D, A, D],
        [D, D, A, D],
        [D, D, A, D],
        [D, D, D, D],
    ])
}

/// 5x5 board with the blinker standing vertically in the centre column.
pub fn blinker() -> Grid {
    Grid::from_array([
        [D, D, D, D, D],
        [D, D, A, D, D],
        [D, D, A, D, D],
        [D, D, A, D, D],
        [D, D, D, D, D],
    ])
}

/// 7x6 board with a glider in rows 2-4, columns 1-3, heading down-right.
pub fn basic_glider() -> Grid {
    Grid::from_array([
        [D, D, D, D, D, D],
        [D, D, D, D, D, D],
        [D, D, D, A, D, D],
        [D, A, D, A, D, D],
        [D, D, A, A, D, D],
        [D, D, D, D, D, D],
        [D, D, D, D, D, D],
    ])
}
