// cell.rs - Cell values and the domains rules are defined over

use std::fmt;

use crate::error::{Error, Result};

/// A single cell value.
///
/// The binary domain only uses `Dead` and `FactionA` (exposed as
/// [`Cell::ALIVE`]); the immigration domain adds `FactionB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    FactionA = 1,
    FactionB = 2,
}

impl Cell {
    pub const ALIVE: Cell = Cell::FactionA;

    #[inline]
    pub fn is_alive(self) -> bool {
        self != Cell::Dead
    }

    /// Character used by the text dump.
    pub fn symbol(self) -> char {
        match self {
            Cell::Dead => '.',
            Cell::FactionA => 'o',
            Cell::FactionB => 'x',
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Cell::Dead),
            1 => Ok(Cell::FactionA),
            2 => Ok(Cell::FactionB),
            other => Err(Error::InvalidCell(other)),
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> u8 {
        cell as u8
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::ALIVE } else { Cell::Dead }
    }
}

/// The closed set of values a rule reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellDomain {
    Binary,
    Ternary,
}

impl CellDomain {
    pub fn cells(self) -> &'static [Cell] {
        match self {
            CellDomain::Binary => &[Cell::Dead, Cell::FactionA],
            CellDomain::Ternary => &[Cell::Dead, Cell::FactionA, Cell::FactionB],
        }
    }

    pub fn contains(self, cell: Cell) -> bool {
        self.cells().contains(&cell)
    }

    /// Rejects the first cell of `cells` that falls outside this domain.
    pub fn validate<'a>(self, cells: impl IntoIterator<Item = &'a Cell>) -> Result<()> {
        match cells.into_iter().find(|cell| !self.contains(**cell)) {
            Some(&cell) => Err(Error::CellOutOfDomain { cell, domain: self.name() }),
            None => Ok(()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CellDomain::Binary => "binary",
            CellDomain::Ternary => "ternary",
        }
    }
}

impl fmt::Display for CellDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
