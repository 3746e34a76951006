// random.rs - Random initial boards drawn from a distribution over cell values

use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};

use crate::cell::{Cell, CellDomain};
use crate::error::{Error, Result};
use crate::grid::Grid;

/// Discrete distribution over cell values.
#[derive(Debug, Clone)]
pub struct CellDistribution {
    cells: Vec<Cell>,
    index: WeightedIndex<f64>,
}

impl CellDistribution {
    /// Weights need not sum to one, but must be finite, non-negative and
    /// not all zero.
    pub fn new(weights: &[(Cell, f64)]) -> Result<Self> {
        if let Some((cell, w)) = weights.iter().find(|(_, w)| !w.is_finite()) {
            return Err(Error::InvalidDistribution(format!("weight {w} for {cell:?} is not finite")));
        }
        let index = WeightedIndex::new(weights.iter().map(|&(_, w)| w))
            .map_err(|e| Error::InvalidDistribution(e.to_string()))?;
        Ok(Self { cells: weights.iter().map(|&(c, _)| c).collect(), index })
    }

    /// Alive with probability `alive`, dead otherwise.
    pub fn binary(alive: f64) -> Result<Self> {
        check_probability(alive)?;
        Self::new(&[(Cell::Dead, 1.0 - alive), (Cell::ALIVE, alive)])
    }

    /// Faction A with probability `a`, faction B with `b`, dead otherwise.
    pub fn immigration(a: f64, b: f64) -> Result<Self> {
        check_probability(a)?;
        check_probability(b)?;
        check_probability(a + b)?;
        Self::new(&[(Cell::Dead, 1.0 - a - b), (Cell::FactionA, a), (Cell::FactionB, b)])
    }

    /// 80% dead, the rest split between the live values of the domain.
    pub fn for_domain(domain: CellDomain) -> Result<Self> {
        match domain {
            CellDomain::Binary => Self::binary(0.2),
            CellDomain::Ternary => Self::immigration(0.1, 0.1),
        }
    }

    /// Values this distribution can produce.
    pub fn support(&self) -> &[Cell] {
        &self.cells
    }
}

impl Distribution<Cell> for CellDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        self.cells[self.index.sample(rng)]
    }
}

fn check_probability(p: f64) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(Error::InvalidDistribution(format!("probability {p} is outside [0, 1]")))
    }
}

/// A `rows x cols` grid with every cell drawn independently from `distribution`.
pub fn random_grid<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    distribution: &CellDistribution,
    rng: &mut R,
) -> Result<Grid> {
    let mut grid = Grid::dead(rows, cols)?;
    for row in 0..rows {
        for col in 0..cols {
            grid.set(row, col, distribution.sample(rng));
        }
    }
    Ok(grid)
}
