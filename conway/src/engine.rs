// engine.rs - Generation stepping: neighborhood enumeration + rule dispatch

use tracing::debug;

use crate::boundary::BoundaryPolicy;
use crate::cell::Cell;
use crate::error::Result;
use crate::grid::Grid;
use crate::rule::{Neighborhood, Rule};

/// A rule paired with the boundary policy it runs under.
///
/// Both are fixed for the engine's lifetime; stepping borrows the prior
/// grid immutably and returns a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Engine {
    rule: Rule,
    policy: BoundaryPolicy,
}

impl Engine {
    pub fn new(rule: Rule, policy: BoundaryPolicy) -> Self {
        Self { rule, policy }
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    /// Multiset of the neighbors of `(row, col)` that survive the policy.
    #[inline]
    pub fn neighborhood(&self, grid: &Grid, row: usize, col: usize) -> Neighborhood {
        let mut hood = Neighborhood::default();
        for (r, c) in self.policy.neighbors(row, col, grid.dimensions()) {
            hood.push(grid.get(r, c));
        }
        hood
    }

    /// Next-generation value of one cell.
    #[inline]
    pub fn next_cell(&self, grid: &Grid, row: usize, col: usize) -> Cell {
        self.rule.apply(grid.get(row, col), &self.neighborhood(grid, row, col))
    }

    /// One row of the next generation. Rows only read the prior grid, so
    /// they can be computed independently and reassembled.
    pub fn next_row(&self, grid: &Grid, row: usize) -> Vec<Cell> {
        (0..grid.cols()).map(|col| self.next_cell(grid, row, col)).collect()
    }

    /// Computes the next generation.
    pub fn step(&self, grid: &Grid) -> Result<Grid> {
        grid.check_consistent()?;

        let mut next = grid.blank_like();
        for (row, col, current) in grid.iter() {
            let hood = self.neighborhood(grid, row, col);
            next.set(row, col, self.rule.apply(current, &hood));
        }

        debug!(
            rule = %self.rule,
            policy = self.policy.name(),
            rows = grid.rows(),
            cols = grid.cols(),
            population = next.population(),
            "stepped generation"
        );
        Ok(next)
    }

    /// Steps `generations` times, returning the final grid.
    pub fn run(&self, grid: &Grid, generations: usize) -> Result<Grid> {
        let mut current = grid.clone();
        for _ in 0..generations {
            current = self.step(&current)?;
        }
        Ok(current)
    }
}

/// Computes the next generation of `grid` under `rule` and `policy`.
pub fn step(grid: &Grid, rule: Rule, policy: BoundaryPolicy) -> Result<Grid> {
    Engine::new(rule, policy).step(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn neighborhood_toroidal_vs_clipped_corner() {
        let grid = Grid::from_numeric(&[&[0, 0, 1], &[0, 0, 0], &[2, 0, 1]]).unwrap();
        let wrap = Engine::new(Rule::Identity, BoundaryPolicy::Toroidal);
        let clip = Engine::new(Rule::Identity, BoundaryPolicy::Clipped);

        let n = wrap.neighborhood(&grid, 0, 0);
        assert_eq!((n.faction_a, n.faction_b, n.len()), (2, 1, 8));

        let n = clip.neighborhood(&grid, 0, 0);
        assert_eq!((n.faction_a, n.faction_b, n.len()), (0, 0, 3));
    }

    #[test]
    fn next_row_matches_step() {
        let grid = Grid::from_numeric(&[&[0, 1, 0, 0], &[0, 1, 1, 0], &[1, 0, 0, 1]]).unwrap();
        let engine = Engine::new(Rule::CONWAY, BoundaryPolicy::Toroidal);
        let stepped = engine.step(&grid).unwrap();
        for row in 0..grid.rows() {
            assert_eq!(engine.next_row(&grid, row), stepped.row(row));
        }
    }

    #[test]
    fn step_rejects_inconsistent_grid() {
        let grid = Grid::from_parts(3, 3, vec![Cell::Dead; 8]);
        assert_eq!(
            step(&grid, Rule::CONWAY, BoundaryPolicy::Toroidal),
            Err(Error::DimensionMismatch { expected: 9, actual: 8 })
        );
    }

    #[test]
    fn run_zero_generations_is_a_copy() {
        let grid = Grid::from_numeric(&[&[1, 1], &[0, 1]]).unwrap();
        let engine = Engine::default();
        assert_eq!(engine.run(&grid, 0).unwrap(), grid);
    }
}
