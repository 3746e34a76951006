// simulation.rs - Owns the current generation and threads it through the engine

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tracing::{trace, warn};

use crate::cell::Cell;
use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::grid::Grid;

/// How many recent generations are fingerprinted for cycle detection.
pub const CYCLE_WINDOW: usize = 10;

pub struct Simulation {
    grid: Grid,
    engine: Engine,
    generation: u64,

    history: [u64; CYCLE_WINDOW],
    history_count: usize,
    cycling: bool,
}

impl Simulation {
    pub fn new(grid: Grid, engine: Engine) -> Self {
        let mut sim = Self {
            grid,
            engine,
            generation: 0,
            history: [0; CYCLE_WINDOW],
            history_count: 0,
            cycling: false,
        };
        sim.remember();
        sim
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// True once the latest generation repeats one of the previous
    /// [`CYCLE_WINDOW`] generations (still lifes, short oscillators).
    pub fn is_cycling(&self) -> bool {
        self.cycling
    }

    /// Steps once with the owned engine.
    pub fn advance(&mut self) -> Result<&Grid> {
        let next = self.engine.step(&self.grid)?;
        self.commit(next)
    }

    /// Accepts a generation computed outside the engine (e.g. row by row).
    pub fn commit(&mut self, next: Grid) -> Result<&Grid> {
        if next.dimensions() != self.grid.dimensions() {
            let (rows, cols) = self.grid.dimensions();
            return Err(Error::DimensionMismatch {
                expected: rows * cols,
                actual: next.rows() * next.cols(),
            });
        }
        self.grid = next;
        self.generation += 1;
        self.cycling = self.remember();
        trace!(generation = self.generation, population = self.population(), "committed generation");
        if self.cycling {
            warn!(generation = self.generation, "generation repeats a recent state");
        }
        Ok(&self.grid)
    }

    /// Edits one cell of the current generation. The edited board starts a
    /// fresh cycle history but keeps the generation count.
    pub fn set_cell(&mut self, row: usize, col: usize, value: Cell) {
        self.grid.set(row, col, value);
        self.history = [0; CYCLE_WINDOW];
        self.history_count = 0;
        self.cycling = false;
        self.remember();
    }

    /// Replaces the board and starts counting from zero again.
    pub fn reset(&mut self, grid: Grid) {
        self.grid = grid;
        self.generation = 0;
        self.history = [0; CYCLE_WINDOW];
        self.history_count = 0;
        self.cycling = false;
        self.remember();
    }

    fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.grid.hash(&mut hasher);
        hasher.finish()
    }

    /// Records the current grid; returns whether it was already remembered.
    fn remember(&mut self) -> bool {
        let current = self.fingerprint();
        let filled = self.history_count.min(CYCLE_WINDOW);
        if self.history[..filled].contains(&current) {
            return true;
        }
        self.history[self.history_count % CYCLE_WINDOW] = current;
        self.history_count += 1;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::BoundaryPolicy;
    use crate::patterns;
    use crate::rule::Rule;

    #[test]
    fn advance_counts_generations() {
        let mut sim = Simulation::new(patterns::basic_glider(), Engine::default());
        sim.advance().unwrap();
        sim.advance().unwrap();
        assert_eq!(sim.generation(), 2);
        assert_eq!(sim.population(), 5);
        assert!(!sim.is_cycling());
    }

    #[test]
    fn blinker_is_detected_as_cycle() {
        let mut sim = Simulation::new(patterns::blinker(), Engine::new(Rule::CONWAY, BoundaryPolicy::Toroidal));
        sim.advance().unwrap();
        assert!(!sim.is_cycling());
        sim.advance().unwrap();
        assert!(sim.is_cycling());
    }

    #[test]
    fn commit_rejects_other_shapes_and_reset_clears() {
        let mut sim = Simulation::new(patterns::blinker(), Engine::default());
        let err = sim.commit(patterns::basic_glider()).unwrap_err();
        assert_eq!(err, Error::DimensionMismatch { expected: 25, actual: 42 });

        sim.advance().unwrap();
        sim.set_cell(0, 0, Cell::ALIVE);
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.grid().get(0, 0), Cell::ALIVE);

        sim.reset(patterns::line_oscillator());
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.grid().dimensions(), (5, 4));
    }
}
