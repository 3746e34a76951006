//! Two-dimensional cellular automata on a toroidal or clipped grid.
//!
//! A [`Grid`] holds one generation. An [`Engine`] pairs a [`Rule`] with a
//! [`BoundaryPolicy`] and turns one generation into the next; each step
//! returns a new grid and never mutates the one it reads.
//!
//! ```
//! use conway::{patterns, step, BoundaryPolicy, Rule};
//!
//! let blinker = patterns::blinker();
//! let next = step(&blinker, Rule::CONWAY, BoundaryPolicy::Toroidal).unwrap();
//! assert_eq!(next.live_cells(), vec![(2, 1), (2, 2), (2, 3)]);
//! ```

pub mod boundary;
pub mod cell;
pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod random;
pub mod render;
pub mod rule;
pub mod simulation;

pub use boundary::BoundaryPolicy;
pub use cell::{Cell, CellDomain};
pub use engine::{Engine, step};
pub use error::{Error, Result};
pub use grid::Grid;
pub use random::{CellDistribution, random_grid};
pub use render::{Palette, PixelBuffer, render_pixels, render_text};
pub use rule::{CountSet, LifeLike, Neighborhood, Rule};
pub use simulation::Simulation;
