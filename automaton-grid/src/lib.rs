#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod cell;
pub mod config;
mod grid;
mod pattern;
mod random;
mod rule;
mod simulation;

pub use cell::Cell;
pub use config::SimulationConfig;
pub use grid::{Loc, Neighborhood, WorldGrid, WorldGridCells};
pub use pattern::{Pattern, Seed, load_random};
pub use random::Random;
pub use rule::{DiffusionRule, LifeRule, TransitionRule};
pub use simulation::Simulation;

/// What a renderer may see of a running automaton: the committed generation only.
pub trait World {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn num_cells(&self) -> usize;
    fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &Cell> + Clone;
    fn color_rgba(&self, cell: &Cell) -> [u8; 4];
    fn step_count(&self) -> u64;
    fn advance(&mut self);
}
