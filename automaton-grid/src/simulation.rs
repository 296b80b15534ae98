use crate::World;
use crate::cell::Cell;
use crate::config::SimulationConfig;
use crate::grid::WorldGrid;
use crate::pattern::Seed;
use crate::random::Random;
use crate::rule::TransitionRule;
use log::{debug, trace};

const ALIVE_COLOR: [u8; 4] = [0x00, 0x80, 0x00, 0xff];
const DEAD_COLOR: [u8; 4] = [0xff, 0xc0, 0xcb, 0xff];

/// One running automaton: its grid, the rule applied to it, and the frame counter.
#[derive(Debug)]
pub struct Simulation {
    grid: WorldGrid,
    rule: TransitionRule,
    step_count: u64,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Self {
        let mut result = Self::new_empty(config.width, config.height, config.rule);
        let mut rand = Random::seeded(config.random_seed);
        result.seed(config.seed, &mut rand);
        result
    }

    pub fn new_empty(width: u32, height: u32, rule: TransitionRule) -> Self {
        assert!(width > 0 && height > 0);
        Self {
            grid: WorldGrid::new(width, height),
            rule,
            step_count: 0,
        }
    }

    /// Only allowed before the first `advance`.
    pub fn seed(&mut self, seed: Seed, rand: &mut Random) {
        assert_eq!(self.step_count, 0, "seeding a simulation that already started");
        seed.apply(&mut self.grid, rand);
        debug!(
            "Seeded {}x{} {} grid with {:?}, population {}",
            self.grid.width(),
            self.grid.height(),
            self.rule.name(),
            seed,
            self.population()
        );
    }

    pub fn grid(&self) -> &WorldGrid {
        &self.grid
    }

    pub fn population(&self) -> usize {
        self.grid.cells_iter().filter(|cell| cell.is_alive()).count()
    }

    /// Shows the seed unchanged on the very first call; every later call computes one
    /// generation. The counter advances either way.
    pub fn advance(&mut self) {
        if self.step_count == 0 {
            debug!("First frame, leaving the seed generation as is");
        } else {
            let rule = &self.rule;
            self.grid.update(|cell, neighborhood| rule.next_state(cell, neighborhood));
            trace!("Step {}: population {}", self.step_count, self.population());
        }
        self.step_count += 1;
    }
}

impl World for Simulation {
    fn width(&self) -> u32 {
        self.grid.width()
    }

    fn height(&self) -> u32 {
        self.grid.height()
    }

    fn num_cells(&self) -> usize {
        self.grid.num_cells()
    }

    fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &Cell> + Clone {
        self.grid.cells_iter()
    }

    fn color_rgba(&self, cell: &Cell) -> [u8; 4] {
        match self.rule {
            TransitionRule::Life(_) => {
                if cell.is_alive() {
                    ALIVE_COLOR
                } else {
                    DEAD_COLOR
                }
            }
            TransitionRule::Diffusion(_) => {
                let level = (cell.value.clamp(0.0, 1.0) * 0xff as f64) as u8;
                [level, level, level, 0xff]
            }
        }
    }

    fn step_count(&self) -> u64 {
        self.step_count
    }

    fn advance(&mut self) {
        Simulation::advance(self);
    }
}
