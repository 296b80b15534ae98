use crate::pattern::Seed;
use crate::rule::TransitionRule;

pub const LIFE_GRID_WIDTH: u32 = 40;
pub const LIFE_GRID_HEIGHT: u32 = 30;

pub const DIFFUSION_GRID_WIDTH: u32 = 80;
pub const DIFFUSION_GRID_HEIGHT: u32 = 60;

pub const RANDOM_SEED: u64 = 1;
pub const RANDOM_LIVE_CELLS: usize = 20;

/// Everything a `Simulation` is built from.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub width: u32,
    pub height: u32,
    pub rule: TransitionRule,
    pub seed: Seed,
    pub random_seed: u64,
}

impl SimulationConfig {
    pub fn life() -> Self {
        Self {
            width: LIFE_GRID_WIDTH,
            height: LIFE_GRID_HEIGHT,
            rule: TransitionRule::life(),
            seed: Seed::Kickback,
            random_seed: RANDOM_SEED,
        }
    }

    pub fn diffusion() -> Self {
        Self {
            width: DIFFUSION_GRID_WIDTH,
            height: DIFFUSION_GRID_HEIGHT,
            rule: TransitionRule::diffusion(),
            seed: Seed::Random {
                count: RANDOM_LIVE_CELLS,
            },
            random_seed: RANDOM_SEED,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_random_seed(mut self, random_seed: u64) -> Self {
        self.random_seed = random_seed;
        self
    }
}
