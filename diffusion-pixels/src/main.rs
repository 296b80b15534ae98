#![deny(clippy::all)]
#![forbid(unsafe_code)]

use automaton_grid::{Simulation, SimulationConfig};
use log::info;
use pixels_main_support::animate;
use winit::error::EventLoopError;

const CELL_PIXEL_WIDTH: u32 = 10;

fn main() -> Result<(), EventLoopError> {
    env_logger::init();
    let config = SimulationConfig::diffusion();
    info!(
        "Starting {}x{} diffusion grid seeded with {:?}",
        config.width, config.height, config.seed
    );
    animate("Diffusion", CELL_PIXEL_WIDTH, Simulation::new(config))
}
