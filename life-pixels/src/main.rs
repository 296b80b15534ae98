#![deny(clippy::all)]
#![forbid(unsafe_code)]

use automaton_grid::{Simulation, SimulationConfig};
use log::info;
use pixels_main_support::animate;
use winit::error::EventLoopError;

const CELL_PIXEL_WIDTH: u32 = 20;

fn main() -> Result<(), EventLoopError> {
    env_logger::init();
    let config = SimulationConfig::life();
    info!("Starting {}x{} life grid", config.width, config.height);
    animate("Life", CELL_PIXEL_WIDTH, Simulation::new(config))
}
