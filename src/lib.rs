pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, scenario::ScenarioConfig, CliConfig};
pub use core::{engine::SimulationEngine, pipeline::MonteCarloPipeline};
pub use utils::error::{Result, SimError};
