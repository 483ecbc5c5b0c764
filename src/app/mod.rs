//! Application layer: configuration shared by the session, the simulator and the CLI.

pub mod config;

pub use config::{EngineConfig, SimulationConfig};
