// Domain layer - Grid and the Life rule
pub mod domain;

// Application layer - Playback state machine and tick cadence
pub mod application;

pub mod config;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{CellState, Grid, Pattern, presets};
pub use application::{Command, Phase, Session, SimulationController, TickScheduler};
pub use config::{ConfigError, SimulationConfig};
