// Playback state machine, tick cadence and the session tying them together
mod command;
mod controller;
mod scheduler;
mod session;

pub use command::Command;
pub use controller::{Phase, SimulationController};
pub use scheduler::{MAX_INTERVAL, MIN_INTERVAL, TickScheduler};
pub use session::Session;
