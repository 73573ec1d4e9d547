mod cell;
mod grid;
mod patterns;

pub use cell::CellState;
pub use grid::{Grid, PARALLEL_THRESHOLD};
pub use patterns::{Pattern, presets};
