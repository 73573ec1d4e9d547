use rand::Rng;
use tracing::{debug, info, trace};

use crate::domain::{CellState, Grid, Pattern};

/// Playback phase of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    /// Cells can be edited; nothing ticks
    #[default]
    Setup,
    Running,
    Paused,
    /// Population hit zero while running; only reset restarts playback
    Finished,
}

impl Phase {
    /// Whether the world may be edited in this phase
    pub const fn allows_editing(self) -> bool {
        matches!(self, Phase::Setup | Phase::Finished)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Phase::Setup => "Setup",
            Phase::Running => "Running",
            Phase::Paused => "Paused",
            Phase::Finished => "Finished",
        }
    }
}

/// SimulationController is the guarded state machine around the grid.
///
/// All grid mutation goes through it so the phase rules hold. Commands that
/// are not valid in the current phase do nothing and return `false`.
#[derive(Debug)]
pub struct SimulationController {
    grid: Grid,
    phase: Phase,
    generation: u64,
    population: usize,
}

impl SimulationController {
    pub fn new(grid: Grid) -> Self {
        let population = grid.count_alive();
        Self {
            grid,
            phase: Phase::Setup,
            generation: 0,
            population,
        }
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn population(&self) -> usize {
        self.population
    }

    pub const fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished)
    }

    pub fn cell_state(&self, row: i32, col: i32) -> CellState {
        self.grid.get(row, col)
    }

    /// Read-only view for rendering
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    fn transition(&mut self, to: Phase) {
        debug!(from = ?self.phase, to = ?to, generation = self.generation, "phase transition");
        self.phase = to;
    }

    /// Flip a cell while editing is allowed. Generation and phase are kept.
    pub fn toggle_cell(&mut self, row: i32, col: i32) -> bool {
        if !self.phase.allows_editing() || !self.grid.contains(row, col) {
            return false;
        }
        self.grid.toggle(row, col);
        self.population = self.grid.count_alive();
        trace!(row, col, population = self.population, "cell toggled");
        true
    }

    /// Seed the visible area at random while editing is allowed
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) -> bool {
        if !self.phase.allows_editing() {
            return false;
        }
        self.grid.randomize(rng, density);
        self.population = self.grid.count_alive();
        debug!(density, population = self.population, "grid randomized");
        true
    }

    /// Stamp a pattern with its top-left at `(row, col)` while editing is allowed
    pub fn place_pattern(&mut self, pattern: &Pattern, row: i32, col: i32) -> bool {
        if !self.phase.allows_editing() {
            return false;
        }
        pattern.place_on(&mut self.grid, row, col);
        self.population = self.grid.count_alive();
        debug!(pattern = pattern.name, row, col, population = self.population, "pattern placed");
        true
    }

    /// Begin or resume playback
    pub fn start(&mut self) -> bool {
        match self.phase {
            Phase::Setup | Phase::Paused => {
                self.transition(Phase::Running);
                true
            }
            Phase::Running | Phase::Finished => false,
        }
    }

    pub fn pause(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.transition(Phase::Paused);
        true
    }

    /// Advance one generation. Only acts while running.
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.grid.advance();
        self.generation += 1;
        self.population = self.grid.count_alive();
        trace!(generation = self.generation, population = self.population, "tick");

        if self.population == 0 {
            info!(generation = self.generation, "generation died");
            self.transition(Phase::Finished);
        }
        true
    }

    /// Rebuild an empty grid of the same size and return to setup
    pub fn reset(&mut self) {
        let grid = Grid::new(self.grid.width(), self.grid.height(), self.grid.margin());
        info!(from = ?self.phase, generation = self.generation, "reset");
        *self = Self::new(grid);
    }
}
