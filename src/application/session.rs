use std::time::Duration;

use tracing::debug;

use crate::application::{Command, Phase, SimulationController, TickScheduler};
use crate::config::SimulationConfig;
use crate::domain::{Grid, Pattern, presets};

/// Session orchestrates one run of the simulator.
/// This is the application layer that the frame loop talks to.
pub struct Session {
    controller: SimulationController,
    scheduler: TickScheduler,
    patterns: Vec<Pattern>,
    density: f64,
}

impl Session {
    /// Create a session with an empty world sized from the config
    pub fn new(config: &SimulationConfig) -> Self {
        let world = &config.world;
        Self {
            controller: SimulationController::new(Grid::new(world.width, world.height, world.margin)),
            scheduler: TickScheduler::new(config.timing.tick_interval()),
            patterns: presets::all_patterns(),
            density: config.seeding.density,
        }
    }

    pub const fn controller(&self) -> &SimulationController {
        &self.controller
    }

    pub const fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Apply one command. Returns whether it changed anything.
    pub fn handle(&mut self, command: Command) -> bool {
        let accepted = match command {
            Command::ToggleCell { row, col } => self.controller.toggle_cell(row, col),
            Command::Start => {
                let started = self.controller.start();
                if started {
                    self.scheduler.restart();
                }
                started
            }
            Command::Pause => self.controller.pause(),
            Command::Reset => {
                self.controller.reset();
                self.scheduler.restart();
                true
            }
            Command::Randomize => self.controller.randomize(&mut rand::rng(), self.density),
            Command::PlacePattern { index, row, col } => match self.patterns.get(index) {
                Some(pattern) => {
                    let (top, left) = pattern.centered_at(row, col);
                    self.controller.place_pattern(pattern, top, left)
                }
                None => false,
            },
            Command::SpeedUp => {
                self.scheduler.speed_up();
                true
            }
            Command::SlowDown => {
                self.scheduler.slow_down();
                true
            }
        };
        if !accepted {
            debug!(?command, phase = ?self.controller.phase(), "command ignored");
        }
        accepted
    }

    /// Feed frame time. Ticks the simulation when running and an interval elapsed.
    pub fn update(&mut self, elapsed: Duration) -> bool {
        if self.controller.phase() != Phase::Running {
            return false;
        }
        self.scheduler.update(elapsed) && self.controller.tick()
    }
}
