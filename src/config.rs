//! Configuration loading and typed config structures for the simulator.
//!
//! Every section is optional in the YAML file; missing fields fall back to
//! the defaults below. The binary looks for the file named by
//! `LIFE_SIM_CONFIG`, then `life-sim.yaml` in the working directory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::application::{MAX_INTERVAL, MIN_INTERVAL};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "LIFE_SIM_CONFIG";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "life-sim.yaml";

/// Largest visible width or height in cells.
pub const MAX_WORLD_SIZE: usize = 10_000;

/// Largest margin in cells. Together with [`MAX_WORLD_SIZE`] every grid
/// coordinate fits comfortably in `i32`.
pub const MAX_MARGIN: usize = 1_000;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        #[from]
        source: serde_yml::Error,
    },

    /// The configuration parsed but holds unusable values.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

/// Top-level simulator configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimulationConfig {
    #[serde(default)]
    pub world: WorldConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub seeding: SeedingConfig,
}

impl SimulationConfig {
    /// Load and validate configuration from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from a YAML string.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config file from the environment or working directory.
    ///
    /// Returns the defaults when neither source names an existing file.
    /// An explicitly named file that cannot be read is an error.
    pub fn load() -> Result<Self, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Self::from_file(Path::new(&path));
        }
        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            return Self::from_file(fallback);
        }
        Ok(Self::default())
    }

    /// Reject values the simulator cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: &str| {
            Err(ConfigError::Invalid {
                reason: reason.to_owned(),
            })
        };
        if self.world.width == 0 || self.world.height == 0 {
            return invalid("world width and height must be at least 1");
        }
        if self.world.width > MAX_WORLD_SIZE || self.world.height > MAX_WORLD_SIZE {
            return invalid("world width and height must be at most 10000");
        }
        if self.world.margin > MAX_MARGIN {
            return invalid("world.margin must be at most 1000");
        }
        if !(self.display.cell_size.is_finite() && self.display.cell_size > 0.0) {
            return invalid("display.cell_size must be a positive number");
        }
        if !(self.display.panel_width.is_finite() && self.display.panel_width >= 0.0) {
            return invalid("display.panel_width must not be negative");
        }
        if !(MIN_INTERVAL..=MAX_INTERVAL).contains(&self.timing.tick_interval()) {
            return invalid("timing.tick_interval_ms must be within 10..=2000");
        }
        if !(0.0..=1.0).contains(&self.seeding.density) {
            return invalid("seeding.density must be within 0.0..=1.0");
        }
        Ok(())
    }
}

/// Size of the simulated world in cells.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Visible columns.
    pub width: usize,
    /// Visible rows.
    pub height: usize,
    /// Hidden cells on each side of the visible area.
    pub margin: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 60,
            margin: 10,
        }
    }
}

/// Presentation sizes. Only the renderer and input layer read these.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Edge length of one cell in pixels.
    pub cell_size: f32,
    /// Width of the control panel right of the world.
    pub panel_width: f32,
    pub font_size: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_size: 10.0,
            panel_width: 240.0,
            font_size: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Time between generations while running.
    pub tick_interval_ms: u64,
}

impl TimingConfig {
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
        }
    }
}

/// Random seeding of the visible area.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeedingConfig {
    /// Probability that a visible cell starts alive.
    pub density: f64,
}

impl Default for SeedingConfig {
    fn default() -> Self {
        Self { density: 0.3 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = SimulationConfig::parse("{}").unwrap();
        assert_eq!(config, SimulationConfig::default());
        assert_eq!(config.timing.tick_interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let yaml = "world:\n  width: 80\ntiming:\n  tick_interval_ms: 250\n";
        let config = SimulationConfig::parse(yaml).unwrap();
        assert_eq!(config.world.width, 80);
        assert_eq!(config.world.height, 60);
        assert_eq!(config.world.margin, 10);
        assert_eq!(config.timing.tick_interval_ms, 250);
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_rejects_zero_world() {
        let err = SimulationConfig::parse("world:\n  width: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_rejects_zero_interval() {
        let err = SimulationConfig::parse("timing:\n  tick_interval_ms: 0\n").unwrap_err();
        assert!(err.to_string().contains("tick_interval_ms"));
    }

    #[test]
    fn test_rejects_interval_the_scheduler_cannot_honour() {
        for ms in [5, 5000] {
            let yaml = format!("timing:\n  tick_interval_ms: {ms}\n");
            let err = SimulationConfig::parse(&yaml).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { .. }), "{ms} ms accepted");
        }
        assert!(SimulationConfig::parse("timing:\n  tick_interval_ms: 10\n").is_ok());
        assert!(SimulationConfig::parse("timing:\n  tick_interval_ms: 2000\n").is_ok());
    }

    #[test]
    fn test_configured_interval_reaches_scheduler_unchanged() {
        let config = SimulationConfig::parse("timing:\n  tick_interval_ms: 1500\n").unwrap();
        let session = crate::application::Session::new(&config);
        assert_eq!(session.scheduler().interval(), Duration::from_millis(1500));
    }

    #[test]
    fn test_rejects_oversized_world() {
        assert!(SimulationConfig::parse("world:\n  width: 10001\n").is_err());
        assert!(SimulationConfig::parse("world:\n  height: 4000000000\n").is_err());
        assert!(SimulationConfig::parse("world:\n  margin: 1001\n").is_err());
        assert!(SimulationConfig::parse("world: { width: 10000, height: 10000, margin: 1000 }\n").is_ok());
    }

    #[test]
    fn test_rejects_bad_cell_size_and_density() {
        assert!(SimulationConfig::parse("display:\n  cell_size: 0.0\n").is_err());
        assert!(SimulationConfig::parse("seeding:\n  density: 1.5\n").is_err());
    }

    #[test]
    fn test_malformed_yaml() {
        let err = SimulationConfig::parse("world: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = SimulationConfig::from_file(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }
}
