//! Configuration for the hours word field.
//!
//! Settings live in `config.toml` inside the platform config directory.
//! A missing file means defaults; a malformed one is an error so that a
//! typo is not silently ignored.

use std::path::{Path, PathBuf};

use chrono::NaiveTime;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config.toml";

/// Errors that can occur when loading or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No home directory could be determined for this platform.
    #[error("could not determine the configuration directory")]
    NoConfigDir,

    /// Reading or writing the file failed.
    #[error("config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`Config`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A value is out of range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Width of the blend window before each phase boundary, in minutes.
    pub transition_window_minutes: f64,
    /// Poem to load instead of the bundled one.
    pub poem_path: Option<PathBuf>,
    /// Fixed random seed for reproducible layouts.
    pub seed: Option<u64>,
    pub world: WorldConfig,
    pub timing: TimingConfig,
    pub activity: ActivityConfig,
    pub clock: ClockConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            transition_window_minutes: 30.0,
            poem_path: None,
            seed: None,
            world: WorldConfig::default(),
            timing: TimingConfig::default(),
            activity: ActivityConfig::default(),
            clock: ClockConfig::default(),
        }
    }
}

/// Size of the simulated world, in world units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 640.0,
        }
    }
}

/// Cadence of the two engine loops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Seconds between phase evaluations.
    pub evaluate_interval_secs: u64,
    /// Simulation ticks per second.
    pub frame_rate: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            evaluate_interval_secs: 30,
            frame_rate: 60,
        }
    }
}

/// How pointer activity warms the background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityConfig {
    /// Added to the meter by every new contact.
    pub pump_per_contact: f64,
    /// Seconds for a full meter to drain.
    pub decay_seconds: f64,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            pump_per_contact: 0.25,
            decay_seconds: 30.0,
        }
    }
}

/// Clock overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Pin the clock to this `HH:MM` instead of following local time.
    pub fixed_time: Option<String>,
}

impl ClockConfig {
    /// The pinned time, if one is configured and well formed.
    pub fn fixed_time(&self) -> Result<Option<NaiveTime>, ConfigError> {
        self.fixed_time
            .as_deref()
            .map(|raw| {
                NaiveTime::parse_from_str(raw.trim(), "%H:%M").map_err(|err| {
                    ConfigError::Invalid(format!("clock.fixed_time {raw:?}: {err}"))
                })
            })
            .transpose()
    }
}

impl Config {
    /// Path of the config file for this platform.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        ProjectDirs::from("", "", "hours")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the platform config path, falling back to defaults when no
    /// file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load and validate a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save to the platform config path.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save to a specific file, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(io_err)
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |name: &str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")))
            }
        };
        positive("transition_window_minutes", self.transition_window_minutes)?;
        positive("world.width", self.world.width)?;
        positive("world.height", self.world.height)?;
        positive("activity.decay_seconds", self.activity.decay_seconds)?;
        if !(0.0..=1.0).contains(&self.activity.pump_per_contact) {
            return Err(ConfigError::Invalid(format!(
                "activity.pump_per_contact must be within [0, 1], got {}",
                self.activity.pump_per_contact
            )));
        }
        if self.timing.frame_rate == 0 {
            return Err(ConfigError::Invalid("timing.frame_rate must be at least 1".into()));
        }
        if self.timing.evaluate_interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "timing.evaluate_interval_secs must be at least 1".into(),
            ));
        }
        self.clock.fixed_time()?;
        Ok(())
    }

    /// Activity drained per simulation tick.
    pub fn activity_decay_per_tick(&self) -> f64 {
        1.0 / (self.activity.decay_seconds * f64::from(self.timing.frame_rate))
    }
}
