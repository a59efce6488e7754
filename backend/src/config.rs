//! Festival configuration file support.
//!
//! Settings are read from a TOML file:
//!
//! ```toml
//! [schedule]
//! start_time = "10:00"
//! duration_per_item = 4
//! buffer_between_items = 1
//! judging_break_duration = 30
//!
//! [repository]
//! type = "local"
//! seed_file = "registrations.json"
//!
//! [sections.RO]
//! title = "Muzică Ușoară Românească"
//! ```
//!
//! Every key is optional. The values become the server defaults; a
//! generation request can still override them for one run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{ClockTime, ScheduleConfig, SectionDisplayOverride, SectionKey, SectionMetadata};
use crate::scheduler::ScheduleError;

/// Environment variable pointing at the config file.
pub const CONFIG_ENV_VAR: &str = "FESTIVAL_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("No festival.toml found in standard locations")]
    NotFound,

    #[error(transparent)]
    Invalid(#[from] ScheduleError),
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FestivalConfig {
    #[serde(default)]
    pub schedule: ScheduleSettings,
    #[serde(default)]
    pub repository: RepositorySettings,
    /// Display overrides keyed by section (`[sections.RO]`, ...)
    #[serde(default)]
    pub sections: BTreeMap<SectionKey, SectionDisplayOverride>,
}

/// `[schedule]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSettings {
    #[serde(default = "default_start_time")]
    pub start_time: ClockTime,
    #[serde(default = "default_duration_per_item")]
    pub duration_per_item: u32,
    #[serde(default = "default_buffer_between_items")]
    pub buffer_between_items: u32,
    #[serde(default = "default_judging_break_duration")]
    pub judging_break_duration: u32,
}

fn default_start_time() -> ClockTime {
    ScheduleConfig::default().start_time
}

fn default_duration_per_item() -> u32 {
    ScheduleConfig::default().duration_per_item
}

fn default_buffer_between_items() -> u32 {
    ScheduleConfig::default().buffer_between_items
}

fn default_judging_break_duration() -> u32 {
    ScheduleConfig::default().judging_break_duration
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            start_time: default_start_time(),
            duration_per_item: default_duration_per_item(),
            buffer_between_items: default_buffer_between_items(),
            judging_break_duration: default_judging_break_duration(),
        }
    }
}

/// `[repository]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type", default = "default_repo_type")]
    pub repo_type: String,
    /// Registrations JSON loaded into the store at start-up
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

fn default_repo_type() -> String {
    "local".to_string()
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            repo_type: default_repo_type(),
            seed_file: None,
        }
    }
}

impl FestivalConfig {
    /// Load configuration from a TOML file.
    ///
    /// A relative `seed_file` is resolved against the config file's directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config: FestivalConfig =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if let (Some(seed), Some(dir)) = (config.repository.seed_file.as_mut(), path.parent()) {
            if seed.is_relative() {
                *seed = dir.join(&*seed);
            }
        }

        config.schedule_config()?;
        Ok(config)
    }

    /// Load configuration from the first `festival.toml` found in the
    /// current directory, `backend/`, or the parent directory.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("festival.toml"),
            PathBuf::from("backend/festival.toml"),
            PathBuf::from("../festival.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }

    /// Load from `$FESTIVAL_CONFIG` when set, else the default location,
    /// else built-in defaults.
    pub fn from_env_or_default() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::from_file(path);
        }
        match Self::from_default_location() {
            Err(ConfigError::NotFound) => Ok(Self::default()),
            other => other,
        }
    }

    /// Validated schedule defaults.
    pub fn schedule_config(&self) -> Result<ScheduleConfig, ScheduleError> {
        let config = ScheduleConfig {
            start_time: self.schedule.start_time,
            duration_per_item: self.schedule.duration_per_item,
            buffer_between_items: self.schedule.buffer_between_items,
            judging_break_duration: self.schedule.judging_break_duration,
        };
        config.validate()?;
        Ok(config)
    }

    /// Default section table with this file's overrides applied.
    pub fn section_metadata(&self) -> SectionMetadata {
        SectionMetadata::default().with_overrides(&self.sections)
    }
}
