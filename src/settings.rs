//! Optional settings file and option resolution
//!
//! Precedence for every option: CLI flag (or its environment variable),
//! then the settings file, then the built-in default.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use log::debug;
use serde::Deserialize;

use crate::cli::{Cli, Command};
use crate::config::{defaults, settings as settings_config};
use crate::error::{InventoryError, Result};
use crate::providers::CollectOptions;

/// Contents of the YAML settings file
///
/// ```yaml
/// profile: prod
/// regions: [us-east-1, eu-west-1]
/// org: "123456789012"
/// skip: [Lambda]
/// jobs: 4
/// timeout_secs: 120
/// ```
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub profile: Option<String>,
    pub regions: Vec<String>,
    pub org: Option<String>,
    pub projects: Vec<String>,
    pub skip: Vec<String>,
    pub jobs: Option<usize>,
    pub timeout_secs: Option<u64>,
}

/// Reads the settings file
pub struct SettingsStore {
    path: PathBuf,
    /// Whether the path was given explicitly (a missing file is then an error)
    explicit: bool,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore {
    /// Store at the default path (<config dir>/cloudtree/config.yaml)
    pub fn new() -> Self {
        Self {
            path: Self::default_path(),
            explicit: false,
        }
    }

    /// Store at an explicit path
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            explicit: true,
        }
    }

    fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(settings_config::DIR_NAME)
            .join(settings_config::FILE_NAME)
    }

    /// Load settings from disk.
    /// Returns Default if the default file doesn't exist, errors on corrupt YAML.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            if self.explicit {
                return Err(InventoryError::Config(format!(
                    "Settings file {} does not exist",
                    self.path.display()
                )));
            }
            debug!("No settings file at {}", self.path.display());
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            InventoryError::Config(format!(
                "Failed to read settings file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!("Loaded settings from {}", self.path.display());
        if content.trim().is_empty() {
            return Ok(Settings::default());
        }

        serde_yml::from_str(&content).map_err(|e| {
            InventoryError::Config(format!(
                "Failed to parse settings file {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

/// Fully resolved options for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub collect: CollectOptions,
    pub timeout: Duration,
}

impl RunOptions {
    /// Merge CLI arguments over file settings
    pub fn resolve(cli: &Cli, settings: Settings) -> Result<Self> {
        let jobs = cli.jobs.or(settings.jobs).unwrap_or(defaults::JOBS);
        if jobs == 0 {
            return Err(InventoryError::Config("jobs must be at least 1".to_string()));
        }

        let timeout_secs = cli
            .timeout
            .or(settings.timeout_secs)
            .unwrap_or(defaults::TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(InventoryError::Config("timeout must be at least 1 second".to_string()));
        }

        let skip = if cli.skip.is_empty() {
            settings.skip
        } else {
            cli.skip.clone()
        };

        let mut collect = CollectOptions {
            skip,
            jobs,
            ..CollectOptions::default()
        };

        match &cli.command {
            Command::Aws(args) => {
                collect.profile = args.profile.clone().or(settings.profile);
                collect.regions = prefer(&args.regions, settings.regions);
            }
            Command::Gcp(args) => {
                collect.org = args.org.clone().or(settings.org);
                collect.projects = prefer(&args.projects, settings.projects);
            }
        }

        Ok(Self {
            collect,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// CLI list if given, otherwise the file list
fn prefer(cli_values: &[String], file_values: Vec<String>) -> Vec<String> {
    if cli_values.is_empty() {
        file_values
    } else {
        cli_values.to_vec()
    }
}
