//! Run configuration, loaded from TOML.
//!
//! ```toml
//! input_dir = "resources/instructors"
//! output_dir = "resources/output"
//! output_name = "schedule"
//! format = "csv"          # csv | json | markdown | text
//! policy = "forward-scan" # forward-scan | first-seen
//! ```
//!
//! Every key is optional and unknown keys are rejected.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::admission::AdmissionPolicy;
use crate::error::{Result, ScheduleError};
use crate::render::OutputFormat;

/// Config file picked up from the working directory when none is named.
pub const DEFAULT_CONFIG_FILE: &str = "timetable.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Scanned for `*.txt` sources when none are given explicitly.
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Output file name without extension.
    pub output_name: String,
    pub format: OutputFormat,
    pub policy: AdmissionPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("resources/instructors"),
            output_dir: PathBuf::from("resources/output"),
            output_name: "schedule".to_string(),
            format: OutputFormat::default(),
            policy: AdmissionPolicy::default(),
        }
    }
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text).map_err(|e| ScheduleError::Config(e.to_string()))?;
        if config.output_name.trim().is_empty() {
            return Err(ScheduleError::Config("output_name must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Load a config file that must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| ScheduleError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    /// Load `path` if given, else [`DEFAULT_CONFIG_FILE`] if present, else
    /// the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// `<output_dir>/<output_name>.<extension of format>`.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", self.output_name, self.format.extension()))
    }
}
