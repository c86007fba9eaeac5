//! Program configuration — the JSON file listing which broadcasts to record.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Top-level configuration: an ordered list of programs to process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub programs: Vec<ProgramSpec>,
}

/// One recurring weekly program. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramSpec {
    /// Unique per run; used in output file names.
    pub name: String,
    /// Station identifier understood by the recording transport.
    pub station: String,
    /// Broadcast day, 0=Monday..6=Sunday.
    pub weekday: u8,
    pub start_hour: u8,
    pub start_minute: u8,
    pub end_hour: u8,
    pub end_minute: u8,
    /// Directory the recording is written into (created if missing).
    pub output_dir: PathBuf,
    /// Optional descriptive tags to write after a successful recording.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Descriptive tags for a recorded file. All fields optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

impl Config {
    /// Load and validate a configuration file. Any failure here is fatal;
    /// no program is processed on a bad config.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = serde_json::from_str(&data).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for program in &self.programs {
            program.validate()?;
        }
        Ok(())
    }
}

impl ProgramSpec {
    fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::Invalid {
            name: self.name.clone(),
            reason,
        };
        if self.name.trim().is_empty() {
            return Err(invalid("name must not be empty".to_string()));
        }
        if self.station.trim().is_empty() {
            return Err(invalid("station must not be empty".to_string()));
        }
        if self.weekday > 6 {
            return Err(invalid(format!(
                "weekday {} out of range 0-6 (0=Monday)",
                self.weekday
            )));
        }
        for (label, hour) in [("start_hour", self.start_hour), ("end_hour", self.end_hour)] {
            if hour > 23 {
                return Err(invalid(format!("{} {} out of range 0-23", label, hour)));
            }
        }
        for (label, minute) in [
            ("start_minute", self.start_minute),
            ("end_minute", self.end_minute),
        ] {
            if minute > 59 {
                return Err(invalid(format!("{} {} out of range 0-59", label, minute)));
            }
        }
        Ok(())
    }

    /// Format the weekly slot for display, e.g. "Mon 06:00-08:00".
    pub fn slot_display(&self) -> String {
        let names = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
        let day = names.get(self.weekday as usize).copied().unwrap_or("?");
        format!(
            "{} {:02}:{:02}-{:02}:{:02}",
            day, self.start_hour, self.start_minute, self.end_hour, self.end_minute
        )
    }
}
