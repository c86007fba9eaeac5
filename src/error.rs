//! Error taxonomy: configuration faults are fatal, everything else is
//! contained at the per-program boundary by the runner.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration could not be loaded. Aborts the run before any program
/// is processed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid program '{name}': {reason}")]
    Invalid { name: String, reason: String },
}

/// The recording transport could not be invoked at all.
/// A transport that runs but exits non-zero is a result, not an error.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("could not launch '{bin}': {source}")]
    Launch {
        bin: String,
        #[source]
        source: std::io::Error,
    },
}

/// Tag writing failed. The recorded audio file is retained.
#[derive(Debug, Error)]
pub enum TagError {
    #[error("could not open '{path}' for tagging: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: lofty::error::LoftyError,
    },
    #[error("could not write tags to '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: lofty::error::LoftyError,
    },
}

/// Any fault that can occur while processing a single program.
#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("invalid time of day {hour:02}:{minute:02}")]
    InvalidTime { hour: u8, minute: u8 },
    #[error("could not create output directory '{path}': {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Tag(#[from] TagError),
}
