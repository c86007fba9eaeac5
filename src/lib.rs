//! aircheck — scheduled radio-broadcast recorder.
//!
//! Resolves each configured program's most recent completed weekly
//! broadcast window, captures it through an external recording transport,
//! and writes descriptive tags into the resulting file.
//! The CLI binary consumes this crate.

pub mod error;
pub mod output;
pub mod program;
pub mod runner;
pub mod tagger;
pub mod transport;
pub mod window;
