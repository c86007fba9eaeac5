//! Batch orchestration — one sequential pass over the configured programs.
//!
//! Faults are contained per program: a bad recording never aborts the
//! batch. Only configuration loading (upstream of this module) is fatal.

use chrono::NaiveDateTime;
use std::fmt;
use std::path::Path;
use tracing::{debug, error, info};

use crate::error::ProgramError;
use crate::output;
use crate::program::ProgramSpec;
use crate::tagger::MetadataTagger;
use crate::transport::RecordingTransport;
use crate::window;

/// Terminal outcome of one program in a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Output file already present; no transport or tagger invocation.
    Skipped,
    /// Recorded; no metadata configured.
    Recorded,
    /// Recorded and tagged.
    RecordedTagged,
    /// Transport exited non-zero.
    Failed { exit_code: i32 },
    /// A fault was contained at the per-program boundary.
    Faulted,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Skipped => write!(f, "skipped"),
            Outcome::Recorded => write!(f, "recorded"),
            Outcome::RecordedTagged => write!(f, "recorded+tagged"),
            Outcome::Failed { exit_code } => write!(f, "failed (exit code {})", exit_code),
            Outcome::Faulted => write!(f, "faulted"),
        }
    }
}

/// Processes programs in configuration order against injected transport
/// and tagger collaborators.
pub struct ProgramRunner<'a> {
    transport: &'a dyn RecordingTransport,
    tagger: &'a dyn MetadataTagger,
}

impl<'a> ProgramRunner<'a> {
    pub fn new(transport: &'a dyn RecordingTransport, tagger: &'a dyn MetadataTagger) -> Self {
        ProgramRunner { transport, tagger }
    }

    /// Process every program exactly once, in order. Individual failures
    /// and faults never abort the batch.
    pub fn run_all(&self, programs: &[ProgramSpec], now: NaiveDateTime) -> Vec<Outcome> {
        let total = programs.len();
        let mut outcomes = Vec::with_capacity(total);

        for (i, program) in programs.iter().enumerate() {
            info!("processing {}/{}: {}", i + 1, total, program.name);
            let outcome = match self.run_one(program, now) {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!("unexpected fault while processing {}: {}", program.name, e);
                    Outcome::Faulted
                }
            };
            outcomes.push(outcome);
        }

        let ok = outcomes
            .iter()
            .filter(|o| matches!(o, Outcome::Recorded | Outcome::RecordedTagged))
            .count();
        let skipped = outcomes.iter().filter(|o| **o == Outcome::Skipped).count();
        let failed = total - ok - skipped;
        info!(
            "batch finished: {} recorded, {} skipped, {} failed",
            ok, skipped, failed
        );
        outcomes
    }

    fn run_one(&self, program: &ProgramSpec, now: NaiveDateTime) -> Result<Outcome, ProgramError> {
        debug!("slot: {}", program.slot_display());

        let window = window::resolve_last_window(
            program.weekday,
            program.start_hour,
            program.start_minute,
            program.end_hour,
            program.end_minute,
            now,
        )?;
        let start = window.start_stamp();
        let end = window.end_stamp();
        debug!("resolved broadcast window: {} - {}", start, end);

        let output_path = output::plan(&program.output_dir, &program.name, &window.date_stamp())?;
        if output_path.exists() {
            info!(
                "[SKIP] {}: {} already exists{}",
                program.name,
                output_path.display(),
                size_suffix(&output_path)
            );
            return Ok(Outcome::Skipped);
        }

        info!(
            "[REC] {} | {} | {} - {} | {}",
            program.name,
            program.station,
            start,
            end,
            output_path.display()
        );
        let result = self
            .transport
            .record(&program.station, &start, &end, &output_path)?;
        debug!("transport exit code: {}", result.exit_code);
        if !result.stdout.is_empty() {
            debug!("transport stdout: {}", String::from_utf8_lossy(&result.stdout));
        }

        if !result.success() {
            error!("[FAIL] {} (exit code {})", program.name, result.exit_code);
            if !result.stderr.is_empty() {
                error!("transport stderr: {}", String::from_utf8_lossy(&result.stderr));
            }
            return Ok(Outcome::Failed {
                exit_code: result.exit_code,
            });
        }

        if let Some(metadata) = &program.metadata {
            self.tagger
                .write_tags(&output_path, metadata, &window.date_stamp())?;
            info!(
                "[OK] {} (tags written{})",
                program.name,
                size_suffix(&output_path)
            );
            Ok(Outcome::RecordedTagged)
        } else {
            info!("[OK] {}{}", program.name, size_suffix(&output_path));
            Ok(Outcome::Recorded)
        }
    }
}

fn size_suffix(path: &Path) -> String {
    match output::size_mb(path) {
        Some(mb) => format!(" ({:.1}MB)", mb),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_display() {
        assert_eq!(Outcome::Skipped.to_string(), "skipped");
        assert_eq!(Outcome::Recorded.to_string(), "recorded");
        assert_eq!(Outcome::RecordedTagged.to_string(), "recorded+tagged");
        assert_eq!(
            Outcome::Failed { exit_code: 2 }.to_string(),
            "failed (exit code 2)"
        );
        assert_eq!(Outcome::Faulted.to_string(), "faulted");
    }
}
