//! Broadcast window resolution — maps a recurring weekly time slot to its
//! most recent completed occurrence.

use chrono::{Datelike, Duration, NaiveDateTime};

use crate::error::ProgramError;

/// A concrete start/end pair for one occurrence of a weekly broadcast.
/// Derived from the clock on every run; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BroadcastWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl BroadcastWindow {
    /// Start bound as a 12-digit `YYYYMMDDHHMM` stamp.
    pub fn start_stamp(&self) -> String {
        self.start.format("%Y%m%d%H%M").to_string()
    }

    /// End bound as a 12-digit `YYYYMMDDHHMM` stamp.
    pub fn end_stamp(&self) -> String {
        self.end.format("%Y%m%d%H%M").to_string()
    }

    /// Broadcast date as an 8-digit `YYYYMMDD` stamp, taken from the start bound.
    pub fn date_stamp(&self) -> String {
        self.start.format("%Y%m%d").to_string()
    }
}

/// Resolve the most recent *completed* occurrence of a weekly window.
///
/// `weekday` is 0=Monday..6=Sunday. The candidate day is the latest day on
/// or before `now` falling on `weekday`; if the candidate window's end is
/// still in the future (strictly `end > now`, so a broadcast currently
/// airing counts as not yet finished), both bounds shift back exactly
/// seven days. An end exactly at `now` keeps the current week.
pub fn resolve_last_window(
    weekday: u8,
    start_hour: u8,
    start_minute: u8,
    end_hour: u8,
    end_minute: u8,
    now: NaiveDateTime,
) -> Result<BroadcastWindow, ProgramError> {
    let days_since =
        (now.weekday().num_days_from_monday() as i64 - weekday as i64).rem_euclid(7);
    let day = now.date() - Duration::days(days_since);

    let mut start = day
        .and_hms_opt(start_hour as u32, start_minute as u32, 0)
        .ok_or(ProgramError::InvalidTime {
            hour: start_hour,
            minute: start_minute,
        })?;
    let mut end = day
        .and_hms_opt(end_hour as u32, end_minute as u32, 0)
        .ok_or(ProgramError::InvalidTime {
            hour: end_hour,
            minute: end_minute,
        })?;

    // Broadcast has not finished yet: take last week's occurrence.
    if end > now {
        start -= Duration::days(7);
        end -= Duration::days(7);
    }

    Ok(BroadcastWindow { start, end })
}
