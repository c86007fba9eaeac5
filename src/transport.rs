//! Recording transport — captures a broadcast window into an audio file.
//!
//! The default implementation shells out to ffmpeg against the station's
//! timefree playlist endpoint and blocks until the capture finishes.
//! The argument list is built by a pure function so tests cover it
//! without launching a process.

use std::path::Path;
use std::process::Command;

use crate::error::TransportError;

/// Timefree playlist endpoint the capture reads from.
pub const TIMEFREE_PLAYLIST_URL: &str = "https://radiko.jp/v2/api/ts/playlist.m3u8";

/// Environment variable holding the timefree auth token, if one is needed.
/// Obtaining the token is outside this tool; it is passed through as a header.
pub const AUTHTOKEN_ENV: &str = "RADIKO_AUTHTOKEN";

/// Result of one transport invocation, shaped like a finished process.
/// Consumed once by the runner, never retained.
#[derive(Debug)]
pub struct RecordingResult {
    pub exit_code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl RecordingResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Anything that can capture a station's broadcast window into a file.
/// `start` and `end` are 12-digit `YYYYMMDDHHMM` stamps.
pub trait RecordingTransport {
    fn record(
        &self,
        station: &str,
        start: &str,
        end: &str,
        output: &Path,
    ) -> Result<RecordingResult, TransportError>;
}

/// ffmpeg-based transport over the timefree playlist endpoint.
pub struct FfmpegTransport {
    bin: String,
    auth_token: Option<String>,
}

impl FfmpegTransport {
    /// Transport using `ffmpeg` from PATH and the auth token from the
    /// environment, if set.
    pub fn new() -> Self {
        FfmpegTransport {
            bin: "ffmpeg".to_string(),
            auth_token: std::env::var(AUTHTOKEN_ENV).ok(),
        }
    }

    /// Transport with an explicit binary and token (used by tests).
    pub fn with_bin(bin: impl Into<String>, auth_token: Option<String>) -> Self {
        FfmpegTransport {
            bin: bin.into(),
            auth_token,
        }
    }
}

impl Default for FfmpegTransport {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the complete ffmpeg argument list for one capture.
/// Returns a `Vec<String>` ready for `Command::new("ffmpeg").args(...)`.
pub fn build_capture_args(
    station: &str,
    start: &str,
    end: &str,
    output: &Path,
    auth_token: Option<&str>,
) -> Vec<String> {
    let mut args: Vec<String> = Vec::new();

    args.push("-y".into());
    if let Some(token) = auth_token {
        args.push("-headers".into());
        args.push(format!("X-Radiko-Authtoken: {token}\r\n"));
    }
    args.push("-i".into());
    // Playlist stamps carry seconds; window stamps are minute-precise
    args.push(format!(
        "{TIMEFREE_PLAYLIST_URL}?station_id={station}&l=15&ft={start}00&to={end}00"
    ));
    args.push("-acodec".into());
    args.push("copy".into());
    args.push(output.to_string_lossy().into_owned());
    args
}

impl RecordingTransport for FfmpegTransport {
    fn record(
        &self,
        station: &str,
        start: &str,
        end: &str,
        output: &Path,
    ) -> Result<RecordingResult, TransportError> {
        let args = build_capture_args(station, start, end, output, self.auth_token.as_deref());
        let out = Command::new(&self.bin)
            .args(&args)
            .output()
            .map_err(|e| TransportError::Launch {
                bin: self.bin.clone(),
                source: e,
            })?;
        Ok(RecordingResult {
            exit_code: out.status.code().unwrap_or(-1),
            stdout: out.stdout,
            stderr: out.stderr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn capture_args_reference_station_and_window() {
        let out = PathBuf::from("/tmp/show_20250616.m4a");
        let args = build_capture_args("TBS", "202506160600", "202506160800", &out, None);
        assert_eq!(args[0], "-y");
        let url_pos = args.iter().position(|a| a == "-i").unwrap() + 1;
        let url = &args[url_pos];
        assert!(url.contains("station_id=TBS"));
        assert!(url.contains("ft=20250616060000"));
        assert!(url.contains("to=20250616080000"));
    }

    #[test]
    fn capture_args_copy_codec_and_output_last() {
        let out = PathBuf::from("/tmp/show.m4a");
        let args = build_capture_args("TBS", "202506160600", "202506160800", &out, None);
        let codec_pos = args.iter().position(|a| a == "-acodec").unwrap();
        assert_eq!(args[codec_pos + 1], "copy");
        assert_eq!(args.last().unwrap(), "/tmp/show.m4a");
    }

    #[test]
    fn capture_args_header_only_with_token() {
        let out = PathBuf::from("/tmp/show.m4a");
        let bare = build_capture_args("TBS", "202506160600", "202506160800", &out, None);
        assert!(!bare.contains(&"-headers".to_string()));

        let with = build_capture_args("TBS", "202506160600", "202506160800", &out, Some("tok"));
        let pos = with.iter().position(|a| a == "-headers").unwrap();
        assert!(with[pos + 1].contains("X-Radiko-Authtoken: tok"));
    }

    #[test]
    fn missing_binary_is_a_launch_error() {
        let transport = FfmpegTransport::with_bin("aircheck-no-such-binary", None);
        let result = transport.record(
            "TBS",
            "202506160600",
            "202506160800",
            Path::new("/tmp/x.m4a"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn recording_result_success_is_exit_zero() {
        let ok = RecordingResult {
            exit_code: 0,
            stdout: vec![],
            stderr: vec![],
        };
        let bad = RecordingResult {
            exit_code: 1,
            stdout: vec![],
            stderr: vec![],
        };
        assert!(ok.success());
        assert!(!bad.success());
    }
}
