//! ffprobe-based audio stream probing.
//!
//! Two independent queries back the conversion dispatcher: whether a file has
//! any audio stream at all, and what bitrate its first audio stream uses.
//! Both degrade to a safe default on any failure — a file we cannot probe is
//! treated as having no audio rather than risking an audio encode of nothing.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use std::process::Command;

/// Opus accepts 6-510 kbps; the low end is widened to 8 to stay clear of
/// edge instability in the encoder.
const OPUS_MIN_KBPS: u128 = 8;
const OPUS_MAX_KBPS: u128 = 510;

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    #[allow(dead_code)]
    index: Option<u32>,
    bit_rate: Option<String>,
}

/// Run ffprobe over the selected streams of `path` and parse its JSON output.
fn probe_streams(path: &Path, selector: &str, entries: &str) -> Result<Vec<FfprobeStream>> {
    let output = Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-select_streams",
            selector,
            "-show_entries",
            entries,
            "-print_format",
            "json",
        ])
        .arg(path)
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::tool_not_found("ffprobe")
            } else {
                Error::Io(e)
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::tool_failed("ffprobe", stderr.to_string()));
    }

    let parsed: FfprobeOutput = serde_json::from_slice(&output.stdout)?;
    Ok(parsed.streams)
}

/// Check whether a file has at least one audio stream.
///
/// Any failure (ffprobe missing, non-zero exit, malformed output) is treated
/// as "no audio".
pub fn has_audio_stream(path: &Path) -> bool {
    match probe_streams(path, "a", "stream=index") {
        Ok(streams) => !streams.is_empty(),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "audio stream probe failed");
            false
        }
    }
}

/// Probe the bitrate of the first audio stream, formatted as `<kbps>k`.
///
/// Returns `None` when the bitrate cannot be determined: probe failure, a
/// missing or non-numeric `bit_rate` field, or a reported value of exactly 0
/// (ffprobe's way of saying variable/unknown). Determined values are clamped
/// to the Opus range before formatting.
pub fn audio_bitrate(path: &Path) -> Option<String> {
    let streams = match probe_streams(path, "a:0", "stream=bit_rate") {
        Ok(streams) => streams,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "bitrate probe failed");
            return None;
        }
    };

    let raw = streams.first()?.bit_rate.as_deref()?;
    parse_bitrate(raw)
}

/// Convert a raw ffprobe `bit_rate` value (bits per second) into a clamped
/// `<kbps>k` string.
fn parse_bitrate(raw: &str) -> Option<String> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let kbps = match raw.parse::<u128>() {
        // Zero means variable or undeterminable bitrate.
        Ok(0) => return None,
        Ok(bps) => (bps / 1000).clamp(OPUS_MIN_KBPS, OPUS_MAX_KBPS),
        // Digits that overflow even u128 can only sit above the clamp range.
        Err(_) => OPUS_MAX_KBPS,
    };
    Some(format!("{}k", kbps))
}
