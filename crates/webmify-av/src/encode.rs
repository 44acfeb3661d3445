//! ffmpeg argument construction and synchronous execution.
//!
//! Argument builders are pure so the exact command shape can be tested
//! without an ffmpeg install; `run_ffmpeg` is the single execution path.

use crate::{Error, Result};
use std::path::Path;
use std::process::Command;

/// How the audio stream of a WebM video output is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioMode {
    /// Re-encode the audio with libopus at the given bitrate (e.g. `128k`).
    Opus { bitrate: String },
    /// Drop the audio stream entirely (`-an`).
    Strip,
}

/// Arguments for a lossless still-image re-encode to WebP.
///
/// Animation looping metadata is preserved (`-loop 0`) and the compression
/// effort is set to the libwebp maximum.
pub fn webp_image_args(input: &Path, output: &Path) -> Vec<String> {
    let mut args = vec!["-i".into(), input.display().to_string()];
    args.extend(
        [
            "-c:v",
            "libwebp",
            "-lossless",
            "1",
            "-compression_level",
            "6",
            "-loop",
            "0",
            "-an",
            "-y",
        ]
        .map(String::from),
    );
    args.push(output.display().to_string());
    args
}

/// Arguments for a lossless VP9 video re-encode to WebM, with the audio
/// branch chosen by `audio`.
pub fn webm_video_args(input: &Path, output: &Path, audio: &AudioMode) -> Vec<String> {
    let mut args = vec!["-i".into(), input.display().to_string()];
    args.extend(
        [
            "-c:v",
            "libvpx-vp9",
            "-lossless",
            "1",
            "-b:v",
            "0",
            "-pix_fmt",
            "yuva420p",
        ]
        .map(String::from),
    );
    match audio {
        AudioMode::Opus { bitrate } => {
            args.extend(["-c:a".into(), "libopus".into(), "-b:a".into(), bitrate.clone()]);
        }
        AudioMode::Strip => args.push("-an".into()),
    }
    args.push("-y".into());
    args.push(output.display().to_string());
    args
}

/// Arguments for an audio-only Opus re-encode to WebM.
pub fn webm_audio_args(input: &Path, output: &Path, bitrate: &str) -> Vec<String> {
    vec![
        "-i".into(),
        input.display().to_string(),
        "-c:a".into(),
        "libopus".into(),
        "-b:a".into(),
        bitrate.into(),
        "-y".into(),
        output.display().to_string(),
    ]
}

/// Run ffmpeg with the given arguments, blocking until it exits.
///
/// stdout/stderr are captured, not streamed. A non-zero exit becomes
/// [`Error::ToolFailed`] carrying the captured stderr text.
pub fn run_ffmpeg(args: &[String]) -> Result<()> {
    tracing::debug!(?args, "running ffmpeg");

    let output = Command::new("ffmpeg").args(args).output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::tool_not_found("ffmpeg")
        } else {
            Error::Io(e)
        }
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::tool_failed("ffmpeg", stderr.into_owned()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> (&'static Path, &'static Path) {
        (Path::new("/media/in.mp4"), Path::new("/media/out.webm"))
    }

    #[test]
    fn test_webp_image_args() {
        let args = webp_image_args(Path::new("pic.png"), Path::new("pic.webp"));
        assert_eq!(
            args,
            [
                "-i",
                "pic.png",
                "-c:v",
                "libwebp",
                "-lossless",
                "1",
                "-compression_level",
                "6",
                "-loop",
                "0",
                "-an",
                "-y",
                "pic.webp"
            ]
        );
    }

    #[test]
    fn test_webm_video_args_with_audio() {
        let (input, output) = paths();
        let audio = AudioMode::Opus {
            bitrate: "192k".to_string(),
        };
        let args = webm_video_args(input, output, &audio);
        assert_eq!(
            args,
            [
                "-i",
                "/media/in.mp4",
                "-c:v",
                "libvpx-vp9",
                "-lossless",
                "1",
                "-b:v",
                "0",
                "-pix_fmt",
                "yuva420p",
                "-c:a",
                "libopus",
                "-b:a",
                "192k",
                "-y",
                "/media/out.webm"
            ]
        );
    }

    #[test]
    fn test_webm_video_args_without_audio() {
        let (input, output) = paths();
        let args = webm_video_args(input, output, &AudioMode::Strip);
        assert!(args.contains(&"-an".to_string()));
        assert!(!args.contains(&"-c:a".to_string()));
        assert!(!args.contains(&"libopus".to_string()));
    }

    #[test]
    fn test_webm_audio_args() {
        let args = webm_audio_args(Path::new("song.flac"), Path::new("song.webm"), "128k");
        assert_eq!(
            args,
            [
                "-i",
                "song.flac",
                "-c:a",
                "libopus",
                "-b:a",
                "128k",
                "-y",
                "song.webm"
            ]
        );
    }

    #[test]
    fn test_output_is_last_argument() {
        let (input, output) = paths();
        let args = webm_video_args(input, output, &AudioMode::Strip);
        assert_eq!(args.last().map(String::as_str), Some("/media/out.webm"));
    }
}
