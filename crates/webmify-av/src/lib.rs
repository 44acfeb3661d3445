//! # webmify-av
//!
//! ffmpeg/ffprobe subprocess layer for lossless WebP/WebM encoding.
//!
//! This crate provides functionality for:
//! - Detecting that ffmpeg and ffprobe are installed and functional
//! - Probing a media file for audio streams and their bitrate
//! - Building and running ffmpeg invocations for the three encode shapes
//!   (lossless WebP image, lossless VP9 WebM video, Opus-only WebM audio)
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use webmify_av::{encode, probe};
//!
//! let input = Path::new("clip.mp4");
//! let bitrate = probe::audio_bitrate(input).unwrap_or_else(|| "128k".to_string());
//! let audio = if probe::has_audio_stream(input) {
//!     encode::AudioMode::Opus { bitrate }
//! } else {
//!     encode::AudioMode::Strip
//! };
//! let args = encode::webm_video_args(input, Path::new("clip.webm"), &audio);
//! encode::run_ffmpeg(&args)?;
//! # Ok::<(), webmify_av::Error>(())
//! ```

mod error;
pub mod encode;
pub mod probe;
pub mod tools;

// Re-exports
pub use error::{Error, Result};
pub use tools::{check_tool, check_tools, require_tools, ToolInfo};
