//! Per-file conversion dispatch and run orchestration.
//!
//! Files are processed one at a time; every ffmpeg invocation blocks until
//! it exits. A failed file never aborts the run — each outcome is recorded
//! and the walk moves on.

use crate::classify::{output_path, FileClass};
use crate::walk::media_files;
use std::path::Path;
use webmify_av::{encode, probe};

/// Immutable configuration for one run, fixed after argument parsing.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Overwrite existing outputs instead of skipping them.
    pub force: bool,
    /// Audio bitrate used when probing cannot determine one, e.g. `128k`.
    pub default_bitrate: String,
}

/// Terminal outcome of one conversion task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// ffmpeg ran and exited successfully.
    Converted,
    /// Nothing was attempted: output already present, or nothing to convert.
    Skipped,
    /// ffmpeg was invoked and failed.
    Failed,
}

/// Counts of outcomes over a whole run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Summary {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Converted => self.converted += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Failed => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.converted + self.skipped + self.failed
    }
}

/// Pick the audio bitrate for an Opus branch: probed if determinable,
/// otherwise the configured default.
fn resolve_bitrate(input: &Path, config: &RunConfig) -> String {
    match probe::audio_bitrate(input) {
        Some(bitrate) => {
            println!("  detected audio bitrate: {}", bitrate);
            bitrate
        }
        None => {
            println!(
                "  could not determine audio bitrate, using {} (default)",
                config.default_bitrate
            );
            config.default_bitrate.clone()
        }
    }
}

/// Convert a single classified file, returning its terminal outcome.
pub fn convert_file(input: &Path, class: FileClass, config: &RunConfig) -> Outcome {
    let output = output_path(input, class);

    if output.exists() && !config.force {
        println!("Skipping (already exists): {}", output.display());
        return Outcome::Skipped;
    }

    let args = match class {
        FileClass::Image => encode::webp_image_args(input, &output),
        FileClass::Video => {
            let audio = if probe::has_audio_stream(input) {
                encode::AudioMode::Opus {
                    bitrate: resolve_bitrate(input, config),
                }
            } else {
                println!("  no audio stream, output will be silent");
                encode::AudioMode::Strip
            };
            encode::webm_video_args(input, &output, &audio)
        }
        FileClass::Audio => {
            if !probe::has_audio_stream(input) {
                tracing::warn!(path = %input.display(), "no audio stream in audio file");
                println!("Warning: no audio stream in {}, skipping", input.display());
                return Outcome::Skipped;
            }
            let bitrate = resolve_bitrate(input, config);
            encode::webm_audio_args(input, &output, &bitrate)
        }
    };

    println!("Converting: {} -> {}", input.display(), output.display());
    match encode::run_ffmpeg(&args) {
        Ok(()) => Outcome::Converted,
        Err(e) => {
            tracing::warn!(path = %input.display(), error = %e, "conversion failed");
            println!("Error converting {}: {}", input.display(), e);
            if let Some(stderr) = e.diagnostic() {
                println!("{}", stderr.trim_end());
            }
            Outcome::Failed
        }
    }
}

/// Walk `root` and convert every classified file sequentially.
pub fn run(root: &Path, config: &RunConfig) -> Summary {
    let mut summary = Summary::default();
    for (path, class) in media_files(root) {
        tracing::debug!(path = %path.display(), ?class, "discovered");
        summary.record(convert_file(&path, class, config));
    }
    summary
}
