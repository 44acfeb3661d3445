//! Recursive batch converter to lossless WebP/WebM.
//!
//! Walks a directory tree, classifies files by extension, and re-encodes
//! images to lossless WebP and video/audio to WebM (lossless VP9 + Opus)
//! by driving ffmpeg through [`webmify_av`].

pub mod classify;
pub mod convert;
pub mod walk;

pub use classify::FileClass;
pub use convert::{Outcome, RunConfig, Summary};
