//! Extension-based file classification.
//!
//! Each supported extension belongs to exactly one class; everything else is
//! ignored by the walker. Matching is case-insensitive.

use std::path::{Path, PathBuf};

/// Extensions converted to lossless WebP.
const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "tiff", "tif", "webp", "apng",
];

/// Extensions converted to WebM (lossless VP9, optional Opus audio).
const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "avi", "mov", "mkv", "flv", "wmv", "m4v", "mpg", "mpeg",
];

/// Extensions converted to audio-only WebM (Opus).
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "flac", "wav", "aac", "ogg", "m4a", "wma", "opus"];

/// Conversion class of a discovered file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileClass {
    Image,
    Video,
    Audio,
}

impl FileClass {
    /// Extension of the output this class produces.
    pub fn output_extension(self) -> &'static str {
        match self {
            FileClass::Image => "webp",
            FileClass::Video | FileClass::Audio => "webm",
        }
    }
}

/// Classify a path by its extension, or `None` for unsupported files.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use webmify::classify::{classify, FileClass};
///
/// assert_eq!(classify(Path::new("photo.JPG")), Some(FileClass::Image));
/// assert_eq!(classify(Path::new("clip.mkv")), Some(FileClass::Video));
/// assert_eq!(classify(Path::new("notes.txt")), None);
/// ```
pub fn classify(path: &Path) -> Option<FileClass> {
    let ext = path.extension().and_then(|ext| ext.to_str())?.to_lowercase();
    let ext = ext.as_str();

    if IMAGE_EXTENSIONS.contains(&ext) {
        Some(FileClass::Image)
    } else if VIDEO_EXTENSIONS.contains(&ext) {
        Some(FileClass::Video)
    } else if AUDIO_EXTENSIONS.contains(&ext) {
        Some(FileClass::Audio)
    } else {
        None
    }
}

/// Destination path for a source file: same directory, same stem, with the
/// extension replaced by the class output extension.
pub fn output_path(input: &Path, class: FileClass) -> PathBuf {
    input.with_extension(class.output_extension())
}
