//! External tool detection.

use crate::{Error, Result};
use std::path::PathBuf;
use std::process::Command;

/// The tools a conversion run depends on.
pub const REQUIRED_TOOLS: &[&str] = &["ffmpeg", "ffprobe"];

/// Information about an external tool.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Name of the tool.
    pub name: String,
    /// Whether the tool is available.
    pub available: bool,
    /// Version string if available.
    pub version: Option<String>,
    /// Path to the tool executable.
    pub path: Option<PathBuf>,
}

/// Check if a tool is available and get its information.
///
/// The tool is invoked with `-version`; it counts as available only when the
/// process could be spawned and exited with status zero.
///
/// # Example
///
/// ```no_run
/// use webmify_av::check_tool;
///
/// let info = check_tool("ffprobe");
/// if info.available {
///     println!("ffprobe version: {:?}", info.version);
/// }
/// ```
pub fn check_tool(name: &str) -> ToolInfo {
    let result = Command::new(name).arg("-version").output();

    match result {
        Ok(output) if output.status.success() => {
            let version = String::from_utf8_lossy(&output.stdout)
                .lines()
                .next()
                .map(|s| s.to_string());

            let path = which::which(name).ok();

            ToolInfo {
                name: name.to_string(),
                available: true,
                version,
                path,
            }
        }
        _ => ToolInfo {
            name: name.to_string(),
            available: false,
            version: None,
            path: None,
        },
    }
}

/// Check all required media tools (ffmpeg and ffprobe).
pub fn check_tools() -> Vec<ToolInfo> {
    REQUIRED_TOOLS.iter().map(|name| check_tool(name)).collect()
}

/// Require that ffmpeg and ffprobe are both available.
///
/// # Errors
///
/// Returns an error naming the first missing tool. Callers are expected to
/// treat this as fatal before any file is touched.
pub fn require_tools() -> Result<()> {
    for info in check_tools() {
        if !info.available {
            return Err(Error::tool_not_found(info.name));
        }
        tracing::debug!(
            tool = %info.name,
            version = info.version.as_deref().unwrap_or("unknown"),
            "tool available"
        );
    }
    Ok(())
}
