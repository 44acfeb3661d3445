use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "webmify")]
#[command(author, version, about = "Convert media trees to lossless WebP/WebM with ffmpeg")]
pub struct Cli {
    /// Root directory to scan (defaults to the current directory)
    #[arg(default_value = ".")]
    pub input_dir: PathBuf,

    /// Overwrite existing output files
    #[arg(long)]
    pub force: bool,

    /// Fallback audio bitrate when probing cannot determine one (e.g. 64k, 128k, 192k)
    #[arg(long, default_value = "128k")]
    pub default_bitrate: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["webmify"]);
        assert_eq!(cli.input_dir, PathBuf::from("."));
        assert!(!cli.force);
        assert_eq!(cli.default_bitrate, "128k");
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::parse_from([
            "webmify",
            "/media/library",
            "--force",
            "--default-bitrate",
            "192k",
        ]);
        assert_eq!(cli.input_dir, PathBuf::from("/media/library"));
        assert!(cli.force);
        assert_eq!(cli.default_bitrate, "192k");
    }
}
