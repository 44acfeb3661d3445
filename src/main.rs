mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use webmify::convert::{self, RunConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG if set, otherwise pick a default from the verbose flag.
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "webmify=debug,webmify_av=debug".to_string()
        } else {
            "webmify=info,webmify_av=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    // Both tools must be functional before any file is touched.
    if let Err(e) = webmify_av::require_tools() {
        anyhow::bail!("{}. Install FFmpeg and make sure it is on PATH.", e);
    }

    let root = cli
        .input_dir
        .canonicalize()
        .map_err(|e| anyhow::anyhow!("cannot resolve {}: {}", cli.input_dir.display(), e))?;
    if !root.is_dir() {
        anyhow::bail!("{} is not a directory", root.display());
    }

    let config = RunConfig {
        force: cli.force,
        default_bitrate: cli.default_bitrate,
    };

    tracing::info!(root = %root.display(), force = config.force, "starting conversion run");
    let summary = convert::run(&root, &config);

    println!(
        "Done: {} converted, {} skipped, {} failed ({} files)",
        summary.converted,
        summary.skipped,
        summary.failed,
        summary.total()
    );

    // Per-file failures do not change the process exit code.
    Ok(())
}
