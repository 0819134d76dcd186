use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mdstudio::app::{self, Launch};
use mdstudio_core::config::Preferences;
use mdstudio_core::BridgeMode;

/// Single-document Markdown editor shell.
#[derive(Debug, Parser)]
#[command(name = "mdstudio", version)]
struct Cli {
    /// Run without filesystem paths: saves become downloads.
    #[arg(long)]
    sandboxed: bool,

    /// Preferences file (defaults to the platform config directory).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Markdown files to open; the first one is loaded.
    files: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mdstudio=info,mdstudio_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let prefs_path = cli.config.or_else(Preferences::default_path);
    let mut prefs = match &prefs_path {
        Some(path) => Preferences::load_or_default(path),
        None => Preferences::default(),
    };
    if cli.sandboxed {
        prefs.mode = BridgeMode::Sandboxed;
    }

    app::run(Launch {
        prefs,
        prefs_path,
        files: cli.files,
    })
    .context("shell terminated with an I/O error")
}
