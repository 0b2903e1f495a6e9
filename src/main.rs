use anyhow::Context;
use clap::Parser;
use roster::config::Config;
use roster::ui;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Terminal client for the student roster service.
#[derive(Parser, Debug)]
#[command(name = "roster", version, about = "Browse, add and delete students from the terminal")]
struct Cli {
    /// Path to an alternate config file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Service base URL, overriding the config file.
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Per-request timeout in seconds, overriding the config file.
    #[arg(long, value_name = "SECONDS")]
    timeout_secs: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    apply_overrides(&mut config, &cli);
    config
        .validate()
        .context("configuration rejected after applying command line flags")?;

    ui::runtime::run(&config).context("terminal session failed")?;
    Ok(())
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(api_url) = &cli.api_url {
        config.api.base_url = api_url.clone();
    }
    if let Some(timeout) = cli.timeout_secs {
        config.api.timeout_seconds = timeout;
    }
}

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default: stdout belongs to the TUI. Set the
/// `ROSTER_LOG` env var to a file path to enable it. The actual file gets
/// a timestamp and pid suffix so concurrent instances do not clobber each
/// other.
fn init_tracing() {
    let Ok(log_path) = std::env::var("ROSTER_LOG") else {
        return;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{log_path}.{timestamp}.{pid}");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: failed to create log file: {unique_path}");
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
