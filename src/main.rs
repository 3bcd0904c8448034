use anyhow::{Context, Result};
use clap::Parser;

use sysdash::ui::monitor_tui::{run_monitor_app, MonitorAppConfig};
use sysdash::{init_logging, LogBuffer};

/// Tabbed terminal dashboard for live host metrics.
///
/// Keys: → next tab, ← previous tab, space pauses/resumes polling, Esc exits.
#[derive(Parser, Debug)]
#[command(name = "sysdash")]
#[command(version)]
#[command(about = "Tabbed terminal dashboard for live host metrics")]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let log = LogBuffer::default();
    init_logging(&log).context("Failed to initialize logging")?;

    run_monitor_app(MonitorAppConfig::default(), log).context("Failed to run system monitor")
}
