//! fsh, an interactive filesystem shell.
//!
//! # Usage
//!
//! - `fsh`: interactive REPL rooted at the current directory
//! - `fsh -c "mkdir demo"`: run one command line and exit
//!
//! Every session writes `log/<YYYY-MM-DD_HH-MM-SS>.log` under the start
//! directory unless logging is disabled in `~/.fsh/config.json`.

mod helpers;
mod repl;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::{debug, warn};

use fsh_core::config::{load_config, Config};
use fsh_core::SessionLog;
use fsh_ops::{Dispatcher, Session};

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// fsh, a small interactive filesystem shell
#[derive(Parser, Debug)]
#[command(name = "fsh", version, about, long_about = None)]
struct Cli {
    /// Run a single command line and exit. Omit for REPL mode.
    #[arg(short, long)]
    command: Option<String>,

    /// Alternate config file (default: ~/.fsh/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for session log files
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Do not load or save line history
    #[arg(long, default_value_t = false)]
    no_history: bool,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Cli {
    /// Command-line flags take precedence over file and env settings.
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(dir) = &self.log_dir {
            config.log.dir = dir.display().to_string();
        }
        if self.no_history {
            config.shell.history = false;
        }
    }
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = load_config(cli.config.as_deref());
    cli.apply_overrides(&mut config);

    let start_dir = std::env::current_dir().context("failed to read current directory")?;
    let mut log = open_session_log(&config, &start_dir);

    let session = Session::new(start_dir).with_process_sync(config.shell.sync_process_cwd);
    let mut dispatcher = Dispatcher::new(session);

    match cli.command {
        Some(line) => repl::run_once(&mut dispatcher, &mut log, &line),
        None => repl::run(&mut dispatcher, &mut log, &config.shell)?,
    }

    Ok(())
}

/// Open the session log, falling back to console-only output on failure.
fn open_session_log(config: &Config, start_dir: &Path) -> SessionLog {
    if !config.log.enabled {
        debug!("session log disabled");
        return SessionLog::console_only();
    }

    let dir = config.log.resolve_dir(start_dir);
    match SessionLog::open(&dir) {
        Ok(log) => log,
        Err(e) => {
            warn!(error = %e, "continuing without a log file");
            eprintln!("{} {e}", "Logger error:".red().bold());
            SessionLog::console_only()
        }
    }
}

/// Initialize tracing/logging.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("fsh=debug,fsh_core=debug,fsh_ops=debug,info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
