//! Jung - Console Entry Point
//!
//! This is the line-based console front-end. The actual implementation is in
//! the `jung` library.

use anyhow::{Context, Result};
use clap::Parser;
use jung::{Jung, JungConfig};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

const SEPARATOR: &str = "____________________________________________________________";

/// Jung - your personal task-tracking assistant
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the task file (overrides the config file)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Path to a TOML config file (default: ./jung.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "jung=debug" } else { "jung=warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let mut config = JungConfig::discover(args.config.as_deref())?;
    if let Some(file) = args.file {
        config.data_file = file;
    }
    info!("Using task file {}", config.data_file.display());

    let mut jung = Jung::new(&config);
    run_console(&mut jung)
}

/// Read commands from stdin until `bye` or end of input
fn run_console(jung: &mut Jung) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    show(&mut stdout, &jung.initialize())?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        let result = jung.process_command(&line);
        show(&mut stdout, &result.message)?;
        if result.should_exit {
            return Ok(());
        }
    }

    info!("End of input, exiting");
    Ok(())
}

fn show(out: &mut impl Write, message: &str) -> Result<()> {
    writeln!(out, "{}\n{}\n{}", SEPARATOR, message, SEPARATOR)
        .context("Failed to write to stdout")?;
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}
