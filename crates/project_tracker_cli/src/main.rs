//! Terminal front end for the project tracker.
//!
//! # Responsibility
//! - Parse process flags and start logging.
//! - Own the single `ProjectStore` and drive it from line commands.

mod command;
mod render;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use project_tracker_core::{default_log_level, init_logging};
use session::Session;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "project-tracker", version, about = "Track active and finished projects")]
struct Args {
    /// One of trace|debug|info|warn|error.
    #[arg(long, default_value_t = default_log_level().to_string())]
    log_level: String,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Read commands from this file instead of stdin.
    #[arg(long)]
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(log_dir) = &args.log_dir {
        let log_dir = log_dir
            .to_str()
            .context("log directory must be valid UTF-8")?;
        init_logging(&args.log_level, log_dir).context("failed to initialize logging")?;
    }

    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut session = Session::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", render::banner())?;

    for line in input.lines() {
        let line = line.context("failed to read command")?;
        let reply = session.handle_line(&line);
        if !reply.output.is_empty() {
            writeln!(out, "{}", reply.output)?;
        }
        if reply.quit {
            break;
        }
    }
    out.flush()?;
    Ok(())
}
