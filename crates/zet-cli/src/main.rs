// crates/zet-cli/src/main.rs - CLI Application Entry Point
//
// ARCHITECTURE OVERVIEW:
// ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────────┐
// │   User Input    │───▶│   CLI Parser     │───▶│  Command Handlers   │
// │ (clap commands) │    │ (main function)  │    │ (commands/*.rs)     │
// └─────────────────┘    └──────────────────┘    └─────────────────────┘
//                                 │                        │
//                                 ▼                        ▼
//                        ┌──────────────────┐    ┌─────────────────────┐
//                        │     Context      │    │     Services        │
//                        │ (config + runner)│    │ (note files, editor)│
//                        └──────────────────┘    └─────────────────────┘
//
// EXIT CODES:
// - 0: command ran (tolerated I/O errors are printed with the output)
// - 1: no command, unknown command, missing parameter, ZET_DIR unset,
//      or the editor could not be launched
//
// User-facing messages, fatal or not, go to stdout. Only tracing
// diagnostics, clap's own parse errors and the editor exit warning use
// stderr.
//
// EXAMPLE USAGE:
// ```bash
// export ZET_DIR=~/zet
// zet add                      # new note for the current minute, opens $EDITOR
// zet ls                       # first line of every note
// zet v 2403051412             # print a note
// zet g 'rust|cargo'           # print every note matching the pattern
// ```

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use zet_core::{SystemRunner, ZetConfig};

mod cli; // Command-line interface definitions (pure data structures)
mod commands; // Command implementations
mod context; // Configuration and runner handed to every command
mod services; // Note files and editor integration
#[cfg(test)]
mod test_support;

use cli::Cli;
use context::Context;

fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too and are not failures
            if let Err(io_err) = err.print() {
                debug!(error = %io_err, "could not print clap output");
            }
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            // Fatal messages share stdout with everything else zet prints
            if let Err(io_err) = writeln!(io::stdout(), "{err:#}") {
                debug!(error = %io_err, "could not print error");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    // No command at all: usage, and a failing status for scripts
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(ExitCode::FAILURE);
    };

    let config = ZetConfig::resolve(cli.dir.map(PathBuf::from), cli.editor)?;
    let ctx = Context::new(config, SystemRunner);
    debug!(
        root = %ctx.config().root().display(),
        editor = %ctx.config().editor(),
        "configuration resolved"
    );

    let mut out = io::stdout().lock();
    commands::dispatch(&ctx, command, &mut out)?;
    out.flush()?;

    Ok(ExitCode::SUCCESS)
}

/// Diagnostics go to stderr so they never mix with note output.
/// `RUST_LOG=debug zet grep foo` shows every spawned process.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
