mod app;
mod cli;
mod domain;
mod infra;
mod ui;

use crate::app::MenuModel;
use crate::cli::CliInvocation;
use crate::domain::Selection;
use crate::infra::{Console, ConsoleError, load_history, run_menu};
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;
use time::UtcOffset;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "CFGMENU_LOG";

#[derive(Debug, Error)]
enum MainError {
    #[error(transparent)]
    Console(#[from] ConsoleError),

    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

fn main() {
    // Must run while the process is still single-threaded.
    let local_offset = UtcOffset::current_local_offset();
    init_logging();

    let offset = local_offset.unwrap_or_else(|error| {
        tracing::warn!(%error, "local UTC offset unavailable; showing times in UTC");
        UtcOffset::UTC
    });

    let selection = match run_main(offset) {
        Ok(selection) => selection,
        Err(error) => {
            let mut err = io::stderr().lock();
            let _ = writeln!(err, "{error}");
            Selection::NO_CHANGE
        }
    };
    std::process::exit(exit_code(selection));
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_main(offset: UtcOffset) -> Result<Selection, MainError> {
    let args = std::env::args().collect::<Vec<_>>();
    let invocation = match crate::cli::parse_invocation(&args) {
        Ok(invocation) => invocation,
        Err(error) => {
            let mut err = io::stderr().lock();
            let _ = writeln!(err, "{error}");
            let _ = writeln!(err);
            let _ = write!(err, "{}", crate::cli::help_text());
            std::process::exit(2);
        }
    };

    match invocation {
        CliInvocation::PrintHelp => {
            let mut out = io::stdout().lock();
            write!(out, "{}", crate::cli::help_text())?;
            Ok(Selection::NO_CHANGE)
        }
        CliInvocation::PrintVersion => {
            let mut out = io::stdout().lock();
            writeln!(out, "{}", env!("CARGO_PKG_VERSION"))?;
            Ok(Selection::NO_CHANGE)
        }
        CliInvocation::Menu { filename: None } => {
            let mut out = io::stdout().lock();
            writeln!(out, "Filename required.")?;
            Ok(Selection::NO_CHANGE)
        }
        CliInvocation::Menu {
            filename: Some(filename),
        } => choose_config_version(&filename, offset),
    }
}

fn choose_config_version(filename: &Path, offset: UtcOffset) -> Result<Selection, MainError> {
    let entries = match load_history(filename) {
        Ok(entries) => entries,
        Err(error) => {
            tracing::warn!(%error, "history unavailable");
            let mut out = io::stdout().lock();
            writeln!(out, "Unable to find previous revisions.\n")?;
            return Ok(Selection::NO_CHANGE);
        }
    };

    if entries.is_empty() {
        tracing::info!(path = %filename.display(), "history is empty; nothing to offer");
        return Ok(Selection::NO_CHANGE);
    }

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut console = Console::new(stdin, stdout);
    Ok(run_menu(MenuModel::new(entries), &mut console, offset)?)
}

/// Exit statuses are a single byte on Unix; larger selections would wrap.
fn exit_code(selection: Selection) -> i32 {
    let value = selection.get();
    if value > 255 {
        tracing::warn!(selection = value, "selection does not fit in an exit status");
    }
    i32::try_from(value).unwrap_or(0)
}
