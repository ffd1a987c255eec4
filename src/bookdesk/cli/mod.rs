//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Handles argument parsing
//! - Sets up logging
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Parses arguments, builds the API, hands the console to the shell
//! - [`setup`]: Argument definitions
//! - [`shell`]: The interactive menu loop
//! - [`print`]: Output formatting functions

mod print;
mod setup;
mod shell;

use bookdesk::api::BookdeskApi;
use bookdesk::config::{resolve_data_dir, BookdeskConfig, DATA_DIR_ENV};
use bookdesk::error::Result;
use bookdesk::store::fs::FileStore;
use clap::Parser;
use setup::Cli;
use shell::Shell;
use std::io;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let api = init_api(&cli);
    let mut shell = Shell::new(api, io::stdin().lock(), io::stdout().lock());
    shell.run()
}

/// Logs go to stderr so they never mix with the menu on stdout.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "bookdesk=debug"
    } else {
        "bookdesk=error"
    };

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}

fn init_api(cli: &Cli) -> BookdeskApi<FileStore> {
    let data_dir = resolve_data_dir(cli.data_dir.clone(), std::env::var(DATA_DIR_ENV).ok());
    debug!("Using data directory {}", data_dir.display());

    let config = BookdeskConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!("Ignoring config: {}", e);
        eprintln!("Warning: ignoring config, using defaults: {}", e);
        BookdeskConfig::default()
    });

    let store =
        FileStore::new(data_dir).with_file_names(&config.clients_file, &config.bookings_file);
    BookdeskApi::new(store)
}
