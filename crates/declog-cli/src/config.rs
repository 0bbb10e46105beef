//! Runtime configuration: journal location and logging.

use anyhow::{Context, Result};
use clap::ValueEnum;
use declog_store::{FileBlobStore, Journal, State, Store};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

/// Overrides journal discovery when set.
pub const DIR_ENV: &str = "DECLOG_DIR";
/// `EnvFilter` directives for log output.
pub const LOG_ENV: &str = "DECLOG_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Install the global subscriber. Logs go to stderr so they never mix with
/// command output.
pub fn init_tracing(format: LogFormat) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let subscriber = fmt().with_env_filter(filter).with_writer(std::io::stderr);

    match format {
        LogFormat::Text => subscriber
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to init tracing: {}", e)),
        LogFormat::Json => subscriber
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to init tracing: {}", e)),
    }
}

/// Where the journal lives: the explicit directory if given, otherwise the
/// nearest `.declog/` at or above the working directory.
pub fn open_journal(dir: Option<PathBuf>) -> Result<Journal> {
    match dir {
        Some(dir) => Journal::open(&dir)
            .with_context(|| format!("no journal in {}", dir.display())),
        None => {
            let cwd = env::current_dir()?;
            Journal::discover(&cwd).context("not a declog journal (run `declog init`)")
        }
    }
}

/// Open the journal's store with a change logger attached.
pub fn open_store(dir: Option<PathBuf>) -> Result<Store<FileBlobStore>> {
    let journal = open_journal(dir)?;
    let mut store = journal.store();
    store.subscribe(|state: &State| {
        tracing::debug!(
            decisions = state.decisions.len(),
            filter = %state.filter,
            "journal state"
        );
    });
    Ok(store)
}
