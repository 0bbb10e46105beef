use anyhow::{Context, Result};
use declog_store::Journal;
use std::env;
use std::path::PathBuf;

pub fn run(dir: Option<PathBuf>) -> Result<()> {
    let root = match dir {
        Some(dir) => dir,
        None => env::current_dir().context("failed to get current directory")?,
    };
    let journal = Journal::init(&root).context("failed to initialize journal")?;
    println!("Initialized empty decision journal in {}", journal.dir().display());
    Ok(())
}
