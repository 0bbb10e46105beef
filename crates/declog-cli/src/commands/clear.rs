use crate::config;
use anyhow::Result;
use std::path::PathBuf;

pub fn run(dir: Option<PathBuf>, yes: bool) -> Result<()> {
    if !yes {
        anyhow::bail!("refusing to clear the journal without --yes");
    }
    let mut store = config::open_store(dir)?;
    let removed = store.stats().total;
    store.clear()?;
    println!("Removed {} decisions", removed);
    Ok(())
}
