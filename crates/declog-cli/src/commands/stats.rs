use crate::config;
use anyhow::Result;
use std::path::PathBuf;

pub fn run(dir: Option<PathBuf>, json: bool) -> Result<()> {
    let store = config::open_store(dir)?;
    let stats = store.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("Total:     {}", stats.total);
        println!("Pending:   {}", stats.pending);
        println!("Executed:  {}", stats.executed);
        println!("Evaluated: {}", stats.evaluated);
    }
    Ok(())
}
