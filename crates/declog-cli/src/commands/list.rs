use crate::config;
use anyhow::{Context, Result};
use declog_store::Filter;
use std::path::PathBuf;

pub fn run(dir: Option<PathBuf>, status: String, json: bool) -> Result<()> {
    let filter: Filter = status
        .parse()
        .context(format!("unknown status filter '{}'", status))?;
    let mut store = config::open_store(dir)?;
    store.set_filter(filter);
    let decisions = store.decisions();

    if json {
        println!("{}", serde_json::to_string_pretty(&decisions)?);
        return Ok(());
    }

    if decisions.is_empty() {
        match filter {
            Filter::All => println!("No decisions yet"),
            other => println!("No {} decisions", other.to_string().to_lowercase()),
        }
        return Ok(());
    }

    for d in decisions {
        println!(
            "{}  {:<10} {}  {}",
            d.id(),
            format!("[{}]", d.status()),
            d.date(),
            d.title()
        );
    }
    Ok(())
}
