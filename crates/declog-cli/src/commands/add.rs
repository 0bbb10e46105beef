use crate::config;
use crate::input::{ensure_valid, parse_options};
use anyhow::Result;
use declog_core::{validate_decision, DecisionData};
use std::path::PathBuf;

pub fn run(
    dir: Option<PathBuf>,
    title: String,
    context: String,
    options_raw: Vec<String>,
    chosen: String,
    date: Option<String>,
    json: bool,
) -> Result<()> {
    let mut store = config::open_store(dir)?;

    let data = DecisionData {
        title: Some(title),
        // An omitted date is filled with today's before validation.
        date: Some(date.unwrap_or_else(declog_core::id::today)),
        context: Some(context),
        options: Some(parse_options(&options_raw)),
        chosen: Some(chosen),
        ..DecisionData::default()
    };
    ensure_valid(validate_decision(&data))?;

    let decision = store.add_decision(data)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&decision)?);
    } else {
        println!("Recorded decision {}", decision.id());
    }
    Ok(())
}
