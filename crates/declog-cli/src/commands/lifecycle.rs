use crate::config;
use crate::input::ensure_valid;
use anyhow::Result;
use declog_core::{validate_evaluation, EvaluationResult};
use std::path::PathBuf;

pub fn delete(dir: Option<PathBuf>, id: String) -> Result<()> {
    let mut store = config::open_store(dir)?;
    store.delete_decision(&id)?;
    println!("Deleted decision {}", id);
    Ok(())
}

pub fn execute(dir: Option<PathBuf>, id: String) -> Result<()> {
    let mut store = config::open_store(dir)?;
    store.mark_as_executed(&id)?;
    println!("Marked decision {} as executed", id);
    Ok(())
}

pub fn evaluate(dir: Option<PathBuf>, id: String, result: String, learnings: String) -> Result<()> {
    let result = result.trim().to_ascii_uppercase();
    ensure_valid(validate_evaluation(&result, &learnings))?;
    let result: EvaluationResult = result.parse()?;

    let mut store = config::open_store(dir)?;
    store.evaluate_decision(&id, result, learnings)?;
    println!("Evaluated decision {}: {}", id, result);
    Ok(())
}
