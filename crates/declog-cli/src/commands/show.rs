use crate::config;
use anyhow::{Context, Result};
use declog_core::Decision;
use std::path::PathBuf;

pub fn run(dir: Option<PathBuf>, id: String, json: bool) -> Result<()> {
    let store = config::open_store(dir)?;
    let decision = store
        .decision(&id)
        .context(format!("decision '{}' not found", id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(decision)?);
    } else {
        print_decision(decision);
    }
    Ok(())
}

fn print_decision(d: &Decision) {
    println!("decision {}", d.id());
    println!("Title:  {}", d.title());
    println!("Date:   {}", d.date());
    println!("Status: {}", d.status());
    println!();
    println!("    {}", d.context());

    println!();
    println!("Options:");
    for option in d.options() {
        let marker = if option.name == d.chosen() { "*" } else { "-" };
        println!("  {} {}", marker, option.name);
        for pro in &option.pros {
            println!("      + {}", pro);
        }
        for con in &option.cons {
            println!("      - {}", con);
        }
    }
    println!("Chosen: {}", d.chosen());

    if let Some(eval) = d.evaluation() {
        println!();
        println!("Evaluation: {} ({})", eval.result, eval.evaluated_at);
        println!("    {}", eval.learnings);
    } else if d.can_execute() {
        println!();
        println!("Next: declog execute {}", d.id());
    } else if d.can_evaluate() {
        println!();
        println!(
            "Next: declog evaluate {} --result <positive|negative|neutral> --learnings <text>",
            d.id()
        );
    }
}
