use crate::config;
use crate::input::parse_options;
use anyhow::Result;
use declog_core::DecisionUpdate;
use std::path::PathBuf;

#[allow(clippy::too_many_arguments)]
pub fn run(
    dir: Option<PathBuf>,
    id: String,
    title: Option<String>,
    context: Option<String>,
    options_raw: Vec<String>,
    chosen: Option<String>,
    date: Option<String>,
    json: bool,
) -> Result<()> {
    let update = DecisionUpdate {
        title,
        date,
        context,
        options: (!options_raw.is_empty()).then(|| parse_options(&options_raw)),
        chosen,
    };
    if update.is_empty() {
        anyhow::bail!("nothing to change: pass at least one field to edit");
    }

    let mut store = config::open_store(dir)?;
    let decision = store.update_decision(&id, update)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&decision)?);
    } else {
        println!("Updated decision {}", decision.id());
    }
    Ok(())
}
