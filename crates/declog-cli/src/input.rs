use anyhow::Result;
use declog_core::DecisionOption;

/// Parse `name|pro;pro|con;con`. Pros and cons are optional; a blank name
/// is kept so validation can report it by position.
pub fn parse_option(raw: &str) -> DecisionOption {
    let mut parts = raw.splitn(3, '|');
    DecisionOption {
        name: parts.next().unwrap_or_default().trim().to_string(),
        pros: split_list(parts.next()),
        cons: split_list(parts.next()),
    }
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|r| {
        r.split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}

pub fn parse_options(raw: &[String]) -> Vec<DecisionOption> {
    raw.iter().map(|r| parse_option(r)).collect()
}

/// Fail with every validation message, one per line.
pub fn ensure_valid(errors: Vec<String>) -> Result<()> {
    if errors.is_empty() {
        return Ok(());
    }
    anyhow::bail!("validation failed:\n  - {}", errors.join("\n  - "))
}
