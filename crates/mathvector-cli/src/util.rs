use anyhow::{Context, Result};
use std::path::Path;

/// Parse a comma- and/or whitespace-separated list of numbers.
///
/// An empty list is returned as-is; the vector constructor rejects it.
pub fn parse_values(text: &str) -> Result<Vec<f64>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .with_context(|| format!("Invalid number '{}' in '{}'", token, text))
        })
        .collect()
}

pub fn validate_json_file(path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    if ext.as_deref() != Some("json") {
        anyhow::bail!("Config file must have a .json extension: {:?}", path);
    }

    if !path.exists() {
        anyhow::bail!("Config file does not exist: {:?}", path);
    }

    Ok(())
}
