//! Reading rules and values from disk or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, bail};
use formkit_validator::FieldRules;
use serde_json::Value;

/// Loads a rules file; `.toml` files are parsed as TOML, anything else as JSON.
pub fn load_rules(path: &Path) -> anyhow::Result<FieldRules> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read rules file {}", path.display()))?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let rules = if is_toml {
        toml::from_str(&text).with_context(|| format!("invalid rules in {}", path.display()))?
    } else {
        serde_json::from_str(&text)
            .with_context(|| format!("invalid rules in {}", path.display()))?
    };

    tracing::debug!(path = %path.display(), "rules loaded");
    Ok(rules)
}

/// Loads the submitted values as a JSON object. `-` reads stdin.
pub fn load_values(path: &Path) -> anyhow::Result<Value> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read values from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read values file {}", path.display()))?
    };

    let values: Value = serde_json::from_str(&text).context("values are not valid JSON")?;
    if !values.is_object() {
        bail!("values must be a JSON object keyed by field name");
    }
    Ok(values)
}
