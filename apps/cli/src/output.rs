//! Rendering results on stdout.

use clap::ValueEnum;
use formkit_validator::FieldErrors;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Result format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `ok`, or one `field: message` line per failure
    #[default]
    Text,
    /// `{"valid": .., "errors": {..}}`
    Json,
}

/// Renders a check result.
pub fn render_check(format: OutputFormat, result: &Result<(), FieldErrors>) -> anyhow::Result<String> {
    Ok(match (format, result) {
        (OutputFormat::Text, Ok(())) => "ok".to_owned(),
        (OutputFormat::Text, Err(errors)) => errors.to_string(),
        (OutputFormat::Json, Ok(())) => {
            serde_json::to_string_pretty(&json!({"valid": true, "errors": {}}))?
        }
        (OutputFormat::Json, Err(errors)) => {
            serde_json::to_string_pretty(&json!({"valid": false, "errors": errors}))?
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use formkit_validator::{FieldRules, ValidatorChain};

    fn failing() -> Result<(), FieldErrors> {
        FieldRules::new()
            .field("email", ValidatorChain::new().email(None))
            .field("name", ValidatorChain::new().required(Some("name please")))
            .validate_json(&json!({"email": "nope"}))
    }

    #[test]
    fn text_lists_each_failing_field() {
        assert_eq!(render_check(OutputFormat::Text, &Ok(())).unwrap(), "ok");
        assert_eq!(
            render_check(OutputFormat::Text, &failing()).unwrap(),
            "email: enter a valid email address\nname: name please"
        );
    }

    #[test]
    fn json_carries_error_map() {
        let rendered = render_check(OutputFormat::Json, &failing()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["valid"], false);
        assert_eq!(value["errors"]["name"], "name please");
    }
}
