use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

pub(crate) const USAGE_LINE: &str = "loyalty <input> <percentile_file> <output> [--json]";

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::new(
            "invalid_argument",
            message,
            vec![
                format!("Usage: {USAGE_LINE}"),
                "Run `loyalty --help` for usage.".to_string(),
            ],
        )
        .with_data(json!({
            "usage": USAGE_LINE,
        }))
    }

    pub fn input_unreadable(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "input_unreadable",
            &format!("Could not open contributions file `{location}`: {detail}"),
            vec![
                "Verify the path exists and is readable.".to_string(),
                format!("Rerun {USAGE_LINE}."),
            ],
        )
        .with_data(json!({
            "path": location,
        }))
    }

    pub fn input_read_failed(detail: &str) -> Self {
        Self::new(
            "input_read_failed",
            &format!("Reading the contributions stream failed: {detail}"),
            vec![
                "Check that the input file is not being truncated or replaced during the run."
                    .to_string(),
                "Rerun the analysis once the file is stable.".to_string(),
            ],
        )
    }

    pub fn percentile_unreadable(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "percentile_unreadable",
            &format!("Could not read percentile file `{location}`: {detail}"),
            vec![
                "Verify the percentile file exists and is readable.".to_string(),
                "The file must contain a single integer between 1 and 100.".to_string(),
            ],
        )
        .with_data(json!({
            "path": location,
        }))
    }

    pub fn percentile_invalid(path: &Path, received: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "percentile_invalid",
            &format!(
                "Percentile file `{location}` must contain one integer between 1 and 100; got \"{received}\"."
            ),
            vec!["Write a single whole number such as `30` to the percentile file.".to_string()],
        )
        .with_data(json!({
            "path": location,
            "received": received,
            "expected": "integer in 1..=100",
        }))
    }

    pub fn output_unwritable(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "output_unwritable",
            &format!("Could not create output file `{location}`: {detail}"),
            vec![format!(
                "Grant write access to `{location}` or choose another output path."
            )],
        )
        .with_data(json!({
            "path": location,
        }))
    }

    pub fn output_write_failed(detail: &str) -> Self {
        Self::new(
            "output_write_failed",
            &format!("Writing a result row failed: {detail}"),
            vec!["Check free disk space and permissions on the output location.".to_string()],
        )
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
