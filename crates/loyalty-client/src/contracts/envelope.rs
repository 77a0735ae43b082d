use serde::Serialize;
use serde_json::Value;

use crate::API_VERSION;
use crate::error::{ClientError, ClientResult};

#[derive(Debug, Clone, Serialize)]
pub struct SuccessEnvelope {
    pub ok: bool,
    pub command: String,
    pub version: String,
    pub data: Value,
}

/// What a failed run reports instead of a summary. No result rows are implied:
/// configuration failures leave the output file untouched.
#[derive(Debug, Clone, Serialize)]
pub struct FailureEnvelope {
    pub ok: bool,
    pub version: String,
    pub error: ErrorContract,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorContract {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
}

pub fn success<T>(command: &str, data: T) -> ClientResult<SuccessEnvelope>
where
    T: Serialize,
{
    let json_data = serde_json::to_value(data)
        .map_err(|err| ClientError::internal_serialization(&err.to_string()))?;
    Ok(SuccessEnvelope {
        ok: true,
        command: command.to_string(),
        version: API_VERSION.to_string(),
        data: json_data,
    })
}

pub fn failure_from_error(error: &ClientError) -> FailureEnvelope {
    FailureEnvelope {
        ok: false,
        version: API_VERSION.to_string(),
        error: ErrorContract {
            code: error.code.clone(),
            message: error.message.clone(),
            recovery_steps: error.recovery_steps.clone(),
        },
        data: error.data.clone(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use serde_json::json;

    use super::{failure_from_error, success};
    use crate::{API_VERSION, ClientError};

    #[test]
    fn success_wraps_serialized_data() {
        let envelope = success("analyze", json!({ "rows_emitted": 3 }));
        assert!(envelope.is_ok());
        if let Ok(value) = envelope {
            assert!(value.ok);
            assert_eq!(value.command, "analyze");
            assert_eq!(value.data["rows_emitted"], 3);
        }
    }

    #[test]
    fn failure_copies_error_contract() {
        let error = ClientError::output_write_failed("disk full");
        let envelope = failure_from_error(&error);
        assert!(!envelope.ok);
        assert_eq!(envelope.version, API_VERSION);
        assert_eq!(envelope.error.code, "output_write_failed");
        assert!(envelope.data.is_none());
    }

    #[test]
    fn failure_keeps_offending_file_in_data() {
        let error = ClientError::percentile_invalid(Path::new("percentile.txt"), "0");
        let envelope = failure_from_error(&error);
        let data = envelope.data.unwrap_or_default();
        assert_eq!(data["path"], "percentile.txt");
        assert_eq!(data["received"], "0");
    }
}
