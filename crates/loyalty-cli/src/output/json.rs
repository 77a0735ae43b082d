use std::io;

use loyalty_client::contracts::envelope::failure_from_error;
use loyalty_client::{ClientError, SuccessEnvelope};
use serde::Serialize;
use serde_json::json;

pub fn render_success_json(success: &SuccessEnvelope) -> io::Result<String> {
    let value = match success.command.as_str() {
        "analyze" => json!({
            "ok": true,
            "version": success.version,
            "data": success.data,
        }),
        _ => {
            return Err(io::Error::other(format!(
                "JSON output is not supported for command `{}`",
                success.command
            )));
        }
    };

    serialize_json_pretty(&value)
}

pub fn render_error_json(error: &ClientError) -> io::Result<String> {
    serialize_json_pretty(&failure_from_error(error))
}

fn serialize_json_pretty<T: Serialize>(value: &T) -> io::Result<String> {
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use loyalty_client::ClientError;
    use loyalty_client::contracts::envelope::success;
    use serde_json::{Value, json};

    use super::{render_error_json, render_success_json};

    fn parse(body: &str) -> Value {
        serde_json::from_str::<Value>(body).unwrap_or(Value::Null)
    }

    #[test]
    fn analyze_json_wraps_data() {
        let envelope = success("analyze", json!({ "percentile": 30 }));
        assert!(envelope.is_ok());
        if let Ok(value) = envelope {
            let rendered = render_success_json(&value);
            assert!(rendered.is_ok());
            if let Ok(body) = rendered {
                let parsed = parse(&body);
                assert_eq!(parsed["ok"], true);
                assert_eq!(parsed["version"], "v1");
                assert_eq!(parsed["data"]["percentile"], 30);
            }
        }
    }

    #[test]
    fn unknown_command_is_not_rendered() {
        let envelope = success("unknown", json!({}));
        assert!(envelope.is_ok());
        if let Ok(value) = envelope {
            assert!(render_success_json(&value).is_err());
        }
    }

    #[test]
    fn error_json_includes_structured_data() {
        let error = ClientError::invalid_argument("missing output path");
        let rendered = render_error_json(&error);
        assert!(rendered.is_ok());
        if let Ok(body) = rendered {
            let parsed = parse(&body);
            assert_eq!(parsed["ok"], false);
            assert_eq!(parsed["version"], "v1");
            assert_eq!(parsed["error"]["code"], "invalid_argument");
            assert!(parsed["data"]["usage"].is_string());
        }
    }
}
