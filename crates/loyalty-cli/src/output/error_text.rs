use loyalty_client::ClientError;
use serde_json::Value;

use super::format;

pub fn render_error(error: &ClientError) -> String {
    let mut lines = vec![
        "The analysis did not run.".to_string(),
        String::new(),
    ];

    let mut rows = vec![("Error:", error.code.clone()), ("Details:", error.message.clone())];
    if let Some(path) = data_str(error, "path") {
        rows.push(("File:", path));
    }
    if let Some(received) = data_str(error, "received") {
        rows.push(("Received:", format!("\"{received}\"")));
    }
    lines.extend(format::key_value_rows(&rows, 2));

    lines.push(String::new());
    lines.push("What to do next:".to_string());
    if error.recovery_steps.is_empty() {
        lines.push("  1. Rerun the analysis; the result file is rewritten from scratch.".to_string());
    } else {
        for (index, step) in error.recovery_steps.iter().enumerate() {
            lines.push(format!("  {}. {step}", index + 1));
        }
    }

    lines.join("\n")
}

fn data_str(error: &ClientError, key: &str) -> Option<String> {
    error
        .data
        .as_ref()
        .and_then(|data| data.get(key))
        .and_then(Value::as_str)
        .map(str::to_string)
}
