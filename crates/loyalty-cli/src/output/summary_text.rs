use std::io;

use serde_json::{Map, Value};

use super::format;

pub fn render_analyze(data: &Value) -> io::Result<String> {
    let summary = data
        .get("summary")
        .and_then(Value::as_object)
        .ok_or_else(|| io::Error::other("analyze output requires summary"))?;

    let mut lines = vec![
        data.get("message")
            .and_then(Value::as_str)
            .unwrap_or("Analysis complete.")
            .to_string(),
        String::new(),
        "Run:".to_string(),
    ];
    lines.extend(format::key_value_rows(
        &[
            ("Input:", get_str(data, "input_path")),
            (
                "Percentile:",
                format!(
                    "{} (from {})",
                    get_u64(data, "percentile"),
                    get_str(data, "percentile_path")
                ),
            ),
            ("Output:", get_str(data, "output_path")),
        ],
        2,
    ));

    lines.push(String::new());
    lines.push("Records:".to_string());
    lines.extend(format::key_value_rows(
        &[
            ("Read:", summary_u64(summary, "records_read").to_string()),
            ("Accepted:", summary_u64(summary, "records_accepted").to_string()),
            ("Malformed:", summary_u64(summary, "records_malformed").to_string()),
            ("Invalid:", summary_u64(summary, "records_invalid").to_string()),
        ],
        2,
    ));

    lines.push(String::new());
    lines.push("Repeat donors:".to_string());
    lines.extend(format::key_value_rows(
        &[
            ("Rows written:", summary_u64(summary, "rows_emitted").to_string()),
            ("Distinct donors:", summary_u64(summary, "distinct_donors").to_string()),
            ("Distinct cohorts:", summary_u64(summary, "distinct_cohorts").to_string()),
        ],
        2,
    ));

    let rejections = summary
        .get("rejections")
        .and_then(Value::as_object)
        .map(|object| {
            object
                .iter()
                .map(|(code, count)| (code.as_str(), count.as_u64().unwrap_or(0).to_string()))
                .collect::<Vec<(&str, String)>>()
        })
        .unwrap_or_default();
    if !rejections.is_empty() {
        lines.push(String::new());
        lines.push("Skipped records by rule:".to_string());
        lines.extend(format::key_value_rows(&rejections, 2));
    }

    Ok(lines.join("\n"))
}

fn get_str(data: &Value, key: &str) -> String {
    data.get(key)
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string()
}

fn get_u64(data: &Value, key: &str) -> u64 {
    data.get(key).and_then(Value::as_u64).unwrap_or(0)
}

fn summary_u64(summary: &Map<String, Value>, key: &str) -> u64 {
    summary.get(key).and_then(Value::as_u64).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::render_analyze;

    #[test]
    fn renders_counts_and_rejection_breakdown() {
        let data = json!({
            "input_path": "itcont.txt",
            "percentile_path": "percentile.txt",
            "output_path": "repeat_donors.txt",
            "percentile": 30,
            "message": "Analysis complete. 3 repeat-donor rows were written.",
            "summary": {
                "records_read": 8,
                "records_malformed": 0,
                "records_invalid": 1,
                "records_accepted": 7,
                "rows_emitted": 3,
                "distinct_donors": 4,
                "distinct_cohorts": 2,
                "rejections": { "non_individual_contribution": 1 }
            }
        });

        let rendered = render_analyze(&data);
        assert!(rendered.is_ok());
        if let Ok(body) = rendered {
            assert!(body.starts_with("Analysis complete. 3 repeat-donor rows were written."));
            assert!(body.contains("  Percentile:  30 (from percentile.txt)"));
            assert!(body.contains("  Read:       8"));
            assert!(body.contains("  Rows written:      3"));
            assert!(body.contains("Skipped records by rule:"));
            assert!(body.contains("  non_individual_contribution  1"));
        }
    }

    #[test]
    fn omits_rejection_section_when_nothing_was_skipped() {
        let data = json!({
            "percentile": 50,
            "summary": { "records_read": 0, "rejections": {} }
        });
        let rendered = render_analyze(&data);
        assert!(rendered.is_ok());
        if let Ok(body) = rendered {
            assert!(body.starts_with("Analysis complete."));
            assert!(!body.contains("Skipped records by rule:"));
        }
    }

    #[test]
    fn missing_summary_is_an_error() {
        assert!(render_analyze(&json!({})).is_err());
    }
}
