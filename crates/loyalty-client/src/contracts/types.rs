use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub records_read: u64,
    pub records_malformed: u64,
    pub records_invalid: u64,
    pub records_accepted: u64,
    pub rows_emitted: u64,
    pub distinct_donors: u64,
    pub distinct_cohorts: u64,
    /// Rejection counts keyed by diagnostic code, structural and validation alike.
    pub rejections: BTreeMap<String, u64>,
}

impl RunSummary {
    pub(crate) fn record_rejection(&mut self, code: &str, structural: bool) {
        if structural {
            self.records_malformed += 1;
        } else {
            self.records_invalid += 1;
        }
        *self.rejections.entry(code.to_string()).or_default() += 1;
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeData {
    pub input_path: String,
    pub percentile_path: String,
    pub output_path: String,
    pub percentile: u8,
    pub message: String,
    pub summary: RunSummary,
}
