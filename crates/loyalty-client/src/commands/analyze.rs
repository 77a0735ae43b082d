use std::path::PathBuf;

use crate::ClientResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::AnalyzeData;
use crate::ingest::{self, source};

#[derive(Debug, Default, Clone)]
pub struct AnalyzeRunOptions {
    pub input_path: PathBuf,
    pub percentile_path: PathBuf,
    pub output_path: PathBuf,
}

pub fn run(input_path: &str, percentile_path: &str, output_path: &str) -> ClientResult<SuccessEnvelope> {
    run_with_options(AnalyzeRunOptions {
        input_path: PathBuf::from(input_path),
        percentile_path: PathBuf::from(percentile_path),
        output_path: PathBuf::from(output_path),
    })
}

/// Reads the percentile, opens the input, then truncates the output and
/// streams every record through one fresh pass.
///
/// Configuration problems surface before the output file is touched.
pub fn run_with_options(options: AnalyzeRunOptions) -> ClientResult<SuccessEnvelope> {
    let percentile = source::read_percentile(&options.percentile_path)?;
    let input = source::open_input(&options.input_path)?;
    let output = source::reset_output(&options.output_path)?;

    let outcome = ingest::analyze_stream(input, output, percentile)?;
    let summary = outcome.summary;
    let message = match summary.rows_emitted {
        0 => "Analysis complete. No repeat-donor rows were written.".to_string(),
        1 => "Analysis complete. 1 repeat-donor row was written.".to_string(),
        count => format!("Analysis complete. {count} repeat-donor rows were written."),
    };

    let data = AnalyzeData {
        input_path: options.input_path.display().to_string(),
        percentile_path: options.percentile_path.display().to_string(),
        output_path: options.output_path.display().to_string(),
        percentile: percentile.get(),
        message,
        summary,
    };

    success("analyze", data)
}
