pub mod normalize;
pub mod rejection;
pub(crate) mod source;
pub mod validate;

use std::io::{BufRead, BufReader, Read, Write};

use csv::StringRecord;
use tracing::{debug, info, warn};

use crate::contracts::types::RunSummary;
use crate::donors::{Percentile, RepeatDonorTracker};
use crate::emit::ResultEmitter;
use crate::{ClientError, ClientResult};

use normalize::{RAW_FIELD_COUNT, normalize_record};
use rejection::RecordRejection;
use validate::validate_record;

pub const INPUT_DELIMITER: u8 = b'|';

#[derive(Debug)]
pub struct StreamOutcome<W> {
    pub summary: RunSummary,
    pub output: W,
}

/// Runs one full pass: every line of `input` is normalized, validated and
/// tracked, and each repeat-donor event is written to `output` as it happens.
///
/// Bad lines, blank ones included, are logged and skipped. Only I/O failures
/// end the pass early.
pub fn analyze_stream<R, W>(
    input: R,
    output: W,
    percentile: Percentile,
) -> ClientResult<StreamOutcome<W>>
where
    R: Read,
    W: Write,
{
    let mut lines = BufReader::new(input);
    let mut fields = csv::ReaderBuilder::new();
    fields
        .delimiter(INPUT_DELIMITER)
        .has_headers(false)
        .flexible(true);
    let mut tracker = RepeatDonorTracker::new(percentile);
    let mut emitter = ResultEmitter::new(output);
    let mut summary = RunSummary::default();
    let mut buffer = Vec::new();
    let mut line_number = 0_u64;

    info!(percentile = percentile.get(), "starting repeat-donor pass");

    loop {
        buffer.clear();
        let read = lines
            .read_until(b'\n', &mut buffer)
            .map_err(|error| ClientError::input_read_failed(&error.to_string()))?;
        if read == 0 {
            break;
        }
        line_number += 1;
        summary.records_read += 1;

        let content = strip_line_end(&buffer);
        let accepted = split_fields(&fields, content)
            .and_then(|raw| normalize_record(&raw))
            .and_then(validate_record)
            .and_then(|contribution| tracker.observe(&contribution));
        let event = match accepted {
            Ok(value) => value,
            Err(rejection) => {
                reject(&mut summary, line_number, &rejection, content);
                continue;
            }
        };

        summary.records_accepted += 1;
        if let Some(row) = event {
            debug!(
                committee = %row.committee_id,
                zip = %row.zip_prefix,
                year = %row.year,
                value_at_rank = %row.value_at_rank,
                total = %row.total,
                count = row.count,
                "emitting repeat-donor row"
            );
            emitter.emit(&row)?;
        }
    }

    summary.rows_emitted = emitter.rows_written();
    summary.distinct_donors = tracker.donor_count() as u64;
    summary.distinct_cohorts = tracker.cohort_count() as u64;
    let output = emitter.finish()?;

    info!(
        records_read = summary.records_read,
        records_accepted = summary.records_accepted,
        rows_emitted = summary.rows_emitted,
        "repeat-donor pass finished"
    );

    Ok(StreamOutcome { summary, output })
}

fn strip_line_end(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Splits one line on the input delimiter, honouring double-quoted fields.
fn split_fields(fields: &csv::ReaderBuilder, line: &[u8]) -> Result<StringRecord, RecordRejection> {
    let mut raw = StringRecord::new();
    if line.is_empty() {
        return Err(RecordRejection::FieldCount {
            expected: RAW_FIELD_COUNT,
            found: 0,
        });
    }
    match fields.from_reader(line).read_record(&mut raw) {
        Ok(_) => Ok(raw),
        Err(_) => Err(RecordRejection::Undecodable),
    }
}

fn reject(summary: &mut RunSummary, line: u64, rejection: &RecordRejection, content: &[u8]) {
    let content = String::from_utf8_lossy(content);
    warn!(
        line,
        code = rejection.code(),
        content = %content,
        "{rejection}; skipping"
    );
    summary.record_rejection(rejection.code(), rejection.is_structural());
}
