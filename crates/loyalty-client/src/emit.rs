use std::io::Write;

use rust_decimal::Decimal;

use crate::donors::RepeatDonorRow;
use crate::{ClientError, ClientResult};

pub const OUTPUT_DELIMITER: u8 = b'|';

/// Appends `CMTE_ID|ZIP5|YEAR|VALUE|TOTAL|COUNT` rows in the order they are given.
pub struct ResultEmitter<W: Write> {
    writer: csv::Writer<W>,
    rows_written: u64,
}

impl<W: Write> ResultEmitter<W> {
    pub fn new(inner: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .delimiter(OUTPUT_DELIMITER)
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(inner);
        Self {
            writer,
            rows_written: 0,
        }
    }

    pub fn emit(&mut self, row: &RepeatDonorRow) -> ClientResult<()> {
        let value_at_rank = format_amount(row.value_at_rank);
        let total = format_amount(row.total);
        let count = row.count.to_string();
        self.writer
            .write_record([
                row.committee_id.as_str(),
                row.zip_prefix.as_str(),
                row.year.as_str(),
                value_at_rank.as_str(),
                total.as_str(),
                count.as_str(),
            ])
            .map_err(|error| ClientError::output_write_failed(&error.to_string()))?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Flushes buffered rows and hands back the underlying writer.
    pub fn finish(mut self) -> ClientResult<W> {
        self.writer
            .flush()
            .map_err(|error| ClientError::output_write_failed(&error.to_string()))?;
        self.writer
            .into_inner()
            .map_err(|error| ClientError::output_write_failed(&error.to_string()))
    }
}

/// `100.00` renders as `100`, `12.50` as `12.5`.
pub fn format_amount(value: Decimal) -> String {
    value.normalize().to_string()
}
