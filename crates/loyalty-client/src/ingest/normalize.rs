use csv::StringRecord;

use crate::ingest::rejection::RecordRejection;

/// Field count of one line in the individual-contributions data dictionary.
pub const RAW_FIELD_COUNT: usize = 21;

// CMTE_ID, NAME, ZIP_CODE, TRANSACTION_DT, TRANSACTION_AMT, OTHER_ID
const KEPT_POSITIONS: [usize; 6] = [0, 7, 10, 13, 14, 15];

/// The six fields the analysis reads, copied verbatim from the raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionRecord {
    pub committee_id: String,
    pub contributor_name: String,
    pub zip_code: String,
    pub transaction_date: String,
    pub transaction_amount: String,
    pub other_id: String,
}

pub fn normalize_record(raw: &StringRecord) -> Result<ContributionRecord, RecordRejection> {
    if raw.len() != RAW_FIELD_COUNT {
        return Err(RecordRejection::FieldCount {
            expected: RAW_FIELD_COUNT,
            found: raw.len(),
        });
    }

    let [committee_id, contributor_name, zip_code, transaction_date, transaction_amount, other_id] =
        KEPT_POSITIONS.map(|index| raw.get(index).unwrap_or_default().to_string());

    Ok(ContributionRecord {
        committee_id,
        contributor_name,
        zip_code,
        transaction_date,
        transaction_amount,
        other_id,
    })
}
