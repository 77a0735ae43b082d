use thiserror::Error;

/// Why a single input line was dropped.
///
/// Rejections are per-record and never abort a run. The `code` is stable and
/// shows up in run summaries; the `Display` text is the diagnostic line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordRejection {
    #[error("invalid line: expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("invalid line: content is not valid UTF-8")]
    Undecodable,
    #[error("invalid CMTE_ID: committee id is empty")]
    MissingCommitteeId,
    #[error("invalid NAME: contributor name must be 1..={max} characters, got {length}")]
    ContributorName { length: usize, max: usize },
    #[error("invalid ZIP_CODE: expected 5..=9 characters, got {length}")]
    ZipCode { length: usize },
    #[error("invalid TRANSACTION_DT: expected 8 characters (MMDDYYYY), got {length}")]
    TransactionDate { length: usize },
    #[error("invalid TRANSACTION_AMT: expected a positive decimal, got \"{received}\"")]
    TransactionAmount { received: String },
    #[error("OTHER_ID is set: contribution came from a committee or candidate, not an individual")]
    NonIndividual,
    #[error("TRANSACTION_AMT {amount} would overflow the running total of cohort {cohort}")]
    CohortTotalOverflow { cohort: String, amount: String },
}

impl RecordRejection {
    pub fn code(&self) -> &'static str {
        match self {
            Self::FieldCount { .. } => "field_count_mismatch",
            Self::Undecodable => "undecodable_line",
            Self::MissingCommitteeId => "missing_committee_id",
            Self::ContributorName { .. } => "invalid_contributor_name",
            Self::ZipCode { .. } => "invalid_zip_code",
            Self::TransactionDate { .. } => "invalid_transaction_date",
            Self::TransactionAmount { .. } => "invalid_transaction_amount",
            Self::NonIndividual => "non_individual_contribution",
            Self::CohortTotalOverflow { .. } => "cohort_total_overflow",
        }
    }

    /// Structural rejections happen before a typed record exists.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::FieldCount { .. } | Self::Undecodable)
    }
}
