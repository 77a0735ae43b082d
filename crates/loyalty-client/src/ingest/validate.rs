use std::str::FromStr;

use rust_decimal::Decimal;

use crate::ingest::normalize::ContributionRecord;
use crate::ingest::rejection::RecordRejection;

pub const MAX_CONTRIBUTOR_NAME_CHARS: usize = 200;
const ZIP_CODE_CHARS: (usize, usize) = (5, 9);
const TRANSACTION_DATE_CHARS: usize = 8;
const YEAR_CHARS: usize = 4;
const ZIP_PREFIX_CHARS: usize = 5;

/// A record that passed every rule, with its amount parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedContribution {
    pub committee_id: String,
    pub contributor_name: String,
    pub zip_code: String,
    pub transaction_date: String,
    pub amount: Decimal,
}

impl AcceptedContribution {
    /// Last four characters of `MMDDYYYY`.
    pub fn year(&self) -> &str {
        last_chars(&self.transaction_date, YEAR_CHARS)
    }

    pub fn zip_prefix(&self) -> &str {
        first_chars(&self.zip_code, ZIP_PREFIX_CHARS)
    }
}

/// Applies the record rules in order; the first failing rule wins.
///
/// The date rule only checks length. Calendar validity is deliberately not
/// checked so accepted-record counts stay stable across releases.
pub fn validate_record(record: ContributionRecord) -> Result<AcceptedContribution, RecordRejection> {
    if record.committee_id.is_empty() {
        return Err(RecordRejection::MissingCommitteeId);
    }

    let name_length = record.contributor_name.chars().count();
    if name_length == 0 || name_length > MAX_CONTRIBUTOR_NAME_CHARS {
        return Err(RecordRejection::ContributorName {
            length: name_length,
            max: MAX_CONTRIBUTOR_NAME_CHARS,
        });
    }

    let zip_length = record.zip_code.chars().count();
    if zip_length < ZIP_CODE_CHARS.0 || zip_length > ZIP_CODE_CHARS.1 {
        return Err(RecordRejection::ZipCode { length: zip_length });
    }

    let date_length = record.transaction_date.chars().count();
    if date_length != TRANSACTION_DATE_CHARS {
        return Err(RecordRejection::TransactionDate {
            length: date_length,
        });
    }

    let Some(amount) = parse_positive_amount(&record.transaction_amount) else {
        return Err(RecordRejection::TransactionAmount {
            received: record.transaction_amount,
        });
    };

    if !record.other_id.is_empty() {
        return Err(RecordRejection::NonIndividual);
    }

    Ok(AcceptedContribution {
        committee_id: record.committee_id,
        contributor_name: record.contributor_name,
        zip_code: record.zip_code,
        transaction_date: record.transaction_date,
        amount,
    })
}

fn parse_positive_amount(value: &str) -> Option<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parsed = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()?;
    if parsed <= Decimal::ZERO {
        return None;
    }
    Some(parsed)
}

fn first_chars(value: &str, count: usize) -> &str {
    match value.char_indices().nth(count) {
        Some((index, _)) => &value[..index],
        None => value,
    }
}

fn last_chars(value: &str, count: usize) -> &str {
    let skip = value.chars().count().saturating_sub(count);
    match value.char_indices().nth(skip) {
        Some((index, _)) => &value[index..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::{MAX_CONTRIBUTOR_NAME_CHARS, validate_record};
    use crate::ingest::normalize::ContributionRecord;
    use crate::ingest::rejection::RecordRejection;

    fn record() -> ContributionRecord {
        ContributionRecord {
            committee_id: "C00384516".to_string(),
            contributor_name: "SABOURIN, JAMES".to_string(),
            zip_code: "028956146".to_string(),
            transaction_date: "01312017".to_string(),
            transaction_amount: "230".to_string(),
            other_id: String::new(),
        }
    }

    #[test]
    fn accepts_well_formed_individual_contribution() {
        let accepted = validate_record(record());
        assert!(accepted.is_ok());
        if let Ok(value) = accepted {
            assert_eq!(value.amount, dec!(230));
            assert_eq!(value.year(), "2017");
            assert_eq!(value.zip_prefix(), "02895");
        }
    }

    #[test]
    fn rejects_each_rule_with_its_own_code() {
        let mut missing_committee = record();
        missing_committee.committee_id.clear();

        let mut long_name = record();
        long_name.contributor_name = "A".repeat(MAX_CONTRIBUTOR_NAME_CHARS + 1);

        let mut short_zip = record();
        short_zip.zip_code = "0289".to_string();

        let mut long_zip = record();
        long_zip.zip_code = "0289561460".to_string();

        let mut bad_date = record();
        bad_date.transaction_date = "2017".to_string();

        let mut negative_amount = record();
        negative_amount.transaction_amount = "-20".to_string();

        let mut zero_amount = record();
        zero_amount.transaction_amount = "0.00".to_string();

        let mut text_amount = record();
        text_amount.transaction_amount = "twenty".to_string();

        let cases = [
            (missing_committee, "missing_committee_id"),
            (long_name, "invalid_contributor_name"),
            (short_zip, "invalid_zip_code"),
            (long_zip, "invalid_zip_code"),
            (bad_date, "invalid_transaction_date"),
            (negative_amount, "invalid_transaction_amount"),
            (zero_amount, "invalid_transaction_amount"),
            (text_amount, "invalid_transaction_amount"),
        ];

        for (candidate, expected_code) in cases {
            let rejected = validate_record(candidate);
            assert!(rejected.is_err());
            if let Err(rejection) = rejected {
                assert_eq!(rejection.code(), expected_code);
                assert!(!rejection.is_structural());
            }
        }
    }

    #[test]
    fn name_at_the_limit_is_accepted() {
        let mut candidate = record();
        candidate.contributor_name = "B".repeat(MAX_CONTRIBUTOR_NAME_CHARS);
        assert!(validate_record(candidate).is_ok());
    }

    #[test]
    fn other_id_rejects_even_an_otherwise_valid_record() {
        let mut candidate = record();
        candidate.other_id = "H6CA34245".to_string();
        assert_eq!(validate_record(candidate), Err(RecordRejection::NonIndividual));
    }

    #[test]
    fn earlier_rule_wins_over_other_id() {
        let mut candidate = record();
        candidate.zip_code = "123".to_string();
        candidate.other_id = "H6CA34245".to_string();
        assert_eq!(
            validate_record(candidate),
            Err(RecordRejection::ZipCode { length: 3 })
        );
    }

    #[test]
    fn date_rule_checks_length_only() {
        let mut candidate = record();
        candidate.transaction_date = "99999999".to_string();
        let accepted = validate_record(candidate);
        assert!(accepted.is_ok());
        if let Ok(value) = accepted {
            assert_eq!(value.year(), "9999");
        }
    }

    #[test]
    fn decimal_amounts_keep_their_cents() {
        let mut candidate = record();
        candidate.transaction_amount = "384.50".to_string();
        let accepted = validate_record(candidate);
        assert!(accepted.is_ok());
        if let Ok(value) = accepted {
            assert_eq!(value.amount, dec!(384.50));
        }
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let mut candidate = record();
        candidate.contributor_name = "É".repeat(MAX_CONTRIBUTOR_NAME_CHARS);
        assert!(validate_record(candidate).is_ok());
    }
}
