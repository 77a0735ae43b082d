use std::fmt;

use rust_decimal::Decimal;

/// `NAME_ZIP5`. Two people with the same name in the same zip collapse into one donor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DonorKey(String);

impl DonorKey {
    pub fn new(contributor_name: &str, zip_prefix: &str) -> Self {
        Self(format!("{contributor_name}_{zip_prefix}"))
    }
}

impl fmt::Display for DonorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `CMTE_ZIP5_YEAR`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CohortKey(String);

impl CohortKey {
    pub fn new(committee_id: &str, zip_prefix: &str, year: &str) -> Self {
        Self(format!("{committee_id}_{zip_prefix}_{year}"))
    }
}

impl fmt::Display for CohortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One accepted contribution as the donor ledger remembers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Donation {
    pub committee_id: String,
    /// Four characters taken from the transaction date; compared as text.
    pub year: String,
    pub amount: Decimal,
}

/// One line of the result stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatDonorRow {
    pub committee_id: String,
    pub zip_prefix: String,
    pub year: String,
    pub value_at_rank: Decimal,
    pub total: Decimal,
    pub count: usize,
}
