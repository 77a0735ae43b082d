use std::collections::HashMap;

use crate::donors::types::{Donation, DonorKey};

/// Every accepted donation per donor, in arrival order. Never pruned.
#[derive(Debug, Default)]
pub struct DonorLedger {
    entries: HashMap<DonorKey, Vec<Donation>>,
}

impl DonorLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: DonorKey, donation: Donation) {
        self.entries.entry(key).or_default().push(donation);
    }

    /// Prior donations for `key`, oldest first. Empty for an unseen donor.
    pub fn history(&self, key: &DonorKey) -> &[Donation] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn donor_count(&self) -> usize {
        self.entries.len()
    }
}

/// Oldest donation in `history` whose year is strictly earlier than `year`.
///
/// Donations to any committee count, not only the committee of the donation
/// being checked.
pub fn first_earlier_year<'a>(history: &'a [Donation], year: &str) -> Option<&'a Donation> {
    history.iter().find(|earlier| earlier.year.as_str() < year)
}
