use tracing::debug;

use crate::donors::cohort::CohortAggregator;
use crate::donors::ledger::{DonorLedger, first_earlier_year};
use crate::donors::percentile::{Percentile, stats_from_sorted};
use crate::donors::types::{CohortKey, Donation, DonorKey, RepeatDonorRow};
use crate::ingest::rejection::RecordRejection;
use crate::ingest::validate::AcceptedContribution;

/// Owns the donor ledger and cohort amounts for exactly one pass over the input.
#[derive(Debug)]
pub struct RepeatDonorTracker {
    percentile: Percentile,
    ledger: DonorLedger,
    cohorts: CohortAggregator,
}

impl RepeatDonorTracker {
    pub fn new(percentile: Percentile) -> Self {
        Self {
            percentile,
            ledger: DonorLedger::new(),
            cohorts: CohortAggregator::new(),
        }
    }

    pub fn percentile(&self) -> Percentile {
        self.percentile
    }

    /// Records `contribution` and returns a result row when it is a repeat-donor event.
    ///
    /// At most one row per call; earlier rows are never revisited. A rejected
    /// contribution leaves both the ledger and the cohorts untouched.
    pub fn observe(
        &mut self,
        contribution: &AcceptedContribution,
    ) -> Result<Option<RepeatDonorRow>, RecordRejection> {
        let zip_prefix = contribution.zip_prefix();
        let donor_key = DonorKey::new(&contribution.contributor_name, zip_prefix);
        let donation = Donation {
            committee_id: contribution.committee_id.clone(),
            year: contribution.year().to_string(),
            amount: contribution.amount,
        };

        let Some(matched) = first_earlier_year(self.ledger.history(&donor_key), &donation.year)
        else {
            self.ledger.record(donor_key, donation);
            return Ok(None);
        };
        debug!(
            donor = %donor_key,
            committee = %donation.committee_id,
            year = %donation.year,
            prior_committee = %matched.committee_id,
            prior_year = %matched.year,
            "repeat donor detected"
        );

        let cohort_key = CohortKey::new(&donation.committee_id, zip_prefix, &donation.year);
        let cohort = self
            .cohorts
            .append(cohort_key.clone(), donation.amount)
            .map_err(|_| RecordRejection::CohortTotalOverflow {
                cohort: cohort_key.to_string(),
                amount: donation.amount.to_string(),
            })?;
        let row = stats_from_sorted(cohort.sorted(), cohort.total(), self.percentile).map(|stats| {
            RepeatDonorRow {
                committee_id: donation.committee_id.clone(),
                zip_prefix: zip_prefix.to_string(),
                year: donation.year.clone(),
                value_at_rank: stats.value_at_rank,
                total: stats.total,
                count: stats.count,
            }
        });

        self.ledger.record(donor_key, donation);
        Ok(row)
    }

    pub fn donor_count(&self) -> usize {
        self.ledger.donor_count()
    }

    pub fn cohort_count(&self) -> usize {
        self.cohorts.cohort_count()
    }
}
