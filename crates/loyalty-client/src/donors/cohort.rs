use std::collections::HashMap;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::donors::types::CohortKey;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cohort total would exceed the largest representable amount")]
pub struct TotalOverflow;

/// Amounts seen for one committee/zip/year cohort, kept in ascending order
/// next to their exact running sum.
#[derive(Debug, Clone, Default)]
pub struct CohortAggregate {
    sorted: Vec<Decimal>,
    total: Decimal,
}

impl CohortAggregate {
    /// Adds `amount` unless the running sum would overflow; on error the
    /// cohort is left unchanged.
    pub fn push(&mut self, amount: Decimal) -> Result<(), TotalOverflow> {
        let total = self.total.checked_add(amount).ok_or(TotalOverflow)?;
        let position = self.sorted.partition_point(|existing| *existing <= amount);
        self.sorted.insert(position, amount);
        self.total = total;
        Ok(())
    }

    pub fn sorted(&self) -> &[Decimal] {
        &self.sorted
    }

    pub fn total(&self) -> Decimal {
        self.total
    }
}

#[derive(Debug, Default)]
pub struct CohortAggregator {
    cohorts: HashMap<CohortKey, CohortAggregate>,
}

impl CohortAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(
        &mut self,
        key: CohortKey,
        amount: Decimal,
    ) -> Result<&CohortAggregate, TotalOverflow> {
        let cohort = self.cohorts.entry(key).or_default();
        cohort.push(amount)?;
        Ok(cohort)
    }

    pub fn cohort_count(&self) -> usize {
        self.cohorts.len()
    }
}
