use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use thiserror::Error;

/// Nearest-rank percentile in `1..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Percentile(u8);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("percentile must be an integer between 1 and 100")]
pub struct InvalidPercentile;

impl Percentile {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// 1-based nearest rank: `p * count / 100` rounded half-up, clamped into
    /// `1..=count`. Returns 0 only for an empty set.
    pub fn rank(self, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        let scaled = usize::from(self.0) * count;
        ((scaled * 2 + 100) / 200).clamp(1, count)
    }
}

impl FromStr for Percentile {
    type Err = InvalidPercentile;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parsed = value.trim().parse::<i64>().map_err(|_| InvalidPercentile)?;
        u8::try_from(parsed)
            .ok()
            .and_then(Self::new)
            .ok_or(InvalidPercentile)
    }
}

impl fmt::Display for Percentile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PercentileStats {
    /// Amount at the nearest rank, rounded half-up to a whole number.
    pub value_at_rank: Decimal,
    /// Sum of every amount, rounded half-up to cents.
    pub total: Decimal,
    pub count: usize,
}

/// Statistics over amounts already in ascending order whose exact sum is `total`.
///
/// The caller owns the running total so the sum is never recomputed per event.
pub fn stats_from_sorted(
    sorted: &[Decimal],
    total: Decimal,
    percentile: Percentile,
) -> Option<PercentileStats> {
    let rank = percentile.rank(sorted.len());
    let at_rank = sorted.get(rank.checked_sub(1)?)?;

    Some(PercentileStats {
        value_at_rank: round_half_up(*at_rank, 0),
        total: round_half_up(total, 2),
        count: sorted.len(),
    })
}

// Amounts are always positive here, so away-from-zero is round-half-up.
fn round_half_up(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}
