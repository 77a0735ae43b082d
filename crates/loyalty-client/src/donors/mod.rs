pub mod cohort;
pub mod ledger;
pub mod percentile;
pub mod tracker;
pub mod types;

pub use percentile::Percentile;
pub use tracker::RepeatDonorTracker;
pub use types::RepeatDonorRow;
