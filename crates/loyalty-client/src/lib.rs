pub mod commands;
pub mod contracts;
pub mod donors;
pub mod emit;
pub mod error;
pub mod ingest;

pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use error::{ClientError, ClientResult};

/// Version tag carried by every JSON envelope.
pub const API_VERSION: &str = "v1";
