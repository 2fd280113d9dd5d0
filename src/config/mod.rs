//! Configuration for the Show Compensation Engine.
//!
//! The only configured values are the standard mileage reimbursement rates,
//! keyed by effective date. The rate applied to a show is the most recent
//! rate on or before the show date.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{MileageConfig, MileageMetadata, MileageRate};
