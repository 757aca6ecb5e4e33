//! Shared types and pure-logic utilities for the artmint platform.
//! No NEAR SDK dependency, so everything here runs on-chain and off-chain.

mod error;
mod keys;
mod splits;

pub use error::SplitError;
pub use keys::{project_key, PROJECT_KEY_DELIMITER};
pub use splits::{compute_splits, SplitConfig};
