//! Award tiers and progress math
//!
//! The catalog is static configuration built once at startup. Progress
//! functions are pure and take the catalog by reference.

pub mod catalog;
pub mod progress;

pub use catalog::{Award, AwardCatalog, AwardEntry, AwardId};
pub use progress::{earned_count, next_threshold, previous_threshold, progress_fraction};
