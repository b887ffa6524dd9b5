//! Domain types for career details.
//!
//! - CareerDetail / TypicalDay: the content records
//! - normalize_career_id: the id normalization shared by every lookup

pub mod career;
pub mod career_id;

pub use career::{CareerDetail, TypicalDay};
pub use career_id::normalize_career_id;
