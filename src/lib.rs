//! career-details - Descriptive content for careers
//!
//! A read-only store mapping career ids to what the job is actually like:
//! a typical day, responsibilities, who it suits, key skills, ways in, and
//! a reality check.
//!
//! # Lookup
//!
//! - Ids are tried as given, then normalized (trimmed, lowercased,
//!   whitespace runs replaced with `-`)
//! - Unknown ids get a generic default record, never an error
//! - `has_detailed_content` tells the two cases apart
//!
//! # Modules
//!
//! - `domain`: Data structures (CareerDetail, TypicalDay) and id normalization
//! - `library`: Content store and process-wide lookups
//! - `config`: Content source resolution
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! `get_career_details` and `has_detailed_content` read the process-wide
//! store, loaded from `CAREER_DETAILS_DATA`, a project or user config file,
//! or the embedded content, in that order. A `ContentStore` answers the
//! same lookups for a specific source:
//!
//! ```rust
//! use career_details::ContentStore;
//!
//! let store = ContentStore::embedded().expect("embedded content parses");
//! let detail = store.get("Software Developer");
//! assert_eq!(detail, store.get("software-developer"));
//! assert!(!store.contains("astronaut-ninja"));
//! assert_eq!(store.get("astronaut-ninja"), store.default_detail());
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod library;

// Re-export main types at crate root for convenience
pub use domain::{normalize_career_id, CareerDetail, TypicalDay};
pub use library::{
    content_store, get_career_details, has_detailed_content, ContentError, ContentStore,
};
