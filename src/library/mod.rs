//! Career content library.
//!
//! Holds the career detail records and answers lookups against them.
//!
//! # Content Sources
//!
//! ```text
//! data/careers.yaml            # Embedded at compile time (default)
//! $CAREER_DETAILS_DATA         # External YAML/JSON file, if set
//! .career-details/config.yaml  # content.path, if present
//! ```

pub mod lookup;
pub mod store;

pub use lookup::{content_store, get_career_details, has_detailed_content};
pub use store::{ContentError, ContentStore, EMBEDDED_CONTENT};
