//! Process-wide career lookups.
//!
//! The store is loaded once, on first use, from the configured content
//! source and shared read-only afterwards. Lookups never fail: unknown ids
//! get the default record.

use std::sync::OnceLock;

use crate::config::{self, ContentSource};
use crate::domain::CareerDetail;

use super::store::ContentStore;

/// Global store, initialized on first lookup
static STORE: OnceLock<ContentStore> = OnceLock::new();

/// Get the process-wide content store
pub fn content_store() -> &'static ContentStore {
    STORE.get_or_init(load_store)
}

/// Details for a career.
///
/// Tries `career_id` as given, then its normalized form
/// (see [`normalize_career_id`](crate::domain::normalize_career_id)), and
/// falls back to the default record.
pub fn get_career_details(career_id: &str) -> &'static CareerDetail {
    content_store().get(career_id)
}

/// Whether `career_id` has specific content rather than the default record
pub fn has_detailed_content(career_id: &str) -> bool {
    content_store().contains(career_id)
}

fn load_store() -> ContentStore {
    let source = match config::config() {
        Ok(config) => config.content.clone(),
        Err(e) => {
            tracing::warn!("Failed to resolve configuration, using embedded content: {}", e);
            ContentSource::Embedded
        }
    };

    if let ContentSource::File(path) = &source {
        match ContentStore::from_path(path) {
            Ok(store) => {
                tracing::debug!(
                    path = %path.display(),
                    careers = store.len(),
                    "Loaded career content"
                );
                return store;
            }
            Err(e) => {
                tracing::error!("Failed to load career content, using embedded content: {}", e);
            }
        }
    }

    match ContentStore::embedded() {
        Ok(store) => {
            tracing::debug!(careers = store.len(), "Loaded embedded career content");
            store
        }
        Err(e) => {
            tracing::error!("Embedded career content is invalid: {}", e);
            ContentStore::default()
        }
    }
}
