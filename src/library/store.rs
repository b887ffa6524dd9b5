//! Content store for career details.
//!
//! Immutable map from career id to `CareerDetail`, plus the default record
//! returned when nothing matches. Content documents look like:
//!
//! ```yaml
//! default:
//!   typicalDay: { morning: [...], midday: [...], afternoon: [...] }
//!   whatYouActuallyDo: [...]
//!   ...
//! careers:
//!   software-developer:
//!     typicalDay: ...
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{normalize_career_id, CareerDetail};

/// Content compiled into the binary
pub const EMBEDDED_CONTENT: &str = include_str!("../../data/careers.yaml");

/// Errors raised while loading content
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML content: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON content: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported content format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: PathBuf },
}

/// On-disk content document
#[derive(Debug, Deserialize)]
struct ContentFile {
    default: CareerDetail,
    #[serde(default)]
    careers: HashMap<String, CareerDetail>,
}

/// Read-only career content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentStore {
    careers: HashMap<String, CareerDetail>,
    default: CareerDetail,
}

impl Default for ContentStore {
    /// A store with no careers and the generic default record
    fn default() -> Self {
        Self::new(HashMap::new(), CareerDetail::generic())
    }
}

impl ContentStore {
    pub fn new(careers: HashMap<String, CareerDetail>, default: CareerDetail) -> Self {
        Self { careers, default }
    }

    /// Parse a YAML content document
    pub fn from_yaml_str(content: &str) -> Result<Self, ContentError> {
        let file: ContentFile = serde_yaml::from_str(content)?;
        Ok(Self::new(file.careers, file.default))
    }

    /// Parse a JSON content document
    pub fn from_json_str(content: &str) -> Result<Self, ContentError> {
        let file: ContentFile = serde_json::from_str(content)?;
        Ok(Self::new(file.careers, file.default))
    }

    /// Load a content document from disk, picking the format by extension
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let parse: fn(&str) -> Result<Self, ContentError> = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(ContentError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let content = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        parse(&content)
    }

    /// Parse the content compiled into the binary
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_yaml_str(EMBEDDED_CONTENT)
    }

    /// Stored key a lookup for `id` lands on, if any.
    ///
    /// Tries the raw id first, then its normalized form.
    pub fn resolve(&self, id: &str) -> Option<&str> {
        if let Some((key, _)) = self.careers.get_key_value(id) {
            return Some(key.as_str());
        }

        let normalized = normalize_career_id(id);
        self.careers
            .get_key_value(normalized.as_str())
            .map(|(key, _)| key.as_str())
    }

    /// Details for a career, or the default record when nothing matches
    pub fn get(&self, id: &str) -> &CareerDetail {
        self.resolve(id)
            .and_then(|key| self.careers.get(key))
            .unwrap_or(&self.default)
    }

    /// Whether `id` (raw or normalized) has its own record
    pub fn contains(&self, id: &str) -> bool {
        self.resolve(id).is_some()
    }

    /// The fallback record
    pub fn default_detail(&self) -> &CareerDetail {
        &self.default
    }

    /// All stored career ids, sorted
    pub fn career_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.careers.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }
}
