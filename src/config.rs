//! Configuration for the career content source.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variable (CAREER_DETAILS_DATA)
//! 2. Project config file (.career-details/config.yaml)
//! 3. User config file ($XDG_CONFIG_HOME/career-details/config.yaml)
//! 4. Defaults (embedded content)
//!
//! Config file discovery:
//! - Searches current directory and parents for .career-details/config.yaml
//! - In a project config, content.path is relative to the project root
//!   (parent of .career-details/)
//! - In the user config, content.path is relative to the career-details/
//!   directory holding it

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Environment variable pointing at an external content file
pub const DATA_ENV_VAR: &str = "CAREER_DETAILS_DATA";

/// Directory holding the project config file
const CONFIG_DIR: &str = ".career-details";

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub content: ContentConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentConfig {
    /// External content file (relative to the config's base directory)
    pub path: Option<String>,
}

/// Where career content is loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Content compiled into the binary
    Embedded,

    /// External YAML or JSON file
    File(PathBuf),
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentSource::Embedded => write!(f, "embedded"),
            ContentSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Content source to load
    pub content: ContentSource,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

/// A discovered config file and the directory its relative paths resolve against
#[derive(Debug, Clone, PartialEq, Eq)]
struct ConfigLocation {
    path: PathBuf,
    base_dir: PathBuf,
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<ConfigLocation> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(CONFIG_DIR).join("config.yaml");
        if config_path.exists() {
            // Project root is the parent of .career-details/
            return Some(ConfigLocation {
                path: config_path,
                base_dir: current,
            });
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// User-level config file under `config_dir`, if one exists
fn user_config_in(config_dir: &Path) -> Option<ConfigLocation> {
    let base_dir = config_dir.join("career-details");
    let path = base_dir.join("config.yaml");
    path.exists().then_some(ConfigLocation { path, base_dir })
}

/// User-level config file ($XDG_CONFIG_HOME/career-details/config.yaml)
fn user_config_file() -> Option<ConfigLocation> {
    user_config_in(&dirs::config_dir()?)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to a config file's base directory
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Resolve the content source from an env value and an optional config file
fn resolve(env_data: Option<String>, location: Option<ConfigLocation>) -> Result<ResolvedConfig> {
    let file_content = match location {
        Some(ref location) => {
            let config = load_config_file(&location.path)?;

            config
                .content
                .path
                .map(|p| ContentSource::File(resolve_path(&location.base_dir, &p)))
        }
        None => None,
    };

    let content = match env_data.filter(|v| !v.trim().is_empty()) {
        Some(env_path) => ContentSource::File(PathBuf::from(env_path)),
        None => file_content.unwrap_or(ContentSource::Embedded),
    };

    Ok(ResolvedConfig {
        content,
        config_file: location.map(|l| l.path),
    })
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let location = find_config_file().or_else(user_config_file);
    resolve(std::env::var(DATA_ENV_VAR).ok(), location)
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}
