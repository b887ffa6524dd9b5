//! Command-line interface for career-details.
//!
//! Provides commands for looking up career details, checking whether an id
//! has specific content, and listing what the store holds.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::config;
use crate::domain::{normalize_career_id, CareerDetail};
use crate::library::{content_store, get_career_details, has_detailed_content};

/// career-details - Look up descriptive career content
#[derive(Parser, Debug)]
#[command(name = "career-details")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the details for a career (default content if unknown)
    Show {
        /// Career id or display name (e.g. "software-developer", "Software Developer")
        career_id: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// Check whether a career has specific content
    Has {
        /// Career id or display name
        career_id: String,
    },

    /// List all career ids with specific content
    List,

    /// Print the normalized form of a career id
    Normalize {
        /// Career id or display name
        career_id: String,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Serialization format for `show`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,

    /// YAML
    Yaml,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Show { career_id, format } => show_career(&career_id, format),
            Commands::Has { career_id } => {
                println!("{}", has_detailed_content(&career_id));
                Ok(())
            }
            Commands::List => list_careers(),
            Commands::Normalize { career_id } => {
                println!("{}", normalize_career_id(&career_id));
                Ok(())
            }
            Commands::Config => show_config(),
        }
    }
}

/// Serialize a record in the requested format
pub fn render(detail: &CareerDetail, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(detail).context("Failed to serialize career as JSON")
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(detail).context("Failed to serialize career as YAML")
        }
    }
}

/// Print the details for a career
fn show_career(career_id: &str, format: OutputFormat) -> Result<()> {
    let detail = get_career_details(career_id);
    println!("{}", render(detail, format)?);

    if !has_detailed_content(career_id) {
        eprintln!(
            "\n[No specific content for '{}'; showing default details]",
            career_id
        );
    }

    Ok(())
}

/// List stored career ids
fn list_careers() -> Result<()> {
    let store = content_store();

    if store.is_empty() {
        println!("No careers found");
        return Ok(());
    }

    for id in store.career_ids() {
        println!("{}", id);
    }
    eprintln!("\n[{} careers]", store.len());

    Ok(())
}

/// Show resolved configuration
fn show_config() -> Result<()> {
    let config = config::config()?;

    println!("Content source: {}", config.content);
    match &config.config_file {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (none)"),
    }
    println!("Careers loaded: {}", content_store().len());

    Ok(())
}
