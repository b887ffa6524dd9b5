//! Career detail records.
//!
//! A `CareerDetail` is the prose shown for one career: what a working day
//! looks like, what the job involves, and how people get into it.

use serde::{Deserialize, Serialize};

/// A typical working day, split into time-of-day buckets.
///
/// Entries within each bucket are in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypicalDay {
    pub morning: Vec<String>,
    pub midday: Vec<String>,
    pub afternoon: Vec<String>,

    /// Tools or technologies used during the day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,

    /// Free-text description of the workplace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
}

/// Descriptive content for a single career
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerDetail {
    /// Typical daily schedule
    pub typical_day: TypicalDay,

    /// Bullet points describing the actual work
    pub what_you_actually_do: Vec<String>,

    /// Who tends to enjoy and do well in this career
    pub who_this_is_good_for: Vec<String>,

    /// Most important skills
    pub top_skills: Vec<String>,

    /// Common ways into the career
    pub entry_paths: Vec<String>,

    /// Honest note about the downsides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reality_check: Option<String>,
}

impl CareerDetail {
    /// Generic content used when no specific career matches.
    ///
    /// The embedded content file carries its own default record; this one
    /// only backs the store when no content could be loaded at all.
    pub fn generic() -> Self {
        fn strings(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        Self {
            typical_day: TypicalDay {
                morning: strings(&[
                    "Review tasks and priorities for the day",
                    "Check and respond to messages",
                ]),
                midday: strings(&["Work on core responsibilities", "Collaborate with colleagues"]),
                afternoon: strings(&[
                    "Continue project work",
                    "Wrap up and plan for tomorrow",
                ]),
                tools: None,
                environment: None,
            },
            what_you_actually_do: strings(&[
                "Handle the core tasks of the role",
                "Work with colleagues and stakeholders",
                "Solve problems as they come up",
            ]),
            who_this_is_good_for: strings(&[
                "People interested in this field",
                "Those willing to learn and grow",
            ]),
            top_skills: strings(&[
                "Communication",
                "Problem-solving",
                "Time management",
                "Teamwork",
                "Adaptability",
            ]),
            entry_paths: strings(&[
                "Relevant education or training",
                "Internships or entry-level positions",
            ]),
            reality_check: None,
        }
    }
}
