// src/job_extraction/mod.rs
use serde::{Deserialize, Serialize};

pub mod error;
mod heuristics;
pub mod page_scraper;
pub mod text_extractor;

pub use error::ExtractError;
pub use page_scraper::PageScraper;
pub use text_extractor::extract_from_text;

use crate::config::ExtractorConfig;

/// Marker recorded as `source` when a posting was pasted in directly.
pub const DIRECT_INPUT_SOURCE: &str = "direct-input";

/// Provenance of an extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Url,
    Text,
}

/// Structured job posting derived from a fetched page or pasted text.
///
/// Every field is best-effort: unmatched fields come back as empty strings
/// or empty lists, never as an error. A posting is only worth forwarding
/// downstream when [`JobPosting::is_usable`] holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub source_type: SourceType,
    pub source: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub responsibilities: Vec<String>,
    pub requirements: Vec<String>,
    pub skills: Vec<String>,
    pub experience_level: String,
    pub full_description: String,
}

impl JobPosting {
    /// A posting with no description text gives downstream prompt
    /// construction nothing to work with.
    pub fn is_usable(&self) -> bool {
        !self.full_description.is_empty()
    }
}

/// Extraction input: the mode and value travel together, so ambiguous or
/// dual-supplied requests are unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "lowercase")]
pub enum ExtractInput {
    Url(String),
    Text(String),
}

/// Facade over both extraction paths. Holds a single HTTP client; calls are
/// stateless and may run concurrently without coordination.
pub struct JobPostingExtractor {
    scraper: PageScraper,
}

impl JobPostingExtractor {
    pub fn new() -> Self {
        Self::with_config(ExtractorConfig::default())
    }

    pub fn with_config(config: ExtractorConfig) -> Self {
        Self {
            scraper: PageScraper::with_config(config),
        }
    }

    pub async fn extract(&self, input: &ExtractInput) -> Result<JobPosting, ExtractError> {
        match input {
            ExtractInput::Url(url) => self.scraper.extract_from_url(url).await,
            ExtractInput::Text(text) => {
                if text.trim().is_empty() {
                    return Err(ExtractError::EmptyInput);
                }
                Ok(extract_from_text(text))
            }
        }
    }
}

impl Default for JobPostingExtractor {
    fn default() -> Self {
        Self::new()
    }
}
