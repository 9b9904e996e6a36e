pub mod config;
pub mod job_extraction;
pub mod utils;

pub use config::ExtractorConfig;
pub use job_extraction::{
    extract_from_text, ExtractError, ExtractInput, JobPosting, JobPostingExtractor, PageScraper,
    SourceType, DIRECT_INPUT_SOURCE,
};

/// Convenience function for one-off extractions with default configuration.
///
/// Callers doing many extractions should hold a [`JobPostingExtractor`]
/// instead, so the underlying HTTP client is reused.
pub async fn extract_job_posting(input: &ExtractInput) -> Result<JobPosting, ExtractError> {
    JobPostingExtractor::new().extract(input).await
}
