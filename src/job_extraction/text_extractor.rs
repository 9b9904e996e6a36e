// src/job_extraction/text_extractor.rs
use regex::Regex;
use tracing::debug;

use crate::utils::{cap_description, normalize_whitespace, split_items};

use super::heuristics::{self, REQUIREMENTS_RE, RESPONSIBILITIES_RE, SKILLS_RE};
use super::{JobPosting, SourceType, DIRECT_INPUT_SOURCE};

/// Extract a structured posting from pasted text. Never fails: all section
/// fields degrade to empty when nothing matches. Blank input is the caller's
/// responsibility to reject beforehand.
///
/// Title, company and location stay empty on this path; raw text carries no
/// structural signal for them.
pub fn extract_from_text(text: &str) -> JobPosting {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let responsibilities = section_items(&text, &RESPONSIBILITIES_RE);
    let requirements = section_items(&text, &REQUIREMENTS_RE);
    let mut skills = section_items(&text, &SKILLS_RE);
    if skills.is_empty() {
        skills = heuristics::fallback_skills(&text);
    }

    let experience_level = heuristics::experience_level(&text);
    let full_description = cap_description(&normalize_whitespace(&text));

    debug!(
        responsibilities = responsibilities.len(),
        requirements = requirements.len(),
        skills = skills.len(),
        "Extracted job posting from pasted text"
    );

    JobPosting {
        source_type: SourceType::Text,
        source: DIRECT_INPUT_SOURCE.to_string(),
        title: String::new(),
        company: String::new(),
        location: String::new(),
        responsibilities,
        requirements,
        skills,
        experience_level,
        full_description,
    }
}

fn section_items(text: &str, heading: &Regex) -> Vec<String> {
    heuristics::find_section(text, heading)
        .map(|section| split_items(&section))
        .unwrap_or_default()
}
