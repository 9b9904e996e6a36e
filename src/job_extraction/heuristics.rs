// src/job_extraction/heuristics.rs
//! Regex heuristics shared by the text and page extraction paths: labeled
//! section capture, the experience-level signal, and the last-resort skill
//! token scan.

use std::sync::LazyLock;

use regex::Regex;

use crate::utils::{is_heading_line, normalize_whitespace};

pub(crate) static RESPONSIBILITIES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:responsibilities|what you(?:['’]ll| will) do|duties|your role)\b[ \t]*:?")
        .unwrap()
});

pub(crate) static REQUIREMENTS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:requirements?|qualifications?|must[- ]haves?)\b[ \t]*:?").unwrap()
});

pub(crate) static SKILLS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:skills?|tech stack|technologies|tools)\b[ \t]*:?").unwrap()
});

static YEARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d{1,2})\s*\+?\s*(?:years?|yrs?)\b").unwrap());

static SENIORITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(junior|mid[- ]level|senior|lead|principal|staff|entry[- ]level|intern(?:ship)?)\b")
        .unwrap()
});

// Capitalized word or word-pair directly followed by a list-ish delimiter.
static SKILL_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z][A-Za-z0-9+#.]{1,39}(?:[ ][A-Z][A-Za-z0-9+#.]{1,39})?)(?:,|\.(?:\s|$)|\s+(?:and|or)\b)")
        .unwrap()
});

const MAX_FALLBACK_SKILLS: usize = 20;
const MAX_SKILL_LEN: usize = 40;

// Capitalized sentence-leading words excluded from the token scan.
const SKILL_STOPWORDS: &[&str] = &[
    "the", "we", "you", "our", "your", "and", "or", "a", "an", "in", "for", "with", "this",
    "that", "as", "at", "on", "to", "of", "is", "are", "will", "be", "it", "they",
];

// Keyword substrings used by the DOM scan (matched against lowercased text).
pub(crate) const RESPONSIBILITY_KEYWORDS: &[&str] = &[
    "responsibil",
    "what you will do",
    "what you'll do",
    "duties",
    "your role",
];

pub(crate) const REQUIREMENT_KEYWORDS: &[&str] =
    &["requirement", "qualification", "must have", "must-have"];

pub(crate) const SKILL_KEYWORDS: &[&str] = &["skill", "tech stack", "technolog", "tools"];

/// Find a labeled section in plain text: the first keyword hit sitting on a
/// heading-ish line, captured up to the next heading-like line or end of
/// input. Returns the raw section body for item splitting.
pub(crate) fn find_section(text: &str, heading: &Regex) -> Option<String> {
    for m in heading.find_iter(text) {
        // A keyword buried in a long prose line does not anchor a section.
        let line_start = text[..m.start()].rfind('\n').map(|i| i + 1).unwrap_or(0);
        let line_end = text[m.end()..]
            .find('\n')
            .map(|i| m.end() + i)
            .unwrap_or(text.len());
        if text[line_start..line_end].trim().len() > 60 {
            continue;
        }

        let mut section = String::new();
        for line in text[m.end()..].lines() {
            if is_heading_line(line) {
                break;
            }
            section.push_str(line);
            section.push('\n');
        }
        return Some(section);
    }
    None
}

/// Free-text seniority signal. The years pattern always wins over the
/// seniority keyword pattern; empty when neither matches.
pub(crate) fn experience_level(text: &str) -> String {
    if let Some(caps) = YEARS_RE.captures(text) {
        return format!("{}+ years experience", &caps[1]);
    }
    if let Some(m) = SENIORITY_RE.find(text) {
        return m.as_str().to_string();
    }
    String::new()
}

/// Last-resort skill scan for postings without a labeled skills section:
/// capitalized tokens followed by a list delimiter, stop-worded, deduplicated
/// preserving order, capped.
pub(crate) fn fallback_skills(text: &str) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut skills = Vec::new();

    for caps in SKILL_TOKEN_RE.captures_iter(text) {
        let token = normalize_whitespace(&caps[1]);
        if token.len() > MAX_SKILL_LEN {
            continue;
        }
        let lower = token.to_lowercase();
        if !token.contains(' ') && SKILL_STOPWORDS.contains(&lower.as_str()) {
            continue;
        }
        if seen.contains(&lower) {
            continue;
        }
        seen.push(lower);
        skills.push(token);
        if skills.len() == MAX_FALLBACK_SKILLS {
            break;
        }
    }

    skills
}
