// src/job_extraction/page_scraper.rs
use std::sync::LazyLock;

use regex::Regex;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, warn};
use url::Url;

use crate::config::ExtractorConfig;
use crate::utils::{cap_description, normalize_whitespace, split_items};

use super::error::ExtractError;
use super::heuristics::{
    self, REQUIREMENT_KEYWORDS, RESPONSIBILITY_KEYWORDS, SKILL_KEYWORDS,
};
use super::{JobPosting, SourceType};

// Sibling walk stops at the next heading or after this many elements.
const SIBLING_SCAN_LIMIT: usize = 30;

// Single-line fields reject candidates longer than this.
const MAX_SINGLE_LINE_LEN: usize = 120;

// A keyword mention inside a long block is prose, not a section label.
const MAX_SECTION_ANCHOR_LEN: usize = 80;

const TITLE_SELECTORS: &[&str] = &[
    "h1",
    "[class*='job-title']",
    "[class*='jobTitle']",
    "[class*='position']",
    "[class*='title']",
];

const COMPANY_SELECTORS: &[&str] = &[
    "[class*='company']",
    "[class*='employer']",
    "[class*='organization']",
];

const LOCATION_SELECTORS: &[&str] = &[
    "[class*='job-location']",
    "[class*='location']",
    "[class*='workplace']",
];

const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

static SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap());
static STYLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap());
static NOSCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<noscript[^>]*>.*?</noscript>").unwrap());

static SECTION_ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("h1, h2, h3, h4, h5, h6, strong, b, p").expect("valid selector")
});
static LIST_ITEM_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("li").expect("valid selector"));
static MAIN_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("main").expect("valid selector"));
static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("body").expect("valid selector"));

/// Fetches a job posting page and derives structured fields from its markup.
///
/// One outbound GET per call, bounded by the configured timeout; no retries.
/// "Nothing found" is not an error: unmatched fields come back empty.
pub struct PageScraper {
    client: Client,
    timeout_secs: u64,
}

impl PageScraper {
    pub fn new() -> Self {
        Self::with_config(ExtractorConfig::default())
    }

    pub fn with_config(config: ExtractorConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        if let Ok(lang) = HeaderValue::from_str(&config.accept_language) {
            headers.insert(ACCEPT_LANGUAGE, lang);
        }

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            timeout_secs: config.timeout.as_secs(),
        }
    }

    pub async fn extract_from_url(&self, url: &str) -> Result<JobPosting, ExtractError> {
        let parsed = Url::parse(url).map_err(|_| ExtractError::InvalidUrl {
            url: url.to_string(),
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ExtractError::InvalidUrl {
                url: url.to_string(),
            });
        }

        info!("Fetching job posting: {}", url);

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Job posting fetch returned HTTP {}", status);
            return Err(ExtractError::FetchFailed {
                status: status.as_u16(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        let posting = self.parse_page(&html, url);
        info!(
            "Extracted job posting: '{}' at '{}'",
            posting.title, posting.company
        );
        Ok(posting)
    }

    fn transport_error(&self, err: reqwest::Error) -> ExtractError {
        if err.is_timeout() {
            ExtractError::FetchTimeout {
                seconds: self.timeout_secs,
            }
        } else {
            ExtractError::Fetch {
                message: err.to_string(),
            }
        }
    }

    fn parse_page(&self, html: &str, url: &str) -> JobPosting {
        let cleaned = strip_inline_code(html);
        let document = Html::parse_document(&cleaned);

        let title = find_meta(&document, &["og:title", "twitter:title"])
            .or_else(|| find_text_by_selectors(&document, TITLE_SELECTORS))
            .unwrap_or_default();
        let company = find_meta(&document, &["og:site_name"])
            .or_else(|| find_text_by_selectors(&document, COMPANY_SELECTORS))
            .unwrap_or_default();
        let location = find_text_by_selectors(&document, LOCATION_SELECTORS).unwrap_or_default();

        let responsibilities = find_section_items(&document, RESPONSIBILITY_KEYWORDS);
        let requirements = find_section_items(&document, REQUIREMENT_KEYWORDS);
        let mut skills = find_section_items(&document, SKILL_KEYWORDS);

        let body_text = main_text(&document);
        if skills.is_empty() {
            debug!("No skills section in page, falling back to token scan");
            skills = heuristics::fallback_skills(&body_text);
        }

        let experience_level = heuristics::experience_level(&body_text);
        let full_description = cap_description(&body_text);

        JobPosting {
            source_type: SourceType::Url,
            source: url.to_string(),
            title,
            company,
            location,
            responsibilities,
            requirements,
            skills,
            experience_level,
            full_description,
        }
    }
}

impl Default for PageScraper {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_inline_code(html: &str) -> String {
    let html = SCRIPT_RE.replace_all(html, " ");
    let html = STYLE_RE.replace_all(&html, " ");
    NOSCRIPT_RE.replace_all(&html, " ").into_owned()
}

fn element_text(element: &ElementRef) -> String {
    normalize_whitespace(&element.text().collect::<Vec<_>>().join(" "))
}

fn find_meta(document: &Html, names: &[&str]) -> Option<String> {
    for name in names {
        let selector_str = format!("meta[property='{name}'], meta[name='{name}']");
        if let Some(selector) = Selector::parse(&selector_str).ok() {
            for element in document.select(&selector) {
                if let Some(content) = element.value().attr("content") {
                    let content = normalize_whitespace(content);
                    if !content.is_empty() {
                        return Some(content);
                    }
                }
            }
        }
    }
    None
}

fn find_text_by_selectors(document: &Html, selectors: &[&str]) -> Option<String> {
    for selector_str in selectors {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(element) = document.select(&selector).next() {
                let text = element_text(&element);
                if !text.is_empty() && text.len() <= MAX_SINGLE_LINE_LEN {
                    return Some(text);
                }
            }
        }
    }
    None
}

/// Scan heading-like and bold/paragraph elements in document order for a
/// section label, then harvest the content following the first hit. First
/// match wins; no further elements are considered for this section.
fn find_section_items(document: &Html, keywords: &[&str]) -> Vec<String> {
    for element in document.select(&SECTION_ANCHOR_SELECTOR) {
        let text = element_text(&element);
        if text.is_empty() || text.len() > MAX_SECTION_ANCHOR_LEN {
            continue;
        }
        let lower = text.to_lowercase();
        if !keywords.iter().any(|k| lower.contains(k)) {
            continue;
        }

        let mut items = collect_following(&element);

        // A bold label may be the sole content of its block, with the list
        // sitting after the block; retry from the enclosing element.
        if items.is_empty() && matches!(element.value().name(), "strong" | "b") {
            if let Some(parent) = parent_element(&element) {
                items = collect_following(&parent);
            }
        }
        return items;
    }
    Vec::new()
}

fn parent_element<'a>(element: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    element.parent().and_then(ElementRef::wrap)
}

/// Walk forward through following sibling elements, stopping at the next
/// heading tag or the traversal guard. The first list encountered supplies
/// the items; otherwise accumulated block text is split into items.
fn collect_following(anchor: &ElementRef) -> Vec<String> {
    let mut blocks: Vec<String> = Vec::new();
    let mut walked = 0;

    for sibling in anchor.next_siblings() {
        let Some(element) = ElementRef::wrap(sibling) else {
            continue;
        };

        walked += 1;
        if walked > SIBLING_SCAN_LIMIT {
            break;
        }
        if HEADING_TAGS.contains(&element.value().name()) {
            break;
        }

        let items: Vec<String> = element
            .select(&LIST_ITEM_SELECTOR)
            .map(|li| element_text(&li))
            .filter(|item| !item.is_empty())
            .collect();
        if !items.is_empty() {
            return items;
        }

        let text = element_text(&element);
        if !text.is_empty() {
            blocks.push(text);
        }
    }

    split_items(&blocks.join("\n"))
}

fn main_text(document: &Html) -> String {
    if let Some(main) = document.select(&MAIN_SELECTOR).next() {
        let text = element_text(&main);
        if !text.is_empty() {
            return text;
        }
    }
    document
        .select(&BODY_SELECTOR)
        .next()
        .map(|body| element_text(&body))
        .unwrap_or_default()
}
