// src/utils.rs
//! Text normalization helpers shared by the text and page extraction paths.

/// Maximum number of characters kept in a posting's full description.
pub const DESCRIPTION_CAP: usize = 8000;

/// Appended when a description is cut at [`DESCRIPTION_CAP`].
pub const TRUNCATION_MARKER: char = '…';

fn is_zero_width(c: char) -> bool {
    matches!(c, '\u{200B}'..='\u{200D}' | '\u{2060}' | '\u{FEFF}')
}

/// Collapse whitespace runs to single spaces, strip zero-width characters,
/// and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    let stripped: String = text.chars().filter(|c| !is_zero_width(*c)).collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cap a description at [`DESCRIPTION_CAP`] characters, appending the
/// truncation marker when anything was cut.
pub fn cap_description(text: &str) -> String {
    if text.chars().count() <= DESCRIPTION_CAP {
        return text.to_string();
    }
    let mut capped: String = text.chars().take(DESCRIPTION_CAP).collect();
    capped.push(TRUNCATION_MARKER);
    capped
}

/// Split a section body into line items on newlines and `•` bullets.
/// Leading bullet markers are stripped, items are normalized, empties dropped.
pub fn split_items(block: &str) -> Vec<String> {
    block
        .split(['\n', '•'])
        .map(strip_bullet)
        .map(normalize_whitespace)
        .filter(|item| !item.is_empty())
        .collect()
}

fn strip_bullet(line: &str) -> &str {
    line.trim_start()
        .trim_start_matches(['-', '–', '—', '*', '·'])
        .trim_start()
}

/// Heuristic section boundary: a short capitalized line ending in a colon.
pub fn is_heading_line(line: &str) -> bool {
    let line = line.trim();
    line.ends_with(':')
        && line.len() <= 48
        && line.chars().next().map(char::is_uppercase).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  hello \t world  "), "hello world");
        assert_eq!(normalize_whitespace("a\n\nb"), "a b");
        assert_eq!(normalize_whitespace("zero\u{200B}width\u{FEFF} gone"), "zerowidth gone");
        assert_eq!(normalize_whitespace("\u{200C}\u{200D}"), "");
    }

    #[test]
    fn test_cap_description_short_input_untouched() {
        assert_eq!(cap_description("short text"), "short text");
    }

    #[test]
    fn test_cap_description_truncates_at_cap() {
        let long: String = "x".repeat(DESCRIPTION_CAP + 500);
        let capped = cap_description(&long);
        assert_eq!(capped.chars().count(), DESCRIPTION_CAP + 1);
        assert!(capped.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_cap_description_exact_cap_not_marked() {
        let exact: String = "y".repeat(DESCRIPTION_CAP);
        assert_eq!(cap_description(&exact), exact);
    }

    #[test]
    fn test_split_items_hyphen_bullets() {
        let items = split_items("- Write code\n- Review PRs\n");
        assert_eq!(items, vec!["Write code", "Review PRs"]);
    }

    #[test]
    fn test_split_items_bullet_char_and_interior_hyphen() {
        let items = split_items("• Ship mid-level features • Mentor juniors");
        assert_eq!(items, vec!["Ship mid-level features", "Mentor juniors"]);
    }

    #[test]
    fn test_split_items_drops_empty_lines() {
        let items = split_items("\n\n- only item\n   \n");
        assert_eq!(items, vec!["only item"]);
    }

    #[test]
    fn test_is_heading_line() {
        assert!(is_heading_line("Requirements:"));
        assert!(is_heading_line("  What We Offer:  "));
        assert!(!is_heading_line("requirements:"));
        assert!(!is_heading_line("Requirements"));
        assert!(!is_heading_line(
            "This is a very long sentence that happens to end with a colon:"
        ));
    }
}
