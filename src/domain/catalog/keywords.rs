//! Keyword tag transforms between free text and lists.

/// Splits comma-separated keyword text into a tag list.
///
/// Entries are trimmed and empty entries dropped.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect()
}

/// Joins a tag list back into editable free text.
pub fn join_keywords(keywords: &[String]) -> String {
    keywords.join(", ")
}
