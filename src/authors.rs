use crate::normalize::normalize_name;

/// Split a raw co-author string into normalized author names.
///
/// Delimiter priority: if the string contains a semicolon we split on
/// semicolons, otherwise on commas. Lists mixing "Last, First" with multiple
/// authors are comma-ambiguous; the semicolon, when present, is the
/// unambiguous separator. A purely comma-delimited "Last, First" list stays
/// ambiguous and is split as-is (known limitation, no silent disambiguation).
///
/// Order is preserved and duplicates are kept: area-level de-duplication
/// happens later in the matrix builder, after name resolution.
pub fn parse_authors(raw: &str) -> Vec<String> {
    let s = raw.trim();
    if s.is_empty() {
        return Vec::new();
    }
    let delim = if s.contains(';') { ';' } else { ',' };
    s.split(delim)
        .map(normalize_name)
        .filter(|t| !t.is_empty())
        .collect()
}
