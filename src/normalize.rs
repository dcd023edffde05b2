use unicode_normalization::UnicodeNormalization;

/// Canonical form of a person name: NFC fold, trim, collapse internal
/// whitespace runs, lowercase. Names are only ever compared in this form.
pub fn normalize_name(raw: &str) -> String {
    collapse_ws(raw).to_lowercase()
}

/// Canonical form of an area label: trim + whitespace collapse only.
/// Casing is preserved so the label stays usable for display.
pub fn normalize_area(raw: &str) -> String {
    collapse_ws(raw)
}

fn collapse_ws(raw: &str) -> String {
    raw.nfc()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
