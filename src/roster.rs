use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::models::CensusRow;
use crate::normalize::{normalize_area, normalize_name};

/// Resolved census: normalized person name -> disciplinary area, plus the
/// full vocabulary of areas. Built once per run and passed through
/// explicitly; never ambient state.
#[derive(Debug, Clone)]
pub struct Roster {
    name_to_area: HashMap<String, String>,
    /// Distinct area labels in the mapping's value set, sorted
    /// alphabetically. This is the matrix's stable index universe: every
    /// known area gets a row/column even with zero collaborations.
    areas: Vec<String>,
}

impl Roster {
    pub fn area_of(&self, normalized_name: &str) -> Option<&str> {
        self.name_to_area.get(normalized_name).map(String::as_str)
    }

    pub fn areas(&self) -> &[String] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.name_to_area.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_area.is_empty()
    }
}

/// Build the name->area mapping from census rows. Rows with an empty
/// normalized name or area are dropped. Duplicate normalized names keep the
/// first occurrence, in row order (fixed policy, not an error).
pub fn build_roster(rows: &[CensusRow]) -> Roster {
    let mut name_to_area: HashMap<String, String> = HashMap::new();
    let mut dropped = 0usize;
    let mut duplicates = 0usize;

    for row in rows {
        let name = normalize_name(&row.full_name);
        let area = normalize_area(&row.area_desc);
        if name.is_empty() || area.is_empty() {
            dropped += 1;
            continue;
        }
        if name_to_area.contains_key(&name) {
            duplicates += 1;
            continue;
        }
        name_to_area.insert(name, area);
    }

    let areas: Vec<String> = name_to_area
        .values()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    debug!(
        "Roster built - names={}, areas={}, dropped_rows={}, duplicate_names={}",
        name_to_area.len(),
        areas.len(),
        dropped,
        duplicates
    );

    Roster { name_to_area, areas }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, area: &str) -> CensusRow {
        CensusRow {
            full_name: name.to_string(),
            area_desc: area.to_string(),
        }
    }

    #[test]
    fn maps_normalized_names() {
        let roster = build_roster(&[row("  Alice   Smith ", "Biology"), row("Bob Jones", " Physics ")]);
        assert_eq!(roster.area_of("alice smith"), Some("Biology"));
        assert_eq!(roster.area_of("bob jones"), Some("Physics"));
        assert_eq!(roster.area_of("carol white"), None);
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn first_occurrence_wins_on_duplicates() {
        let roster = build_roster(&[
            row("Alice Smith", "Biology"),
            row("ALICE  SMITH", "Physics"),
        ]);
        assert_eq!(roster.area_of("alice smith"), Some("Biology"));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn drops_rows_with_empty_fields() {
        let roster = build_roster(&[
            row("", "Biology"),
            row("   ", "Physics"),
            row("Dan Brown", "  "),
            row("Eve Black", "Chemistry"),
        ]);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.areas(), ["Chemistry"]);
    }

    #[test]
    fn area_universe_sorted_and_distinct() {
        let roster = build_roster(&[
            row("a b", "Physics"),
            row("c d", "Biology"),
            row("e f", "Physics"),
        ]);
        assert_eq!(roster.areas(), ["Biology", "Physics"]);
    }
}
