use std::collections::{BTreeSet, HashMap};

use itertools::Itertools;
use serde::Serialize;
use tracing::debug;

use crate::authors::parse_authors;
use crate::models::Publication;
use crate::roster::Roster;

/// Square, symmetric, zero-diagonal co-occurrence matrix over labeled
/// disciplinary areas. Rebuilt in full on every run; transforms produce new
/// matrices and never mutate this one.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CollabMatrix {
    labels: Vec<String>,
    cells: Vec<Vec<u32>>,
}

impl CollabMatrix {
    pub fn zeroed(labels: Vec<String>) -> Self {
        let n = labels.len();
        CollabMatrix {
            labels,
            cells: vec![vec![0; n]; n],
        }
    }

    pub(crate) fn from_parts(labels: Vec<String>, cells: Vec<Vec<u32>>) -> Self {
        debug_assert_eq!(labels.len(), cells.len());
        debug_assert!(cells.iter().all(|r| r.len() == labels.len()));
        CollabMatrix { labels, cells }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn cells(&self) -> &[Vec<u32>] {
        &self.cells
    }

    pub fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i][j]
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    pub fn row_total(&self, i: usize) -> u64 {
        self.cells[i].iter().map(|&v| v as u64).sum()
    }

    /// Sum of every cell. Each unordered collaboration pair is counted
    /// twice here, once per direction.
    pub fn total(&self) -> u64 {
        (0..self.len()).map(|i| self.row_total(i)).sum()
    }

    fn bump_pair(&mut self, a: usize, b: usize) {
        self.cells[a][b] += 1;
        self.cells[b][a] += 1;
    }
}

/// Aggregate publications into the paper-level collaboration matrix.
///
/// Per publication: parse the author list, resolve each name through the
/// roster (unresolved names carry no signal and are dropped), reduce to the
/// set of distinct areas, and increment each unordered area pair once.
/// A publication with k >= 2 distinct areas contributes to exactly
/// k*(k-1)/2 pairs, regardless of how many authors share those areas.
pub fn build_matrix(publications: &[Publication], roster: &Roster) -> CollabMatrix {
    let mut mat = CollabMatrix::zeroed(roster.areas().to_vec());
    let area_idx: HashMap<&str, usize> = roster
        .areas()
        .iter()
        .enumerate()
        .map(|(i, l)| (l.as_str(), i))
        .collect();

    let mut contributing = 0usize;
    let mut pair_increments = 0usize;

    for publication in publications {
        let mut areas: BTreeSet<usize> = BTreeSet::new();
        for name in parse_authors(&publication.authors_raw) {
            if let Some(area) = roster.area_of(&name) {
                areas.insert(area_idx[area]);
            }
        }
        // single-area and unresolvable papers carry no pairwise signal
        if areas.len() < 2 {
            continue;
        }
        contributing += 1;
        for (a, b) in areas.iter().copied().tuple_combinations() {
            mat.bump_pair(a, b);
            pair_increments += 1;
        }
    }

    debug!(
        "Matrix built - papers={}, contributing={}, areas={}, pair_increments={}",
        publications.len(),
        contributing,
        mat.len(),
        pair_increments
    );

    mat
}
