//! Typed CSV ingestion. Schema problems surface here, before any
//! computation, as `SchemaError`; everything downstream can assume
//! validated rows.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::errors::SchemaError;
use crate::models::{CensusRow, Publication};

/// Column names tried, in order, for the co-author list field.
pub const AUTHOR_COL_CANDIDATES: [&str; 6] = [
    "authors_full",
    "authors",
    "coauthors",
    "co_authors",
    "Authors",
    "Authors_full",
];

pub const CENSUS_NAME_COL: &str = "full_name";
pub const CENSUS_AREA_COL: &str = "Area_desc";

/// Load the publications table. The authors column is resolved against
/// `AUTHOR_COL_CANDIDATES` (first match wins); with no match the load fails
/// before reading any row.
pub fn load_publications(path: &Path) -> Result<Vec<Publication>> {
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("open publications table {}", path.display()))?;
    let headers = rdr
        .headers()
        .with_context(|| format!("read headers of {}", path.display()))?
        .clone();

    let authors_idx = AUTHOR_COL_CANDIDATES
        .iter()
        .find_map(|c| headers.iter().position(|h| h == *c));
    let Some(authors_idx) = authors_idx else {
        return Err(SchemaError::NoAuthorsColumn {
            table: "publications".into(),
            tried: AUTHOR_COL_CANDIDATES.iter().map(|s| s.to_string()).collect(),
            found: headers.iter().map(str::to_string).collect(),
        }
        .into());
    };

    let mut out = Vec::new();
    for record in rdr.records() {
        let record = record.with_context(|| format!("read record from {}", path.display()))?;
        out.push(Publication {
            authors_raw: record.get(authors_idx).unwrap_or("").to_string(),
        });
    }

    info!(
        "Publications loaded - path={}, rows={}, authors_column={}",
        path.display(),
        out.len(),
        &headers[authors_idx]
    );
    Ok(out)
}

/// Load the census table. Requires the fixed `full_name` and `Area_desc`
/// columns; any missing one fails the load with the field named.
pub fn load_census(path: &Path) -> Result<Vec<CensusRow>> {
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("open census table {}", path.display()))?;
    let headers = rdr
        .headers()
        .with_context(|| format!("read headers of {}", path.display()))?
        .clone();

    let name_idx = headers.iter().position(|h| h == CENSUS_NAME_COL);
    let area_idx = headers.iter().position(|h| h == CENSUS_AREA_COL);

    let missing: Vec<String> = [
        (CENSUS_NAME_COL, name_idx),
        (CENSUS_AREA_COL, area_idx),
    ]
    .iter()
    .filter(|(_, idx)| idx.is_none())
    .map(|(col, _)| col.to_string())
    .collect();
    if !missing.is_empty() {
        return Err(SchemaError::MissingColumns {
            table: "census".into(),
            missing,
            found: headers.iter().map(str::to_string).collect(),
        }
        .into());
    }
    let (name_idx, area_idx) = (name_idx.unwrap(), area_idx.unwrap());

    let mut out = Vec::new();
    for record in rdr.records() {
        let record = record.with_context(|| format!("read record from {}", path.display()))?;
        out.push(CensusRow {
            full_name: record.get(name_idx).unwrap_or("").to_string(),
            area_desc: record.get(area_idx).unwrap_or("").to_string(),
        });
    }

    info!(
        "Census loaded - path={}, rows={}",
        path.display(),
        out.len()
    );
    Ok(out)
}
