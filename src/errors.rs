use thiserror::Error;

/// A required column is absent from an input table. Blocking: nothing is
/// computed or exported once this is raised.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("{table}: missing required column(s) {missing:?}. Found columns: {found:?}")]
    MissingColumns {
        table: String,
        missing: Vec<String>,
        found: Vec<String>,
    },

    #[error("{table}: cannot find an authors column. Tried: {tried:?}. Found columns: {found:?}")]
    NoAuthorsColumn {
        table: String,
        tried: Vec<String>,
        found: Vec<String>,
    },
}
