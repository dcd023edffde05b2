use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publication {
    /// Raw delimited co-author list, exactly as it appears in the CSV.
    pub authors_raw: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CensusRow {
    pub full_name: String,
    pub area_desc: String,
}
