//! Record model and record data loading
//!
//! Records arrive as a JSON array. Both the canonical field names and the
//! short names used by the common Pokédex data files (`id`, `types`,
//! `sprite`) are accepted.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// Record data compiled into the binary, used when no data file is configured
pub const BUNDLED_RECORDS: &str = include_str!("../data/pokemon.json");

/// One displayable entity: a Pokémon
///
/// `name` is stored lower-case; capitalization is a display concern.
/// `categories` is never empty once loaded through this module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(alias = "id")]
    pub identifier: u32,
    pub name: String,
    #[serde(alias = "types")]
    pub categories: Vec<String>,
    #[serde(alias = "sprite")]
    pub image_reference: String,
}

impl Record {
    /// Convenience constructor, mostly for tests and fixtures
    pub fn new(
        identifier: u32,
        name: impl Into<String>,
        categories: &[&str],
        image_reference: impl Into<String>,
    ) -> Self {
        Self {
            identifier,
            name: name.into(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            image_reference: image_reference.into(),
        }
    }
}

/// Parse a JSON array of records
///
/// Rejects records without categories so that rendering never has to
/// handle them.
pub fn parse_records(json: &str) -> Result<Vec<Record>> {
    let records: Vec<Record> = serde_json::from_str(json)?;

    if let Some(bad) = records.iter().find(|r| r.categories.is_empty()) {
        return Err(Error::InvalidRecord(format!(
            "{} (#{}) has no categories",
            bad.name, bad.identifier
        )));
    }

    debug!("Parsed {} records", records.len());
    Ok(records)
}

/// Load records from a JSON file on disk
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let json = std::fs::read_to_string(path)?;
    parse_records(&json)
}

/// Records bundled with the binary
pub fn bundled_records() -> Result<Vec<Record>> {
    parse_records(BUNDLED_RECORDS)
}
