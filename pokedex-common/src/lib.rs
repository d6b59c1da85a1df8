//! # Pokédex Common Library
//!
//! Shared code for the gallery crates:
//! - Record model and record data loading
//! - Configuration resolution (CLI > TOML > compiled defaults)
//! - Common error type

pub mod config;
pub mod error;
pub mod records;

pub use error::{Error, Result};
pub use records::Record;
