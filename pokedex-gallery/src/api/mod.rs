//! HTTP API handlers for pokedex-gallery

pub mod buildinfo;
pub mod health;
pub mod records;
pub mod ui;

pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use records::{get_record, list_records, search_records};
pub use ui::{clear_filter, serve_index, submit_search};
