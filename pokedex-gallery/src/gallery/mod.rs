//! Card gallery: document model, card building, rendering and filtering

pub mod card;
pub mod controller;
pub mod dom;
pub mod format;
pub mod matching;
pub mod page;
pub mod render;
pub mod session;
pub mod surface;

pub use card::build_card;
pub use controller::{reset, search};
pub use dom::{Element, Node};
pub use format::describe;
pub use matching::{find_matches, search_terms};
pub use page::render_page;
pub use render::render;
pub use session::GallerySession;
pub use surface::{CardContainer, DisplaySurface, SearchForm};
