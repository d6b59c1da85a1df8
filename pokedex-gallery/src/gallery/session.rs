//! One gallery: the record set plus its attach points
//!
//! A session owns its card container and search form, and shares the
//! canonical record set read-only. Each event handler is a method call.

use std::sync::Arc;

use pokedex_common::Record;

use super::controller::{reset, search};
use super::render::render;
use super::surface::{CardContainer, DisplaySurface, SearchForm};

pub struct GallerySession<S: DisplaySurface = CardContainer> {
    records: Arc<[Record]>,
    surface: S,
    form: SearchForm,
}

impl<S: DisplaySurface> GallerySession<S> {
    pub fn new(records: Arc<[Record]>, surface: S, form: SearchForm) -> Self {
        Self {
            records,
            surface,
            form,
        }
    }

    /// Page load: show every record
    pub fn load(&mut self) {
        render(&mut self.surface, self.records.iter());
    }

    /// Search form submitted with these input values
    pub fn submit(&mut self, phrase: &str, category: &str) -> usize {
        self.form.fill(phrase, category);
        search(&mut self.surface, phrase, category, &self.records)
    }

    /// Clear-filter button clicked
    pub fn clear_filter(&mut self) {
        reset(&mut self.surface, &mut self.form, &self.records);
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn form(&self) -> &SearchForm {
        &self.form
    }
}

impl GallerySession<CardContainer> {
    /// Session over an empty in-memory container and a blank form
    pub fn in_memory(records: Arc<[Record]>) -> Self {
        Self::new(records, CardContainer::default(), SearchForm::default())
    }
}
