//! Display surface attach points
//!
//! The card container and the search form are plain values handed to a
//! gallery session, so the controllers can run without a live document.

use super::dom::{Element, Node};

/// Class of the element holding the cards
pub const CARD_CONTAINER_CLASS: &str = "card-container";
/// Class of the search form
pub const SEARCH_FORM_CLASS: &str = "search-form";
/// Class of the button that clears the filter
pub const CLEAR_FILTER_BUTTON_CLASS: &str = "clear-filter-button";

/// Somewhere cards can be displayed
pub trait DisplaySurface {
    /// Remove every displayed card
    fn clear(&mut self);

    /// Append one card after the existing ones
    fn append(&mut self, card: Node);
}

/// In-memory card container
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardContainer {
    cards: Vec<Node>,
}

impl CardContainer {
    pub fn cards(&self) -> &[Node] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card headings in display order
    pub fn headings(&self) -> Vec<String> {
        self.cards
            .iter()
            .filter_map(Node::as_element)
            .filter_map(|card| card.find_by_class("card__heading"))
            .map(Element::text_content)
            .collect()
    }

    pub fn to_node(&self) -> Node {
        self.cards
            .iter()
            .cloned()
            .fold(Element::new("div").class(CARD_CONTAINER_CLASS), |el, card| el.child(card))
            .into()
    }
}

impl DisplaySurface for CardContainer {
    fn clear(&mut self) {
        self.cards.clear();
    }

    fn append(&mut self, card: Node) {
        self.cards.push(card);
    }
}

/// The two text inputs of the search form, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    phrase: String,
    category: String,
}

impl SearchForm {
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Record what the user typed before submitting
    pub fn fill(&mut self, phrase: &str, category: &str) {
        self.phrase = phrase.to_string();
        self.category = category.to_string();
    }

    /// Empty both inputs
    pub fn reset(&mut self) {
        self.phrase.clear();
        self.category.clear();
    }

    /// Form element submitting to `action` with the current input values
    pub fn to_node(&self, action: &str) -> Node {
        let phrase = Element::new("input")
            .class("search-form__input")
            .attr("type", "text")
            .attr("name", "phrase")
            .attr("placeholder", "Search by name or type")
            .attr("value", self.phrase.as_str());

        let category = Element::new("input")
            .class("search-form__input")
            .attr("type", "text")
            .attr("name", "category")
            .attr("placeholder", "Type")
            .attr("value", self.category.as_str());

        let submit = Element::new("button")
            .class("search-form__submit")
            .attr("type", "submit")
            .text("Search");

        Element::new("form")
            .class(SEARCH_FORM_CLASS)
            .attr("action", action)
            .attr("method", "get")
            .child(phrase)
            .child(category)
            .child(submit)
            .into()
    }
}

/// Button that triggers the filter reset
pub fn clear_filter_button(action: &str) -> Node {
    let button = Element::new("button")
        .class(CLEAR_FILTER_BUTTON_CLASS)
        .attr("type", "submit")
        .text("Clear filter");

    Element::new("form")
        .attr("action", action)
        .attr("method", "get")
        .child(button)
        .into()
}
