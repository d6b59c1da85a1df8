//! Search and reset controllers
//!
//! Plain functions taking their inputs explicitly; whatever dispatches the
//! submit or click (an HTTP handler, a test) just calls them.

use pokedex_common::Record;
use tracing::debug;

use super::matching::{find_matches, search_terms};
use super::render::render;
use super::surface::{DisplaySurface, SearchForm};

/// Filter `records` by the two inputs and render the matches
///
/// Returns the number of cards rendered. Both inputs empty renders an
/// empty gallery, not the full set.
pub fn search<S>(surface: &mut S, phrase: &str, category: &str, records: &[Record]) -> usize
where
    S: DisplaySurface + ?Sized,
{
    let terms = search_terms(phrase, category);
    let matches = find_matches(&terms, records);
    let count = matches.len();

    debug!(?terms, matches = count, "Search");
    render(surface, matches);
    count
}

/// Render the full set and empty both search inputs
pub fn reset<S>(surface: &mut S, form: &mut SearchForm, records: &[Record])
where
    S: DisplaySurface + ?Sized,
{
    render(surface, records);
    form.reset();
    debug!(cards = records.len(), "Filter cleared");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::surface::CardContainer;

    fn records() -> Vec<Record> {
        vec![
            Record::new(25, "pikachu", &["electric"], "25.png"),
            Record::new(4, "charmander", &["fire"], "4.png"),
        ]
    }

    #[test]
    fn test_search_phrase_and_category() {
        let mut container = CardContainer::default();
        let count = search(&mut container, "char", "fire", &records());

        assert_eq!(count, 1);
        assert_eq!(container.headings(), vec!["Charmander"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut container = CardContainer::default();
        search(&mut container, "PIKA", "", &records());

        assert_eq!(container.headings(), vec!["Pikachu"]);
    }

    #[test]
    fn test_search_empty_inputs_render_nothing() {
        let mut container = CardContainer::default();
        render(&mut container, &records());

        assert_eq!(search(&mut container, "", "", &records()), 0);
        assert!(container.is_empty());
    }

    #[test]
    fn test_reset_renders_all_and_clears_form() {
        let records = records();
        let mut container = CardContainer::default();
        let mut form = SearchForm::default();
        form.fill("pika", "electric");
        search(&mut container, form.phrase(), form.category(), &records);

        reset(&mut container, &mut form, &records);

        assert_eq!(container.len(), records.len());
        assert_eq!(form, SearchForm::default());
    }
}
