//! Gallery renderer

use pokedex_common::Record;
use tracing::debug;

use super::card::build_card;
use super::surface::DisplaySurface;

/// Replace whatever `surface` shows with one card per record, in order
///
/// The records are copied first; card building capitalizes names on the
/// copy, never on the caller's data.
pub fn render<'a, S, I>(surface: &mut S, records: I)
where
    S: DisplaySurface + ?Sized,
    I: IntoIterator<Item = &'a Record>,
{
    let working_copy: Vec<Record> = records.into_iter().cloned().collect();
    let count = working_copy.len();

    surface.clear();
    for record in working_copy {
        surface.append(build_card(record));
    }

    debug!(cards = count, "Rendered gallery");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::surface::CardContainer;

    fn records() -> Vec<Record> {
        vec![
            Record::new(7, "squirtle", &["water"], "7.png"),
            Record::new(1, "bulbasaur", &["grass", "poison"], "1.png"),
            Record::new(4, "charmander", &["fire"], "4.png"),
        ]
    }

    #[test]
    fn test_render_preserves_input_order() {
        let mut container = CardContainer::default();
        render(&mut container, &records());

        assert_eq!(container.headings(), vec!["Squirtle", "Bulbasaur", "Charmander"]);
    }

    #[test]
    fn test_render_replaces_previous_cards() {
        let records = records();
        let mut container = CardContainer::default();

        render(&mut container, &records);
        render(&mut container, &records[..1]);

        assert_eq!(container.headings(), vec!["Squirtle"]);
    }

    #[test]
    fn test_render_is_idempotent_and_leaves_source_untouched() {
        let records = records();
        let mut container = CardContainer::default();

        render(&mut container, &records);
        let first = container.clone();
        render(&mut container, &records);

        assert_eq!(container, first);
        assert_eq!(container.len(), records.len());
        assert!(records.iter().all(|r| r.name == r.name.to_lowercase()));
    }

    #[test]
    fn test_render_empty_clears_surface() {
        let mut container = CardContainer::default();
        render(&mut container, &records());
        render(&mut container, &[]);

        assert!(container.is_empty());
    }
}
