//! Card builder

use pokedex_common::Record;

use super::dom::{Element, Node};
use super::format::{capitalize_first, describe};

/// Build the card for one record
///
/// Takes the record by value: the name is capitalized on this copy only.
pub fn build_card(mut record: Record) -> Node {
    record.name = capitalize_first(&record.name);

    let image = Element::new("img")
        .class("card__image")
        .attr("src", record.image_reference.as_str())
        .attr("alt", format!("Image of {}", record.name));

    let heading = Element::new("h2")
        .class("card__heading")
        .text(record.name.as_str());

    let text = Element::new("p")
        .class("card__text")
        .text(describe(&record));

    Element::new("div")
        .class("card")
        .child(image)
        .child(heading)
        .child(text)
        .into()
}
