//! Card description text

use pokedex_common::Record;

/// Upper-case the first character of `name`, leaving the rest untouched
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Sentence shown on a record's card
///
/// Only the first two categories are mentioned; any further ones are ignored.
pub fn describe(record: &Record) -> String {
    let name = capitalize_first(&record.name);
    let id = record.identifier;

    match record.categories.as_slice() {
        // Unreachable for loaded data; the loader rejects empty category lists
        [] => format!("{name} (#{id}) is a pokemon."),
        [only] => format!("{name} (#{id}) is a {only} type pokemon."),
        [first, second, ..] => {
            format!("{name} (#{id}) is a {first} and {second} type pokemon.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("pikachu"), "Pikachu");
        assert_eq!(capitalize_first("Pikachu"), "Pikachu");
        assert_eq!(capitalize_first("mr. mime"), "Mr. mime");
        assert_eq!(capitalize_first("élan"), "Élan");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_describe_single_category() {
        let record = Record::new(25, "pikachu", &["electric"], "p.png");
        assert_eq!(
            describe(&record),
            "Pikachu (#25) is a electric type pokemon."
        );
    }

    #[test]
    fn test_describe_two_categories() {
        let record = Record::new(6, "charizard", &["fire", "flying"], "c.png");
        assert_eq!(
            describe(&record),
            "Charizard (#6) is a fire and flying type pokemon."
        );
    }

    #[test]
    fn test_describe_ignores_extra_categories() {
        let record = Record::new(999, "missingno", &["bird", "normal", "glitch", "???"], "m.png");
        assert_eq!(
            describe(&record),
            "Missingno (#999) is a bird and normal type pokemon."
        );
    }
}
