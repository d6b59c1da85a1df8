//! Search term extraction and matching

use std::collections::HashSet;

use pokedex_common::Record;

/// Terms for one search: the phrase split on single spaces, then the
/// category term, all lower-cased
///
/// Splitting is literal, so an empty phrase or doubled spaces produce empty
/// terms. Those match nothing.
pub fn search_terms(phrase: &str, category: &str) -> Vec<String> {
    let mut terms: Vec<String> = phrase
        .to_lowercase()
        .split(' ')
        .map(str::to_string)
        .collect();
    terms.push(category.to_lowercase());
    terms
}

/// Does `term` hit this record's name (substring) or one of its categories
/// (exact)?
pub fn term_matches(record: &Record, term: &str) -> bool {
    !term.is_empty()
        && (record.name.contains(term) || record.categories.iter().any(|c| c == term))
}

/// Records hit by any term, each at most once
///
/// Results are grouped by term in term order, records within a term in set
/// order. Duplicates are detected by position in `records`, so two distinct
/// records with equal contents both survive.
pub fn find_matches<'a>(terms: &[String], records: &'a [Record]) -> Vec<&'a Record> {
    let mut seen = HashSet::new();

    terms
        .iter()
        .flat_map(move |term| {
            records
                .iter()
                .enumerate()
                .filter(move |(_, record)| term_matches(record, term))
        })
        .filter(|(index, _)| seen.insert(*index))
        .map(|(_, record)| record)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<Record> {
        vec![
            Record::new(25, "pikachu", &["electric"], "25.png"),
            Record::new(4, "charmander", &["fire"], "4.png"),
            Record::new(6, "charizard", &["fire", "flying"], "6.png"),
            Record::new(16, "pidgey", &["normal", "flying"], "16.png"),
        ]
    }

    fn names(matches: &[&Record]) -> Vec<String> {
        matches.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_terms_split_on_single_spaces() {
        assert_eq!(search_terms("Pika  Char", "FIRE"), vec!["pika", "", "char", "fire"]);
    }

    #[test]
    fn test_terms_for_empty_inputs() {
        assert_eq!(search_terms("", ""), vec!["", ""]);
    }

    #[test]
    fn test_empty_term_matches_nothing() {
        let record = Record::new(25, "pikachu", &["electric"], "25.png");
        assert!(!term_matches(&record, ""));
    }

    #[test]
    fn test_name_substring_and_exact_category() {
        let record = Record::new(6, "charizard", &["fire", "flying"], "6.png");
        assert!(term_matches(&record, "riz"));
        assert!(term_matches(&record, "flying"));
        // Categories must match exactly
        assert!(!term_matches(&record, "fly"));
    }

    #[test]
    fn test_union_in_term_order() {
        let records = records();
        let terms = search_terms("pid", "electric");
        assert_eq!(names(&find_matches(&terms, &records)), vec!["pidgey", "pikachu"]);
    }

    #[test]
    fn test_duplicates_collapse_to_first_occurrence() {
        let records = records();
        let terms = search_terms("char flying", "fire");
        assert_eq!(
            names(&find_matches(&terms, &records)),
            vec!["charmander", "charizard", "pidgey"]
        );
    }

    #[test]
    fn test_equal_records_at_different_positions_both_kept() {
        let records = vec![
            Record::new(25, "pikachu", &["electric"], "25.png"),
            Record::new(25, "pikachu", &["electric"], "25.png"),
        ];
        let terms = search_terms("pika", "electric");
        assert_eq!(find_matches(&terms, &records).len(), 2);
    }

    #[test]
    fn test_both_inputs_empty_yields_nothing() {
        let records = records();
        assert!(find_matches(&search_terms("", ""), &records).is_empty());
    }
}
