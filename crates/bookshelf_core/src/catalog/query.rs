//! Search/filter/sort over catalog entries.
//!
//! # Invariants
//! - Matching is case-insensitive on both search text and genre filter.
//! - Blank inputs disable the corresponding predicate.
//! - Results are ordered by title and the sort is stable.

use crate::model::book::Book;
use deunicode::deunicode;
use std::cmp::Ordering;

/// Free-text search plus optional genre filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookQuery {
    /// Substring matched against title or author.
    pub search: String,
    /// Exact genre match; empty means "all genres".
    pub genre: String,
}

impl BookQuery {
    pub fn new(search: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            genre: genre.into(),
        }
    }

    /// Returns whether `book` passes both predicates.
    pub fn matches(&self, book: &Book) -> bool {
        let needle = self.search.trim().to_lowercase();
        let genre = self.genre.trim().to_lowercase();

        let text_hit = needle.is_empty()
            || book.title().to_lowercase().contains(&needle)
            || book.author().to_lowercase().contains(&needle);
        let genre_hit = genre.is_empty() || book.genre().trim().to_lowercase() == genre;

        text_hit && genre_hit
    }
}

/// Collation-style title ordering.
///
/// Levels, most significant first:
/// - base letters: diacritics folded to ASCII, case ignored ("Émile" < "Zorba")
/// - accents: unaccented before accented ("Emile" < "Émile")
/// - case: lowercase before uppercase ("dune" < "Dune")
/// - raw text, to keep the order total
pub fn compare_titles(left: &str, right: &str) -> Ordering {
    base_key(left)
        .cmp(&base_key(right))
        .then_with(|| left.to_lowercase().cmp(&right.to_lowercase()))
        .then_with(|| case_key(left).cmp(case_key(right)))
        .then_with(|| left.cmp(right))
}

fn base_key(title: &str) -> String {
    deunicode(title).to_lowercase()
}

fn case_key(title: &str) -> impl Iterator<Item = bool> + '_ {
    title.chars().map(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::compare_titles;
    use std::cmp::Ordering;

    #[test]
    fn title_order_ignores_case_first() {
        assert_eq!(compare_titles("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_titles("Zebra", "apple"), Ordering::Greater);
        assert_eq!(compare_titles("Dune", "Dune"), Ordering::Equal);
    }

    #[test]
    fn title_order_puts_lowercase_first_on_case_ties() {
        assert_eq!(compare_titles("dune", "Dune"), Ordering::Less);
        assert_eq!(compare_titles("Dune", "dune"), Ordering::Greater);
    }

    #[test]
    fn title_order_folds_diacritics() {
        assert_eq!(compare_titles("Émile", "Zorba"), Ordering::Less);
        assert_eq!(compare_titles("Ångström", "Bach"), Ordering::Less);
        assert_eq!(compare_titles("über", "Victor"), Ordering::Less);
    }

    #[test]
    fn title_order_puts_unaccented_first_on_accent_ties() {
        assert_eq!(compare_titles("Emile", "Émile"), Ordering::Less);
        assert_eq!(compare_titles("émile", "Emile"), Ordering::Greater);
    }
}
