use bookshelf_core::{Book, BookManager, BookQuery, CatalogError, NewBook};
use chrono::NaiveDate;

fn book(title: &str, author: &str, genre: &str) -> Book {
    let published = NaiveDate::from_ymd_opt(2015, 6, 1).unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    Book::new_as_of(
        NewBook::new(title, author, "9780000000000", published, genre),
        today,
    )
}

fn titles(books: &[&Book]) -> Vec<String> {
    books.iter().map(|book| book.title().to_string()).collect()
}

#[test]
fn add_appends_and_query_sorts_by_title() {
    let mut manager = BookManager::new();
    assert_eq!(manager.add(book("Solaris", "Lem", "scifi")), 0);
    assert_eq!(manager.add(book("Emma", "Austen", "romance")), 1);

    assert_eq!(manager.len(), 2);
    assert_eq!(manager.books()[0].title(), "Solaris");
    assert_eq!(titles(&manager.query(&BookQuery::default())), ["Emma", "Solaris"]);
    // Insertion order is untouched by queries.
    assert_eq!(manager.books()[0].title(), "Solaris");
}

#[test]
fn genre_filter_is_case_insensitive_and_exact() {
    let mut manager = BookManager::new();
    manager.add(book("Solaris", "Lem", "SciFi"));
    manager.add(book("Emma", "Austen", "romance"));
    manager.add(book("Hyperion", "Simmons", "scifi-horror"));

    assert_eq!(titles(&manager.search("", "scifi")), ["Solaris"]);
    assert!(manager.search("", "fantasy").is_empty());
}

#[test]
fn search_matches_title_or_author_ignoring_case() {
    let mut manager = BookManager::new();
    manager.add(book("Dune", "Frank Herbert", "scifi"));
    manager.add(book("The Hobbit", "J.R.R. Tolkien", "fantasy"));
    manager.add(book("Children of Dune", "Frank Herbert", "scifi"));

    assert_eq!(titles(&manager.search("dune", "")), ["Children of Dune", "Dune"]);
    assert_eq!(titles(&manager.search("TOLKIEN", "")), ["The Hobbit"]);
    assert_eq!(titles(&manager.search("herbert", "SCIFI")), ["Children of Dune", "Dune"]);
    assert!(manager.search("herbert", "fantasy").is_empty());
}

#[test]
fn sort_places_lowercase_titles_alphabetically() {
    let mut manager = BookManager::new();
    manager.add(book("zen", "a", "x"));
    manager.add(book("Apple", "a", "x"));
    manager.add(book("banana", "a", "x"));

    assert_eq!(titles(&manager.search("", "")), ["Apple", "banana", "zen"]);
}

#[test]
fn begin_edit_then_add_replaces_in_place() {
    let mut manager = BookManager::new();
    manager.add(book("A", "x", "g"));
    manager.add(book("B", "x", "g"));
    manager.add(book("C", "x", "g"));
    let original_id = manager.books()[1].id();

    let editing = manager.begin_edit(1).unwrap();
    assert_eq!(editing.title(), "B");
    assert_eq!(manager.editing_index(), Some(1));
    // Still listed while being edited.
    assert_eq!(manager.search("B", "").len(), 1);

    let position = manager.add(book("B2", "x", "g"));
    assert_eq!(position, 1);
    assert_eq!(manager.len(), 3);
    assert_eq!(manager.books()[1].title(), "B2");
    assert_eq!(manager.books()[1].id(), original_id);
    assert_eq!(manager.editing_index(), None);

    manager.add(book("D", "x", "g"));
    assert_eq!(manager.len(), 4);
}

#[test]
fn cancel_edit_makes_next_add_append() {
    let mut manager = BookManager::new();
    manager.add(book("A", "x", "g"));
    manager.begin_edit(0).unwrap();
    manager.cancel_edit();

    manager.add(book("B", "x", "g"));
    assert_eq!(manager.len(), 2);
    assert_eq!(manager.books()[0].title(), "A");
}

#[test]
fn delete_shifts_later_positions() {
    let mut manager = BookManager::new();
    manager.extend([book("A", "x", "g"), book("B", "x", "g"), book("C", "x", "g")]);

    let removed = manager.delete(0).unwrap();
    assert_eq!(removed.title(), "A");
    assert_eq!(manager.len(), 2);
    assert_eq!(manager.books()[0].title(), "B");
    assert_eq!(manager.books()[1].title(), "C");
}

#[test]
fn out_of_range_positions_are_rejected() {
    let mut manager = BookManager::new();
    assert_eq!(
        manager.delete(0).unwrap_err(),
        CatalogError::OutOfRange {
            position: 0,
            len: 0
        }
    );

    manager.add(book("A", "x", "g"));
    assert!(matches!(
        manager.begin_edit(1),
        Err(CatalogError::OutOfRange { position: 1, len: 1 })
    ));
    assert_eq!(manager.editing_index(), None);
    assert_eq!(manager.len(), 1);
}

#[test]
fn id_addressed_operations_survive_position_shifts() {
    let mut manager = BookManager::new();
    manager.extend([book("A", "x", "g"), book("B", "x", "g"), book("C", "x", "g")]);
    let c_id = manager.books()[2].id();

    manager.delete(0).unwrap();
    assert_eq!(manager.position_of(c_id), Some(1));

    let editing = manager.begin_edit_by_id(c_id).unwrap();
    assert_eq!(editing.title(), "C");
    assert_eq!(manager.editing_index(), Some(1));

    let removed = manager.delete_by_id(c_id).unwrap();
    assert_eq!(removed.title(), "C");
    assert_eq!(manager.editing_index(), None);
    assert_eq!(
        manager.delete_by_id(c_id).unwrap_err(),
        CatalogError::NotFound(c_id)
    );
}

#[test]
fn duplicate_isbns_are_allowed() {
    let mut manager = BookManager::new();
    manager.add(book("A", "x", "g"));
    manager.add(book("A", "x", "g"));
    assert_eq!(manager.len(), 2);
    assert_eq!(manager.books()[0].isbn(), manager.books()[1].isbn());
}

#[test]
fn listing_sorts_accented_titles_among_plain_ones() {
    let mut manager = BookManager::new();
    manager.add(book("Zorba the Greek", "Kazantzakis", "fiction"));
    manager.add(book("Émile", "Rousseau", "philosophy"));
    manager.add(book("dune", "x", "g"));
    manager.add(book("Dune", "Herbert", "scifi"));
    manager.add(book("Emile", "x", "g"));

    assert_eq!(
        titles(&manager.search("", "")),
        ["dune", "Dune", "Emile", "Émile", "Zorba the Greek"]
    );
}
