//! In-memory catalog manager.
//!
//! # Responsibility
//! - Own the ordered book collection for one session.
//! - Mediate add/edit/delete and produce filtered, sorted views.
//!
//! # Invariants
//! - Insertion order is the default order of `books`.
//! - `editing_index`, when set, always points at a valid position.
//! - Edit commits replace the record in place and keep its `BookId`.
//! - Queries never reorder or mutate the owned collection.

use crate::catalog::query::{compare_titles, BookQuery};
use crate::model::book::{Book, BookId};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised by position- or id-addressed catalog operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Position is not a valid index into the collection.
    OutOfRange { position: usize, len: usize },
    /// No book carries this id.
    NotFound(BookId),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { position, len } => write!(
                f,
                "position {position} is out of range for catalog of {len} book(s)"
            ),
            Self::NotFound(id) => write!(f, "book not found: {id}"),
        }
    }
}

impl Error for CatalogError {}

/// Ordered collection of books with a single-slot editing cursor.
#[derive(Debug, Default)]
pub struct BookManager {
    books: Vec<Book>,
    editing_index: Option<usize>,
}

impl BookManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `book`, or commits it over the book being edited.
    ///
    /// Returns the position the book now occupies.
    pub fn add(&mut self, book: Book) -> usize {
        match self.editing_index.take() {
            Some(position) => {
                let id = self.books[position].id();
                self.books[position] = book.with_id(id);
                debug!("event=book_replace module=catalog status=ok position={position} id={id}");
                position
            }
            None => {
                debug!(
                    "event=book_add module=catalog status=ok position={} id={}",
                    self.books.len(),
                    book.id()
                );
                self.books.push(book);
                self.books.len() - 1
            }
        }
    }

    /// Appends books in order, bypassing the editing cursor.
    ///
    /// Returns the number of books appended.
    pub fn extend(&mut self, books: impl IntoIterator<Item = Book>) -> usize {
        let before = self.books.len();
        self.books.extend(books);
        let appended = self.books.len() - before;
        debug!("event=book_extend module=catalog status=ok appended={appended}");
        appended
    }

    /// Removes and returns the book at `position`.
    ///
    /// Later positions shift down by one. The editing cursor follows the
    /// book it pointed at, and is cleared if that book was removed.
    pub fn delete(&mut self, position: usize) -> CatalogResult<Book> {
        self.check_position(position)?;
        let removed = self.books.remove(position);

        self.editing_index = match self.editing_index {
            Some(editing) if editing == position => None,
            Some(editing) if editing > position => Some(editing - 1),
            other => other,
        };

        debug!(
            "event=book_delete module=catalog status=ok position={position} id={}",
            removed.id()
        );
        Ok(removed)
    }

    /// Removes the book carrying `id`.
    pub fn delete_by_id(&mut self, id: BookId) -> CatalogResult<Book> {
        let position = self.position_of(id).ok_or(CatalogError::NotFound(id))?;
        self.delete(position)
    }

    /// Marks `position` as the target of the next [`BookManager::add`].
    ///
    /// The book stays listed until the edit is committed.
    pub fn begin_edit(&mut self, position: usize) -> CatalogResult<&Book> {
        self.check_position(position)?;
        self.editing_index = Some(position);
        debug!("event=edit_begin module=catalog status=ok position={position}");
        Ok(&self.books[position])
    }

    /// Starts editing the book carrying `id`.
    pub fn begin_edit_by_id(&mut self, id: BookId) -> CatalogResult<&Book> {
        let position = self.position_of(id).ok_or(CatalogError::NotFound(id))?;
        self.begin_edit(position)
    }

    /// Drops the editing cursor without touching the collection.
    pub fn cancel_edit(&mut self) {
        self.editing_index = None;
    }

    pub fn editing_index(&self) -> Option<usize> {
        self.editing_index
    }

    /// Returns matching books sorted by title.
    pub fn query(&self, query: &BookQuery) -> Vec<&Book> {
        let mut hits = self
            .books
            .iter()
            .filter(|book| query.matches(book))
            .collect::<Vec<_>>();
        hits.sort_by(|left, right| compare_titles(left.title(), right.title()));
        hits
    }

    /// Shorthand for [`BookManager::query`] from raw search/genre text.
    pub fn search(&self, search: &str, genre: &str) -> Vec<&Book> {
        self.query(&BookQuery::new(search, genre))
    }

    pub fn position_of(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|book| book.id() == id)
    }

    pub fn get(&self, position: usize) -> Option<&Book> {
        self.books.get(position)
    }

    /// Returns books in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn check_position(&self, position: usize) -> CatalogResult<()> {
        if position < self.books.len() {
            Ok(())
        } else {
            Err(CatalogError::OutOfRange {
                position,
                len: self.books.len(),
            })
        }
    }
}
