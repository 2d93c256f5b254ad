//! Book domain model.
//!
//! # Responsibility
//! - Define the catalog record shared by base, electronic and printed books.
//! - Compute presentation-ready derived fields (`age`, `category`) once.
//!
//! # Invariants
//! - `format` is fixed at construction; editing replaces the whole record.
//! - `age` is a snapshot taken at construction and never recomputed.
//! - `id` is stable for the record lifetime and survives edit commits.

use crate::model::category::{categorize, Category};
use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a catalog entry.
///
/// Positions shift on delete; this does not.
pub type BookId = Uuid;

/// Variant-specific shape of a book. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BookFormat {
    /// No format detail was supplied.
    Base,
    Electronic { file_size_mb: f64 },
    Printed { page_count: u32 },
}

impl BookFormat {
    /// Picks the variant from optional form extras.
    ///
    /// A positive page count wins over a positive file size; callers are
    /// expected to supply at most one.
    pub fn select(page_count: Option<u32>, file_size_mb: Option<f64>) -> Self {
        match (page_count, file_size_mb) {
            (Some(pages), _) if pages > 0 => Self::Printed { page_count: pages },
            (_, Some(size)) if size > 0.0 => Self::Electronic { file_size_mb: size },
            _ => Self::Base,
        }
    }

    /// Returns the variant-specific presentation fragment.
    pub fn render_detail(&self) -> Option<String> {
        match self {
            Self::Base => None,
            Self::Electronic { file_size_mb } => Some(format!("File Size: {file_size_mb} MB")),
            Self::Printed { page_count } => Some(format!("Pages: {page_count}")),
        }
    }

    /// Returns a short display name for the variant.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Base => "Book",
            Self::Electronic { .. } => "E-Book",
            Self::Printed { .. } => "Printed Book",
        }
    }

    pub fn is_electronic(&self) -> bool {
        matches!(self, Self::Electronic { .. })
    }

    pub fn is_printed(&self) -> bool {
        matches!(self, Self::Printed { .. })
    }
}

/// Calendar distance between publication and construction day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookAge {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl BookAge {
    /// Computes the age of `published` as seen on `today`.
    ///
    /// A negative day delta borrows the length of the month before `today`
    /// exactly once; if the delta is still negative afterwards it is kept
    /// as is. A negative month delta then borrows one year.
    pub fn between(published: NaiveDate, today: NaiveDate) -> Self {
        let mut years = today.year() - published.year();
        let mut months = today.month() as i32 - published.month() as i32;
        let mut days = today.day() as i32 - published.day() as i32;

        if days < 0 {
            months -= 1;
            days += days_in_previous_month(today);
        }
        if months < 0 {
            years -= 1;
            months += 12;
        }

        Self {
            years,
            months,
            days,
        }
    }
}

impl Display for BookAge {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} years {} months {} days",
            self.years, self.months, self.days
        )
    }
}

/// Construction input for [`Book`].
///
/// Text fields are expected to be trimmed and non-empty; see
/// [`crate::service::book_form::BookForm`] for the checked path.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publication_date: NaiveDate,
    pub genre: String,
    pub page_count: Option<u32>,
    pub file_size_mb: Option<f64>,
}

impl NewBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        publication_date: NaiveDate,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            publication_date,
            genre: genre.into(),
            page_count: None,
            file_size_mb: None,
        }
    }

    pub fn with_page_count(mut self, page_count: u32) -> Self {
        self.page_count = Some(page_count);
        self
    }

    pub fn with_file_size_mb(mut self, file_size_mb: f64) -> Self {
        self.file_size_mb = Some(file_size_mb);
        self
    }
}

/// One catalog entry with its derived attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    isbn: String,
    publication_date: NaiveDate,
    genre: String,
    format: BookFormat,
    age: BookAge,
    category: Category,
}

impl Book {
    /// Creates a book, taking the age snapshot against the local date.
    pub fn new(request: NewBook) -> Self {
        Self::new_as_of(request, Local::now().date_naive())
    }

    /// Creates a book, taking the age snapshot against `today`.
    pub fn new_as_of(request: NewBook, today: NaiveDate) -> Self {
        let format = BookFormat::select(request.page_count, request.file_size_mb);
        Self::with_format(request, format, today)
    }

    /// Creates a book with an explicit variant, ignoring the request's
    /// page count and file size.
    pub(crate) fn with_format(request: NewBook, format: BookFormat, today: NaiveDate) -> Self {
        let age = BookAge::between(request.publication_date, today);
        let category = categorize(&request.genre);

        Self {
            id: Uuid::new_v4(),
            title: request.title,
            author: request.author,
            isbn: request.isbn,
            publication_date: request.publication_date,
            genre: request.genre,
            format,
            age,
            category,
        }
    }

    /// Moves this record onto an existing identity.
    ///
    /// Used when an edit commit replaces a book in place.
    pub(crate) fn with_id(mut self, id: BookId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn publication_date(&self) -> NaiveDate {
        self.publication_date
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn format(&self) -> &BookFormat {
        &self.format
    }

    pub fn age(&self) -> BookAge {
        self.age
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns the variant-specific detail fragment, if any.
    pub fn render_detail(&self) -> Option<String> {
        self.format.render_detail()
    }
}

fn days_in_previous_month(today: NaiveDate) -> i32 {
    today
        .with_day(1)
        .and_then(|first| first.pred_opt())
        .map_or(31, |last| last.day() as i32)
}
