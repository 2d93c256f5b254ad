//! Form-driven book input.
//!
//! # Responsibility
//! - Turn raw submitted form text into a checked `NewBook` request.
//! - Pre-populate an edit form from an existing book.
//!
//! # Invariants
//! - Every text field is trimmed before checks.
//! - title/author/isbn/publication_date/genre must be non-empty.
//! - At most one of page count / file size may be positive.

use crate::model::book::{Book, BookFormat, NewBook};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static ISBN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9][0-9-]*[0-9]$|^[0-9]$").expect("valid isbn regex"));

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Form validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookFormError {
    /// Required field is blank after trimming.
    MissingField(&'static str),
    /// ISBN contains something other than digits and inner hyphens.
    InvalidIsbn(String),
    /// Date is not `YYYY-MM-DD`.
    InvalidDate(String),
    /// Numeric extra could not be parsed.
    InvalidNumber { field: &'static str, value: String },
    /// Both page count and file size are positive.
    ConflictingFormat,
}

impl Display for BookFormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{field} is required"),
            Self::InvalidIsbn(value) => write!(f, "isbn must be numeric, got `{value}`"),
            Self::InvalidDate(value) => {
                write!(f, "publication_date must be YYYY-MM-DD, got `{value}`")
            }
            Self::InvalidNumber { field, value } => {
                write!(f, "{field} must be a number, got `{value}`")
            }
            Self::ConflictingFormat => {
                write!(f, "page_count and file_size_mb cannot both be set")
            }
        }
    }
}

impl Error for BookFormError {}

/// Raw form submission. Numeric extras may be blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publication_date: String,
    pub genre: String,
    pub page_count: String,
    pub file_size_mb: String,
}

impl BookForm {
    /// Checks the form and builds the construction request.
    pub fn into_request(self) -> Result<NewBook, BookFormError> {
        let title = required("title", &self.title)?;
        let author = required("author", &self.author)?;
        let isbn = required("isbn", &self.isbn)?;
        if !ISBN_RE.is_match(isbn) {
            return Err(BookFormError::InvalidIsbn(isbn.to_string()));
        }
        let raw_date = required("publication_date", &self.publication_date)?;
        let publication_date = NaiveDate::parse_from_str(raw_date, DATE_FORMAT)
            .map_err(|_| BookFormError::InvalidDate(raw_date.to_string()))?;
        let genre = required("genre", &self.genre)?;

        let page_count = optional_number::<u32>("page_count", &self.page_count)?;
        let file_size_mb = optional_number::<f64>("file_size_mb", &self.file_size_mb)?;
        if let Some(size) = file_size_mb.filter(|size| !size.is_finite()) {
            return Err(BookFormError::InvalidNumber {
                field: "file_size_mb",
                value: size.to_string(),
            });
        }
        if page_count.is_some_and(|pages| pages > 0) && file_size_mb.is_some_and(|size| size > 0.0)
        {
            return Err(BookFormError::ConflictingFormat);
        }

        Ok(NewBook {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            publication_date,
            genre: genre.to_string(),
            page_count,
            file_size_mb,
        })
    }

    /// Builds a form pre-filled with `book`'s values.
    pub fn from_book(book: &Book) -> Self {
        let (page_count, file_size_mb) = match book.format() {
            BookFormat::Base => (String::new(), String::new()),
            BookFormat::Electronic { file_size_mb } => (String::new(), file_size_mb.to_string()),
            BookFormat::Printed { page_count } => (page_count.to_string(), String::new()),
        };

        Self {
            title: book.title().to_string(),
            author: book.author().to_string(),
            isbn: book.isbn().to_string(),
            publication_date: book.publication_date().format(DATE_FORMAT).to_string(),
            genre: book.genre().to_string(),
            page_count,
            file_size_mb,
        }
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, BookFormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BookFormError::MissingField(field));
    }
    Ok(trimmed)
}

fn optional_number<T: std::str::FromStr>(
    field: &'static str,
    value: &str,
) -> Result<Option<T>, BookFormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<T>()
        .map(Some)
        .map_err(|_| BookFormError::InvalidNumber {
            field,
            value: trimmed.to_string(),
        })
}
