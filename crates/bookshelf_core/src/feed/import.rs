//! Feed-to-catalog import.
//!
//! # Invariants
//! - Every imported post becomes an electronic book.
//! - Output order matches feed order.

use crate::feed::{FeedPost, ImportResult, PostFeed};
use crate::model::book::{Book, BookFormat, NewBook};
use chrono::{Local, NaiveDate};
use log::{info, warn};

/// Publication date stamped onto imported books.
pub const DEFAULT_PUBLICATION_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2020, 1, 1) {
    Some(date) => date,
    None => NaiveDate::MIN,
};

/// Fixed attributes stamped onto every imported book.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDefaults {
    /// Number of posts requested per import.
    pub page_size: usize,
    pub publication_date: NaiveDate,
    pub genre: String,
    pub file_size_mb: f64,
}

impl Default for ImportDefaults {
    fn default() -> Self {
        Self {
            page_size: 3,
            publication_date: DEFAULT_PUBLICATION_DATE,
            genre: "Technology".to_string(),
            file_size_mb: 1.5,
        }
    }
}

/// Fetches one page from `feed` and maps it to electronic books.
///
/// The books are returned, not merged; pass them to
/// [`crate::catalog::manager::BookManager::extend`] to list them.
///
/// # Errors
/// - `ImportError::Network` / `ImportError::HttpStatus` when the request fails.
/// - `ImportError::Decode` when the body is not a post list.
pub async fn import_external<F: PostFeed>(
    feed: &F,
    defaults: &ImportDefaults,
) -> ImportResult<Vec<Book>> {
    info!(
        "event=feed_import module=feed status=start limit={}",
        defaults.page_size
    );

    let posts = match feed.fetch_posts(defaults.page_size).await {
        Ok(posts) => posts,
        Err(err) => {
            warn!("event=feed_import module=feed status=error error={err}");
            return Err(err);
        }
    };

    let today = Local::now().date_naive();
    let books = posts
        .iter()
        .map(|post| book_from_post(post, defaults, today))
        .collect::<Vec<_>>();

    info!(
        "event=feed_import module=feed status=ok imported={}",
        books.len()
    );
    Ok(books)
}

/// Builds the electronic book stub for one feed post.
///
/// The variant is always `Electronic`, whatever `defaults.file_size_mb` holds.
pub fn book_from_post(post: &FeedPost, defaults: &ImportDefaults, today: NaiveDate) -> Book {
    let request = NewBook::new(
        post.title.trim(),
        format!("Author {}", post.user_id),
        synthesized_isbn(post.id),
        defaults.publication_date,
        defaults.genre.as_str(),
    )
    .with_file_size_mb(defaults.file_size_mb);
    let format = BookFormat::Electronic {
        file_size_mb: defaults.file_size_mb,
    };

    Book::with_format(request, format, today)
}

fn synthesized_isbn(post_id: u64) -> String {
    format!("978{post_id:010}")
}

#[cfg(test)]
mod tests {
    use super::{book_from_post, synthesized_isbn, ImportDefaults, DEFAULT_PUBLICATION_DATE};
    use crate::feed::FeedPost;
    use crate::model::book::BookFormat;
    use crate::model::category::Category;
    use chrono::NaiveDate;

    #[test]
    fn isbn_is_thirteen_digits() {
        assert_eq!(synthesized_isbn(42), "9780000000042");
        assert_eq!(synthesized_isbn(42).len(), 13);
    }

    #[test]
    fn post_maps_to_electronic_stub() {
        let post = FeedPost {
            id: 3,
            user_id: 9,
            title: " ea molestias quasi ".to_string(),
        };
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
        let book = book_from_post(&post, &ImportDefaults::default(), today);

        assert_eq!(book.title(), "ea molestias quasi");
        assert_eq!(book.author(), "Author 9");
        assert_eq!(book.isbn(), "9780000000003");
        assert_eq!(book.genre(), "Technology");
        assert_eq!(book.category(), Category::Technical);
        assert_eq!(*book.format(), BookFormat::Electronic { file_size_mb: 1.5 });
        assert_eq!(book.age().to_string(), "4 years 0 months 0 days");
    }

    #[test]
    fn default_publication_date_is_start_of_2020() {
        assert_eq!(
            DEFAULT_PUBLICATION_DATE,
            NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date")
        );
        assert_eq!(
            ImportDefaults::default().publication_date,
            DEFAULT_PUBLICATION_DATE
        );
    }

    #[test]
    fn non_positive_file_size_still_imports_as_electronic() {
        let post = FeedPost {
            id: 1,
            user_id: 1,
            title: "sunt aut facere".to_string(),
        };
        let defaults = ImportDefaults {
            file_size_mb: 0.0,
            ..ImportDefaults::default()
        };
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
        let book = book_from_post(&post, &defaults, today);

        assert!(book.format().is_electronic());
        assert_eq!(book.render_detail().as_deref(), Some("File Size: 0 MB"));
    }
}
