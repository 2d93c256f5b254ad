//! Core catalog logic for Bookshelf.
//! This crate owns the book model, the session catalog and feed import;
//! presentation layers only call into it and render the results.

pub mod catalog;
pub mod config;
pub mod feed;
pub mod logging;
pub mod model;
pub mod service;

pub use catalog::manager::{BookManager, CatalogError, CatalogResult};
pub use catalog::query::{compare_titles, BookQuery};
pub use config::{CatalogConfig, ConfigError};
pub use feed::http::{HttpPostFeed, DEFAULT_FEED_URL};
pub use feed::import::{book_from_post, import_external, ImportDefaults};
pub use feed::{decode_posts, FeedPost, ImportError, ImportResult, PostFeed};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::book::{Book, BookAge, BookFormat, BookId, NewBook};
pub use model::category::{categorize, Category};
pub use model::pricing::{discounted_price, discounted_price_with, DEFAULT_DISCOUNT};
pub use service::book_form::{BookForm, BookFormError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
