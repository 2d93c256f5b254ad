//! Remote post feed and catalog import.
//!
//! # Responsibility
//! - Fetch one fixed-size page of posts from a remote JSON feed.
//! - Turn posts into electronic book stubs for the caller to merge.
//!
//! # Invariants
//! - Import is fire-once: no retries, no timeout, no cancellation.
//! - Import never mutates a `BookManager`; merging is the caller's call.

pub mod http;
pub mod import;

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::future::Future;

pub type ImportResult<T> = Result<T, ImportError>;

/// Failure modes of a feed import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// Request could not be sent or the body could not be read.
    Network(String),
    /// Server answered with a non-2xx status.
    HttpStatus(u16),
    /// Body is not a JSON array of posts.
    Decode(String),
}

impl ImportError {
    /// Returns whether this failure happened before a usable response.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::HttpStatus(_))
    }
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(message) => write!(f, "feed request failed: {message}"),
            Self::HttpStatus(status) => write!(f, "feed request failed with HTTP status {status}"),
            Self::Decode(message) => write!(f, "feed response could not be decoded: {message}"),
        }
    }
}

impl Error for ImportError {}

/// One item of the remote feed. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedPost {
    pub id: u64,
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub title: String,
}

/// Source of feed posts.
pub trait PostFeed {
    /// Fetches at most `limit` posts.
    fn fetch_posts(
        &self,
        limit: usize,
    ) -> impl Future<Output = ImportResult<Vec<FeedPost>>> + Send;
}

/// Decodes a feed response body.
pub fn decode_posts(body: &[u8]) -> ImportResult<Vec<FeedPost>> {
    serde_json::from_slice(body).map_err(|err| ImportError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{decode_posts, ImportError};

    #[test]
    fn decodes_posts_and_ignores_extra_fields() {
        let body = br#"[{"userId":1,"id":7,"title":"qui est esse","body":"..."}]"#;
        let posts = decode_posts(body).expect("valid feed body");
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, 7);
        assert_eq!(posts[0].user_id, 1);
        assert_eq!(posts[0].title, "qui est esse");
    }

    #[test]
    fn rejects_non_array_body() {
        let err = decode_posts(br#"{"error":"nope"}"#).expect_err("object is not a post list");
        assert!(matches!(err, ImportError::Decode(_)));
        assert!(!err.is_network());
    }

    #[test]
    fn rejects_posts_missing_required_fields() {
        let err = decode_posts(br#"[{"id":1,"title":"no author"}]"#).expect_err("userId missing");
        assert!(err.to_string().contains("userId"));
    }

    #[test]
    fn status_errors_count_as_network_failures() {
        assert!(ImportError::HttpStatus(503).is_network());
        assert_eq!(
            ImportError::HttpStatus(404).to_string(),
            "feed request failed with HTTP status 404"
        );
    }
}
