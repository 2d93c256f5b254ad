//! HTTP-backed post feed.

use crate::feed::{decode_posts, FeedPost, ImportError, ImportResult, PostFeed};
use chrono::Utc;
use log::debug;
use reqwest::Client;
use std::future::Future;

/// Default public endpoint serving posts as a JSON array.
pub const DEFAULT_FEED_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Post feed fetched with one GET per import.
///
/// Each request carries `_limit` for the page size and `_` set to the
/// current epoch milliseconds so intermediaries never serve a cached page.
#[derive(Debug, Clone)]
pub struct HttpPostFeed {
    client: Client,
    endpoint: String,
}

impl HttpPostFeed {
    /// Builds a feed client for `endpoint`.
    ///
    /// # Errors
    /// - Returns `ImportError::Network` when the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>) -> ImportResult<Self> {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION"),
            ))
            .build()
            .map_err(|err| ImportError::Network(err.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PostFeed for HttpPostFeed {
    fn fetch_posts(
        &self,
        limit: usize,
    ) -> impl Future<Output = ImportResult<Vec<FeedPost>>> + Send {
        let cache_buster = Utc::now().timestamp_millis().to_string();
        let request = self
            .client
            .get(self.endpoint.as_str())
            .query(&[("_limit", limit.to_string()), ("_", cache_buster)]);
        let endpoint = self.endpoint.clone();

        async move {
            debug!("event=feed_request module=feed status=start endpoint={endpoint} limit={limit}");
            let response = request
                .send()
                .await
                .map_err(|err| ImportError::Network(err.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(ImportError::HttpStatus(status.as_u16()));
            }

            let body = response
                .bytes()
                .await
                .map_err(|err| ImportError::Network(err.to_string()))?;
            decode_posts(&body)
        }
    }
}
