// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! HTTPS connector for the Reddit API.
//!
//! Service structures in this module provide a low-level way to interact
//! with the Reddit API over HTTPS, essentially a specialized HTTPS client
//! specifically for Reddit. They return raw response bodies; parsing is
//! left to [`RedditClient`](crate::reddit::RedditClient).

use crate::http::{HTTPClientFactory, HTTPError, HTTPResult};
use log::debug;
use reqwest::{Client, RequestBuilder, header};

/// Every canonical post URL starts with this.
pub const BASE_URL: &str = "https://www.reddit.com";

/// A service for retrieving search results and posts from Reddit.
///
/// Using this trait, clients can implement different ways of connecting
/// to the Reddit API, such as an actual connector for production code,
/// and a mocked connector for testing purposes.
pub trait Service {
    /// Searches Reddit for links matching `query`, returning at most
    /// `limit` results sorted by relevance, as a raw JSON listing.
    fn search(&self, query: &str, limit: u32) -> impl Future<Output = HTTPResult<String>> + Send;

    /// Retrieves the JSON representation of the post at `url`, including
    /// its comments.
    ///
    /// `url` is a canonical post URL, such as one produced by a search.
    fn post(&self, url: &str) -> impl Future<Output = HTTPResult<String>> + Send;
}

/// A service that contacts the Reddit API directly to retrieve information.
#[derive(Debug)]
pub struct RedditService {
    client: Client,
}

impl RedditService {
    /// Creates a new Reddit service with a default HTTP client.
    pub fn new() -> HTTPResult<Self> {
        Self::with_factory(&HTTPClientFactory::default())
    }

    /// Creates a new Reddit service whose HTTP client comes from `factory`.
    pub fn with_factory(factory: &HTTPClientFactory) -> HTTPResult<Self> {
        let client = factory.create()?;
        Ok(Self { client })
    }

    fn search_request(&self, query: &str, limit: u32) -> RequestBuilder {
        let limit = limit.to_string();
        self.client.get(format!("{BASE_URL}/search.json")).query(&[
            ("q", query),
            ("limit", limit.as_str()),
            ("sort", "relevance"),
            ("type", "link"),
        ])
    }

    /// Sends a GET request to a Reddit API endpoint and returns the raw body.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    async fn send(&self, request: RequestBuilder) -> HTTPResult<String> {
        let resp = request.send().await?;
        debug!("{} {}", resp.status(), resp.url());

        if !resp.status().is_success() {
            Err(HTTPError::Http(resp.status()))
        } else {
            let content_type = resp
                .headers()
                .get(header::CONTENT_TYPE)
                .ok_or(HTTPError::MissingContentType)?
                .to_str()?;
            if !content_type.starts_with("application/json") {
                Err(HTTPError::UnexpectedContentType(content_type.to_string()))
            } else {
                let body = resp.bytes().await?;
                Ok(String::from_utf8_lossy(&body).into_owned())
            }
        }
    }
}

impl Service for RedditService {
    async fn search(&self, query: &str, limit: u32) -> HTTPResult<String> {
        self.send(self.search_request(query, limit)).await
    }

    async fn post(&self, url: &str) -> HTTPResult<String> {
        self.send(self.client.get(json_uri(url))).await
    }
}

/// The URI of the JSON representation of the post at `url`.
///
/// # Examples
///
/// ```
/// use redditwc::reddit::service::json_uri;
/// let url = "https://www.reddit.com/r/rust/comments/abc123/hello";
/// assert_eq!(json_uri(url), "https://www.reddit.com/r/rust/comments/abc123/hello/.json");
/// ```
pub fn json_uri(url: &str) -> String {
    if url.ends_with('/') {
        format!("{url}.json")
    } else {
        format!("{url}/.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_returns_a_search_uri() {
        let service = RedditService::new().unwrap();
        let request = service.search_request("rust", 50).build().unwrap();
        let expected_uri =
            "https://www.reddit.com/search.json?q=rust&limit=50&sort=relevance&type=link";
        assert_eq!(request.url().as_str(), expected_uri);
    }

    #[test]
    fn it_encodes_search_queries() {
        let service = RedditService::new().unwrap();
        let request = service.search_request("new & old", 5).build().unwrap();
        let expected_uri =
            "https://www.reddit.com/search.json?q=new+%26+old&limit=5&sort=relevance&type=link";
        assert_eq!(request.url().as_str(), expected_uri);
    }

    #[test]
    fn it_sends_get_requests() {
        let service = RedditService::new().unwrap();
        let request = service.search_request("rust", 50).build().unwrap();
        assert_eq!(*request.method(), reqwest::Method::GET);
    }

    #[test]
    fn it_returns_a_json_uri_for_a_post_with_a_trailing_slash() {
        let url = "https://www.reddit.com/r/rust/comments/abc123/hello/";
        let expected_uri = "https://www.reddit.com/r/rust/comments/abc123/hello/.json";
        assert_eq!(json_uri(url), expected_uri);
    }

    #[test]
    fn it_returns_a_json_uri_for_a_post_without_a_trailing_slash() {
        let url = "https://www.reddit.com/r/rust/comments/abc123/hello";
        let expected_uri = "https://www.reddit.com/r/rust/comments/abc123/hello/.json";
        assert_eq!(json_uri(url), expected_uri);
    }
}
