// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Clients for reading data from the Reddit API.

use crate::http::{HTTPError, HTTPResult};
use crate::post::AggregatedPost;
use crate::reddit::service::{BASE_URL, RedditService, Service};
use itertools::Itertools;
use log::debug;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Searches Reddit and retrieves posts.
#[derive(Debug)]
pub struct RedditClient<S = RedditService> {
    service: S,
}

impl RedditClient<RedditService> {
    /// Creates a new client that talks to Reddit over HTTPS.
    pub fn new() -> HTTPResult<Self> {
        Ok(Self::new_with_service(RedditService::new()?))
    }
}

impl<S: Service> RedditClient<S> {
    /// Creates a new client that retrieves data using `service`.
    pub fn new_with_service(service: S) -> Self {
        Self { service }
    }

    /// The service used to retrieve data.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Searches Reddit for up to `limit` posts matching `query`.
    ///
    /// Search failures are not fatal: the error is reported on stderr
    /// and an empty result is returned.
    pub async fn search(&self, query: &str, limit: u32) -> SearchResult {
        match self.try_search(query, limit).await {
            Ok(result) => result,
            Err(err) => {
                eprintln!("[search] ERROR {err}");
                SearchResult::default()
            }
        }
    }

    async fn try_search(&self, query: &str, limit: u32) -> Result<SearchResult, Error> {
        let body = self.service.search(query, limit).await?;
        let listing: SearchListing = serde_json::from_str(&body)?;
        let result = SearchResult::from_listing(listing);
        debug!("search for {query:?} found {} posts", result.len());
        Ok(result)
    }

    /// Retrieves the post at `url` and aggregates its text.
    pub async fn post(&self, url: &str) -> Result<AggregatedPost, Error> {
        let body = self.service.post(url).await?;
        let root: Value = serde_json::from_str(&body)?;
        Ok(AggregatedPost::from_json(&root))
    }
}

/// Canonical URLs of posts found by a search, in order of relevance.
///
/// Each URL appears only once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResult {
    urls: Vec<String>,
}

impl SearchResult {
    /// The URLs of the posts that were found.
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// Number of posts found.
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// True if no posts were found.
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    fn from_listing(listing: SearchListing) -> Self {
        let urls = listing
            .data
            .children
            .into_iter()
            .filter_map(|child| child.data.permalink)
            .filter(|permalink| !permalink.is_empty())
            .map(|permalink| format!("{BASE_URL}{permalink}"))
            .unique()
            .collect();
        Self { urls }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SearchListing {
    data: SearchListingData,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SearchListingData {
    children: Vec<SearchChild>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SearchChild {
    data: LinkData,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LinkData {
    permalink: Option<String>,
}

/// A client error.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the underlying HTTP service.
    #[error("Service error: {0}")]
    Service(#[from] HTTPError),

    /// An error parsing data.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
