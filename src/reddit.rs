// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Reddit API clients and services for communicating with Reddit over HTTP.

pub mod client;
pub mod service;
pub mod thing;

pub use client::{Error, RedditClient, SearchResult};
pub use service::{BASE_URL, RedditService, Service};
