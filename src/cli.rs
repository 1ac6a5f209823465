// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Drives the command-line program.

use crate::count::{MatchMode, OccurrenceCounter};
use crate::http::HTTPError;
use crate::reddit::{RedditClient, RedditService, Service};
use crate::sample::{Report, Sampler};
use clap::{Parser, value_parser};
use clap_verbosity_flag::Verbosity;
use log::debug;
use std::process;
use std::time::Duration;

/// Prints `message` to stderr and exits with `error_code`.
pub fn die(error_code: i32, message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(error_code);
}

/// The message printed when a search finds nothing.
fn no_results(word: &str) -> String {
    format!("[search] No results for '{word}'.")
}

/// Program configuration.
#[derive(Debug, Parser)]
#[command(version)]
#[command(
    about = "Search Reddit for posts containing a word, sample some of them at random, and count the word in their titles, posts, and comments",
    long_about = None
)]
pub struct Config {
    #[command(flatten)]
    verbosity: Verbosity,

    /// The word to search for and count
    word: String,

    /// Number of posts to sample
    #[arg(long, value_name = "N", default_value_t = 10, value_parser = value_parser!(u32).range(1..))]
    sample: u32,

    /// Seconds to wait after retrieving each post
    #[arg(long, value_name = "SECS", default_value_t = 5)]
    delay: u64,

    /// Number of search results to sample from
    #[arg(long, value_name = "N", default_value_t = 50, value_parser = value_parser!(u32).range(1..))]
    limit: u32,

    /// Count substrings instead of whole words
    #[arg(long, default_value_t = false)]
    substring: bool,
}

impl Config {
    pub fn verbosity(&self) -> &Verbosity {
        &self.verbosity
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// How the word is matched in each post.
    pub fn match_mode(&self) -> MatchMode {
        MatchMode::from_substring_flag(self.substring)
    }

    fn sampler(&self) -> Sampler {
        let counter = OccurrenceCounter::new(&self.word, self.match_mode());
        Sampler::new(&self.word, counter)
            .size(self.sample as usize)
            .delay(Duration::from_secs(self.delay))
    }
}

/// Runs the command-line program.
#[derive(Debug)]
pub struct Runner<S = RedditService> {
    config: Config,
    client: RedditClient<S>,
}

impl Runner<RedditService> {
    /// Create a new program runner using the given `config`.
    ///
    /// Returns an error if an HTTP client cannot be created.
    pub fn new(config: Config) -> Result<Self, HTTPError> {
        let client = RedditClient::new()?;
        Ok(Self { config, client })
    }
}

impl<S: Service> Runner<S> {
    /// Create a new program runner that talks to Reddit through `service`.
    pub fn new_with_service(config: Config, service: S) -> Self {
        let client = RedditClient::new_with_service(service);
        Self { config, client }
    }

    /// Searches for the configured word, counts it in a sample of the
    /// posts that were found, and returns the results.
    pub async fn report(&self) -> Report {
        let word = self.config.word();
        debug!("{:?}", self.config);

        let result = self.client.search(word, self.config.limit).await;
        if result.is_empty() {
            eprintln!("{}", no_results(word));
        }

        let mut rng = rand::thread_rng();
        self.config
            .sampler()
            .run(&self.client, result.urls(), &mut rng)
            .await
    }

    /// Run the command-line program using its stored configuration options,
    /// printing the results to stdout.
    pub async fn run(&self) {
        let report = self.report().await;
        println!("{report}");
    }
}
