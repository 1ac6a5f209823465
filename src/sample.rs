// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Samples posts from a search and counts a word in each of them.

use crate::count::OccurrenceCounter;
use crate::reddit::{Error, RedditClient, Service};
use itertools::Itertools;
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use std::time::Duration;
use tokio::time;

/// The outcome of counting a word in a single post.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    url: String,
    subject: String,
    count: usize,
}

impl Record {
    /// A record for a post that was retrieved and counted.
    pub fn new(url: impl Into<String>, subject: impl Into<String>, count: usize) -> Self {
        let url = url.into();
        let subject = subject.into();
        Self { url, subject, count }
    }

    /// A record for a post that could not be retrieved or parsed.
    ///
    /// The error is described in the subject and the count is zero.
    pub fn failed(url: impl Into<String>, error: &Error) -> Self {
        Self::new(url, format!("ERROR {error}"), 0)
    }

    /// The canonical URL of the post.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The post's title, or a description of what went wrong.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Number of times the word occurred in the post.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl fmt::Display for Record {
    /// Formats the record as `url|subject|count`.
    ///
    /// Pipes in the subject are not escaped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.url, self.subject, self.count)
    }
}

/// The records collected for a word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    word: String,
    records: Vec<Record>,
}

impl Report {
    /// The word that was counted.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// One record per sampled post, in the order they were processed.
    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl fmt::Display for Report {
    /// Formats the report as a blank line, then `word:` followed by the
    /// comma-separated records, then a newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}:{}\n", self.word, self.records.iter().join(", "))
    }
}

/// Progress made while sampling, reported as `[word] i/n -> record`.
#[derive(Clone, Copy, Debug)]
pub struct Progress<'a> {
    word: &'a str,
    position: usize,
    total: usize,
    record: &'a Record,
}

impl<'a> Progress<'a> {
    /// Progress after `record` was produced for the `position`th of
    /// `total` posts, counting from 1.
    pub fn new(word: &'a str, position: usize, total: usize, record: &'a Record) -> Self {
        Self {
            word,
            position,
            total,
            record,
        }
    }
}

impl fmt::Display for Progress<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}/{} -> {}",
            self.word, self.position, self.total, self.record
        )
    }
}

/// Picks up to `size` distinct candidates.
///
/// If there are no more than `size` candidates, all of them are returned in
/// their original order. Otherwise `size` of them are chosen uniformly at
/// random, in no particular order.
pub fn select_sample<R>(candidates: &[String], size: usize, rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
{
    if candidates.len() <= size {
        candidates.to_vec()
    } else {
        candidates.choose_multiple(rng, size).cloned().collect()
    }
}

/// Counts a word in a random sample of posts, one post at a time.
#[derive(Clone, Debug)]
pub struct Sampler {
    word: String,
    counter: OccurrenceCounter,
    size: usize,
    delay: Duration,
}

impl Sampler {
    /// Default number of posts to sample.
    pub const DEFAULT_SIZE: usize = 10;

    /// Default number of seconds to wait after retrieving each post.
    pub const DEFAULT_DELAY_SECS: u64 = 5;

    /// Creates a sampler that counts the word matched by `counter`.
    ///
    /// `word` is only used to label output.
    pub fn new(word: impl Into<String>, counter: OccurrenceCounter) -> Self {
        Self {
            word: word.into(),
            counter,
            size: Self::DEFAULT_SIZE,
            delay: Duration::from_secs(Self::DEFAULT_DELAY_SECS),
        }
    }

    /// Sets the maximum number of posts to sample.
    pub fn size(self, size: usize) -> Self {
        Self { size, ..self }
    }

    /// Sets the pause after each post is retrieved.
    pub fn delay(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }

    /// Samples posts from `candidates`, retrieves each of them using
    /// `client`, and counts the word in each post.
    ///
    /// Posts are retrieved strictly one after another, pausing for the
    /// sampler's delay after every post, including the last one. A post
    /// that cannot be retrieved results in a zero-count record and does
    /// not stop the remaining posts from being processed. Progress is
    /// reported on stderr.
    ///
    /// If there are no candidates, nothing is retrieved and the report is
    /// empty.
    pub async fn run<S, R>(
        &self,
        client: &RedditClient<S>,
        candidates: &[String],
        rng: &mut R,
    ) -> Report
    where
        S: Service,
        R: Rng + ?Sized,
    {
        let mut records = Vec::new();

        if !candidates.is_empty() {
            let sample = select_sample(candidates, self.size, rng);
            debug!("sampled {} of {} posts", sample.len(), candidates.len());

            for (i, url) in sample.iter().enumerate() {
                let record = self.process(client, url).await;
                eprintln!("{}", Progress::new(&self.word, i + 1, sample.len(), &record));
                records.push(record);
                time::sleep(self.delay).await;
            }
        }

        Report {
            word: self.word.clone(),
            records,
        }
    }

    async fn process<S: Service>(&self, client: &RedditClient<S>, url: &str) -> Record {
        match client.post(url).await {
            Ok(post) => Record::new(url, post.subject(), self.counter.count(post.text())),
            Err(err) => {
                debug!("could not process {url}: {err:?}");
                Record::failed(url, &err)
            }
        }
    }
}
