// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Gathers the text of a Reddit post and its discussion.
//!
//! Reddit returns a post as a two-element JSON array. The first element
//! is a listing containing the submission itself; the second is a listing
//! of top-level comments, each of which may carry a nested listing of
//! replies, and so on. All of that text is flattened into a single blob
//! so words can be counted across the entire thread.

use crate::reddit::thing::{Kind, Listing};
use crate::text::decode_html_entities;
use itertools::Itertools;
use log::trace;
use serde_json::Value;

/// Subject used for a post that has no title.
pub const NO_TITLE: &str = "No Title Found";

/// The text of a post and all of its comments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AggregatedPost {
    text: String,
    subject: String,
}

impl Default for AggregatedPost {
    fn default() -> Self {
        Self {
            text: String::new(),
            subject: NO_TITLE.to_string(),
        }
    }
}

impl AggregatedPost {
    /// Aggregates the text of a post from its raw JSON representation.
    ///
    /// The text consists of the post's title, its self text, and the body
    /// of every comment in the thread, in that order, separated by
    /// newlines. Comments are visited depth-first, so a comment's replies
    /// immediately follow it. Empty pieces are left out.
    ///
    /// Malformed JSON never fails; whatever cannot be found is treated as
    /// empty, and a post without a title gets a subject of [`NO_TITLE`].
    pub fn from_json(root: &Value) -> Self {
        let Some(listings) = root.as_array().filter(|listings| !listings.is_empty()) else {
            trace!("post is not a non-empty array of listings");
            return Self::default();
        };

        let Some(submission) = Listing::from_value(&listings[0]).children().next() else {
            trace!("post has no submission");
            return Self::default();
        };

        let title = decode_html_entities(submission.text("title")).trim().to_string();
        let selftext = decode_html_entities(submission.text("selftext"));
        let comments = listings
            .get(1)
            .map(|comments| comment_bodies(Listing::from_value(comments)))
            .unwrap_or_default();

        let text = [title.clone(), selftext]
            .into_iter()
            .chain(comments)
            .filter(|part| !part.is_empty())
            .join("\n");
        let subject = if title.is_empty() {
            NO_TITLE.to_string()
        } else {
            title
        };

        Self { text, subject }
    }

    /// The full text of the post and its comments.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The post's title, or [`NO_TITLE`].
    pub fn subject(&self) -> &str {
        &self.subject
    }
}

/// Bodies of all comments in `listing` and their replies, depth-first.
///
/// Each body is followed by the bodies of its replies before moving on to
/// the next sibling; siblings are kept in listing order. Placeholders for
/// unloaded comments are skipped and are not expanded.
pub fn comment_bodies(listing: Listing<'_>) -> Vec<String> {
    let mut bodies = Vec::new();
    walk(listing, &mut bodies);
    bodies
}

fn walk(listing: Listing<'_>, bodies: &mut Vec<String>) {
    for thing in listing.children() {
        match thing.kind() {
            Kind::Comment => {
                let body = decode_html_entities(thing.text("body"));
                if !body.is_empty() {
                    bodies.push(body);
                }
                if let Some(replies) = thing.replies() {
                    walk(replies, bodies);
                }
            }
            Kind::More => trace!("skipping placeholder for more comments"),
            kind => trace!("skipping {kind:?} in comment listing"),
        }
    }
}
