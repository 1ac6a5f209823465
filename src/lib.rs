// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! redditwc answers the question, "How much do Redditors actually talk
//! about this word?" It searches Reddit for posts matching a word, picks
//! a handful of them at random, and counts how many times the word shows
//! up in each post's title, body, and entire comment thread.
//!
//! Posts are retrieved one at a time, with a pause after each one to stay
//! on Reddit's good side. Progress is printed to stderr as each post is
//! processed, and a one-line summary is printed to stdout at the end:
//!
//! ```text
//!
//! cat:https://www.reddit.com/r/cats/comments/abc123/cats_are_great/|Cats are great|4, ...
//!
//! ```
//!
//! Each record is the post's URL, its title, and the number of times the
//! word was found, separated by pipes. A post that could not be retrieved
//! is reported with an error message in place of its title and a count of
//! zero.
//!
//! # Examples
//!
//! Count the word "rust" in 10 random posts out of the 50 most relevant
//! search results:
//!
//! ```bash
//! redditwc rust
//! ```
//!
//! Sample 5 posts out of 25 search results, waiting 2 seconds after each
//! post:
//!
//! ```bash
//! redditwc --sample 5 --limit 25 --delay 2 rust
//! ```
//!
//! Count "rust" anywhere it appears, including inside words like
//! "trusty":
//!
//! ```bash
//! redditwc --substring rust
//! ```
//!
//! Get usage and help for the tool:
//!
//! ```bash
//! redditwc --help
//! ```
//!
//! # License
//!
//! redditwc is licensed under the terms of the [Apache License 2.0]. Please
//! see the LICENSE file accompanying this source code or visit the previous
//! link for more information on licensing.
//!
//! [Apache License 2.0]: https://www.apache.org/licenses/LICENSE-2.0

pub mod cli;
pub mod count;
pub mod http;
pub mod post;
pub mod reddit;
pub mod sample;
pub mod text;

#[cfg(test)]
mod test_utils;
