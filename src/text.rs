// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Helpful utilities for working with text.

use htmlentity::entity::{self, ICodedDataTrait};

/// Converts HTML entities into their single-character equivalents.
///
/// For example, Reddit returns "&" as "&amp;", ">" as "&gt;",
/// and "<" as "&lt;"; this function will convert those HTML
/// entities into single, human-readable characters.
///
/// Nothing else is changed. In particular, whitespace is preserved, so
/// callers that want a trimmed string must trim it themselves.
///
/// Only entities terminated by a semicolon are decoded. Legacy forms
/// such as `&gt` without the semicolon are left as they are, and numeric
/// entities that do not name a valid character are not replaced with
/// U+FFFD.
///
/// # Examples
///
/// ```
/// use redditwc::text::decode_html_entities;
/// let raw = "&lt;This &amp; That&gt;";
/// let converted = decode_html_entities(raw);
/// assert_eq!(converted, "<This & That>");
/// ```
///
/// ```
/// use redditwc::text::decode_html_entities;
/// let raw = "  &lt;This &amp; That&gt;  ";
/// let converted = decode_html_entities(raw);
/// assert_eq!(converted, "  <This & That>  ");
/// ```
///
/// ```
/// use redditwc::text::decode_html_entities;
/// let raw = "";
/// let converted = decode_html_entities(raw);
/// assert_eq!(converted, raw);
/// ```
pub fn decode_html_entities(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    entity::decode(text.as_bytes())
        .to_string()
        .unwrap_or_else(|_| text.to_string())
}
