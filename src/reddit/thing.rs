// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! A "thing" in the Reddit sense.
//!
//! Historically in the Reddit API and its old source code, a "Thing" was
//! any element of the Reddit system: users, posts, comments, etc. Things
//! are usually delivered wrapped in a "listing", which is a JSON object
//! of the form
//!
//! ```json
//! {"kind": "Listing", "data": {"children": [{"kind": "t1", "data": {...}}]}}
//! ```
//!
//! Reddit is not always consistent about the shape of its JSON (a comment
//! without replies has `"replies": ""`, for example), so the types in this
//! module are lightweight views over raw JSON values. Anything missing or
//! of the wrong type simply looks empty.

use serde_json::Value;

/// The kind of a [`Thing`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// A comment (`t1`).
    Comment,

    /// A link or self post (`t3`).
    Link,

    /// A placeholder for more comments that were not included in the
    /// response (`more`).
    More,

    /// Anything else, including things with no kind at all.
    Unknown,
}

impl From<&str> for Kind {
    fn from(kind: &str) -> Self {
        match kind {
            "t1" => Kind::Comment,
            "t3" => Kind::Link,
            "more" => Kind::More,
            _ => Kind::Unknown,
        }
    }
}

/// A view of a listing of things.
#[derive(Clone, Copy, Debug)]
pub struct Listing<'a> {
    children: &'a [Value],
}

impl<'a> Listing<'a> {
    /// Views `value` as a listing.
    ///
    /// If `value` is not shaped like a listing, the listing is empty.
    pub fn from_value(value: &'a Value) -> Self {
        let children = value
            .get("data")
            .and_then(|data| data.get("children"))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        Self { children }
    }

    /// True if the listing has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The things in the listing, in the order Reddit listed them.
    pub fn children(&self) -> impl Iterator<Item = Thing<'a>> + use<'a> {
        let children: &'a [Value] = self.children;
        children.iter().map(Thing::from_value)
    }
}

/// A view of a single thing in a [`Listing`].
#[derive(Clone, Copy, Debug)]
pub struct Thing<'a> {
    kind: Kind,
    data: Option<&'a Value>,
}

impl<'a> Thing<'a> {
    /// Views `value` as a thing.
    pub fn from_value(value: &'a Value) -> Self {
        let kind = value
            .get("kind")
            .and_then(Value::as_str)
            .map(Kind::from)
            .unwrap_or(Kind::Unknown);
        let data = value.get("data");
        Self { kind, data }
    }

    /// The kind of thing.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The string value of the field `name` in the thing's data.
    ///
    /// Returns an empty string if the field is missing or is not a string.
    pub fn text(&self, name: &str) -> &'a str {
        self.data
            .and_then(|data| data.get(name))
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Replies to a comment.
    ///
    /// Returns `None` if the thing has no replies listing.
    pub fn replies(&self) -> Option<Listing<'a>> {
        self.data
            .and_then(|data| data.get("replies"))
            .filter(|replies| replies.is_object())
            .map(Listing::from_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn it_parses_kinds() {
        assert_eq!(Kind::from("t1"), Kind::Comment);
        assert_eq!(Kind::from("t3"), Kind::Link);
        assert_eq!(Kind::from("more"), Kind::More);
        assert_eq!(Kind::from("t5"), Kind::Unknown);
        assert_eq!(Kind::from(""), Kind::Unknown);
    }

    #[test]
    fn it_lists_children_in_order() {
        let value = json!({"kind": "Listing", "data": {"children": [
            {"kind": "t1", "data": {"body": "first"}},
            {"kind": "more", "data": {"count": 3}},
            {"kind": "t1", "data": {"body": "second"}},
        ]}});
        let listing = Listing::from_value(&value);
        let kinds: Vec<_> = listing.children().map(|thing| thing.kind()).collect();
        assert_eq!(kinds, vec![Kind::Comment, Kind::More, Kind::Comment]);
    }

    #[test]
    fn it_treats_malformed_listings_as_empty() {
        for value in [
            json!(null),
            json!([]),
            json!("listing"),
            json!({}),
            json!({"data": {}}),
            json!({"data": {"children": {}}}),
        ] {
            assert!(Listing::from_value(&value).is_empty(), "{value} is not empty");
        }
    }

    #[test]
    fn it_returns_text_fields() {
        let value = json!({"kind": "t3", "data": {"title": "Hello", "score": 5}});
        let thing = Thing::from_value(&value);
        assert_eq!(thing.kind(), Kind::Link);
        assert_eq!(thing.text("title"), "Hello");
        assert_eq!(thing.text("score"), "");
        assert_eq!(thing.text("selftext"), "");
    }

    #[test]
    fn it_has_no_text_without_data() {
        let value = json!({"kind": "t1"});
        let thing = Thing::from_value(&value);
        assert_eq!(thing.text("body"), "");
        assert!(thing.replies().is_none());
    }

    #[test]
    fn it_treats_missing_kinds_as_unknown() {
        let value = json!({"data": {"body": "hi"}});
        assert_eq!(Thing::from_value(&value).kind(), Kind::Unknown);
    }

    #[test]
    fn it_returns_replies() {
        let value = json!({"kind": "t1", "data": {"body": "parent", "replies": {
            "kind": "Listing",
            "data": {"children": [{"kind": "t1", "data": {"body": "child"}}]},
        }}});
        let replies = Thing::from_value(&value).replies().unwrap();
        let bodies: Vec<_> = replies.children().map(|thing| thing.text("body")).collect();
        assert_eq!(bodies, vec!["child"]);
    }

    #[test]
    fn it_ignores_empty_string_replies() {
        let value = json!({"kind": "t1", "data": {"body": "lonely", "replies": ""}});
        assert!(Thing::from_value(&value).replies().is_none());
    }
}
