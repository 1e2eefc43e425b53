// SPDX-FileCopyrightText: The ircmsg authors
// SPDX-License-Identifier: MPL-2.0

//! Strongly typed access to the IRCv3 tags of a message.

use std::{borrow::Cow, slice::Iter};

use crate::message::TagSpan;

mod well_known;
pub use self::well_known::{Account, Batch, Label, MsgId, ServerTime};

/// Iterates over the raw key/value pairs of the tags of a [`Message`](crate::Message).
///
/// Empty values are reported as `None`.
#[derive(Debug, Clone)]
pub struct TagIter<'a> {
    source: &'a str,
    iter: Iter<'a, TagSpan>,
}

impl<'a> TagIter<'a> {
    pub(crate) fn new(source: &'a str, iter: Iter<'a, TagSpan>) -> Self {
        Self { source, iter }
    }

    fn resolve(source: &'a str, (key, value): &TagSpan) -> (&'a str, Option<&'a str>) {
        (
            &source[key.clone()],
            value.as_ref().map(|value| &source[value.clone()]),
        )
    }
}

impl<'a> Iterator for TagIter<'a> {
    type Item = (&'a str, Option<&'a str>);

    fn next(&mut self) -> Option<Self::Item> {
        let source = self.source;
        self.iter.next().map(|span| Self::resolve(source, span))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for TagIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let source = self.source;
        self.iter.next_back().map(|span| Self::resolve(source, span))
    }
}

impl ExactSizeIterator for TagIter<'_> {}

/// Implemented by types for use with [`Message::tag()`](crate::Message::tag).
pub trait Tag<'a> {
    /// The key of the tag, e.g. `time` or `msgid`.
    const NAME: &'static str;

    /// Parse the raw, escaped tag value.
    ///
    /// Returns `None` if the value could not be parsed.
    fn parse(value: Option<&'a str>) -> Option<Self>
    where
        Self: Sized;

    /// Find the first tag with a matching key and parse its value.
    fn try_match(mut tags: TagIter<'a>) -> Option<Self>
    where
        Self: Sized,
    {
        tags.find(|&(key, _)| key == Self::NAME)
            .and_then(|(_, value)| Self::parse(value))
    }
}

/// Unescape a raw tag value.
///
/// Unknown escape sequences resolve to the escaped character and
/// a trailing lone backslash is dropped.
#[must_use]
pub fn unescape_value(value: &str) -> Cow<'_, str> {
    if !value.contains('\\') {
        return Cow::Borrowed(value);
    }
    let mut unescaped = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }
        match chars.next() {
            Some(':') => unescaped.push(';'),
            Some('s') => unescaped.push(' '),
            Some('r') => unescaped.push('\r'),
            Some('n') => unescaped.push('\n'),
            Some(other) => unescaped.push(other),
            None => (),
        }
    }
    Cow::Owned(unescaped)
}

/// Escape a plain text for use as a tag value.
#[must_use]
pub fn escape_value(value: &str) -> Cow<'_, str> {
    if !value.contains([';', ' ', '\\', '\r', '\n']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            ';' => escaped.push_str("\\:"),
            ' ' => escaped.push_str("\\s"),
            '\\' => escaped.push_str("\\\\"),
            '\r' => escaped.push_str("\\r"),
            '\n' => escaped.push_str("\\n"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
