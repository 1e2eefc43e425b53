// SPDX-FileCopyrightText: The ircmsg authors
// SPDX-License-Identifier: MPL-2.0

//! The [`Message`] type that splits an IRC message into its constituent
//! parts as specified in RFC 1459 and the IRCv3 message tags extension.
//!
//! The [`client`] and [`server`] modules contain constructors for
//! commonly sent messages.

use std::{fmt, hash::Hash, ops::Range, str::FromStr, sync::Arc};

use bytes::Bytes;

use crate::{
    command::{ArgumentIter, Command},
    error::{ParseError, ParseResult},
    tag::{Tag, TagIter},
};

pub mod client;
pub mod server;

mod parser;

/// Byte ranges of a key and an optional value within the message text.
pub(crate) type TagSpan = (Range<usize>, Option<Range<usize>>);

#[derive(Debug, Clone, PartialEq, Eq)]
struct PrefixSpan {
    raw: Range<usize>,
    name: Range<usize>,
    user: Option<Range<usize>>,
    host: Option<Range<usize>>,
}

/// The source of a message
///
/// Either a server name or a nickname with an optional user
/// and host, i.e. `name!user@host`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix<'a> {
    /// The server name or nickname
    pub name: &'a str,

    /// The user, if present
    pub user: Option<&'a str>,

    /// The host, if present
    pub host: Option<&'a str>,
}

/// A parsed IRC message
///
/// The message text is stored once and shared between clones.
/// All accessors return slices borrowed from this text.
#[derive(Clone)]
pub struct Message {
    text: Arc<str>,
    tags: Arc<[TagSpan]>,
    prefix: Option<PrefixSpan>,
    command: Range<usize>,
    args: Arc<[Range<usize>]>,
}

impl Message {
    /// Strongly typed access to the command and its arguments.
    ///
    /// Returns `None` if the command name does not match or if
    /// the arguments could not be parsed.
    #[must_use]
    pub fn command<'a, T>(&'a self) -> Option<T>
    where
        T: Command<'a>,
    {
        T::try_match(self.raw_command(), self.raw_args())
    }

    /// Strongly typed access to a tag of this message.
    ///
    /// Returns `None` if the tag is missing or could not be parsed.
    #[must_use]
    pub fn tag<'a, T>(&'a self) -> Option<T>
    where
        T: Tag<'a>,
    {
        T::try_match(self.raw_tags())
    }

    /// The prefix, split into name, user, and host.
    #[must_use]
    pub fn prefix(&self) -> Option<Prefix<'_>> {
        let span = self.prefix.as_ref()?;
        Some(Prefix {
            name: self.slice(&span.name),
            user: span.user.as_ref().map(|user| self.slice(user)),
            host: span.host.as_ref().map(|host| self.slice(host)),
        })
    }

    /// Iterate over the raw key/value pairs of all tags.
    ///
    /// Values are returned escaped, see [`crate::tag::unescape_value()`].
    #[must_use]
    pub fn raw_tags(&self) -> TagIter<'_> {
        TagIter::new(&self.text, self.tags.iter())
    }

    /// The raw prefix without the leading colon.
    #[must_use]
    pub fn raw_prefix(&self) -> Option<&str> {
        self.prefix.as_ref().map(|span| self.slice(&span.raw))
    }

    /// The raw command name or numeric.
    #[must_use]
    pub fn raw_command(&self) -> &str {
        self.slice(&self.command)
    }

    /// Iterate over the raw arguments.
    ///
    /// The leading colon of a trailing argument is not included.
    #[must_use]
    pub fn raw_args(&self) -> ArgumentIter<'_> {
        ArgumentIter::new(&self.text, self.args.iter())
    }

    /// The message text this message was parsed from.
    ///
    /// A line ending of the input is not included.
    #[must_use]
    pub fn raw_message(&self) -> &str {
        &self.text
    }

    fn slice(&self, range: &Range<usize>) -> &str {
        &self.text[range.clone()]
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Message").field(&self.raw_message()).finish()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw_message())
    }
}

// All spans are derived from the text.
impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Message {}

impl Hash for Message {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl FromStr for Message {
    type Err = ParseError;

    fn from_str(input: &str) -> ParseResult<Self> {
        parser::parse_message(input)
    }
}

impl TryFrom<&str> for Message {
    type Error = ParseError;

    fn try_from(value: &str) -> ParseResult<Self> {
        parser::parse_message(value)
    }
}

impl TryFrom<String> for Message {
    type Error = ParseError;

    fn try_from(value: String) -> ParseResult<Self> {
        parser::parse_message(&value)
    }
}

impl TryFrom<&[u8]> for Message {
    type Error = ParseError;

    fn try_from(value: &[u8]) -> ParseResult<Self> {
        parser::parse_message(std::str::from_utf8(value)?)
    }
}

impl TryFrom<Vec<u8>> for Message {
    type Error = ParseError;

    fn try_from(value: Vec<u8>) -> ParseResult<Self> {
        Self::try_from(value.as_slice())
    }
}

impl TryFrom<Bytes> for Message {
    type Error = ParseError;

    fn try_from(value: Bytes) -> ParseResult<Self> {
        Self::try_from(&value[..])
    }
}
