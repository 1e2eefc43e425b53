// SPDX-FileCopyrightText: The ircmsg authors
// SPDX-License-Identifier: MPL-2.0

//! Parse errors

use std::str::Utf8Error;

use derive_more::{Display, Error, From};

/// A message parse error
#[derive(Debug, Display, Error, From, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input ended before the message was complete.
    ///
    /// Also returned for empty input.
    #[display("unexpected end of input (malformed message)")]
    UnexpectedEndOfInput,

    /// The message contains a line break or NUL character.
    #[display("invalid character {character:?} in message")]
    InvalidCharacter {
        /// The offending character
        character: char,
    },

    /// The input is not valid UTF-8.
    #[display("invalid UTF-8: {_0}")]
    #[from]
    InvalidUtf8(#[error(source)] Utf8Error),
}

/// Result of parsing a message or one of its components
pub type ParseResult<T> = Result<T, ParseError>;
