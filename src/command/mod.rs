// SPDX-FileCopyrightText: The ircmsg authors
// SPDX-License-Identifier: MPL-2.0

//! Strongly typed access to the command and arguments of a message.

use std::{ops::Range, slice::Iter};

mod standard;
pub use self::standard::*;

/// Iterates over the arguments of a [`Message`](crate::Message).
#[derive(Debug, Clone)]
pub struct ArgumentIter<'a> {
    source: &'a str,
    iter: Iter<'a, Range<usize>>,
}

impl<'a> ArgumentIter<'a> {
    pub(crate) fn new(source: &'a str, iter: Iter<'a, Range<usize>>) -> Self {
        Self { source, iter }
    }
}

impl<'a> Iterator for ArgumentIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let source = self.source;
        self.iter.next().map(|range| &source[range.clone()])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for ArgumentIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let source = self.source;
        self.iter.next_back().map(|range| &source[range.clone()])
    }
}

impl ExactSizeIterator for ArgumentIter<'_> {}

/// Implemented by types for use with [`Message::command()`](crate::Message::command).
pub trait Command<'a> {
    /// The name of the command, e.g. `PRIVMSG`, or its numeric, e.g. `001`.
    const NAME: &'static str;

    /// Parse the arguments of a message with a matching command name.
    ///
    /// Returns `None` if the arguments do not fit.
    fn parse(arguments: ArgumentIter<'a>) -> Option<Self>
    where
        Self: Sized;

    /// Match the command name and parse the arguments.
    ///
    /// Command names are compared exactly.
    fn try_match(command: &str, arguments: ArgumentIter<'a>) -> Option<Self>
    where
        Self: Sized,
    {
        if command == Self::NAME {
            Self::parse(arguments)
        } else {
            None
        }
    }
}

/// Match a message against a list of commands.
///
/// The arms are tried in order. The last arm is the fallback and
/// receives the message itself.
///
/// # Examples
///
/// ```
/// use ircmsg::{command::{Ping, PrivMsg}, command_match, Message};
///
/// let msg: Message = "PRIVMSG bob :hello, world!".parse().unwrap();
/// let reply = command_match! {
///     msg => {
///         Ping(host) => format!("PONG {host}"),
///         PrivMsg(target, text) => format!("{target}: {text}"),
///         _ => String::new()
///     }
/// };
/// assert_eq!("bob: hello, world!", reply);
/// ```
#[macro_export]
macro_rules! command_match {
    (@message=$message:expr => $command:pat => $body:expr $(,)?) => {{
        let $command = $message;
        $body
    }};

    (@message=$message:expr => $command:pat => $body:expr, $($rest:tt)+) => {
        match $message.command() {
            Some($command) => $body,
            _ => $crate::command_match!(@message=$message => $($rest)+),
        }
    };

    ($message:expr => { $($rest:tt)+ }) => {{
        let message = &$message;
        $crate::command_match!(@message=message => $($rest)+)
    }};
}

/// Declare a command whose arguments are plain string slices.
///
/// Missing arguments fail the match, surplus arguments are ignored.
///
/// # Examples
///
/// ```
/// use ircmsg::{command, Message};
///
/// command! {
///     /// A made up command
///     ("TEST" => Test(user, message))
/// }
///
/// let msg: Message = "TEST bob :hello, world!".parse().unwrap();
/// let Test(user, message) = msg.command::<Test<'_>>().unwrap();
/// assert_eq!("bob", user);
/// assert_eq!("hello, world!", message);
/// ```
#[macro_export]
macro_rules! command {
    ($(#[$meta:meta])* ($command:expr => $command_name:ident())) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $command_name;

        impl<'a> $crate::command::Command<'a> for $command_name {
            const NAME: &'static str = $command;

            fn parse(_: $crate::command::ArgumentIter<'a>) -> Option<Self> {
                Some(Self)
            }
        }
    };

    ($(#[$meta:meta])* ($command:expr => $command_name:ident($($name:ident),+))) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $command_name<'a>($(pub $crate::expand_param!('a, $name)),+);

        impl<'a> $crate::command::Command<'a> for $command_name<'a> {
            const NAME: &'static str = $command;

            fn parse(mut arguments: $crate::command::ArgumentIter<'a>) -> Option<Self> {
                $(let $name = arguments.next()?;)+
                Some(Self($($name),+))
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! expand_param {
    ($lifetime:lifetime, $name:ident) => {
        &$lifetime str
    };
}

#[cfg(test)]
mod tests;
