// SPDX-FileCopyrightText: The ircmsg authors
// SPDX-License-Identifier: MPL-2.0

use super::{ArgumentIter, Command};
use crate::command;

command! {
    /// A `PING` command. The first element is the token, usually the host.
    ///
    /// # Examples
    ///
    /// ```
    /// use ircmsg::{command::Ping, Message};
    ///
    /// let msg: Message = "PING :test.host.com".parse().unwrap();
    /// if let Some(Ping(host)) = msg.command::<Ping<'_>>() {
    ///     println!("PING from {host}");
    /// }
    /// ```
    ("PING" => Ping(host))
}

command! {
    /// A `PONG` command. The first element is the token, usually the host.
    ("PONG" => Pong(host))
}

command! {
    /// A `PRIVMSG` command. The elements are the target and the message.
    ///
    /// # Examples
    ///
    /// ```
    /// use ircmsg::{command::PrivMsg, Message};
    ///
    /// let msg: Message = "PRIVMSG memelord :memes are great".parse().unwrap();
    /// if let Some(PrivMsg(target, message)) = msg.command::<PrivMsg<'_>>() {
    ///     println!("<{target}> {message}");
    /// }
    /// ```
    ("PRIVMSG" => PrivMsg(target, message))
}

command! {
    /// A `NOTICE` command. The elements are the target and the message.
    ("NOTICE" => Notice(target, message))
}

command! {
    /// A `JOIN` command with the joined channel.
    ("JOIN" => Join(channel))
}

command! {
    /// A `PART` command with the channel that was left.
    ("PART" => Part(channel))
}

command! {
    /// A `NICK` command with the new nickname.
    ("NICK" => Nick(nickname))
}

command! {
    /// The `RPL_WELCOME` (001) numeric. The elements are the username and the welcome message.
    ("001" => Welcome(user, message))
}

command! {
    /// The `RPL_YOURHOST` (002) numeric. The elements are the username and the message.
    ("002" => YourHost(user, message))
}

command! {
    /// The `RPL_CREATED` (003) numeric. The elements are the username and the message.
    ("003" => Created(user, message))
}

command! {
    /// The `RPL_MYINFO` (004) numeric. The elements are the username and the server info.
    ("004" => ServerInfo(user, message))
}

/// Visibility of a channel in a [`NamesReply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamesReplyChannelType {
    /// `@`
    Secret,
    /// `*`
    Private,
    /// `=`
    Public,
    /// Missing or unknown
    Other,
}

impl NamesReplyChannelType {
    fn from_symbol(symbol: Option<&str>) -> Self {
        match symbol {
            Some("@") => Self::Secret,
            Some("*") => Self::Private,
            Some("=") => Self::Public,
            _ => Self::Other,
        }
    }
}

/// The `RPL_NAMREPLY` (353) numeric.
///
/// The elements are the channel type, the channel, and the nicknames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamesReply<'a>(pub NamesReplyChannelType, pub &'a str, pub Vec<&'a str>);

impl<'a> Command<'a> for NamesReply<'a> {
    const NAME: &'static str = "353";

    fn parse(arguments: ArgumentIter<'a>) -> Option<Self> {
        // The leading target and the channel type are both optional,
        // so the arguments are read from the end.
        let mut arguments = arguments.rev();
        let names = arguments.next()?.split_whitespace().collect();
        let channel = arguments.next()?;
        let channel_type = NamesReplyChannelType::from_symbol(arguments.next());
        Some(Self(channel_type, channel, names))
    }
}

/// The `RPL_ENDOFNAMES` (366) numeric. The elements are the channel and the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndNamesReply<'a>(pub &'a str, pub &'a str);

impl<'a> Command<'a> for EndNamesReply<'a> {
    const NAME: &'static str = "366";

    fn parse(arguments: ArgumentIter<'a>) -> Option<Self> {
        // Some servers prepend non-standard arguments.
        let mut arguments = arguments.rev();
        let message = arguments.next()?;
        let channel = arguments.next()?;
        Some(Self(channel, message))
    }
}
