// SPDX-FileCopyrightText: The ircmsg authors
// SPDX-License-Identifier: MPL-2.0

//! Constructors for messages sent by a client

use crate::error::ParseResult;

use super::Message;

/// A `PONG` reply to the given server.
///
/// # Errors
///
/// Returns an error if the resulting message is malformed.
pub fn pong(host: &str) -> ParseResult<Message> {
    Message::try_from(format!("PONG {host}"))
}

/// A `PASS` command with the connection password.
///
/// # Errors
///
/// Returns an error if the resulting message is malformed.
pub fn pass(pass: &str) -> ParseResult<Message> {
    Message::try_from(format!("PASS {pass}"))
}

/// A `NICK` command that requests the given nickname.
///
/// # Errors
///
/// Returns an error if the resulting message is malformed.
pub fn nick(nick: &str) -> ParseResult<Message> {
    Message::try_from(format!("NICK {nick}"))
}

/// A `USER` command with the given username and real name.
///
/// # Errors
///
/// Returns an error if the resulting message is malformed.
pub fn user(username: &str, real_name: &str) -> ParseResult<Message> {
    Message::try_from(format!("USER {username} 0 * :{real_name}"))
}

/// An IRCv3 `CAP REQ` command that requests the given capability.
///
/// # Errors
///
/// Returns an error if the resulting message is malformed.
pub fn cap_req(cap: &str) -> ParseResult<Message> {
    Message::try_from(format!("CAP REQ :{cap}"))
}

/// A `JOIN` command.
///
/// `channels` is a comma separated list of channels and `keys` an
/// optional comma separated list of the corresponding channel keys.
///
/// # Errors
///
/// Returns an error if the resulting message is malformed.
pub fn join(channels: &str, keys: Option<&str>) -> ParseResult<Message> {
    let command = match keys {
        Some(keys) => format!("JOIN {channels} {keys}"),
        None => format!("JOIN {channels}"),
    };
    Message::try_from(command)
}

/// A `PRIVMSG` command that sends `message` to `targets`.
///
/// # Errors
///
/// Returns an error if the resulting message is malformed.
pub fn priv_msg(targets: &str, message: &str) -> ParseResult<Message> {
    Message::try_from(format!("PRIVMSG {targets} :{message}"))
}
