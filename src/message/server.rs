// SPDX-FileCopyrightText: The ircmsg authors
// SPDX-License-Identifier: MPL-2.0

//! Constructors for messages sent by a server

use crate::error::ParseResult;

use super::Message;

/// A `PING` command with the given server as the token.
///
/// # Errors
///
/// Returns an error if the resulting message is malformed.
pub fn ping(host: &str) -> ParseResult<Message> {
    Message::try_from(format!("PING :{host}"))
}

fn numeric(code: &str, target: &str, message: &str) -> ParseResult<Message> {
    Message::try_from(format!("{code} {target} :{message}"))
}

/// The `RPL_WELCOME` (001) numeric.
///
/// # Errors
///
/// Returns an error if the resulting message is malformed.
pub fn welcome(target: &str, message: &str) -> ParseResult<Message> {
    numeric("001", target, message)
}

/// The `RPL_YOURHOST` (002) numeric.
///
/// # Errors
///
/// Returns an error if the resulting message is malformed.
pub fn your_host(target: &str, message: &str) -> ParseResult<Message> {
    numeric("002", target, message)
}

/// The `RPL_CREATED` (003) numeric.
///
/// # Errors
///
/// Returns an error if the resulting message is malformed.
pub fn created(target: &str, message: &str) -> ParseResult<Message> {
    numeric("003", target, message)
}

/// The `RPL_MYINFO` (004) numeric.
///
/// # Errors
///
/// Returns an error if the resulting message is malformed.
pub fn server_info(target: &str, message: &str) -> ParseResult<Message> {
    numeric("004", target, message)
}
