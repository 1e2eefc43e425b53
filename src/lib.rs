// SPDX-FileCopyrightText: The ircmsg authors
// SPDX-License-Identifier: MPL-2.0

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(test), deny(clippy::panic_in_result_fn))]
#![cfg_attr(not(debug_assertions), deny(clippy::used_underscore_binding))]

//! A lightweight parser for IRC protocol messages.
//!
//! Refer to [`docs`] for more information about the message grammar.

pub mod command;
pub mod docs;
pub mod error;
pub mod message;
pub mod tag;

#[cfg(feature = "codec")]
pub mod codec;

pub use self::{
    command::Command,
    error::{ParseError, ParseResult},
    message::{Message, Prefix},
    tag::Tag,
};
