// SPDX-FileCopyrightText: The ircmsg authors
// SPDX-License-Identifier: MPL-2.0

//! Documentation and message grammar

#![allow(rustdoc::invalid_rust_codeblocks)] // Do not interpret grammar blocks.
#![doc = include_str!("../README.md")]
