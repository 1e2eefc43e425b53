// SPDX-FileCopyrightText: The ircmsg authors
// SPDX-License-Identifier: MPL-2.0

use std::borrow::Cow;

use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use super::{Tag, unescape_value};

/// The `time` tag of the `server-time` capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerTime(pub OffsetDateTime);

impl<'a> Tag<'a> for ServerTime {
    const NAME: &'static str = "time";

    fn parse(value: Option<&'a str>) -> Option<Self> {
        OffsetDateTime::parse(value?, &Rfc3339).ok().map(Self)
    }
}

macro_rules! text_tag {
    ($(#[$meta:meta])* ($name:expr => $tag:ident)) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $tag<'a>(pub Cow<'a, str>);

        impl<'a> Tag<'a> for $tag<'a> {
            const NAME: &'static str = $name;

            fn parse(value: Option<&'a str>) -> Option<Self> {
                value.map(|value| Self(unescape_value(value)))
            }
        }
    };
}

text_tag! {
    /// The unique `msgid` of a message
    ("msgid" => MsgId)
}

text_tag! {
    /// The `account` of the sender of a message
    ("account" => Account)
}

text_tag! {
    /// The `label` for correlating a response with its request
    ("label" => Label)
}

text_tag! {
    /// The reference of the `batch` a message belongs to
    ("batch" => Batch)
}
