// SPDX-FileCopyrightText: The ircmsg authors
// SPDX-License-Identifier: MPL-2.0

//! Line based framing of messages for byte streams.

use std::io;

use bytes::{BufMut as _, BytesMut};
use derive_more::{Display, Error, From};
use tokio_util::codec::{Decoder, Encoder, LinesCodec, LinesCodecError};

use crate::{error::ParseError, message::Message};

/// The default maximum length of a line in bytes, excluding the terminating `\n`.
///
/// Leaves room for 8191 bytes of tags in front of the 512 bytes
/// of a plain message.
pub const DEFAULT_MAX_LENGTH: usize = 8191 + 512;

/// A framing error
#[derive(Debug, Display, Error, From)]
#[allow(clippy::module_name_repetitions)]
pub enum CodecError {
    /// A line exceeded the maximum length.
    ///
    /// The remainder of the line is skipped.
    #[display("line exceeds the maximum length of {max_length} bytes")]
    MaxLineLengthExceeded {
        /// The configured maximum length
        max_length: usize,
    },

    /// A line could not be parsed into a message.
    #[display("{_0}")]
    #[from]
    Parse(#[error(source)] ParseError),

    /// Reading or writing the underlying stream failed.
    #[display("{_0}")]
    #[from]
    Io(#[error(source)] io::Error),
}

/// Splits a byte stream into lines and decodes them into [`Message`]s.
///
/// Lines end with `\n`, an optional `\r` in front of it is removed.
/// Empty lines are skipped. Encoding appends `\r\n` to each message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub struct MessageCodec {
    lines: LinesCodec,
}

impl MessageCodec {
    /// A codec with the [`DEFAULT_MAX_LENGTH`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_length(DEFAULT_MAX_LENGTH)
    }

    /// A codec that rejects lines longer than `max_length` bytes.
    #[must_use]
    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            lines: LinesCodec::new_with_max_length(max_length),
        }
    }

    /// The maximum length of a line in bytes.
    #[must_use]
    pub fn max_length(&self) -> usize {
        self.lines.max_length()
    }

    fn map_lines_error(&self, err: LinesCodecError) -> CodecError {
        match err {
            LinesCodecError::MaxLineLengthExceeded => {
                let max_length = self.max_length();
                tracing::debug!(
                    "Discarding line that exceeds the maximum length of {} bytes",
                    max_length
                );
                CodecError::MaxLineLengthExceeded { max_length }
            }
            LinesCodecError::Io(err) => CodecError::Io(err),
        }
    }

    fn next_message<F>(
        &mut self,
        buf: &mut BytesMut,
        mut next_line: F,
    ) -> Result<Option<Message>, CodecError>
    where
        F: FnMut(&mut LinesCodec, &mut BytesMut) -> Result<Option<String>, LinesCodecError>,
    {
        loop {
            let line = match next_line(&mut self.lines, buf) {
                Ok(Some(line)) => line,
                Ok(None) => return Ok(None),
                Err(err) => return Err(self.map_lines_error(err)),
            };
            if line.is_empty() {
                continue;
            }
            let message = Message::try_from(line)?;
            tracing::trace!("Decoded message: {}", message);
            return Ok(Some(message));
        }
    }
}

impl Default for MessageCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for MessageCodec {
    type Item = Message;
    type Error = CodecError;

    fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<Message>, CodecError> {
        self.next_message(buf, LinesCodec::decode)
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Message>, CodecError> {
        self.next_message(buf, LinesCodec::decode_eof)
    }
}

impl Encoder<&Message> for MessageCodec {
    type Error = CodecError;

    fn encode(&mut self, message: &Message, buf: &mut BytesMut) -> Result<(), CodecError> {
        let line = message.raw_message().as_bytes();
        buf.reserve(line.len() + 2);
        buf.put_slice(line);
        buf.put_slice(b"\r\n");
        Ok(())
    }
}

impl Encoder<Message> for MessageCodec {
    type Error = CodecError;

    fn encode(&mut self, message: Message, buf: &mut BytesMut) -> Result<(), CodecError> {
        <Self as Encoder<&Message>>::encode(self, &message, buf)
    }
}
