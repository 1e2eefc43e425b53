// SPDX-FileCopyrightText: The ircmsg authors
// SPDX-License-Identifier: MPL-2.0

use std::ops::Range;

use crate::error::{
    ParseError::{InvalidCharacter, UnexpectedEndOfInput},
    ParseResult,
};

use super::{Message, PrefixSpan, TagSpan};

type Step<T> = ParseResult<(T, usize)>;

pub(super) fn parse_message(input: &str) -> ParseResult<Message> {
    let line = trim_line_ending(input);
    let bytes = line.as_bytes();
    if bytes.is_empty() {
        return Err(UnexpectedEndOfInput);
    }
    // A message must stay on a single line.
    if let Some(character) = line.chars().find(|c| matches!(c, '\r' | '\n' | '\0')) {
        return Err(InvalidCharacter { character });
    }
    let (tags, position) = parse_tags(bytes)?;
    let (prefix, position) = parse_prefix(bytes, skip_spaces(bytes, position))?;
    let (command, position) = parse_command(bytes, skip_spaces(bytes, position))?;
    let args = parse_args(bytes, position);
    Ok(Message {
        text: line.into(),
        tags: tags.into(),
        prefix,
        command,
        args: args.into(),
    })
}

fn trim_line_ending(input: &str) -> &str {
    match input.strip_suffix('\n') {
        Some(line) => line.strip_suffix('\r').unwrap_or(line),
        None => input,
    }
}

/// Position of the first byte at or after `start` that matches `delimiter`,
/// or the end of input.
fn scan_until(bytes: &[u8], start: usize, delimiter: impl Fn(u8) -> bool) -> usize {
    bytes
        .iter()
        .skip(start)
        .position(|&byte| delimiter(byte))
        .map_or(bytes.len(), |offset| start + offset)
}

fn skip_spaces(bytes: &[u8], start: usize) -> usize {
    scan_until(bytes, start, |byte| byte != b' ')
}

fn parse_tags(bytes: &[u8]) -> Step<Vec<TagSpan>> {
    let mut tags = Vec::new();
    if bytes.first() != Some(&b'@') {
        return Ok((tags, 0));
    }
    let mut position = 1;
    loop {
        let key_start = position;
        position = scan_until(bytes, position, |byte| matches!(byte, b'=' | b';' | b' '));
        let key = key_start..position;
        let mut value = None;
        if bytes.get(position) == Some(&b'=') {
            position += 1;
            let value_start = position;
            position = scan_until(bytes, position, |byte| matches!(byte, b';' | b' '));
            if value_start < position {
                value = Some(value_start..position);
            }
        }
        // Empty entries, e.g. from a dangling `;`, are dropped.
        if !key.is_empty() {
            tags.push((key, value));
        }
        // The tag list must be terminated by a space.
        match bytes.get(position) {
            Some(b' ') => return Ok((tags, position + 1)),
            Some(_) => position += 1,
            None => return Err(UnexpectedEndOfInput),
        }
    }
}

fn parse_prefix(bytes: &[u8], position: usize) -> Step<Option<PrefixSpan>> {
    if bytes.get(position) != Some(&b':') {
        return Ok((None, position));
    }
    let start = position + 1;
    let name_end = scan_until(bytes, start, |byte| matches!(byte, b'!' | b'@' | b' '));
    let mut position = name_end;
    let mut user = None;
    if bytes.get(position) == Some(&b'!') {
        let user_start = position + 1;
        position = scan_until(bytes, user_start, |byte| matches!(byte, b'@' | b' '));
        user = Some(user_start..position);
    }
    let mut host = None;
    if bytes.get(position) == Some(&b'@') {
        let host_start = position + 1;
        position = scan_until(bytes, host_start, |byte| byte == b' ');
        host = Some(host_start..position);
    }
    if position >= bytes.len() {
        // A prefix must be followed by a command.
        return Err(UnexpectedEndOfInput);
    }
    let span = PrefixSpan {
        raw: start..position,
        name: start..name_end,
        user,
        host,
    };
    Ok((Some(span), position))
}

fn parse_command(bytes: &[u8], position: usize) -> Step<Range<usize>> {
    if position >= bytes.len() {
        return Err(UnexpectedEndOfInput);
    }
    let end = scan_until(bytes, position, |byte| byte == b' ');
    Ok((position..end, end))
}

fn parse_args(bytes: &[u8], mut position: usize) -> Vec<Range<usize>> {
    let mut args = Vec::new();
    loop {
        position = skip_spaces(bytes, position);
        match bytes.get(position) {
            None => break,
            Some(b':') => {
                args.push(position + 1..bytes.len());
                break;
            }
            Some(_) => {
                let end = scan_until(bytes, position, |byte| byte == b' ');
                args.push(position..end);
                position = end;
            }
        }
    }
    args
}
