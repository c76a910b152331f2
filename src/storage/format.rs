// SPDX-License-Identifier: PMPL-1.0-or-later

//! Line format for persisted profiles
//!
//! Each line is `<tuple>: <count>`, where the tuple is rendered like a
//! Python tuple literal of quoted tokens: `(' a ', ' b '): 12`, and a
//! one-token n-gram keeps the trailing comma: `(' a ',): 40`.
//! Line order is rank order.

use crate::profile::RankedProfile;
use crate::types::{NGram, Token};
use std::iter::Peekable;
use std::str::Chars;

/// Renders one profile as text, one record per line, no trailing newline.
pub fn format_profile(profile: &RankedProfile) -> String {
    profile
        .entries()
        .iter()
        .map(|(ngram, count)| format!("{}: {}", format_key(ngram), count))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_key(ngram: &NGram) -> String {
    let quoted: Vec<String> = ngram.tokens().iter().map(|t| quote_token(t)).collect();
    if quoted.len() == 1 {
        format!("({},)", quoted[0])
    } else {
        format!("({})", quoted.join(", "))
    }
}

fn quote_token(token: &str) -> String {
    let mut out = String::with_capacity(token.len() + 2);
    out.push('\'');
    for c in token.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            ' ' => out.push(' '),
            c if c.is_whitespace() || c.is_control() => {
                let code = c as u32;
                let escaped = if code < 0x100 {
                    format!("\\x{code:02x}")
                } else if code < 0x10000 {
                    format!("\\u{code:04x}")
                } else {
                    format!("\\U{code:08x}")
                };
                out.push_str(&escaped);
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Parses one `<tuple>: <count>` record.
pub fn parse_record(line: &str) -> Result<(NGram, u64), String> {
    let (key, value) = line
        .rsplit_once(": ")
        .ok_or_else(|| "expected `<tuple>: <count>`".to_string())?;
    let count = value
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("invalid count {:?}: {}", value.trim(), e))?;
    Ok((parse_key(key.trim())?, count))
}

pub fn parse_key(key: &str) -> Result<NGram, String> {
    let inner = key
        .strip_prefix('(')
        .and_then(|k| k.strip_suffix(')'))
        .ok_or_else(|| format!("key {key:?} is not a parenthesized tuple"))?;

    let mut chars = inner.chars().peekable();
    let mut tokens: Vec<Token> = Vec::new();
    loop {
        skip_spaces(&mut chars);
        match chars.next() {
            None => break,
            Some(q @ ('\'' | '"')) => tokens.push(parse_quoted(&mut chars, q)?),
            Some(c) => return Err(format!("unexpected {c:?} in key, expected a quoted token")),
        }
        skip_spaces(&mut chars);
        match chars.next() {
            None => break,
            Some(',') => continue,
            Some(c) => return Err(format!("unexpected {c:?} after token, expected ','")),
        }
    }

    if tokens.is_empty() {
        return Err("empty n-gram tuple".to_string());
    }
    Ok(NGram::new(tokens))
}

fn skip_spaces(chars: &mut Peekable<Chars<'_>>) {
    while chars.next_if(|c| c.is_whitespace()).is_some() {}
}

fn parse_quoted(chars: &mut Peekable<Chars<'_>>, quote: char) -> Result<Token, String> {
    let mut token = String::new();
    loop {
        match chars.next() {
            None => return Err("unterminated quoted token".to_string()),
            Some(c) if c == quote => return Ok(token),
            Some('\\') => token.push(parse_escape(chars)?),
            Some(c) => token.push(c),
        }
    }
}

fn parse_escape(chars: &mut Peekable<Chars<'_>>) -> Result<char, String> {
    let hex_digits = match chars.next() {
        Some('\\') => return Ok('\\'),
        Some('\'') => return Ok('\''),
        Some('"') => return Ok('"'),
        Some('t') => return Ok('\t'),
        Some('n') => return Ok('\n'),
        Some('r') => return Ok('\r'),
        Some('x') => 2,
        Some('u') => 4,
        Some('U') => 8,
        Some(c) => return Err(format!("unknown escape \\{c}")),
        None => return Err("dangling backslash".to_string()),
    };
    let digits: String = chars.by_ref().take(hex_digits).collect();
    if digits.chars().count() != hex_digits {
        return Err(format!("truncated escape \\{digits}"));
    }
    u32::from_str_radix(&digits, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| format!("invalid escape value {digits:?}"))
}
