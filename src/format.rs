//! Token patterns such as `yyyy-MM-dd HH:mm:ss`.
//!
//! A pattern is a sequence of letter runs (`yyyy`, `MM`, `HH`, ...) and
//! literal text. Letters inside single quotes are literal, and `''` stands for
//! one quote character. Every recognised run is translated to the matching
//! `chrono` strftime specifier.

use std::{fmt, iter::Peekable, str::Chars};

use chrono::{DateTime, TimeZone};

use crate::error::{Result, TimeError};

const QUOTE: char = '\'';

/// strftime specifier for a run of `count` repetitions of `letter`
fn specifier(letter: char, count: usize) -> Option<&'static str> {
    let spec = match (letter, count) {
        ('y', 2) => "%y",
        ('y', 1 | 3 | 4) => "%Y",
        ('M', 4) => "%B",
        ('M', 3) => "%b",
        ('M', 2) => "%m",
        ('M', 1) => "%-m",
        ('d', 2) => "%d",
        ('d', 1) => "%-d",
        ('H', 2) => "%H",
        ('H', 1) => "%-H",
        ('h', 2) => "%I",
        ('h', 1) => "%-I",
        ('m', 2) => "%M",
        ('m', 1) => "%-M",
        ('s', 2) => "%S",
        ('s', 1) => "%-S",
        ('a', 1) => "%p",
        ('E', 4) => "%A",
        ('E', 1..=3) => "%a",
        ('Z', 1) => "%z",
        ('z', 1) => "%Z",
        _ => return None,
    };
    Some(spec)
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

fn push_quoted(out: &mut String, chars: &mut Peekable<Chars<'_>>) -> Result<()> {
    while let Some(c) = chars.next() {
        if c != QUOTE {
            push_literal(out, c);
        } else if chars.next_if_eq(&QUOTE).is_some() {
            out.push(QUOTE);
        } else {
            return Ok(());
        }
    }
    Err(TimeError::UnsupportedFormatToken(format!("unterminated quote ({QUOTE})")))
}

/// Translates a token pattern into a `chrono` strftime string.
///
/// # Errors
/// Returns `TimeError::UnsupportedFormatToken` for a letter run with no
/// formatting rule, or for an unterminated quote.
pub fn to_strftime(pattern: &str) -> Result<String> {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == QUOTE {
            if chars.next_if_eq(&QUOTE).is_some() {
                out.push(QUOTE);
            } else {
                push_quoted(&mut out, &mut chars)?;
            }
        } else if c.is_ascii_alphabetic() {
            let mut count = 1;
            while chars.next_if_eq(&c).is_some() {
                count += 1;
            }
            let spec = specifier(c, count)
                .ok_or_else(|| TimeError::UnsupportedFormatToken(c.to_string().repeat(count)))?;
            out.push_str(spec);
        } else {
            push_literal(&mut out, c);
        }
    }

    Ok(out)
}

/// Formats `datetime` with a token pattern.
///
/// # Errors
/// Same as [`to_strftime`].
pub fn format_datetime<T>(datetime: &DateTime<T>, pattern: &str) -> Result<String>
where
    T: TimeZone,
    T::Offset: fmt::Display,
{
    let strftime = to_strftime(pattern)?;
    Ok(datetime.format(&strftime).to_string())
}
