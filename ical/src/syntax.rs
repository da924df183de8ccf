// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Content line tokenizer.
//!
//! A content line is split in three explicit steps, each on the *first*
//! delimiter that is not inside a double-quoted parameter value:
//!
//! ```text
//! contentline = name *(";" param) ":" value
//!                    ^ second      ^ first
//! param       = key "=" value
//!                   ^ third
//! ```
//!
//! Folding is removed beforehand by [`unfold`].

use std::borrow::Cow;

/// Remove line folding and normalize line breaks to `\n`.
///
/// A line break immediately followed by a single space or horizontal tab is a
/// continuation of the previous line: the break and that one whitespace
/// character are dropped. `\r\n` and bare `\n` are both accepted.
#[must_use]
pub fn unfold(src: &str) -> Cow<'_, str> {
    if !src.contains('\r') && !src.contains("\n ") && !src.contains("\n\t") {
        return Cow::Borrowed(src);
    }

    let normalized = src.replace("\r\n", "\n");
    let mut unfolded = String::with_capacity(normalized.len());
    let mut chars = normalized.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\n' && matches!(chars.peek(), Some(' ' | '\t')) {
            chars.next(); // the single folding whitespace
            continue;
        }
        unfolded.push(c);
    }
    Cow::Owned(unfolded)
}

/// A content line split into its name, parameters and value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine<'src> {
    /// Property name as written in the source.
    pub name: &'src str,

    /// Well-formed parameters, in source order.
    pub parameters: Vec<Parameter<'src>>,

    /// Property value, trimmed. Never empty.
    pub value: &'src str,
}

/// A `key=value` property parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter<'src> {
    /// Parameter name as written in the source.
    pub name: &'src str,

    /// Parameter value with surrounding double quotes removed.
    pub value: &'src str,
}

/// Reasons a line is not turned into a property.
///
/// None of these are fatal; callers skip the line and carry on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentLineError {
    /// No colon separates the property section from the value.
    #[error("missing colon in content line")]
    MissingColon,

    /// Nothing before the first colon.
    #[error("empty property name")]
    EmptyName,

    /// The value is empty or whitespace only.
    #[error("empty value for property {name}")]
    EmptyValue {
        /// The property whose value is missing.
        name: String,
    },
}

/// Split one unfolded line into a [`ContentLine`].
///
/// Malformed parameters (no `=`, empty key or empty value) are dropped without
/// rejecting the line.
///
/// # Errors
///
/// Returns a [`ContentLineError`] if the line carries no usable property.
pub fn scan_content_line(line: &str) -> Result<ContentLine<'_>, ContentLineError> {
    let (section, value) = split_first(line, b':').ok_or(ContentLineError::MissingColon)?;

    let mut tokens = split_all(section, b';').into_iter();
    let name = tokens.next().unwrap_or_default();
    if name.is_empty() {
        return Err(ContentLineError::EmptyName);
    }

    let value = value.trim();
    if value.is_empty() {
        return Err(ContentLineError::EmptyValue {
            name: name.to_string(),
        });
    }

    let parameters = tokens.filter_map(scan_parameter).collect();
    Ok(ContentLine {
        name,
        parameters,
        value,
    })
}

fn scan_parameter(token: &str) -> Option<Parameter<'_>> {
    let (name, value) = token.split_once('=')?;
    let value = unquote(value);
    match name.is_empty() || value.is_empty() {
        true => None,
        false => Some(Parameter { name, value }),
    }
}

fn unquote(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(s)
}

/// Split at the first `delim` outside double quotes.
///
/// If quotes are unbalanced the quoting is ignored and the first `delim` wins.
fn split_first(s: &str, delim: u8) -> Option<(&str, &str)> {
    let at = find_unquoted(s, delim).or_else(|| s.bytes().position(|b| b == delim))?;
    Some((s.get(..at)?, s.get(at + 1..)?))
}

fn split_all(s: &str, delim: u8) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = s;
    while let Some(at) = find_unquoted(rest, delim) {
        let (Some(head), Some(tail)) = (rest.get(..at), rest.get(at + 1..)) else {
            break;
        };
        parts.push(head);
        rest = tail;
    }
    parts.push(rest);
    parts
}

/// Delimiters are ASCII, so a matching byte is always on a char boundary.
fn find_unquoted(s: &str, delim: u8) -> Option<usize> {
    let mut quoted = false;
    for (i, b) in s.bytes().enumerate() {
        if b == b'"' {
            quoted = !quoted;
        } else if b == delim && !quoted {
            return Some(i);
        }
    }
    None
}
