// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::collections::hash_map;

use crate::keyword::{KW_BEGIN, KW_END, KW_VEVENT};
use crate::syntax::{ContentLine, scan_content_line, unfold};

/// A property value together with its parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawProperty {
    /// The trimmed property value.
    pub value: String,

    /// Parameters keyed by lowercased name.
    pub parameters: HashMap<String, String>,
}

impl RawProperty {
    /// Look up a parameter, case-insensitively.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

impl From<ContentLine<'_>> for RawProperty {
    fn from(line: ContentLine<'_>) -> Self {
        let parameters = line
            .parameters
            .into_iter()
            .map(|p| (p.name.to_ascii_lowercase(), p.value.to_string()))
            .collect();

        Self {
            value: line.value.to_string(),
            parameters,
        }
    }
}

/// The properties of one `BEGIN`/`END` block, keyed by uppercased name.
///
/// A property that occurs more than once keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    properties: HashMap<String, RawProperty>,
}

impl RawRecord {
    /// Look up a property, case-insensitively.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RawProperty> {
        self.properties.get(&name.to_ascii_uppercase())
    }

    /// Look up the value of a property, case-insensitively.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(|p| p.value.as_str())
    }

    /// Insert a scanned line, replacing any earlier property of the same name.
    pub fn insert(&mut self, line: ContentLine<'_>) {
        let name = line.name.to_ascii_uppercase();
        self.properties.insert(name, line.into());
    }

    /// Number of distinct properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the block carried no usable property.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate over `(NAME, property)` pairs in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, RawProperty> {
        self.properties.iter()
    }
}

impl<'a> IntoIterator for &'a RawRecord {
    type Item = (&'a String, &'a RawProperty);
    type IntoIter = hash_map::Iter<'a, String, RawProperty>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collect the properties of every `block` (e.g. `VEVENT`) in the document.
///
/// Blocks do not nest: a second `BEGIN:<block>` discards the open record, and a
/// record whose `END:<block>` never arrives is dropped. Lines outside a block,
/// and lines [`scan_content_line`] rejects, are ignored.
#[must_use]
pub fn parse_records(src: &str, block: &str) -> Vec<RawRecord> {
    let begin = format!("{KW_BEGIN}:{block}");
    let end = format!("{KW_END}:{block}");

    let src = unfold(src);
    let mut records = Vec::new();
    let mut current: Option<RawRecord> = None;
    for line in src.split('\n') {
        if starts_with_ignore_case(line, &begin) {
            current = Some(RawRecord::default());
        } else if starts_with_ignore_case(line, &end) {
            records.extend(current.take());
        } else if let Some(record) = current.as_mut() {
            if let Ok(line) = scan_content_line(line) {
                record.insert(line);
            }
        }
    }
    records
}

/// Collect the properties of every `VEVENT` in the document.
#[must_use]
pub fn parse_events(src: &str) -> Vec<RawRecord> {
    parse_records(src, KW_VEVENT)
}

fn starts_with_ignore_case(line: &str, prefix: &str) -> bool {
    line.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
