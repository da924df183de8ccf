// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::fmt;

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

pub trait TableColumn<T> {
    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;
    fn padding_direction(&self) -> PaddingDirection;
    fn color(&self, data: &T) -> Option<Color>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// Rows of cells separated by two spaces, padded to the widest cell.
pub struct Table<'a, T, C: TableColumn<T>> {
    columns: &'a [C],
    data: &'a [T],
}

impl<'a, T, C: TableColumn<T>> Table<'a, T, C> {
    pub fn new(columns: &'a [C], data: &'a [T]) -> Self {
        Self { columns, data }
    }
}

impl<T, C: TableColumn<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SEPARATOR: &str = "  ";

        let cells: Vec<Vec<Cow<'_, str>>> = self
            .data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect();

        let mut widths = vec![0; self.columns.len()];
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }

        for (row, data) in cells.iter().zip(self.data) {
            let last = self.columns.len().saturating_sub(1);
            for (i, ((col, cell), width)) in self.columns.iter().zip(row).zip(&widths).enumerate() {
                // Width counts display columns, format! pads by chars
                let fill = width.saturating_sub(cell.width());
                let padded = match col.padding_direction() {
                    PaddingDirection::Left if i == last => cell.to_string(),
                    PaddingDirection::Left => format!("{cell}{}", " ".repeat(fill)),
                    PaddingDirection::Right => format!("{}{cell}", " ".repeat(fill)),
                };
                match col.color(data) {
                    Some(color) => write!(f, "{}", padded.color(color))?,
                    None => write!(f, "{padded}")?,
                }
                if i < last {
                    write!(f, "{SEPARATOR}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
