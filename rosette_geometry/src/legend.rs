// Copyright 2025 the Rosette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend entries and swatch-list layout.
//!
//! Legend entries are derived from the computed chart, never recomputed from raw input, so the
//! percentage a legend shows is the same number that sized the slice.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;

/// One legend row: `(label, color, value, percentage)`.
///
/// Share charts fill in `value` and `percentage`; radar charts only carry label and color.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    /// The label shown next to the swatch.
    pub label: String,
    /// The swatch color.
    pub color: Color,
    /// The raw value, for share charts.
    pub value: Option<f64>,
    /// The percentage of the total (one decimal), for share charts.
    pub percentage: Option<f64>,
}

impl LegendEntry {
    /// Creates an entry with only a label and color.
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
            value: None,
            percentage: None,
        }
    }

    /// Creates an entry for a share-chart slice.
    pub fn with_share(label: impl Into<String>, color: Color, value: f64, percentage: f64) -> Self {
        Self {
            label: label.into(),
            color,
            value: Some(value),
            percentage: Some(percentage),
        }
    }

    /// The text displayed for this entry.
    ///
    /// `"label"`, or `"label: value (percentage%)"` when share details are present.
    pub fn text(&self) -> String {
        match (self.value, self.percentage) {
            (Some(value), Some(pct)) => format!("{}: {} ({:.1}%)", self.label, value, pct),
            (Some(value), None) => format!("{}: {}", self.label, value),
            _ => self.label.clone(),
        }
    }
}

/// A positioned legend row produced by [`LegendLayout::rows`].
#[derive(Clone, Debug, PartialEq)]
pub struct LegendRow {
    /// Swatch square.
    pub swatch: Rect,
    /// Label anchor (start-anchored, vertically centered on the swatch).
    pub label_pos: Point,
    /// Label text.
    pub text: String,
    /// Swatch color.
    pub color: Color,
}

/// A vertical list of color swatches with text labels.
///
/// Items are laid out top-to-bottom, then left-to-right into columns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendLayout {
    /// Legend origin (top-left).
    pub origin: Point,
    /// Swatch square size.
    pub swatch_size: f64,
    /// Vertical gap between rows.
    pub row_gap: f64,
    /// Horizontal gap between swatch and label.
    pub label_dx: f64,
    /// Number of columns.
    pub columns: usize,
    /// Horizontal gap between columns.
    pub column_gap: f64,
    /// Label font size.
    pub font_size: f64,
}

impl LegendLayout {
    /// Creates a single-column layout at `origin` with default spacing.
    pub fn new(origin: impl Into<Point>) -> Self {
        Self {
            origin: origin.into(),
            swatch_size: 10.0,
            row_gap: 6.0,
            label_dx: 6.0,
            columns: 1,
            column_gap: 12.0,
            font_size: 10.0,
        }
    }

    /// Sets the number of columns.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Positions one row per entry, in entry order.
    pub fn rows(&self, entries: &[LegendEntry]) -> Vec<LegendRow> {
        let columns = self.columns.max(1);
        let rows_per_col = entries.len().div_ceil(columns).max(1);
        let row_height = self.row_height();
        let column_width = self.column_width(entries);

        entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let col = i / rows_per_col;
                let row = i % rows_per_col;
                let x = self.origin.x + col as f64 * (column_width + self.column_gap);
                let y = self.origin.y + row as f64 * (row_height + self.row_gap);
                let swatch_y = y + (row_height - self.swatch_size) * 0.5;
                let swatch = Rect::from_origin_size(
                    (x, swatch_y),
                    (self.swatch_size, self.swatch_size),
                );
                LegendRow {
                    swatch,
                    label_pos: Point::new(swatch.x1 + self.label_dx, y + row_height * 0.5),
                    text: entry.text(),
                    color: entry.color,
                }
            })
            .collect()
    }

    /// Estimates the legend bounds, assuming an average glyph width of 0.6em.
    pub fn bounds(&self, entries: &[LegendEntry]) -> Rect {
        let mut bounds = Rect::from_origin_size(self.origin, (0.0, 0.0));
        for row in self.rows(entries) {
            let label_w = estimate_text_width(&row.text, self.font_size);
            let label = Rect::new(
                row.label_pos.x,
                row.label_pos.y - self.font_size * 0.5,
                row.label_pos.x + label_w,
                row.label_pos.y + self.font_size * 0.5,
            );
            bounds = bounds.union(row.swatch).union(label);
        }
        bounds
    }

    fn row_height(&self) -> f64 {
        self.swatch_size.max(self.font_size)
    }

    fn column_width(&self, entries: &[LegendEntry]) -> f64 {
        let widest = entries
            .iter()
            .map(|e| estimate_text_width(&e.text(), self.font_size))
            .fold(0.0, f64::max);
        self.swatch_size + self.label_dx + widest
    }
}

fn estimate_text_width(text: &str, font_size: f64) -> f64 {
    0.6 * font_size * text.chars().count() as f64
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn share_entries_show_value_and_percentage() {
        let e = LegendEntry::with_share("Rent", css::BLACK, 1200.0, 40.0);
        assert_eq!(e.text(), "Rent: 1200 (40.0%)");
        let e = LegendEntry::new("Team A", css::BLACK);
        assert_eq!(e.text(), "Team A");
    }

    #[test]
    fn rows_stack_downwards_in_entry_order() {
        let entries = vec![
            LegendEntry::new("A", css::RED),
            LegendEntry::new("B", css::GREEN),
        ];
        let rows = LegendLayout::new((10.0, 20.0)).rows(&entries);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].swatch, Rect::new(10.0, 20.0, 20.0, 30.0));
        assert_eq!(rows[1].swatch, Rect::new(10.0, 36.0, 20.0, 46.0));
        assert_eq!(rows[0].label_pos, Point::new(26.0, 25.0));
        assert_eq!(rows[1].color, css::GREEN);
    }

    #[test]
    fn columns_trade_height_for_width() {
        let entries = vec![
            LegendEntry::new("A", css::BLACK),
            LegendEntry::new("BBBB", css::BLACK),
            LegendEntry::new("CC", css::BLACK),
            LegendEntry::new("DDDDDD", css::BLACK),
        ];
        let one = LegendLayout::new((0.0, 0.0)).bounds(&entries);
        let two = LegendLayout::new((0.0, 0.0)).with_columns(2).bounds(&entries);
        assert!(two.width() > one.width());
        assert!(two.height() < one.height());
    }
}
