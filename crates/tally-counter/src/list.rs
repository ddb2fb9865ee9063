//! Text layout for marked lists.
//!
//! A [`ListBlock`] is a run of items sharing one list style. Rendering gives
//! every item a counter value, asks the style for its marker, and joins marker
//! and text into a line. With [`MarkerAlignment::Right`] markers are padded to
//! a common width so the item texts start in the same column, the way a
//! browser draws `outside` markers.

use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::style::ListStyleType;

/// Which edge of the marker column markers hug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MarkerAlignment {
    /// Markers start at column 0; texts follow directly.
    #[default]
    Left,
    /// Markers end at a shared column; texts line up after them.
    Right,
}

/// One laid-out list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedItem {
    /// Counter value the marker was generated from.
    pub value: i64,
    /// Marker text, suffix and alignment padding included.
    pub marker: String,
    /// Item text as given.
    pub text: String,
    /// `marker` followed by `text`.
    pub line: String,
}

/// A list of items rendered with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBlock {
    style: ListStyleType,
    align: MarkerAlignment,
    start: i64,
    items: Vec<String>,
}

impl ListBlock {
    /// An empty list counting from 1.
    #[must_use]
    pub const fn new(style: ListStyleType) -> Self {
        Self {
            style,
            align: MarkerAlignment::Left,
            start: 1,
            items: Vec::new(),
        }
    }

    /// Replace the items.
    #[must_use]
    pub fn items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Append one item.
    pub fn push(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Counter value of the first item.
    #[must_use]
    pub const fn start(mut self, start: i64) -> Self {
        self.start = start;
        self
    }

    /// Marker alignment.
    #[must_use]
    pub const fn align(mut self, align: MarkerAlignment) -> Self {
        self.align = align;
        self
    }

    /// The list style.
    #[must_use]
    pub const fn style(&self) -> ListStyleType {
        self.style
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lay out every item.
    ///
    /// Counter values run `start, start + 1, ...`, saturating at `i64::MAX`.
    #[must_use]
    pub fn render(&self) -> Vec<RenderedItem> {
        let markers: Vec<(i64, String)> = self
            .counter_values()
            .map(|value| (value, self.style.marker(value)))
            .collect();

        let width = match self.align {
            MarkerAlignment::Left => 0,
            MarkerAlignment::Right => markers
                .iter()
                .map(|(_, marker)| marker.chars().count())
                .max()
                .unwrap_or(0),
        };

        markers
            .into_iter()
            .zip(&self.items)
            .map(|((value, marker), text)| {
                let marker = format!("{marker:>width$}");
                let line = format!("{marker}{text}");
                RenderedItem {
                    value,
                    marker,
                    text: text.clone(),
                    line,
                }
            })
            .collect()
    }

    /// The rendered lines alone.
    #[must_use]
    pub fn to_lines(&self) -> Vec<String> {
        self.render().into_iter().map(|item| item.line).collect()
    }

    fn counter_values(&self) -> impl Iterator<Item = i64> {
        (0..self.items.len()).map(|index| {
            i64::try_from(index).map_or(i64::MAX, |offset| self.start.saturating_add(offset))
        })
    }
}
