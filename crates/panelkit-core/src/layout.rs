//! Layout option objects
//!
//! Named, defaulted layout settings for the grid and loader wrappers. Both
//! deserialize from partial config tables; missing fields keep the defaults
//! documented here.

use serde::{Deserialize, Serialize};

use crate::{grid_columns, Dimension, InlineStyle};

/// Gap between grid cells when none is configured (16px)
pub const DEFAULT_GRID_GAP: i128 = 16;

/// Column and spacing options for grid wrappers.
///
/// | field | default |
/// |---|---|
/// | `columns` | none |
/// | `min_card_width` | none, which means [`crate::DEFAULT_MIN_CARD_WIDTH`] |
/// | `gap` | `16px` |
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    /// Fixed number of columns. Takes precedence over `min_card_width`.
    pub columns: Option<u32>,
    /// Minimum width of an auto-fitted card, as a CSS length
    pub min_card_width: Option<String>,
    /// Space between cells. `None` leaves spacing to the stylesheet.
    pub gap: Option<Dimension>,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            columns: None,
            min_card_width: None,
            gap: Some(Dimension::Integer(DEFAULT_GRID_GAP)),
        }
    }
}

impl GridOptions {
    pub fn with_columns(mut self, columns: u32) -> Self {
        self.columns = Some(columns);
        self
    }

    pub fn with_min_card_width(mut self, width: impl Into<String>) -> Self {
        self.min_card_width = Some(width.into());
        self
    }

    pub fn with_gap(mut self, gap: impl Into<Dimension>) -> Self {
        self.gap = Some(gap.into());
        self
    }

    /// `grid-template-columns` followed by `gap` when one is set
    pub fn style(&self) -> InlineStyle {
        InlineStyle::new()
            .set(
                "grid-template-columns",
                grid_columns(self.columns, self.min_card_width.as_deref()),
            )
            .set_opt("gap", self.gap.as_ref())
    }
}

/// Options for the loader wrapper.
///
/// | field | default |
/// |---|---|
/// | `height` | none, the loader sizes to its content |
/// | `overlay` | `false` |
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderOptions {
    /// Fixed height of the loader box
    pub height: Option<Dimension>,
    /// Cover the parent instead of flowing inline
    pub overlay: bool,
}

impl LoaderOptions {
    pub fn style(&self) -> InlineStyle {
        InlineStyle::new().set_opt("height", self.height.as_ref())
    }
}
