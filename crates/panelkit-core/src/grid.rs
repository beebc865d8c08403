//! Grid column specs
//!
//! Grids take either a fixed column count or a minimum card width and let the
//! browser fit as many columns as will hold it. With neither, the grid falls
//! back to [`DEFAULT_MIN_CARD_WIDTH`].

use std::fmt;

/// Minimum card width used when a grid gets neither a column count nor a
/// minimum card width.
pub const DEFAULT_MIN_CARD_WIDTH: &str = "200px";

/// Source of a `grid-template-columns` expression
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridSpec {
    /// Exactly this many equal-width columns
    Columns(u32),
    /// As many columns as fit, each at least this wide
    MinCardWidth(String),
}

impl GridSpec {
    /// Picks the spec for a grid's props. A column count wins over a minimum
    /// card width; with neither, the default minimum card width applies.
    pub fn resolve(columns: Option<u32>, min_card_width: Option<&str>) -> Self {
        match (columns, min_card_width) {
            (Some(count), _) => GridSpec::Columns(count),
            (None, Some(width)) => GridSpec::MinCardWidth(width.to_string()),
            (None, None) => GridSpec::default(),
        }
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        GridSpec::MinCardWidth(DEFAULT_MIN_CARD_WIDTH.to_string())
    }
}

impl fmt::Display for GridSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridSpec::Columns(count) => write!(f, "repeat({count}, 1fr)"),
            GridSpec::MinCardWidth(width) => {
                write!(f, "repeat(auto-fit, minmax({width}, 1fr))")
            }
        }
    }
}

/// Builds the `grid-template-columns` value for a grid.
///
/// ```
/// use panelkit_core::grid_columns;
///
/// assert_eq!(grid_columns(Some(3), None), "repeat(3, 1fr)");
/// assert_eq!(
///     grid_columns(None, Some("200px")),
///     "repeat(auto-fit, minmax(200px, 1fr))"
/// );
/// assert_eq!(
///     grid_columns(None, None),
///     "repeat(auto-fit, minmax(200px, 1fr))"
/// );
/// ```
pub fn grid_columns(columns: Option<u32>, min_card_width: Option<&str>) -> String {
    GridSpec::resolve(columns, min_card_width).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_columns() {
        assert_eq!(grid_columns(Some(3), None), "repeat(3, 1fr)");
        assert_eq!(grid_columns(Some(1), None), "repeat(1, 1fr)");
    }

    #[test]
    fn min_card_width() {
        assert_eq!(
            grid_columns(None, Some("200px")),
            "repeat(auto-fit, minmax(200px, 1fr))"
        );
        assert_eq!(
            grid_columns(None, Some("12rem")),
            "repeat(auto-fit, minmax(12rem, 1fr))"
        );
    }

    #[test]
    fn columns_win_over_min_width() {
        assert_eq!(grid_columns(Some(4), Some("300px")), "repeat(4, 1fr)");
    }

    #[test]
    fn default_policy_is_pinned() {
        let expected = "repeat(auto-fit, minmax(200px, 1fr))";
        assert_eq!(grid_columns(None, None), expected);
        assert_eq!(grid_columns(None, None), grid_columns(None, None));
        assert_eq!(
            GridSpec::resolve(None, None),
            GridSpec::MinCardWidth(DEFAULT_MIN_CARD_WIDTH.to_string())
        );
    }

    #[test]
    fn zero_columns_pass_through() {
        assert_eq!(grid_columns(Some(0), None), "repeat(0, 1fr)");
    }
}
