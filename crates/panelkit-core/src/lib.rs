//! panelkit core
//!
//! The style composition layer shared by every panelkit wrapper. Wrappers
//! hand over a fixed set of base class tokens, a few boolean-driven modifier
//! tokens and an optional caller class, and get back a single class string.
//! Layout props (heights, widths, column counts, gaps) are turned into inline
//! style declarations the same way.
//!
//! Everything in [`class_name`], [`dimension`], [`grid`] and [`style`] is
//! pure: no state, no logging, no failure modes. Malformed numeric input is
//! passed through unchanged; validating it is the caller's job.
//!
//! ## Example
//!
//! ```
//! use panelkit_core::{compose_class_name, grid_columns, to_dimension};
//!
//! let class = compose_class_name(
//!     &["form-label"],
//!     &[(true, "form-label--required")],
//!     Some("  wide "),
//! );
//! assert_eq!(class, "form-label form-label--required wide");
//!
//! assert_eq!(to_dimension(400), "400px");
//! assert_eq!(to_dimension("50%"), "50%");
//! assert_eq!(grid_columns(Some(3), None), "repeat(3, 1fr)");
//! ```

pub mod class_name;
pub mod config;
pub mod dimension;
pub mod error;
pub mod grid;
pub mod layout;
pub mod style;

pub use class_name::{compose_class_name, StyleRequest};
pub use config::LayoutConfig;
pub use dimension::{to_dimension, Dimension};
pub use error::{ConfigError, ConfigResult};
pub use grid::{grid_columns, GridSpec, DEFAULT_MIN_CARD_WIDTH};
pub use layout::{GridOptions, LoaderOptions, DEFAULT_GRID_GAP};
pub use style::InlineStyle;
