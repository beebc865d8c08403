//! Presentational wrappers
//!
//! All components share the same shape:
//! - fixed base classes plus boolean modifier classes
//! - an optional caller `class` appended last
//! - inline styles only for values that come from props (heights, widths, grids)

mod form;
mod loader;
mod stats;
mod summary;
mod view;

pub use form::*;
pub use loader::*;
pub use stats::*;
pub use summary::*;
pub use view::*;
