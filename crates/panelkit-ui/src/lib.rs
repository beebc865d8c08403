//! panelkit UI Components
//!
//! Dioxus wrappers for forms, loaders, statistic grids, summary panels and
//! read-only "view" details. Each wrapper renders one styled container around
//! its children and exposes a few layout props (variant, width, spacing,
//! column count).
//!
//! ## Class Naming
//!
//! Classes follow a block/modifier scheme:
//! - **Block**: `stat-grid`, `summary-panel`, `view-field`
//! - **Variant**: `summary-panel--warning`, `loader--lg`
//! - **Flag**: `form-wrapper--compact`, `form-label--required`
//!
//! Every wrapper also takes an optional `class` prop that is appended after
//! its own tokens. Composition goes through [`panelkit_core`].

pub mod components;

pub use components::*;
pub use panelkit_core::Dimension;
