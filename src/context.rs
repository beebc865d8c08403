//! Layout context for the gallery.
//!
//! Pages read the startup layout through these hooks instead of touching the
//! globals in `main` directly.
//!
//! ## Usage
//!
//! ```ignore
//! let layout = use_layout();
//! rsx! {
//!     StatGrid { columns: layout.grid.columns, /* ... */ }
//! }
//! ```

use dioxus::prelude::*;
use panelkit_core::LayoutConfig;

/// Hook returning the layout config, read once per component instance.
pub fn use_layout() -> LayoutConfig {
    use_hook(crate::get_layout)
}

/// Hook returning the `--compact` flag.
pub fn use_compact() -> bool {
    use_hook(crate::get_compact)
}
