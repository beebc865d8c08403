//! Gallery theme: global CSS for every panelkit class token.

mod styles;

pub use styles::GLOBAL_STYLES;
