//! Loader Component
//!
//! Spinner with optional label. Sits inline, fills a fixed-height box, or
//! covers its parent as an overlay.

use dioxus::prelude::*;
use panelkit_core::{Dimension, LoaderOptions, StyleRequest};

/// Accessible name used when a loader has no visible label
pub const DEFAULT_LOADER_ARIA_LABEL: &str = "Loading";

/// Spinner sizes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LoaderSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl LoaderSize {
    /// Returns the CSS class for this size
    pub fn class(&self) -> &'static str {
        match self {
            LoaderSize::Small => "loader--sm",
            LoaderSize::Medium => "loader--md",
            LoaderSize::Large => "loader--lg",
        }
    }
}

/// Properties for the Loader component
#[derive(Clone, PartialEq, Props)]
pub struct LoaderProps {
    /// Spinner size
    #[props(default)]
    pub size: LoaderSize,
    /// Text shown next to the spinner
    #[props(default)]
    pub label: Option<String>,
    /// Screen reader name when there is no `label`
    #[props(default = DEFAULT_LOADER_ARIA_LABEL.to_string())]
    pub aria_label: String,
    /// Fixed height of the loader box (number = pixels)
    #[props(default)]
    pub height: Option<Dimension>,
    /// Cover the parent element
    #[props(default = false)]
    pub overlay: bool,
    /// Flow with surrounding text instead of taking a block
    #[props(default = false)]
    pub inline: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Loading indicator
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Loader { label: "loading records".to_string(), height: Dimension::from(240) }
///     Loader { size: LoaderSize::Small, inline: true }
/// }
/// ```
#[component]
pub fn Loader(props: LoaderProps) -> Element {
    let class = loader_class(
        props.size,
        props.overlay,
        props.inline,
        props.class.as_deref(),
    );
    let options = LoaderOptions {
        height: props.height.clone(),
        overlay: props.overlay,
    };
    let style = options.style();
    let aria_label = accessible_name(props.label.as_deref(), &props.aria_label);

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            role: "status",
            "aria-live": "polite",
            "aria-label": "{aria_label}",
            span { class: "loader__spinner", "aria-hidden": "true" }
            if let Some(label) = &props.label {
                span { class: "loader__label", "{label}" }
            }
        }
    }
}

fn loader_class(size: LoaderSize, overlay: bool, inline: bool, extra: Option<&str>) -> String {
    StyleRequest::new(&["loader", size.class()])
        .conditional(overlay, "loader--overlay")
        .conditional(inline, "loader--inline")
        .extra(extra)
        .build()
}

/// The visible label doubles as the accessible name
fn accessible_name<'a>(label: Option<&'a str>, fallback: &'a str) -> &'a str {
    label.map(str::trim).filter(|l| !l.is_empty()).unwrap_or(fallback)
}
