//! Summary Panel Components
//!
//! Bordered panels for totals and key/value recaps, with a status accent.

use dioxus::prelude::*;
use panelkit_core::compose_class_name;

/// Summary panel accent variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PanelVariant {
    #[default]
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

impl PanelVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            PanelVariant::Neutral => "summary-panel--neutral",
            PanelVariant::Info => "summary-panel--info",
            PanelVariant::Success => "summary-panel--success",
            PanelVariant::Warning => "summary-panel--warning",
            PanelVariant::Danger => "summary-panel--danger",
        }
    }
}

/// Properties for the SummaryPanel component
#[derive(Clone, PartialEq, Props)]
pub struct SummaryPanelProps {
    /// Panel body, usually SummaryItem rows
    pub children: Element,
    /// Panel heading
    #[props(default)]
    pub title: Option<String>,
    /// Accent color
    #[props(default)]
    pub variant: PanelVariant,
    /// Reduced padding
    #[props(default = false)]
    pub compact: bool,
    /// Stretch to the parent's width
    #[props(default = false)]
    pub full_width: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Summary panel
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SummaryPanel { title: "Order".to_string(), variant: PanelVariant::Info,
///         SummaryItem { label: "Items".to_string(), "3" }
///         SummaryItem { label: "Total".to_string(), emphasized: true, "$42.00" }
///     }
/// }
/// ```
#[component]
pub fn SummaryPanel(props: SummaryPanelProps) -> Element {
    let class = summary_panel_class(
        props.variant,
        props.compact,
        props.full_width,
        props.class.as_deref(),
    );

    rsx! {
        section { class: "{class}",
            if let Some(title) = &props.title {
                h3 { class: "summary-panel__title", "{title}" }
            }
            div { class: "summary-panel__body", {props.children} }
        }
    }
}

fn summary_panel_class(
    variant: PanelVariant,
    compact: bool,
    full_width: bool,
    extra: Option<&str>,
) -> String {
    compose_class_name(
        &["summary-panel", variant.class()],
        &[
            (compact, "summary-panel--compact"),
            (full_width, "summary-panel--full-width"),
        ],
        extra,
    )
}

/// Properties for the SummaryItem component
#[derive(Clone, PartialEq, Props)]
pub struct SummaryItemProps {
    /// Row caption
    pub label: String,
    /// Row value
    pub children: Element,
    /// Bold row, e.g. a grand total
    #[props(default = false)]
    pub emphasized: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// One label/value row inside a SummaryPanel
#[component]
pub fn SummaryItem(props: SummaryItemProps) -> Element {
    let class = summary_item_class(props.emphasized, props.class.as_deref());

    rsx! {
        div { class: "{class}",
            span { class: "summary-item__label", "{props.label}" }
            span { class: "summary-item__value", {props.children} }
        }
    }
}

fn summary_item_class(emphasized: bool, extra: Option<&str>) -> String {
    compose_class_name(
        &["summary-item"],
        &[(emphasized, "summary-item--emphasized")],
        extra,
    )
}
