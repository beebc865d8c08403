//! View Detail Components
//!
//! Read-only record views: a container, a grid of fields and the fields
//! themselves. Empty values render a placeholder instead of collapsing.

use dioxus::prelude::*;
use panelkit_core::{compose_class_name, Dimension, InlineStyle};

use super::stats::grid_style;

/// Placeholder shown for a field with no value
pub const EMPTY_PLACEHOLDER: &str = "\u{2014}";

/// Properties for the ViewContainer component
#[derive(Clone, PartialEq, Props)]
pub struct ViewContainerProps {
    /// View content
    pub children: Element,
    /// Heading above the content
    #[props(default)]
    pub title: Option<String>,
    /// Maximum width (number = pixels)
    #[props(default)]
    pub width: Option<Dimension>,
    /// Stretch to the parent's width, ignoring `width`
    #[props(default = false)]
    pub full_width: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Outer container for a detail view
#[component]
pub fn ViewContainer(props: ViewContainerProps) -> Element {
    let class = compose_class_name(
        &["view-container"],
        &[(props.full_width, "view-container--full-width")],
        props.class.as_deref(),
    );
    let style = view_container_style(props.full_width, props.width.as_ref());

    rsx! {
        article {
            class: "{class}",
            style: "{style}",
            if let Some(title) = &props.title {
                h2 { class: "view-container__title", "{title}" }
            }
            {props.children}
        }
    }
}

fn view_container_style(full_width: bool, width: Option<&Dimension>) -> InlineStyle {
    InlineStyle::new().set_opt("max-width", width.filter(|_| !full_width))
}

/// Properties for the ViewGrid component
#[derive(Clone, PartialEq, Props)]
pub struct ViewGridProps {
    /// ViewField children
    pub children: Element,
    /// Fixed number of columns
    #[props(default)]
    pub columns: Option<u32>,
    /// Minimum field width when auto-fitting
    #[props(default)]
    pub min_card_width: Option<String>,
    /// Space between fields (number = pixels). Defaults to 16px.
    #[props(default)]
    pub gap: Option<Dimension>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Grid of view fields
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ViewGrid { columns: Some(2),
///         ViewField { label: "name".to_string(), value: "Ada".to_string() }
///         ViewField { label: "email".to_string() }
///     }
/// }
/// ```
#[component]
pub fn ViewGrid(props: ViewGridProps) -> Element {
    let class = view_grid_class(props.class.as_deref());
    let style = grid_style(
        props.columns,
        props.min_card_width.as_deref(),
        props.gap.as_ref(),
    );

    rsx! {
        dl {
            class: "{class}",
            style: "{style}",
            {props.children}
        }
    }
}

fn view_grid_class(extra: Option<&str>) -> String {
    compose_class_name(&["view-grid"], &[], extra)
}

/// Properties for the ViewField component
#[derive(Clone, PartialEq, Props)]
pub struct ViewFieldProps {
    /// Field caption
    pub label: String,
    /// Field value; absent or blank renders the placeholder
    #[props(default)]
    pub value: Option<String>,
    /// Label and value on one line
    #[props(default = false)]
    pub inline: bool,
    /// Text shown when there is no value
    #[props(default = EMPTY_PLACEHOLDER.to_string())]
    pub placeholder: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// A single label/value pair in a detail view
#[component]
pub fn ViewField(props: ViewFieldProps) -> Element {
    let value = display_value(props.value.as_deref());
    let class = view_field_class(props.inline, value.is_none(), props.class.as_deref());
    let shown = value.unwrap_or(props.placeholder.as_str());

    rsx! {
        div { class: "{class}",
            dt { class: "view-field__label", "{props.label}" }
            dd { class: "view-field__value", "{shown}" }
        }
    }
}

/// Trimmed value, or `None` when there is nothing to show
fn display_value(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn view_field_class(inline: bool, empty: bool, extra: Option<&str>) -> String {
    compose_class_name(
        &["view-field"],
        &[(inline, "view-field--inline"), (empty, "view-field--empty")],
        extra,
    )
}
