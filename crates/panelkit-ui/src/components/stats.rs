//! Statistic Components
//!
//! A responsive grid of stat cards. The grid takes a fixed column count or
//! a minimum card width; with neither it auto-fits 200px cards.

use dioxus::prelude::*;
use panelkit_core::{compose_class_name, Dimension, GridOptions, InlineStyle};

/// Properties for the StatGrid component
#[derive(Clone, PartialEq, Props)]
pub struct StatGridProps {
    /// Stat cards
    pub children: Element,
    /// Fixed number of columns
    #[props(default)]
    pub columns: Option<u32>,
    /// Minimum card width when auto-fitting (e.g., "180px")
    #[props(default)]
    pub min_card_width: Option<String>,
    /// Space between cards (number = pixels). Defaults to 16px.
    #[props(default)]
    pub gap: Option<Dimension>,
    /// Smaller cards and padding
    #[props(default = false)]
    pub compact: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Grid of statistic cards
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     StatGrid { columns: Some(3),
///         StatCard { label: "Realms".to_string(), value: "4".to_string() }
///         StatCard { label: "Open".to_string(), value: "12".to_string() }
///         StatCard { label: "Closed".to_string(), value: "31".to_string() }
///     }
/// }
/// ```
#[component]
pub fn StatGrid(props: StatGridProps) -> Element {
    let class = stat_grid_class(props.compact, props.class.as_deref());
    let style = grid_style(
        props.columns,
        props.min_card_width.as_deref(),
        props.gap.as_ref(),
    );

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            {props.children}
        }
    }
}

fn stat_grid_class(compact: bool, extra: Option<&str>) -> String {
    compose_class_name(&["stat-grid"], &[(compact, "stat-grid--compact")], extra)
}

/// Inline grid style shared by the grid wrappers. A missing gap keeps the
/// [`GridOptions`] default.
pub(crate) fn grid_style(
    columns: Option<u32>,
    min_card_width: Option<&str>,
    gap: Option<&Dimension>,
) -> InlineStyle {
    let defaults = GridOptions::default();
    let options = GridOptions {
        columns,
        min_card_width: min_card_width.map(str::to_string),
        gap: gap.cloned().or(defaults.gap),
    };
    options.style()
}

/// Stat card accent variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum StatVariant {
    #[default]
    Neutral,
    Positive,
    Warning,
    Negative,
}

impl StatVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            StatVariant::Neutral => "stat-card--neutral",
            StatVariant::Positive => "stat-card--positive",
            StatVariant::Warning => "stat-card--warning",
            StatVariant::Negative => "stat-card--negative",
        }
    }
}

/// Properties for the StatCard component
#[derive(Clone, PartialEq, Props)]
pub struct StatCardProps {
    /// Caption under the value
    pub label: String,
    /// Pre-formatted value
    pub value: String,
    /// Small print under the label (e.g., "+4 this week")
    #[props(default)]
    pub hint: Option<String>,
    /// Accent color
    #[props(default)]
    pub variant: StatVariant,
    /// Emphasize this card over its neighbours
    #[props(default = false)]
    pub highlighted: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn StatCard(props: StatCardProps) -> Element {
    let class = stat_card_class(props.variant, props.highlighted, props.class.as_deref());

    rsx! {
        div { class: "{class}",
            div { class: "stat-card__value", "{props.value}" }
            div { class: "stat-card__label", "{props.label}" }
            if let Some(hint) = &props.hint {
                div { class: "stat-card__hint", "{hint}" }
            }
        }
    }
}

fn stat_card_class(variant: StatVariant, highlighted: bool, extra: Option<&str>) -> String {
    compose_class_name(
        &["stat-card", variant.class()],
        &[(highlighted, "stat-card--highlighted")],
        extra,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_style_defaults() {
        assert_eq!(
            grid_style(None, None, None).to_string(),
            "grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px;"
        );
    }

    #[test]
    fn grid_style_columns_and_gap() {
        let gap = Dimension::from("2rem");
        assert_eq!(
            grid_style(Some(3), Some("240px"), Some(&gap)).to_string(),
            "grid-template-columns: repeat(3, 1fr); gap: 2rem;"
        );
    }

    #[test]
    fn grid_style_min_card_width() {
        assert_eq!(
            grid_style(None, Some("180px"), None).to_string(),
            "grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 16px;"
        );
    }

    #[test]
    fn stat_grid_compact() {
        assert_eq!(stat_grid_class(false, None), "stat-grid");
        assert_eq!(
            stat_grid_class(true, Some("kpis")),
            "stat-grid stat-grid--compact kpis"
        );
    }

    #[test]
    fn stat_variant_classes() {
        assert_eq!(StatVariant::Neutral.class(), "stat-card--neutral");
        assert_eq!(StatVariant::Positive.class(), "stat-card--positive");
        assert_eq!(StatVariant::Warning.class(), "stat-card--warning");
        assert_eq!(StatVariant::Negative.class(), "stat-card--negative");
        assert_eq!(StatVariant::default(), StatVariant::Neutral);
    }

    #[test]
    fn stat_card_highlight() {
        assert_eq!(
            stat_card_class(StatVariant::Positive, true, None),
            "stat-card stat-card--positive stat-card--highlighted"
        );
        assert_eq!(
            stat_card_class(StatVariant::Neutral, false, Some("kpi")),
            "stat-card stat-card--neutral kpi"
        );
    }
}
