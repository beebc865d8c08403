//! Form Layout Components
//!
//! Containers and labels for form content:
//! - FormWrapper: outer box with variant, width and density options
//! - FormSection: titled group of fields
//! - FormLabel: field label with required marker and hint

use dioxus::prelude::*;
use panelkit_core::{compose_class_name, Dimension, InlineStyle};

/// Form wrapper style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FormVariant {
    /// Plain container, no surface
    #[default]
    Plain,
    /// Raised card surface with padding
    Card,
    /// Fields laid out on one row
    Inline,
}

impl FormVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            FormVariant::Plain => "form-wrapper--plain",
            FormVariant::Card => "form-wrapper--card",
            FormVariant::Inline => "form-wrapper--inline",
        }
    }
}

/// Properties for the FormWrapper component
#[derive(Clone, PartialEq, Props)]
pub struct FormWrapperProps {
    /// Form fields and actions
    pub children: Element,
    /// Visual style variant
    #[props(default)]
    pub variant: FormVariant,
    /// Stretch to the parent's width, ignoring `width`
    #[props(default = false)]
    pub full_width: bool,
    /// Tighter spacing between fields
    #[props(default = false)]
    pub compact: bool,
    /// Maximum width (number = pixels)
    #[props(default)]
    pub width: Option<Dimension>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Container around a form's fields
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FormWrapper {
///         variant: FormVariant::Card,
///         width: Dimension::from(480),
///         FormLabel { text: "email".to_string(), html_for: "email".to_string(), required: true }
///         input { id: "email" }
///     }
/// }
/// ```
#[component]
pub fn FormWrapper(props: FormWrapperProps) -> Element {
    let class = form_wrapper_class(
        props.variant,
        props.full_width,
        props.compact,
        props.class.as_deref(),
    );
    let style = form_wrapper_style(props.full_width, props.width.as_ref());

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            {props.children}
        }
    }
}

fn form_wrapper_class(
    variant: FormVariant,
    full_width: bool,
    compact: bool,
    extra: Option<&str>,
) -> String {
    compose_class_name(
        &["form-wrapper", variant.class()],
        &[
            (full_width, "form-wrapper--full-width"),
            (compact, "form-wrapper--compact"),
        ],
        extra,
    )
}

fn form_wrapper_style(full_width: bool, width: Option<&Dimension>) -> InlineStyle {
    InlineStyle::new().set_opt("max-width", width.filter(|_| !full_width))
}

/// Properties for the FormSection component
#[derive(Clone, PartialEq, Props)]
pub struct FormSectionProps {
    /// Fields in this section
    pub children: Element,
    /// Section heading
    #[props(default)]
    pub title: Option<String>,
    /// Muted text under the heading
    #[props(default)]
    pub description: Option<String>,
    /// Draw a border around the section
    #[props(default = false)]
    pub bordered: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn FormSection(props: FormSectionProps) -> Element {
    let class = form_section_class(props.bordered, props.class.as_deref());

    rsx! {
        fieldset { class: "{class}",
            if let Some(title) = &props.title {
                legend { class: "form-section__title", "{title}" }
            }
            if let Some(description) = &props.description {
                p { class: "form-section__description", "{description}" }
            }
            {props.children}
        }
    }
}

fn form_section_class(bordered: bool, extra: Option<&str>) -> String {
    compose_class_name(
        &["form-section"],
        &[(bordered, "form-section--bordered")],
        extra,
    )
}

/// Properties for the FormLabel component
#[derive(Clone, PartialEq, Props)]
pub struct FormLabelProps {
    /// Label text
    pub text: String,
    /// ID of the field this label describes
    #[props(default)]
    pub html_for: Option<String>,
    /// Show the required marker
    #[props(default = false)]
    pub required: bool,
    /// Hint shown after the label (e.g., "optional")
    #[props(default)]
    pub hint: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Field label with an optional required marker
///
/// The marker is hidden from screen readers; the field itself should carry
/// `required` for assistive tech.
#[component]
pub fn FormLabel(props: FormLabelProps) -> Element {
    let class = form_label_class(props.required, props.class.as_deref());

    rsx! {
        label {
            class: "{class}",
            r#for: props.html_for.clone(),
            "{props.text}"
            if props.required {
                span { class: "form-label__required", "aria-hidden": "true", " *" }
            }
            if let Some(hint) = &props.hint {
                span { class: "form-label__hint", " ({hint})" }
            }
        }
    }
}

fn form_label_class(required: bool, extra: Option<&str>) -> String {
    compose_class_name(
        &["form-label"],
        &[(required, "form-label--required")],
        extra,
    )
}
