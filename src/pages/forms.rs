//! Forms page - form wrappers, labels and loaders.

use dioxus::prelude::*;
use panelkit_ui::{Dimension, FormLabel, FormSection, FormVariant, FormWrapper, Loader, LoaderSize};

use crate::context::{use_compact, use_layout};

#[component]
pub fn Forms() -> Element {
    let layout = use_layout();
    let compact = use_compact();
    let mut email = use_signal(String::new);

    rsx! {
        h2 { class: "gallery-section", "form wrappers" }

        FormWrapper { variant: FormVariant::Card, width: Dimension::from(480), compact: compact,
            FormSection {
                title: "account".to_string(),
                description: "labels, hints and the required marker".to_string(),
                FormLabel {
                    text: "email".to_string(),
                    html_for: "gallery-email".to_string(),
                    required: true,
                }
                input {
                    id: "gallery-email",
                    class: "gallery-input",
                    r#type: "email",
                    required: true,
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
                FormLabel {
                    text: "nickname".to_string(),
                    html_for: "gallery-nickname".to_string(),
                    hint: "optional".to_string(),
                }
                input { id: "gallery-nickname", class: "gallery-input", r#type: "text" }
            }
        }

        FormWrapper { variant: FormVariant::Inline, full_width: true, compact: compact,
            FormSection { bordered: true,
                FormLabel { text: "search".to_string(), html_for: "gallery-search".to_string() }
                input { id: "gallery-search", class: "gallery-input", r#type: "search" }
            }
        }

        h2 { class: "gallery-section", "loaders" }

        div { class: "gallery-row",
            Loader { size: LoaderSize::Small, inline: true, label: "small".to_string() }
            Loader { label: "medium".to_string() }
            Loader { size: LoaderSize::Large, label: "large".to_string() }
        }

        div { class: "gallery-overlay-host",
            Loader {
                label: "configured loader".to_string(),
                height: layout.loader.height.clone(),
                overlay: layout.loader.overlay,
            }
        }
    }
}
