//! Stats page - stat grids and summary panels.

use dioxus::prelude::*;
use panelkit_ui::{
    Dimension, PanelVariant, StatCard, StatGrid, StatVariant, SummaryItem, SummaryPanel,
};

use crate::context::{use_compact, use_layout};

#[component]
pub fn Stats() -> Element {
    let layout = use_layout();
    let compact = use_compact();
    let grid = layout.grid;

    rsx! {
        h2 { class: "gallery-section", "stat grid (configured)" }

        StatGrid {
            columns: grid.columns,
            min_card_width: grid.min_card_width.clone(),
            gap: grid.gap.clone(),
            compact: compact,
            StatCard { label: "visitors".to_string(), value: "12,408".to_string(), hint: "+4% this week".to_string() }
            StatCard { label: "signups".to_string(), value: "311".to_string(), variant: StatVariant::Positive, highlighted: true }
            StatCard { label: "churn".to_string(), value: "2.1%".to_string(), variant: StatVariant::Warning }
            StatCard { label: "errors".to_string(), value: "17".to_string(), variant: StatVariant::Negative }
        }

        h2 { class: "gallery-section", "stat grid (fixed columns)" }

        StatGrid { columns: Some(2), gap: Dimension::from("2rem"),
            StatCard { label: "open".to_string(), value: "8".to_string() }
            StatCard { label: "closed".to_string(), value: "54".to_string() }
        }

        h2 { class: "gallery-section", "summary panels" }

        div { class: "gallery-row",
            SummaryPanel { title: "order".to_string(), variant: PanelVariant::Info, compact: compact,
                SummaryItem { label: "items".to_string(), "3" }
                SummaryItem { label: "shipping".to_string(), "$4.00" }
                SummaryItem { label: "total".to_string(), emphasized: true, "$42.00" }
            }
            SummaryPanel { title: "quota".to_string(), variant: PanelVariant::Warning, compact: compact,
                SummaryItem { label: "used".to_string(), "92%" }
            }
        }

        SummaryPanel { title: "release".to_string(), variant: PanelVariant::Success, full_width: true,
            SummaryItem { label: "status".to_string(), "shipped" }
        }
    }
}
