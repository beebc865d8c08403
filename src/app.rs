use dioxus::prelude::*;

use crate::pages::{Forms, Stats, Views};
use crate::theme::GLOBAL_STYLES;

/// Gallery routes.
///
/// - `/` - Form wrappers, labels and loaders
/// - `/stats` - Stat grids and summary panels
/// - `/views` - Detail view containers and fields
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(GalleryShell)]
    #[route("/")]
    Forms {},
    #[route("/stats")]
    Stats {},
    #[route("/views")]
    Views {},
}

/// Root application component.
///
/// Provides global styles and routing.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Navigation header shared by every gallery page
#[component]
fn GalleryShell() -> Element {
    rsx! {
        header { class: "gallery-header",
            h1 { class: "gallery-title", "panelkit" }
            nav { class: "gallery-nav",
                Link { to: Route::Forms {}, "forms" }
                Link { to: Route::Stats {}, "stats" }
                Link { to: Route::Views {}, "views" }
            }
        }
        main { class: "gallery-page", Outlet::<Route> {} }
    }
}
