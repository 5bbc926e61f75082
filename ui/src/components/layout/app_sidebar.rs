use dioxus::prelude::*;

use crate::hooks::use_app_store;
use crate::hooks::use_i18n;
use crate::Route;

/// Slide-in navigation for narrow screens. Picking a link or the overlay
/// closes it.
#[component]
pub fn AppSidebar() -> Element {
    let mut state = use_app_store().state();
    let i18n = use_i18n();
    let open = state.read().is_sidebar_open();

    let links = [
        (Route::Home {}, "nav.home"),
        (Route::Dashboard {}, "nav.dashboard"),
        (Route::About {}, "nav.about"),
    ];

    rsx! {
        if open {
            div {
                class: "app-sidebar-overlay",
                onclick: move |_| state.write().close_sidebar(),
            }
        }
        aside {
            class: if open { "app-sidebar app-sidebar--open" } else { "app-sidebar" },
            "aria-hidden": (!open).to_string(),
            nav {
                class: "app-sidebar__nav",
                "aria-label": i18n.read().t("sidebar.navigation"),
                h4 { class: "app-sidebar__title", {i18n.read().t("sidebar.navigation")} }
                for (route, key) in links {
                    Link {
                        key: "{key}",
                        to: route,
                        class: "app-sidebar__nav-link",
                        active_class: "active",
                        onclick: move |_| state.write().close_sidebar(),
                        {i18n.read().t(key)}
                    }
                }
            }
        }
    }
}
