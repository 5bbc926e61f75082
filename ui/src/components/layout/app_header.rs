use dioxus::prelude::*;

use crate::components::theme_switcher::SwitcherMode;
use crate::components::theme_switcher::ThemeSwitcher;
use crate::hooks::use_app_store;
use crate::hooks::use_i18n;
use crate::Route;

#[component]
pub fn AppHeader() -> Element {
    let store = use_app_store();
    let i18n = use_i18n();
    let sidebar_open = store.state().read().is_sidebar_open();

    rsx! {
        header {
            class: "app-header",
            div {
                class: "app-header__brand",
                Link { to: Route::Home {}, class: "app-header__logo", "RAG-TS" }
            }
            nav {
                class: "app-header__nav",
                Link { to: Route::Home {}, class: "app-header__nav-link", active_class: "active", {i18n.read().t("nav.home")} }
                Link { to: Route::Dashboard {}, class: "app-header__nav-link", active_class: "active", {i18n.read().t("nav.dashboard")} }
                Link { to: Route::About {}, class: "app-header__nav-link", active_class: "active", {i18n.read().t("nav.about")} }
            }
            div {
                class: "app-header__actions",
                ThemeSwitcher { mode: SwitcherMode::Buttons, show_text: false }
                button {
                    class: "app-header__menu-toggle",
                    r#type: "button",
                    "aria-label": i18n.read().t("nav.toggleMenu"),
                    "aria-expanded": sidebar_open.to_string(),
                    onclick: move |_| store.toggle_sidebar(),
                    "☰"
                }
            }
        }
    }
}
