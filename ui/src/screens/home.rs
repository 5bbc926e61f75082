// File: src/screens/home.rs
use dioxus::prelude::*;

use crate::components::hello_world::HelloWorld;
use crate::components::layout::page_container::PageContainer;
use crate::components::pico::Card;
use crate::components::theme_switcher::SwitcherMode;
use crate::components::theme_switcher::ThemeSwitcher;
use crate::hooks::use_i18n;
use crate::hooks::use_theme;

#[component]
pub fn HomeScreen() -> Element {
    let i18n = use_i18n();
    let theme = use_theme();
    let t = |key: &str| i18n.read().t(key);

    let preference = theme.read().preference();
    let active = theme.read().active_theme();
    let locale = i18n.read().locale().to_string();
    let theme_label = t("current.theme");
    let theme_name = t(preference.label_key());
    let language_label = t("current.language");

    rsx! {
        PageContainer {
            class: "home",
            hgroup {
                h1 { {t("home.title")} }
                p { {t("home.subtitle")} }
            }
            p { {t("home.description")} }
            Card {
                HelloWorld {}
            }
            Card {
                ThemeSwitcher { mode: SwitcherMode::Switch }
                p {
                    class: "home__current",
                    "{theme_label} "
                    strong { "{theme_name}" }
                    " ({active})"
                }
                p {
                    class: "home__current",
                    "{language_label} "
                    strong { "{locale}" }
                }
            }
        }
    }
}
