use dioxus::prelude::*;

use crate::components::layout::page_container::PageContainer;
use crate::components::pico::Card;
use crate::hooks::use_i18n;

const FEATURE_KEYS: [&str; 7] = [
    "about.feature1",
    "about.feature2",
    "about.feature3",
    "about.feature4",
    "about.feature5",
    "about.feature6",
    "about.feature7",
];

#[component]
pub fn AboutScreen() -> Element {
    let i18n = use_i18n();
    let t = |key: &str| i18n.read().t(key);

    rsx! {
        PageContainer {
            class: "about",
            hgroup {
                h1 { {t("about.title")} }
                p { {t("about.subtitle")} }
            }
            p { {t("about.description")} }
            Card {
                h2 { {t("about.features")} }
                ul {
                    for key in FEATURE_KEYS {
                        li { key: "{key}", {t(key)} }
                    }
                }
            }
        }
    }
}
