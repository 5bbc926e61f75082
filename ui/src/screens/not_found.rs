use dioxus::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::layout::page_container::PageContainer;
use crate::hooks::use_i18n;
use crate::Route;

#[component]
pub fn NotFoundScreen(segments: Vec<String>) -> Element {
    let i18n = use_i18n();
    let path = format!("/{}", segments.join("/"));

    rsx! {
        PageContainer {
            class: "not-found",
            EmptyState {
                title: i18n.read().t("notFound.title"),
                description: Some(path),
                icon: Some("🧭".to_string()),
                primary_action: Some(rsx! {
                    Link { to: Route::Home {}, {i18n.read().t("notFound.back")} }
                }),
            }
        }
    }
}
