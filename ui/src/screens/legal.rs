//! Static privacy and terms pages.

use dioxus::prelude::*;

use crate::components::layout::page_container::PageContainer;
use crate::hooks::use_i18n;

#[component]
fn LegalPage(title_key: &'static str, body_key: &'static str) -> Element {
    let i18n = use_i18n();
    rsx! {
        PageContainer {
            class: "legal",
            h1 { {i18n.read().t(title_key)} }
            p { {i18n.read().t(body_key)} }
        }
    }
}

#[component]
pub fn PrivacyScreen() -> Element {
    rsx! { LegalPage { title_key: "privacy.title", body_key: "privacy.body" } }
}

#[component]
pub fn TermsScreen() -> Element {
    rsx! { LegalPage { title_key: "terms.title", body_key: "terms.body" } }
}
