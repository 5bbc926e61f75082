use dioxus::prelude::*;

/// Width-limited wrapper for page content.
#[component]
pub fn PageContainer(#[props(default)] class: String, children: Element) -> Element {
    let class = if class.is_empty() {
        "page-container".to_string()
    } else {
        format!("page-container {class}")
    };
    rsx! {
        div { class: "{class}", {children} }
    }
}
