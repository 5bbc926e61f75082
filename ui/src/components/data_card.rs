use dioxus::prelude::*;

/// A titled card for one piece of dashboard data.
#[component]
pub fn DataCard(
    #[props(into)] title: String,
    #[props(optional, into)] badge: Option<String>,
    #[props(default)] meta: Option<String>,
    #[props(optional)] footer: Option<Element>,
    #[props(optional)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let clickable = onclick.is_some();

    rsx! {
        article {
            class: if clickable { "data-card data-card--clickable" } else { "data-card" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            header {
                class: "data-card__header",
                h3 { class: "data-card__title", "{title}" }
                if let Some(badge) = badge {
                    span { class: "data-card__badge", "{badge}" }
                }
            }
            div {
                class: "data-card__content",
                {children}
            }
            if let Some(meta) = meta {
                p { class: "data-card__meta", "{meta}" }
            }
            if let Some(footer) = footer {
                footer { class: "data-card__footer", {footer} }
            }
        }
    }
}
