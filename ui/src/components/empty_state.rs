// File: src/components/empty_state.rs
use dioxus::prelude::*;

#[derive(PartialEq, Clone, Props)]
pub struct EmptyStateProps {
    title: String,
    #[props(default)]
    description: Option<String>,
    #[props(default)]
    primary_action: Option<Element>,
    /// An emoji or short glyph shown above the title.
    #[props(default)]
    icon: Option<String>,
}

/// Placeholder shown where a list has nothing to display yet.
#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            class: "empty-state",

            if let Some(icon) = props.icon {
                div {
                    class: "empty-state__icon",
                    "aria-hidden": "true",
                    "{icon}"
                }
            }

            h4 {
                class: "empty-state__title",
                "{props.title}"
            }

            if let Some(desc) = props.description {
                p {
                    class: "empty-state__description",
                    "{desc}"
                }
            }

            if let Some(action) = props.primary_action {
                div {
                    {action}
                }
            }
        }
    }
}
