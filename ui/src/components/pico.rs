//! A set of small, lifetime-free Dioxus components for the app's stylesheet.
//! Class names follow Pico.css conventions so the markup stays familiar.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A responsive grid layout.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

impl ButtonType {
    fn to_class(&self) -> &'static str {
        match self {
            ButtonType::Primary => "",
            ButtonType::Secondary => "secondary",
            ButtonType::Contrast => "contrast",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
    /// Extra classes appended after the type classes.
    #[props(default, into)]
    class: String,
    #[props(optional, into)]
    title: Option<String>,
    #[props(optional)]
    aria_pressed: Option<bool>,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let mut classes = vec![props.button_type.to_class()];
    if props.outline {
        classes.push("outline");
    }
    classes.push(&props.class);
    let class_str = classes
        .into_iter()
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    rsx! {
        button {
            class: "{class_str}",
            r#type: "button",
            disabled: props.disabled,
            title: props.title.clone(),
            "aria-pressed": props.aria_pressed.map(|p| p.to_string()),
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
