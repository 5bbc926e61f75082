use api::prefs::theme::ActiveTheme;
use api::prefs::theme::ThemePreference;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::hooks::use_i18n;
use crate::hooks::use_theme;

/// How [`ThemeSwitcher`] presents the theme choice.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SwitcherMode {
    /// One button per preference, including `system`.
    #[default]
    Buttons,
    /// A single light/dark toggle.
    Switch,
}

fn theme_icon(preference: ThemePreference) -> &'static str {
    match preference {
        ThemePreference::Light => "☀️",
        ThemePreference::Dark => "🌙",
        ThemePreference::System => "💻",
    }
}

/// Theme and language controls. Every click persists the new choice.
#[component]
pub fn ThemeSwitcher(
    #[props(default)] mode: SwitcherMode,
    #[props(default = true)] show_text: bool,
) -> Element {
    let mut theme = use_theme();
    let mut i18n = use_i18n();

    let preference = theme.read().preference();
    let active = theme.read().active_theme();
    let locale = i18n.read().locale().to_string();

    let theme_controls = match mode {
        SwitcherMode::Buttons => rsx! {
            div {
                class: "theme-switcher__buttons",
                role: "group",
                for option in ThemePreference::iter() {
                    Button {
                        key: "{option}",
                        button_type: ButtonType::Secondary,
                        outline: option != preference,
                        class: "theme-button",
                        title: i18n.read().t(option.label_key()),
                        aria_pressed: option == preference,
                        on_click: move |_| theme.write().set_theme(option),
                        span { "aria-hidden": "true", "{theme_icon(option)}" }
                        if show_text {
                            " {i18n.read().t(option.label_key())}"
                        }
                    }
                }
            }
        },
        SwitcherMode::Switch => {
            let next: ThemePreference = active.opposite().into();
            rsx! {
                label {
                    class: "theme-switcher__switch",
                    input {
                        r#type: "checkbox",
                        role: "switch",
                        checked: active == ActiveTheme::Dark,
                        onchange: move |_| theme.write().toggle_theme(),
                    }
                    if show_text {
                        "{i18n.read().t(next.label_key())}"
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "theme-switcher",
            {theme_controls}
            div {
                class: "theme-switcher__languages",
                role: "group",
                for option in i18n.read().available() {
                    button {
                        key: "{option.code()}",
                        class: if option.code() == locale { "language-button language-button--active" } else { "language-button" },
                        r#type: "button",
                        title: i18n.read().t(option.label_key()),
                        "aria-pressed": (option.code() == locale).to_string(),
                        onclick: move |_| i18n.write().set_locale(option.code()),
                        "{option.badge()}"
                    }
                }
            }
        }
    }
}
