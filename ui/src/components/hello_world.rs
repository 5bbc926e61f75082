use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::hooks::use_i18n;

/// Small counter used on the home page.
#[component]
pub fn HelloWorld(#[props(default = 0)] start: i64) -> Element {
    let i18n = use_i18n();
    let mut count = use_signal(|| start);
    let label = i18n.read().t("hello.count");

    rsx! {
        div {
            class: "hello-world",
            Button {
                on_click: move |_| count += 1,
                "{label} {count}"
            }
        }
    }
}
