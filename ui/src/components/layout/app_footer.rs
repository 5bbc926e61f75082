use chrono::Datelike;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::hooks::use_i18n;
use crate::Route;

#[component]
pub fn AppFooter() -> Element {
    let app_state = use_context::<AppState>();
    let i18n = use_i18n();
    let year = chrono::Local::now().year();
    let version = app_state.config.version;
    let homepage = app_state.config.homepage;
    let rights = i18n.read().t("footer.rights");

    rsx! {
        footer {
            class: "app-footer",
            p {
                class: "app-footer__copyright",
                "© {year} RAG-TS. {rights}. "
                span { class: "app-footer__version", "v{version}" }
            }
            nav {
                class: "app-footer__links",
                "aria-label": i18n.read().t("footer.navigation"),
                Link { to: Route::Privacy {}, class: "app-footer__link", {i18n.read().t("footer.privacy")} }
                Link { to: Route::Terms {}, class: "app-footer__link", {i18n.read().t("footer.terms")} }
                Link { to: Route::About {}, class: "app-footer__link", {i18n.read().t("footer.about")} }
            }
            a {
                class: "app-footer__social-link",
                href: "{homepage}",
                target: "_blank",
                rel: "noopener noreferrer",
                "aria-label": "GitHub",
                svg {
                    width: "20",
                    height: "20",
                    view_box: "0 0 24 24",
                    fill: "currentColor",
                    "aria-hidden": "true",
                    path {
                        d: "M12 .5C5.65.5.5 5.65.5 12a11.5 11.5 0 0 0 7.86 10.92c.58.1.79-.25.79-.56v-2c-3.2.7-3.88-1.37-3.88-1.37-.52-1.33-1.28-1.69-1.28-1.69-1.05-.71.08-.7.08-.7 1.16.08 1.77 1.19 1.77 1.19 1.03 1.77 2.7 1.26 3.36.96.1-.75.4-1.26.73-1.55-2.55-.29-5.24-1.28-5.24-5.69 0-1.26.45-2.28 1.19-3.09-.12-.29-.52-1.46.11-3.05 0 0 .97-.31 3.17 1.18a11 11 0 0 1 5.77 0c2.2-1.49 3.17-1.18 3.17-1.18.63 1.59.23 2.76.11 3.05.74.81 1.19 1.83 1.19 3.09 0 4.42-2.69 5.39-5.26 5.68.41.36.78 1.06.78 2.14v3.17c0 .31.21.67.8.56A11.5 11.5 0 0 0 23.5 12C23.5 5.65 18.35.5 12 .5Z",
                    }
                }
            }
        }
    }
}
