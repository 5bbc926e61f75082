use dioxus::prelude::*;

use super::app_footer::AppFooter;
use super::app_header::AppHeader;
use super::app_sidebar::AppSidebar;
use crate::Route;

/// Frame shared by every route.
#[component]
pub fn AppLayout() -> Element {
    rsx! {
        div {
            class: "app-layout",
            AppHeader {}
            AppSidebar {}
            main {
                class: "app-layout__main",
                Outlet::<Route> {}
            }
            AppFooter {}
        }
    }
}
