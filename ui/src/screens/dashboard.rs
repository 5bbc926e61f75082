// File: src/screens/dashboard.rs
use dioxus::prelude::*;
use serde_json::json;
use serde_json::Value;

use crate::components::data_card::DataCard;
use crate::components::empty_state::EmptyState;
use crate::components::layout::page_container::PageContainer;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Grid;
use crate::hooks::use_app_store;
use crate::hooks::use_i18n;

#[component]
pub fn DashboardScreen() -> Element {
    let store = use_app_store();
    let i18n = use_i18n();
    let t = |key: &str| i18n.read().t(key);

    // snapshot, so handlers below never run against a held borrow
    let app = store.state().read().clone();
    let loading = app.is_loading();
    let badge = if app.data().is_some() { "JSON" } else { "-" };
    let saved_at = app
        .data()
        .and_then(|d| d.get("timestamp"))
        .and_then(Value::as_i64)
        .and_then(chrono::DateTime::from_timestamp_millis)
        .map(|ts| ts.to_rfc3339());

    let fetch_store = store.clone();
    let save_store = store.clone();
    let invalid_store = store.clone();
    let rates_store = store.clone();
    let reset_store = store;

    rsx! {
        PageContainer {
            class: "dashboard",
            hgroup {
                h1 { {t("dashboard.title")} }
                p { {t("dashboard.subtitle")} }
            }

            Grid {
                Button {
                    disabled: loading,
                    on_click: move |_| fetch_store.fetch_data(),
                    {t("dashboard.fetchData")}
                }
                Button {
                    button_type: ButtonType::Secondary,
                    disabled: loading,
                    on_click: move |_| save_store.start_save(json!({ "name": "rag-ts", "items": [1, 2, 3] })),
                    {t("dashboard.saveData")}
                }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    disabled: loading,
                    on_click: move |_| invalid_store.start_save(json!("not a structured payload")),
                    {t("dashboard.saveInvalid")}
                }
                Button {
                    disabled: loading,
                    on_click: move |_| rates_store.fetch_currencies(),
                    {t("dashboard.fetchCurrencies")}
                }
                Button {
                    button_type: ButtonType::Contrast,
                    outline: true,
                    on_click: move |_| reset_store.reset_data(),
                    {t("dashboard.reset")}
                }
            }

            if loading {
                p { class: "dashboard__loading", "aria-busy": "true", {t("dashboard.loading")} }
            }

            if let Some(error) = app.error() {
                div {
                    class: "dashboard__error",
                    role: "alert",
                    strong { {t("dashboard.error")} }
                    ": {error}"
                }
            }

            DataCard {
                title: t("dashboard.dataCards"),
                badge,
                meta: saved_at,
                if let Some(data) = app.data() {
                    pre { {serde_json::to_string_pretty(data).unwrap_or_default()} }
                } else {
                    p { {t("dashboard.noData")} }
                }
            }

            if app.currencies().is_empty() {
                EmptyState {
                    title: t("dashboard.noCurrencies"),
                    description: Some(t("dashboard.noCurrenciesHint")),
                    icon: Some("💱".to_string()),
                }
            } else {
                figure {
                    table {
                        class: "dashboard__rates",
                        thead {
                            tr {
                                th { scope: "col", {t("dashboard.currency")} }
                                th { scope: "col", {t("dashboard.code")} }
                                th { scope: "col", {t("dashboard.mid")} }
                            }
                        }
                        tbody {
                            for rate in app.currencies() {
                                tr {
                                    key: "{rate.code}",
                                    td { "{rate.currency}" }
                                    td { "{rate.code}" }
                                    td { {format!("{:.4}", rate.mid)} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
