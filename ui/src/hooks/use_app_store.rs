use api::rate_providers::nbp::Nbp;
use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use serde_json::Value;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::app_store;
use crate::app_store::AppStore;
use crate::app_store::StoreError;

/// Binds the store signal to the app configuration, so components can start
/// actions without knowing delays or endpoints.
///
/// Background actions run in the root scope. They finish and commit even
/// when the component that started them unmounts first.
#[derive(Clone)]
pub struct AppStoreHandle {
    store: Signal<AppStore>,
    app_state: AppState,
}

impl AppStoreHandle {
    /// The underlying signal. Reading it subscribes the caller.
    pub fn state(&self) -> Signal<AppStore> {
        self.store
    }

    pub fn toggle_sidebar(&self) {
        let mut store = self.store;
        store.write().toggle_sidebar();
    }

    pub fn reset_data(&self) {
        let mut store = self.store;
        store.write().reset_data();
    }

    /// Starts the simulated fetch in the background.
    pub fn fetch_data(&self) {
        let store = self.store;
        let delay = self.app_state.config.fetch_delay;
        spawn_forever(async move {
            app_store::fetch_data(&store, delay).await;
        });
    }

    /// Runs the simulated save. The error, if any, is recorded in the store
    /// and also returned.
    pub async fn save_data(&self, payload: Value) -> Result<(), StoreError> {
        let delay = self.app_state.config.save_delay;
        app_store::save_data(&self.store, payload, delay).await
    }

    /// Starts the simulated save in the background. A rejection is logged;
    /// the store already holds the error.
    pub fn start_save(&self, payload: Value) {
        let handle = self.clone();
        spawn_forever(async move {
            if let Err(e) = handle.save_data(payload).await {
                warn!("save rejected: {}", e);
            }
        });
    }

    /// Starts loading the exchange-rate table in the background.
    pub fn fetch_currencies(&self) {
        let store = self.store;
        let config = &self.app_state.config;
        let provider = Nbp::new(config.rates_endpoint.clone());
        let limit = config.rates_limit;
        spawn_forever(async move {
            app_store::fetch_currencies(&store, &provider, limit).await;
        });
    }
}

pub fn use_app_store() -> AppStoreHandle {
    let store = use_context::<AppStateMut>().store;
    let app_state = use_context::<AppState>();
    AppStoreHandle { store, app_state }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::provide_app_contexts;
    use crate::test_support::run_for;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    #[derive(Clone, Default)]
    struct Captured(Rc<RefCell<Option<Signal<AppStore>>>>);

    impl PartialEq for Captured {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.0, &other.0)
        }
    }

    impl Captured {
        fn store(&self) -> Signal<AppStore> {
            (*self.0.borrow()).expect("store signal captured")
        }
    }

    /// Starts a fetch as soon as it mounts.
    #[component]
    fn Caller() -> Element {
        let store = use_app_store();
        use_hook(|| store.fetch_data());
        rsx! {}
    }

    /// Mounts [`Caller`], and unmounts it after `unmount_after` if given.
    #[component]
    fn Host(captured: Captured, unmount_after: Option<Duration>) -> Element {
        let app = provide_app_contexts();
        let mut show = use_signal(|| true);
        use_hook(|| {
            *captured.0.borrow_mut() = Some(app.store);
            if let Some(delay) = unmount_after {
                spawn(async move {
                    tokio::time::sleep(delay).await;
                    show.set(false);
                });
            }
        });

        rsx! {
            if show() {
                Caller {}
            }
        }
    }

    async fn run_fetch(unmount_after: Option<Duration>) -> AppStore {
        let captured = Captured::default();
        let mut dom = VirtualDom::new_with_props(
            Host,
            HostProps {
                captured: captured.clone(),
                unmount_after,
            },
        );
        dom.rebuild_in_place();

        let store = captured.store();
        run_for(&mut dom, Duration::from_millis(5100)).await;
        dom.in_runtime(|| store.peek().clone())
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_commits_while_caller_stays_mounted() {
        let state = run_fetch(None).await;
        assert!(!state.is_loading());
        assert_eq!(
            state.data().and_then(|d| d.get("message")),
            Some(&json!("Data fetched successfully!"))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_commits_after_caller_unmounts() {
        let state = run_fetch(Some(Duration::from_millis(100))).await;
        assert!(!state.is_loading());
        assert_eq!(state.error(), None);
        assert_eq!(
            state.data().and_then(|d| d.get("message")),
            Some(&json!("Data fetched successfully!"))
        );
    }
}
