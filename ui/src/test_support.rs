//! Shared fixtures for tests that mount components in a `VirtualDom`.

use std::rc::Rc;
use std::time::Duration;

use api::config::AppConfig;
use api::prefs::store::MemoryStore;
use api::prefs::store::PreferenceStore;
use api::prefs::theme::ActiveTheme;
use api::prefs::theme::ThemePreference;
use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::app_store::AppStore;
use crate::i18n::I18n;
use crate::theme::ThemeController;
use crate::theme::ThemeRoot;

/// Ignores attribute writes.
pub struct NullRoot;

impl ThemeRoot for NullRoot {
    fn apply_theme_attribute(&self, _value: Option<&str>) {}
}

/// Provides the same contexts as the app root, backed by memory storage and
/// an OS that reports a dark scheme.
pub fn provide_app_contexts() -> AppStateMut {
    use_context_provider(|| AppState::new(AppConfig::from_env()));
    let store: Rc<dyn PreferenceStore> = use_hook(|| Rc::new(MemoryStore::new()) as Rc<dyn PreferenceStore>);

    let theme = use_signal(|| {
        ThemeController::load(
            ThemePreference::System,
            ActiveTheme::Dark,
            store.clone(),
            Rc::new(NullRoot),
        )
    });
    let i18n = use_signal(|| I18n::new("pl", "en", store.clone()));
    let app_store = use_signal(AppStore::default);

    use_context_provider(|| AppStateMut {
        theme,
        i18n,
        store: app_store,
    })
}

/// Polls tasks and re-renders dirty scopes until `duration` of (paused)
/// tokio time has passed.
pub async fn run_for(dom: &mut VirtualDom, duration: Duration) {
    let deadline = tokio::time::Instant::now() + duration;
    loop {
        let timed_out = tokio::select! {
            _ = dom.wait_for_work() => false,
            _ = tokio::time::sleep_until(deadline) => true,
        };
        if timed_out {
            break;
        }
        dom.render_immediate(&mut NoOpMutations);
    }
}
