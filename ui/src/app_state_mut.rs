//! Defines the mutable, reactive state for the application's UI.

use dioxus::prelude::*;

use crate::app_store::AppStore;
use crate::i18n::I18n;
use crate::theme::ThemeController;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// This struct holds `Signal`s for any UI-related state that needs to change
/// and trigger automatic re-renders in the view. It is separate from the core,
/// immutable `AppState`. The signals are created once by the root component,
/// so their lifetime is the lifetime of the running app.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// Theme preference, OS signal and their side effects.
    pub theme: Signal<ThemeController>,
    /// Active locale and translation lookup.
    pub i18n: Signal<I18n>,
    /// Sidebar flag and dashboard request state.
    pub store: Signal<AppStore>,
}
