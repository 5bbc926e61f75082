use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::i18n::I18n;

/// The app-wide translator. `i18n.read().t("nav.home")` subscribes the
/// calling component to locale changes.
pub fn use_i18n() -> Signal<I18n> {
    use_context::<AppStateMut>().i18n
}
