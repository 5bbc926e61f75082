use super::locale::LOCALE_STORAGE_KEY;
use super::store::PreferenceStore;
use super::theme::ThemePreference;
use super::theme::THEME_STORAGE_KEY;
use dioxus_logger::tracing::debug;
use serde::Deserialize;
use serde::Serialize;
use std::str::FromStr;

/// All persisted user prefs, as read once when the application starts.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UserPrefs {
    theme: ThemePreference,
    locale: String,
}

impl UserPrefs {
    /// Reads both preferences from `store`.
    ///
    /// A stored theme that is not one of `light`, `dark` or `system` is
    /// ignored and the default (`system`) is kept. The stored locale is taken
    /// verbatim, even when no catalog exists for it.
    pub fn load(store: &dyn PreferenceStore, default_locale: &str) -> Self {
        let theme = match store.get(THEME_STORAGE_KEY) {
            Some(raw) => ThemePreference::from_str(&raw).unwrap_or_else(|_| {
                debug!("ignoring stored theme {:?}", raw);
                ThemePreference::default()
            }),
            None => ThemePreference::default(),
        };

        let locale = store
            .get(LOCALE_STORAGE_KEY)
            .filter(|code| !code.is_empty())
            .unwrap_or_else(|| default_locale.to_string());

        Self { theme, locale }
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }
}
