//! Resolves the displayed theme from the user's preference and the OS
//! color-scheme signal, and keeps storage and the document root in sync.

use std::rc::Rc;

use api::prefs::store::PreferenceStore;
use api::prefs::theme::ActiveTheme;
use api::prefs::theme::ThemePreference;
use api::prefs::theme::THEME_STORAGE_KEY;
use dioxus_logger::tracing::debug;

/// Where the theme attribute is written: the document root in the app, a
/// recorder in tests.
pub trait ThemeRoot {
    /// Sets the attribute to `value`, or removes it when `value` is `None`.
    fn apply_theme_attribute(&self, value: Option<&str>);
}

/// Owns the theme preference. Every mutation persists the preference and
/// rewrites the document attribute before returning.
pub struct ThemeController {
    preference: ThemePreference,
    system: ActiveTheme,
    store: Rc<dyn PreferenceStore>,
    root: Rc<dyn ThemeRoot>,
}

impl ThemeController {
    /// Starts from the persisted `preference` and the OS signal observed at
    /// startup, then applies the preference once so the document matches it.
    pub fn load(
        preference: ThemePreference,
        system: ActiveTheme,
        store: Rc<dyn PreferenceStore>,
        root: Rc<dyn ThemeRoot>,
    ) -> Self {
        let mut controller = Self {
            preference,
            system,
            store,
            root,
        };
        controller.set_theme(preference);
        controller
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// Last color scheme reported by the OS.
    pub fn system_theme(&self) -> ActiveTheme {
        self.system
    }

    /// The theme actually rendered: the OS signal for `system`, otherwise
    /// the preference itself.
    pub fn active_theme(&self) -> ActiveTheme {
        match self.preference {
            ThemePreference::Light => ActiveTheme::Light,
            ThemePreference::Dark => ActiveTheme::Dark,
            ThemePreference::System => self.system,
        }
    }

    pub fn set_theme(&mut self, preference: ThemePreference) {
        debug!("theme preference -> {}", preference);
        self.preference = preference;
        self.root.apply_theme_attribute(preference.root_attribute());
        self.store.set(THEME_STORAGE_KEY, preference.as_str());
    }

    /// Switches to the opposite of the active theme. Never selects `system`.
    pub fn toggle_theme(&mut self) {
        let next = self.active_theme().opposite();
        self.set_theme(next.into());
    }

    /// Records a new OS signal. While following the OS, `system` is applied
    /// again so the document and storage stay current.
    pub fn observe_system_theme(&mut self, system: ActiveTheme) {
        self.system = system;
        if self.preference.is_system() {
            self.set_theme(ThemePreference::System);
        }
    }
}
