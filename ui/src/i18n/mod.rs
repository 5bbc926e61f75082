//! Locale selection and translation lookup.

pub mod locales;

use std::rc::Rc;

use api::prefs::locale::SupportedLocale;
use api::prefs::locale::LOCALE_STORAGE_KEY;
use api::prefs::store::PreferenceStore;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::info;
use strum::IntoEnumIterator;

use locales::catalog;
use locales::Catalog;

/// The active locale plus a fixed fallback.
///
/// Lookups try the active catalog, then the fallback catalog, and finally
/// return the key itself. A locale without a catalog (e.g. an unsupported
/// code restored from storage) therefore reads entirely from the fallback.
pub struct I18n {
    locale: String,
    fallback: String,
    store: Rc<dyn PreferenceStore>,
}

impl I18n {
    pub fn new(locale: impl Into<String>, fallback: impl Into<String>, store: Rc<dyn PreferenceStore>) -> Self {
        let locale = locale.into();
        let fallback = fallback.into();
        if catalog(&locale).is_none() {
            info!("no catalog for locale {:?}, using {:?}", locale, fallback);
        }
        Self {
            locale,
            fallback,
            store,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn fallback_locale(&self) -> &str {
        &self.fallback
    }

    /// Makes `code` the active locale and persists it.
    pub fn set_locale(&mut self, code: &str) {
        debug!("locale -> {}", code);
        self.locale = code.to_string();
        self.store.set(LOCALE_STORAGE_KEY, code);
    }

    /// Locales that ship a catalog, in display order.
    pub fn available(&self) -> impl Iterator<Item = SupportedLocale> {
        SupportedLocale::iter()
    }

    pub fn t(&self, key: &str) -> String {
        lookup(catalog(&self.locale), key)
            .or_else(|| lookup(catalog(&self.fallback), key))
            .unwrap_or(key)
            .to_string()
    }
}

fn lookup(catalog: Option<Catalog>, key: &str) -> Option<&'static str> {
    catalog?
        .iter()
        .find_map(|(k, v)| (*k == key).then_some(*v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::prefs::store::MemoryStore;
    use api::prefs::user_prefs::UserPrefs;
    use std::collections::BTreeSet;

    fn i18n(locale: &str) -> (I18n, Rc<MemoryStore>) {
        let store = Rc::new(MemoryStore::new());
        (I18n::new(locale, "en", store.clone()), store)
    }

    #[test]
    fn polish_by_default() {
        let store = Rc::new(MemoryStore::new());
        let prefs = UserPrefs::load(&*store, "pl");
        let i18n = I18n::new(prefs.locale(), "en", store);

        assert_eq!(i18n.locale(), "pl");
        assert_eq!(i18n.fallback_locale(), "en");
        assert_eq!(i18n.t("nav.home"), "Strona główna");
        assert_eq!(i18n.t("nav.dashboard"), "Panel");
        assert_eq!(i18n.t("nav.about"), "O aplikacji");
    }

    #[test]
    fn english_navigation() {
        let (i18n, _) = i18n("en");
        assert_eq!(i18n.t("nav.home"), "Home");
        assert_eq!(i18n.t("nav.dashboard"), "Dashboard");
        assert_eq!(i18n.t("nav.about"), "About");
    }

    #[test]
    fn switching_persists_and_translates() {
        let (mut i18n, store) = i18n("pl");
        assert_eq!(i18n.t("nav.home"), "Strona główna");

        i18n.set_locale("en");
        assert_eq!(i18n.t("nav.home"), "Home");
        assert_eq!(store.get(LOCALE_STORAGE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn missing_polish_keys_fall_back_to_english() {
        let (i18n, _) = i18n("pl");
        assert_eq!(i18n.t("languages.en"), "English");
        assert_eq!(i18n.t("current.theme"), "Current theme:");
        assert_eq!(i18n.t("about.feature7"), "Language switcher (Polish/English)");
    }

    #[test]
    fn unsupported_locale_reads_from_fallback() {
        let (i18n, _) = i18n("de");
        assert_eq!(i18n.locale(), "de");
        assert_eq!(i18n.t("nav.home"), "Home");
    }

    #[test]
    fn footer_navigation_label_is_translated() {
        let (mut i18n, _) = i18n("pl");
        assert_eq!(i18n.t("footer.navigation"), "Nawigacja w stopce");
        i18n.set_locale("en");
        assert_eq!(i18n.t("footer.navigation"), "Footer navigation");
    }

    #[test]
    fn unknown_key_is_returned_verbatim() {
        let (i18n, _) = i18n("pl");
        assert_eq!(i18n.t("nav.nowhere"), "nav.nowhere");
    }

    #[test]
    fn polish_catalog_is_a_subset_of_english() {
        let en: BTreeSet<_> = locales::en::MESSAGES.iter().map(|(k, _)| *k).collect();
        for (key, _) in locales::pl::MESSAGES {
            assert!(en.contains(key), "{key} missing from en");
        }
    }

    #[test]
    fn every_supported_locale_has_a_catalog() {
        let (i18n, _) = i18n("pl");
        for locale in i18n.available() {
            assert!(catalog(locale.code()).is_some());
            assert_ne!(i18n.t(locale.label_key()), locale.label_key());
        }
    }
}
