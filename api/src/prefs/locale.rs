//! Locales the application ships translation catalogs for.

use serde::Deserialize;
use serde::Serialize;

/// Storage key holding the persisted locale code.
pub const LOCALE_STORAGE_KEY: &str = "locale";

/// Locale used when nothing has been stored yet.
pub const DEFAULT_LOCALE: SupportedLocale = SupportedLocale::Pl;

/// Locale whose catalog answers keys missing from the active one.
pub const FALLBACK_LOCALE: SupportedLocale = SupportedLocale::En;

#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SupportedLocale {
    Pl,
    En,
}

impl SupportedLocale {
    /// The code persisted under [`LOCALE_STORAGE_KEY`], e.g. `"pl"`.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Translation key of the language's own name.
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Pl => "languages.pl",
            Self::En => "languages.en",
        }
    }

    /// Two-letter badge shown on the language buttons.
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Pl => "PL",
            Self::En => "EN",
        }
    }
}
