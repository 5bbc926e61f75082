//! Translation catalogs, as flat `(dotted.key, text)` tables.

pub mod en;
pub mod pl;

use api::prefs::locale::SupportedLocale;

pub type Catalog = &'static [(&'static str, &'static str)];

/// The catalog shipped for `code`, if any.
pub fn catalog(code: &str) -> Option<Catalog> {
    match code.parse::<SupportedLocale>().ok()? {
        SupportedLocale::Pl => Some(pl::MESSAGES),
        SupportedLocale::En => Some(en::MESSAGES),
    }
}
