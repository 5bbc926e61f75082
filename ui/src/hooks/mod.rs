pub mod use_app_store;
pub mod use_i18n;
pub mod use_theme;

pub use use_app_store::use_app_store;
pub use use_i18n::use_i18n;
pub use use_theme::{use_system_theme_watcher, use_theme};
