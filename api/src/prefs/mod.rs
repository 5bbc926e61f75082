//! User preferences and the key-value storage they persist to.

pub mod locale;
pub mod store;
pub mod theme;
pub mod user_prefs;
