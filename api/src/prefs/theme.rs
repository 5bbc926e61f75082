use serde::Deserialize;
use serde::Serialize;

/// Storage key holding the persisted [`ThemePreference`].
pub const THEME_STORAGE_KEY: &str = "theme";

/// Name of the attribute on the document root that styling rules key off.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// The user's explicit theme choice.
///
/// Parsing is exact: only the lowercase strings `light`, `dark` and `system`
/// are accepted, anything else read back from storage is rejected.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the operating system's color scheme.
    #[default]
    System,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// The value of [`THEME_ATTRIBUTE`] for this preference, `None` meaning
    /// the attribute is removed so the OS media query decides.
    pub fn root_attribute(&self) -> Option<&'static str> {
        match self {
            Self::System => None,
            Self::Light | Self::Dark => Some(self.as_str()),
        }
    }

    /// Translation key of the human readable name.
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Light => "theme.light",
            Self::Dark => "theme.dark",
            Self::System => "theme.system",
        }
    }
}

/// A concretely rendered theme, after resolving any `system` indirection.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::IntoStaticStr,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ActiveTheme {
    Light,
    /// Assumed when the platform cannot report a color scheme.
    #[default]
    Dark,
}

impl ActiveTheme {
    /// Maps the result of the `(prefers-color-scheme: light)` media query.
    pub fn from_prefers_light(matches: bool) -> Self {
        if matches {
            Self::Light
        } else {
            Self::Dark
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl From<ActiveTheme> for ThemePreference {
    fn from(theme: ActiveTheme) -> Self {
        match theme {
            ActiveTheme::Light => Self::Light,
            ActiveTheme::Dark => Self::Dark,
        }
    }
}
