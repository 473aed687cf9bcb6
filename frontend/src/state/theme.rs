use std::fmt;
use std::str::FromStr;

pub const DARK_CLASS: &str = "dark-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn inverted(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Value written to storage: the mode as a string-encoded boolean.
    pub fn as_stored(self) -> &'static str {
        if self.is_dark() {
            "true"
        } else {
            "false"
        }
    }

    pub fn toggle_icon(self) -> ToggleIcon {
        match self {
            ThemeMode::Light => ToggleIcon::Moon,
            ThemeMode::Dark => ToggleIcon::Sun,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => f.write_str("light"),
            ThemeMode::Dark => f.write_str("dark"),
        }
    }
}

/// Icon shown on the toggle button. The moon invites switching to dark, the
/// sun invites switching back to light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    Moon,
    Sun,
}

impl ToggleIcon {
    pub fn as_attr(self) -> &'static str {
        match self {
            ToggleIcon::Moon => "moon",
            ToggleIcon::Sun => "sun",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    Unset,
}

impl ThemePreference {
    /// Decodes the raw storage entry. Anything other than `"true"`/`"false"`
    /// counts as no preference.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw.map(str::parse::<ThemePreference>) {
            Some(Ok(preference)) => preference,
            Some(Err(_)) => {
                log::warn!("ignoring unreadable stored theme preference {:?}", raw);
                ThemePreference::Unset
            }
            None => ThemePreference::Unset,
        }
    }

    pub fn mode(self) -> Option<ThemeMode> {
        match self {
            ThemePreference::Light => Some(ThemeMode::Light),
            ThemePreference::Dark => Some(ThemeMode::Dark),
            ThemePreference::Unset => None,
        }
    }

    pub fn is_unset(self) -> bool {
        self == ThemePreference::Unset
    }
}

impl From<ThemeMode> for ThemePreference {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => ThemePreference::Light,
            ThemeMode::Dark => ThemePreference::Dark,
        }
    }
}

impl FromStr for ThemePreference {
    type Err = std::str::ParseBoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<bool>()
            .map(|dark| ThemeMode::from_dark(dark).into())
    }
}

/// Runtime theme state. Never persisted directly; the controller writes the
/// preference alongside every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    pub mode: ThemeMode,
    pub initialized: bool,
    /// Set once the visitor toggles, even if the choice could not be stored.
    pub explicit: bool,
}

impl ThemeState {
    pub fn resolve(preference: ThemePreference, system_dark: Option<bool>) -> ThemeMode {
        preference
            .mode()
            .or_else(|| system_dark.map(ThemeMode::from_dark))
            .unwrap_or_default()
    }
}
