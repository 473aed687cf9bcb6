use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

pub const DEFAULT_STORAGE_KEY: &str = "realblack-dark-mode";
pub const CONFIG_GLOBAL: &str = "__REALBLACK_THEME";

/// Runtime configuration. Every field is optional in the page-provided
/// object: `window.__REALBLACK_THEME = { dark_token: "icon_w", ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    /// Token in logo paths for the variant shown in light mode.
    pub light_token: String,
    /// Token in logo paths for the variant shown in dark mode.
    pub dark_token: String,
    /// Append `v=<millis>` to swapped logo URLs.
    pub cache_bust: bool,
    /// Follow `prefers-color-scheme` while no preference is stored.
    pub follow_system: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            light_token: "icon_b".to_string(),
            dark_token: "icon_w".to_string(),
            cache_bust: false,
            follow_system: true,
        }
    }
}

impl ThemeConfig {
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: ThemeConfig = serde_json::from_str(raw)?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ThemeError> {
        if self.storage_key.trim().is_empty() {
            return Err(ThemeError::Config("storage_key must not be empty".into()));
        }
        if self.light_token.is_empty() || self.dark_token.is_empty() {
            return Err(ThemeError::Config("icon tokens must not be empty".into()));
        }
        if self.light_token.contains(self.dark_token.as_str())
            || self.dark_token.contains(self.light_token.as_str())
        {
            return Err(ThemeError::Config(format!(
                "icon tokens {:?} and {:?} overlap",
                self.light_token, self.dark_token
            )));
        }
        Ok(self)
    }
}

#[cfg(target_arch = "wasm32")]
fn read_window_config() -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &CONFIG_GLOBAL.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    js_sys::JSON::stringify(&any).ok()?.as_string()
}

#[cfg(not(target_arch = "wasm32"))]
fn read_window_config() -> Option<String> {
    None
}

/// Loads the page-provided config, falling back to defaults when it is
/// missing or malformed.
pub fn load() -> ThemeConfig {
    match read_window_config() {
        Some(raw) => ThemeConfig::from_json(&raw).unwrap_or_else(|err| {
            log::warn!("{}; using default theme config", err);
            ThemeConfig::default()
        }),
        None => ThemeConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config = ThemeConfig::from_json(r#"{"cache_bust": true}"#).unwrap();
        assert!(config.cache_bust);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.light_token, "icon_b");
        assert_eq!(config.dark_token, "icon_w");
        assert!(config.follow_system);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let config = ThemeConfig::from_json(r#"{"palette": "blue"}"#).unwrap();
        assert_eq!(config, ThemeConfig::default());
    }

    #[test]
    fn token_mapping_can_be_swapped() {
        let config =
            ThemeConfig::from_json(r#"{"light_token": "icon_w", "dark_token": "icon_b"}"#)
                .unwrap();
        assert_eq!(config.light_token, "icon_w");
        assert_eq!(config.dark_token, "icon_b");
    }

    #[test]
    fn rejects_identical_tokens_and_blank_key() {
        assert!(matches!(
            ThemeConfig::from_json(r#"{"light_token": "icon_w"}"#),
            Err(ThemeError::Config(_))
        ));
        assert!(matches!(
            ThemeConfig::from_json(r#"{"storage_key": "  "}"#),
            Err(ThemeError::Config(_))
        ));
        assert!(matches!(ThemeConfig::from_json("[1,2"), Err(ThemeError::Config(_))));
    }

    #[test]
    fn rejects_tokens_nested_in_each_other() {
        assert!(matches!(
            ThemeConfig::from_json(r#"{"light_token": "icon", "dark_token": "icon_w"}"#),
            Err(ThemeError::Config(_))
        ));
        assert!(matches!(
            ThemeConfig::from_json(r#"{"light_token": "logo_dark", "dark_token": "dark"}"#),
            Err(ThemeError::Config(_))
        ));
    }

    #[test]
    fn load_without_window_yields_defaults() {
        assert_eq!(load(), ThemeConfig::default());
    }
}
