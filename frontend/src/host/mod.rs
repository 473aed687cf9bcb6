//! Seams between the theme controller and the browser.
//!
//! The controller only talks to these traits; `web` implements them over
//! `web-sys` and the test fakes implement them in memory.

use crate::error::ThemeError;
use crate::state::theme::ToggleIcon;

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Browser-scoped key/value storage.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// The parts of the page the controller mutates.
pub trait PageSurface {
    fn inject_stylesheet(&self, id: &str, css: &str) -> Result<(), ThemeError>;

    /// Appends the toggle button to `<body>` and wires `on_click` to it. Does
    /// nothing when an element with `id` already exists.
    fn mount_toggle(
        &self,
        id: &str,
        aria_label: &str,
        markup: &str,
        on_click: Box<dyn FnMut()>,
    ) -> Result<(), ThemeError>;

    fn set_body_class(&self, class: &str, present: bool) -> Result<(), ThemeError>;

    fn set_toggle_icon(&self, id: &str, icon: ToggleIcon) -> Result<(), ThemeError>;

    /// Visits every `<img>` whose `src` contains one of `markers`. `rewrite`
    /// receives the current `src` and returns the replacement, if any. Images
    /// without a `src` attribute are not visited. Returns how many changed.
    fn rewrite_images(
        &self,
        markers: &[&str],
        rewrite: &mut dyn FnMut(&str) -> Option<String>,
    ) -> Result<usize, ThemeError>;
}

/// The OS-level `prefers-color-scheme: dark` signal.
pub trait ColorSchemeSource {
    /// `None` when the host does not expose the signal.
    fn prefers_dark(&self) -> Option<bool>;

    /// Registers `listener` for change notifications. Returns `false` when the
    /// host cannot notify.
    fn subscribe(&self, listener: Box<dyn FnMut(bool)>) -> bool;
}

pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Wall clock backed by `chrono`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Stand-in for hosts without `matchMedia`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoColorScheme;

impl ColorSchemeSource for NoColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        None
    }

    fn subscribe(&self, _listener: Box<dyn FnMut(bool)>) -> bool {
        false
    }
}
