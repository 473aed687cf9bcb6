//! Dark mode for the Real Black storefront pages.
//!
//! Compiled to WASM, the crate injects the dark palette and a floating toggle
//! into the host page, restores the visitor's stored choice and otherwise
//! follows `prefers-color-scheme`.

pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod state;
pub mod theme;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use error::ThemeError;
pub use state::theme::{ThemeMode, ThemePreference, ToggleIcon};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);
    log::debug!("Starting Real Black theme manager (wasm)");

    theme::init_theme_manager();
}

/// Lets page scripts flip the theme. Returns whether dark mode is now on, or
/// `undefined` before initialization.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> Option<bool> {
    theme::toggle_theme()
}
