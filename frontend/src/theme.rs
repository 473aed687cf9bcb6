#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    use crate::config;
    use crate::controller::ThemeController;
    use crate::error::ThemeError;
    use crate::host::web::{LocalStorage, WebColorScheme, WebPage};
    use crate::utils::storage as storage_utils;

    thread_local! {
        static CONTROLLER: RefCell<Option<ThemeController>> = RefCell::new(None);
    }

    fn build() -> Result<ThemeController, ThemeError> {
        Ok(ThemeController::new(
            config::load(),
            LocalStorage,
            WebPage::new()?,
            WebColorScheme::new(),
        ))
    }

    fn init_now() {
        let controller = match build() {
            Ok(controller) => controller,
            Err(err) => {
                log::warn!("theme manager unavailable: {}", err);
                return;
            }
        };
        controller.initialize();
        CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller));
    }

    /// Initializes now, or once `DOMContentLoaded` fires if the document is
    /// still loading.
    pub fn init() {
        let document = match storage_utils::document() {
            Ok(doc) => doc,
            Err(err) => {
                log::warn!("theme manager unavailable: {}", err);
                return;
            }
        };

        if document.ready_state() != "loading" {
            init_now();
            return;
        }

        let closure = Closure::once(init_now);
        if document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("could not wait for DOMContentLoaded; initializing now");
            init_now();
            return;
        }
        closure.forget();
    }

    /// Flips the theme of the running controller, if any.
    pub fn toggle() -> Option<bool> {
        CONTROLLER.with(|slot| {
            slot.borrow()
                .as_ref()
                .map(|controller| controller.toggle().is_dark())
        })
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{init as init_theme_manager, toggle as toggle_theme};

#[cfg(not(target_arch = "wasm32"))]
pub fn init_theme_manager() {}

#[cfg(not(target_arch = "wasm32"))]
pub fn toggle_theme() -> Option<bool> {
    None
}
