use web_sys::{Document, Storage, Window};

use crate::error::ThemeError;

pub fn window() -> Result<Window, ThemeError> {
    web_sys::window().ok_or(ThemeError::NoWindow)
}

pub fn document() -> Result<Document, ThemeError> {
    window()?.document().ok_or(ThemeError::NoDocument)
}

pub fn local_storage() -> Result<Storage, ThemeError> {
    window()?
        .local_storage()
        .map_err(|_| ThemeError::NoStorage)?
        .ok_or(ThemeError::NoStorage)
}
