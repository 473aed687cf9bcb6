use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MediaQueryList};

use super::{ColorSchemeSource, PageSurface, PreferenceStore};
use crate::error::ThemeError;
use crate::state::theme::ToggleIcon;
use crate::utils::storage as storage_utils;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

fn js_err(context: &str, err: wasm_bindgen::JsValue) -> ThemeError {
    ThemeError::dom(format!("{}: {:?}", context, err))
}

/// `window.localStorage`, looked up on every call so a storage that becomes
/// unavailable mid-session degrades to logged failures.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        storage_utils::local_storage()?
            .get_item(key)
            .map_err(|e| ThemeError::storage(format!("{:?}", e)))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        storage_utils::local_storage()?
            .set_item(key, value)
            .map_err(|e| ThemeError::storage(format!("{:?}", e)))
    }
}

pub struct WebPage {
    document: Document,
}

impl WebPage {
    pub fn new() -> Result<Self, ThemeError> {
        Ok(Self {
            document: storage_utils::document()?,
        })
    }

    fn body(&self) -> Result<web_sys::HtmlElement, ThemeError> {
        self.document
            .body()
            .ok_or_else(|| ThemeError::dom("document has no <body>"))
    }
}

impl PageSurface for WebPage {
    fn inject_stylesheet(&self, id: &str, css: &str) -> Result<(), ThemeError> {
        if self.document.get_element_by_id(id).is_some() {
            return Ok(());
        }
        let style = self
            .document
            .create_element("style")
            .map_err(|e| js_err("create <style>", e))?;
        style.set_id(id);
        style.set_text_content(Some(css));
        let head = self
            .document
            .head()
            .ok_or_else(|| ThemeError::dom("document has no <head>"))?;
        head.append_child(&style)
            .map_err(|e| js_err("append <style>", e))?;
        Ok(())
    }

    fn mount_toggle(
        &self,
        id: &str,
        aria_label: &str,
        markup: &str,
        mut on_click: Box<dyn FnMut()>,
    ) -> Result<(), ThemeError> {
        if self.document.get_element_by_id(id).is_some() {
            log::debug!("#{} already on the page; not mounting another", id);
            return Ok(());
        }
        let button = self
            .document
            .create_element("button")
            .map_err(|e| js_err("create <button>", e))?;
        button.set_id(id);
        button
            .set_attribute("type", "button")
            .and_then(|_| button.set_attribute("aria-label", aria_label))
            .map_err(|e| js_err("toggle attributes", e))?;
        button.set_inner_html(markup);
        self.body()?
            .append_child(&button)
            .map_err(|e| js_err("append toggle", e))?;

        let closure = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            on_click();
        }) as Box<dyn FnMut(_)>);
        button
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(|e| js_err("toggle click listener", e))?;
        closure.forget();
        Ok(())
    }

    fn set_body_class(&self, class: &str, present: bool) -> Result<(), ThemeError> {
        let list = self.body()?.class_list();
        let result = if present {
            list.add_1(class)
        } else {
            list.remove_1(class)
        };
        result.map_err(|e| js_err("body class", e))
    }

    fn set_toggle_icon(&self, id: &str, icon: ToggleIcon) -> Result<(), ThemeError> {
        let button = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| ThemeError::dom(format!("#{} not mounted", id)))?;
        let pressed = if icon == ToggleIcon::Sun { "true" } else { "false" };
        button
            .set_attribute("data-icon", icon.as_attr())
            .and_then(|_| button.set_attribute("aria-pressed", pressed))
            .map_err(|e| js_err("toggle icon", e))
    }

    fn rewrite_images(
        &self,
        markers: &[&str],
        rewrite: &mut dyn FnMut(&str) -> Option<String>,
    ) -> Result<usize, ThemeError> {
        let selector = markers
            .iter()
            .map(|marker| format!("img[src*=\"{}\"]", marker))
            .collect::<Vec<_>>()
            .join(", ");
        if selector.is_empty() {
            return Ok(0);
        }
        let nodes = self
            .document
            .query_selector_all(&selector)
            .map_err(|e| js_err("query logos", e))?;

        let mut changed = 0;
        for index in 0..nodes.length() {
            let img = match nodes.item(index).and_then(|n| n.dyn_into::<Element>().ok()) {
                Some(el) => el,
                None => continue,
            };
            let current = match img.get_attribute("src") {
                Some(src) => src,
                None => continue,
            };
            let Some(next) = rewrite(&current) else {
                continue;
            };
            if next == current {
                continue;
            }
            match img.set_attribute("src", &next) {
                Ok(()) => changed += 1,
                Err(e) => log::warn!("could not swap logo {}: {:?}", current, e),
            }
        }
        Ok(changed)
    }
}

/// `matchMedia("(prefers-color-scheme: dark)")`, absent on hosts that do not
/// support it.
pub struct WebColorScheme {
    query: Option<MediaQueryList>,
}

impl WebColorScheme {
    pub fn new() -> Self {
        let query = web_sys::window()
            .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten());
        Self { query }
    }
}

impl Default for WebColorScheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSchemeSource for WebColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.query.as_ref().map(MediaQueryList::matches)
    }

    fn subscribe(&self, mut listener: Box<dyn FnMut(bool)>) -> bool {
        let Some(list) = self.query.as_ref() else {
            return false;
        };
        let closure = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
            listener(event.matches());
        }) as Box<dyn FnMut(_)>);
        if let Err(e) =
            list.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
        {
            log::warn!("prefers-color-scheme listener rejected: {:?}", e);
            return false;
        }
        closure.forget();
        true
    }
}
