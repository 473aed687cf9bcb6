#[cfg(test)]
pub mod fakes {
    use std::cell::{Cell, RefCell};
    use std::collections::{BTreeSet, HashMap};
    use std::rc::Rc;

    use crate::error::ThemeError;
    use crate::host::{Clock, ColorSchemeSource, PageSurface, PreferenceStore};
    use crate::state::theme::ToggleIcon;

    #[derive(Clone, Default)]
    pub struct MemoryStore {
        entries: Rc<RefCell<HashMap<String, String>>>,
        fail_writes: Rc<Cell<bool>>,
    }

    impl MemoryStore {
        pub fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store
                .entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            store
        }

        pub fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        pub fn fail_writes(&self, fail: bool) {
            self.fail_writes.set(fail);
        }
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
            Ok(self.get(key))
        }

        fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
            if self.fail_writes.get() {
                return Err(ThemeError::storage("QuotaExceededError"));
            }
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    /// Everything the controller can observe or change on the fake page.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct PageSnapshot {
        pub body_classes: BTreeSet<String>,
        pub toggle_icon: Option<ToggleIcon>,
        pub images: Vec<Option<String>>,
    }

    #[derive(Default)]
    struct PageModel {
        stylesheets: Vec<(String, String)>,
        toggles: Vec<(String, String)>,
        on_click: Option<Box<dyn FnMut()>>,
        body_classes: BTreeSet<String>,
        toggle_icon: Option<ToggleIcon>,
        images: Vec<Option<String>>,
    }

    #[derive(Clone, Default)]
    pub struct FakePage {
        model: Rc<RefCell<PageModel>>,
    }

    impl FakePage {
        pub fn with_images(images: Vec<Option<String>>) -> Self {
            let page = Self::default();
            page.model.borrow_mut().images = images;
            page
        }

        pub fn has_body_class(&self, class: &str) -> bool {
            self.model.borrow().body_classes.contains(class)
        }

        pub fn toggle_icon(&self) -> Option<ToggleIcon> {
            self.model.borrow().toggle_icon
        }

        pub fn image(&self, index: usize) -> Option<String> {
            self.model.borrow().images.get(index).cloned().flatten()
        }

        pub fn stylesheet_ids(&self) -> Vec<String> {
            self.model
                .borrow()
                .stylesheets
                .iter()
                .map(|(id, _)| id.clone())
                .collect()
        }

        pub fn toggles(&self) -> Vec<(String, String)> {
            self.model.borrow().toggles.clone()
        }

        pub fn snapshot(&self) -> PageSnapshot {
            let model = self.model.borrow();
            PageSnapshot {
                body_classes: model.body_classes.clone(),
                toggle_icon: model.toggle_icon,
                images: model.images.clone(),
            }
        }

        /// Fires the mounted click handler the way the browser would.
        pub fn click_toggle(&self) {
            let handler = self.model.borrow_mut().on_click.take();
            if let Some(mut handler) = handler {
                handler();
                self.model.borrow_mut().on_click = Some(handler);
            }
        }
    }

    impl PageSurface for FakePage {
        fn inject_stylesheet(&self, id: &str, css: &str) -> Result<(), ThemeError> {
            let mut model = self.model.borrow_mut();
            if !model.stylesheets.iter().any(|(existing, _)| existing == id) {
                model.stylesheets.push((id.to_string(), css.to_string()));
            }
            Ok(())
        }

        fn mount_toggle(
            &self,
            id: &str,
            aria_label: &str,
            _markup: &str,
            on_click: Box<dyn FnMut()>,
        ) -> Result<(), ThemeError> {
            let mut model = self.model.borrow_mut();
            if model.toggles.iter().any(|(existing, _)| existing == id) {
                return Ok(());
            }
            model.toggles.push((id.to_string(), aria_label.to_string()));
            model.on_click = Some(on_click);
            Ok(())
        }

        fn set_body_class(&self, class: &str, present: bool) -> Result<(), ThemeError> {
            let mut model = self.model.borrow_mut();
            if present {
                model.body_classes.insert(class.to_string());
            } else {
                model.body_classes.remove(class);
            }
            Ok(())
        }

        fn set_toggle_icon(&self, _id: &str, icon: ToggleIcon) -> Result<(), ThemeError> {
            self.model.borrow_mut().toggle_icon = Some(icon);
            Ok(())
        }

        fn rewrite_images(
            &self,
            markers: &[&str],
            rewrite: &mut dyn FnMut(&str) -> Option<String>,
        ) -> Result<usize, ThemeError> {
            let mut changed = 0;
            let mut model = self.model.borrow_mut();
            for src in model.images.iter_mut().flatten() {
                if !markers.iter().any(|marker| src.contains(marker)) {
                    continue;
                }
                if let Some(next) = rewrite(src.as_str()) {
                    if next != *src {
                        *src = next;
                        changed += 1;
                    }
                }
            }
            Ok(changed)
        }
    }

    #[derive(Clone)]
    pub struct FakeScheme {
        dark: Option<bool>,
        listeners: Rc<RefCell<Vec<Box<dyn FnMut(bool)>>>>,
    }

    impl FakeScheme {
        pub fn reporting(dark: bool) -> Self {
            Self {
                dark: Some(dark),
                listeners: Rc::default(),
            }
        }

        pub fn unsupported() -> Self {
            Self {
                dark: None,
                listeners: Rc::default(),
            }
        }

        pub fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }

        pub fn notify(&self, dark: bool) {
            let mut listeners = std::mem::take(&mut *self.listeners.borrow_mut());
            for listener in listeners.iter_mut() {
                listener(dark);
            }
            self.listeners.borrow_mut().append(&mut listeners);
        }
    }

    impl ColorSchemeSource for FakeScheme {
        fn prefers_dark(&self) -> Option<bool> {
            self.dark
        }

        fn subscribe(&self, listener: Box<dyn FnMut(bool)>) -> bool {
            if self.dark.is_none() {
                return false;
            }
            self.listeners.borrow_mut().push(listener);
            true
        }
    }

    #[derive(Debug, Clone, Copy)]
    pub struct FixedClock(pub i64);

    impl Clock for FixedClock {
        fn now_millis(&self) -> i64 {
            self.0
        }
    }
}
