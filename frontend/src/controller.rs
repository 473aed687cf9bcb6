use std::cell::RefCell;
use std::rc::Rc;

use crate::components::theme::{
    DARK_MODE_CSS, STYLE_ELEMENT_ID, TOGGLE_ARIA_LABEL, TOGGLE_BUTTON_ID, TOGGLE_MARKUP,
};
use crate::config::ThemeConfig;
use crate::host::{Clock, ColorSchemeSource, PageSurface, PreferenceStore, SystemClock};
use crate::state::theme::{ThemeMode, ThemePreference, ThemeState, DARK_CLASS};
use crate::utils::logo::{swap_icon_token, IconTokens};

struct Inner {
    config: ThemeConfig,
    tokens: IconTokens,
    store: Box<dyn PreferenceStore>,
    page: Box<dyn PageSurface>,
    scheme: Box<dyn ColorSchemeSource>,
    clock: Box<dyn Clock>,
    state: RefCell<ThemeState>,
}

/// Single owner of the applied theme.
///
/// Cloning is cheap and every clone drives the same state; the click and
/// color-scheme callbacks hold clones. Everything runs on the page's event
/// loop, so `Rc`/`RefCell` is enough.
#[derive(Clone)]
pub struct ThemeController {
    inner: Rc<Inner>,
}

impl ThemeController {
    pub fn new(
        config: ThemeConfig,
        store: impl PreferenceStore + 'static,
        page: impl PageSurface + 'static,
        scheme: impl ColorSchemeSource + 'static,
    ) -> Self {
        Self::with_clock(config, store, page, scheme, SystemClock)
    }

    pub fn with_clock(
        config: ThemeConfig,
        store: impl PreferenceStore + 'static,
        page: impl PageSurface + 'static,
        scheme: impl ColorSchemeSource + 'static,
        clock: impl Clock + 'static,
    ) -> Self {
        let tokens = IconTokens::from_config(&config);
        Self {
            inner: Rc::new(Inner {
                config,
                tokens,
                store: Box::new(store),
                page: Box::new(page),
                scheme: Box::new(scheme),
                clock: Box::new(clock),
                state: RefCell::new(ThemeState::default()),
            }),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.inner.state.borrow().mode
    }

    /// Re-reads the stored preference. Storage failures read as `Unset`.
    pub fn preference(&self) -> ThemePreference {
        match self.inner.store.load(&self.inner.config.storage_key) {
            Ok(raw) => ThemePreference::from_stored(raw.as_deref()),
            Err(err) => {
                log::warn!("reading theme preference failed: {}", err);
                ThemePreference::Unset
            }
        }
    }

    /// Injects the stylesheet and toggle, resolves the initial mode and hooks
    /// the color-scheme listener. Runs once; later calls do nothing.
    pub fn initialize(&self) {
        {
            let mut state = self.inner.state.borrow_mut();
            if state.initialized {
                log::debug!("theme controller already initialized");
                return;
            }
            state.initialized = true;
        }

        let page = &self.inner.page;
        if let Err(err) = page.inject_stylesheet(STYLE_ELEMENT_ID, DARK_MODE_CSS) {
            log::warn!("dark mode stylesheet not injected: {}", err);
        }

        let controller = self.clone();
        if let Err(err) = page.mount_toggle(
            TOGGLE_BUTTON_ID,
            TOGGLE_ARIA_LABEL,
            TOGGLE_MARKUP,
            Box::new(move || {
                controller.toggle();
            }),
        ) {
            log::warn!("theme toggle not mounted: {}", err);
        }

        let preference = self.preference();
        let system_dark = if self.inner.config.follow_system {
            self.inner.scheme.prefers_dark()
        } else {
            None
        };
        let mode = ThemeState::resolve(preference, system_dark);
        self.apply(mode);
        if preference.is_unset() && system_dark.is_some() {
            self.persist(mode);
        }
        log::info!(
            "theme initialized: {} (stored {:?}, system {:?})",
            mode,
            preference,
            system_dark
        );

        if self.inner.config.follow_system && self.preference().is_unset() {
            let controller = self.clone();
            let subscribed = self
                .inner
                .scheme
                .subscribe(Box::new(move |dark| controller.on_system_change(dark)));
            if !subscribed {
                log::debug!("color scheme change notifications unavailable");
            }
        }
    }

    /// Flips the mode, persists it and refreshes every derived attribute.
    pub fn toggle(&self) -> ThemeMode {
        let mode = {
            let mut state = self.inner.state.borrow_mut();
            state.explicit = true;
            state.mode.inverted()
        };
        self.apply(mode);
        self.persist(mode);
        log::debug!("theme toggled to {}", mode);
        mode
    }

    /// Points every logo at the variant for `mode`. Returns how many images
    /// changed.
    pub fn apply_logo_variant(&self, mode: ThemeMode) -> usize {
        let inner = &self.inner;
        let stamp = inner.config.cache_bust.then(|| inner.clock.now_millis());
        let markers = [inner.tokens.light.as_str(), inner.tokens.dark.as_str()];
        let mut rewrite = |src: &str| swap_icon_token(src, &inner.tokens, mode, stamp);
        match inner.page.rewrite_images(&markers, &mut rewrite) {
            Ok(changed) => changed,
            Err(err) => {
                log::warn!("logo variants not swapped: {}", err);
                0
            }
        }
    }

    fn on_system_change(&self, dark: bool) {
        if self.inner.state.borrow().explicit {
            log::debug!("ignoring color scheme change; visitor already chose a theme");
            return;
        }
        if !self.preference().is_unset() {
            log::debug!("ignoring color scheme change; preference already stored");
            return;
        }
        let mode = ThemeMode::from_dark(dark);
        self.apply(mode);
        self.persist(mode);
        log::info!("theme followed system color scheme: {}", mode);
    }

    fn apply(&self, mode: ThemeMode) {
        self.inner.state.borrow_mut().mode = mode;

        let page = &self.inner.page;
        if let Err(err) = page.set_body_class(DARK_CLASS, mode.is_dark()) {
            log::warn!("body class not updated: {}", err);
        }
        if let Err(err) = page.set_toggle_icon(TOGGLE_BUTTON_ID, mode.toggle_icon()) {
            log::warn!("toggle icon not updated: {}", err);
        }
        self.apply_logo_variant(mode);
    }

    fn persist(&self, mode: ThemeMode) {
        if let Err(err) = self
            .inner
            .store
            .save(&self.inner.config.storage_key, mode.as_stored())
        {
            log::warn!("theme preference not saved: {}", err);
        }
    }
}
