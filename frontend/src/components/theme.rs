pub const STYLE_ELEMENT_ID: &str = "dark-mode-styles";
pub const TOGGLE_BUTTON_ID: &str = "theme-toggle";
pub const TOGGLE_ARIA_LABEL: &str = "Changer de thème";

/// Dark palette scoped under `body.dark-mode`, plus the floating toggle.
/// The moon/sun swap is driven by the body class, so the button markup never
/// needs rewriting.
pub const DARK_MODE_CSS: &str = r#"
body.dark-mode {
  background-color: #121212;
  color: #e0e0e0;
}

body.dark-mode .bg-white {
  background-color: #1f1f1f !important;
}

body.dark-mode .bg-gray-100 {
  background-color: #121212 !important;
}

body.dark-mode .text-gray-900 {
  color: #e0e0e0 !important;
}

body.dark-mode .text-gray-600,
body.dark-mode .text-gray-400 {
  color: #a0a0a0 !important;
}

body.dark-mode .border-gray-200,
body.dark-mode .border-gray-800,
body.dark-mode .border-b {
  border-color: #333333 !important;
}

body.dark-mode .bg-primary,
body.dark-mode .bg-gray-900 {
  background-color: #000000 !important;
}

body.dark-mode .bg-secondary {
  background-color: #0a0a0a !important;
}

body.dark-mode .prose {
  color: #e0e0e0;
}

body.dark-mode .shadow-md,
body.dark-mode .shadow-lg {
  box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.8), 0 2px 4px -1px rgba(0, 0, 0, 0.9);
}

body.dark-mode input,
body.dark-mode textarea,
body.dark-mode select {
  background-color: #2d2d2d !important;
  color: #e0e0e0 !important;
  border-color: #444444 !important;
}

#theme-toggle {
  position: fixed;
  top: 6rem;
  right: 1.5rem;
  width: 3rem;
  height: 3rem;
  border-radius: 50%;
  border: none;
  display: flex;
  align-items: center;
  justify-content: center;
  background-color: #4f46e5;
  color: white;
  box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  z-index: 40;
  transition: all 0.3s ease;
  cursor: pointer;
}

#theme-toggle:hover {
  background-color: #4338ca;
}

#theme-toggle .moon-icon,
#theme-toggle .sun-icon {
  width: 1.5rem;
  height: 1.5rem;
}

#theme-toggle .moon-icon {
  display: block;
}

#theme-toggle .sun-icon {
  display: none;
}

body.dark-mode #theme-toggle .moon-icon {
  display: none;
}

body.dark-mode #theme-toggle .sun-icon {
  display: block;
}

@media (max-width: 640px) {
  #theme-toggle {
    top: auto;
    bottom: 5rem;
  }
}
"#;

pub const TOGGLE_MARKUP: &str = r#"<svg class="moon-icon" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"></path></svg><svg class="sun-icon" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="5"></circle><line x1="12" y1="1" x2="12" y2="3"></line><line x1="12" y1="21" x2="12" y2="23"></line><line x1="4.22" y1="4.22" x2="5.64" y2="5.64"></line><line x1="18.36" y1="18.36" x2="19.78" y2="19.78"></line><line x1="1" y1="12" x2="3" y2="12"></line><line x1="21" y1="12" x2="23" y2="12"></line><line x1="4.22" y1="19.78" x2="5.64" y2="18.36"></line><line x1="18.36" y1="5.64" x2="19.78" y2="4.22"></line></svg>"#;
