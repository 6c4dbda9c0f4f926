//! Theme Management
//!
//! Light/dark preference persisted in local storage and applied as a `dark`
//! class on the `<html>` element.

use leptos::prelude::*;

use crate::browser;
use crate::config::THEME_STORAGE_KEY;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything other than "dark" reads as light
    pub fn parse(value: &str) -> Self {
        if value == "dark" { Theme::Dark } else { Theme::Light }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Key/value persistence for UI preferences
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

/// `window.localStorage`
pub struct LocalPreferenceStore;

impl LocalPreferenceStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl PreferenceStore for LocalPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = Self::storage().ok_or_else(|| "local storage unavailable".to_string())?;
        storage.set_item(key, value).map_err(|e| format!("{:?}", e))
    }
}

pub fn load_preference(store: &impl PreferenceStore) -> Theme {
    store.get(THEME_STORAGE_KEY).map(|v| Theme::parse(&v)).unwrap_or_default()
}

/// Flip the theme and persist the new value
pub fn toggle_preference(current: Theme, store: &impl PreferenceStore) -> Theme {
    let next = current.toggled();
    if let Err(e) = store.set(THEME_STORAGE_KEY, next.as_str()) {
        web_sys::console::error_1(&format!("[THEME] Could not persist theme: {}", e).into());
    }
    next
}

/// Page-wide theme controller, provided via context
#[derive(Clone, Copy)]
pub struct ThemeManager {
    theme: RwSignal<Theme>,
}

impl ThemeManager {
    /// Read the stored preference and apply it
    pub fn init() -> Self {
        let theme = load_preference(&LocalPreferenceStore);
        browser::set_root_class("dark", theme == Theme::Dark);
        Self { theme: RwSignal::new(theme) }
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle_theme(&self) {
        let next = toggle_preference(self.theme.get_untracked(), &LocalPreferenceStore);
        self.theme.set(next);
        browser::set_root_class("dark", next == Theme::Dark);
    }
}

pub fn use_theme() -> ThemeManager {
    expect_context::<ThemeManager>()
}

/// Sun/moon button; the icon for the active theme is shown
#[component]
pub fn ThemeToggle(#[prop(into, optional)] class: String) -> impl IntoView {
    let theme = use_theme();
    let is_dark = move || theme.theme() == Theme::Dark;

    view! {
        <button
            class=format!("theme-toggle {}", class)
            title="Toggle theme"
            on:click=move |_| theme.toggle_theme()
        >
            <span class=move || if is_dark() { "sun-icon hidden" } else { "sun-icon" }>"☀"</span>
            <span class=move || if is_dark() { "moon-icon" } else { "moon-icon hidden" }>"☾"</span>
        </button>
    }
}
