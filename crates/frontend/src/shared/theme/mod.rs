//! Light/dark theme for the console.
//!
//! The preference lives in localStorage; [`AdminLayout`](crate::layout::AdminLayout)
//! turns it into the `dark-mode` class.

use leptos::prelude::*;
use web_sys::window;

use crate::shared::icons::icon;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value stored in localStorage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Unknown values fall back to light.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

const THEME_STORAGE_KEY: &str = "catalog-admin-theme";

fn load_theme_from_storage() -> Theme {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| Theme::parse(&s))
        .unwrap_or_default()
}

fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        if let Err(e) = storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("Failed to persist theme: {:?}", e);
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Context initialised from the stored preference
    pub fn from_storage() -> Self {
        Self {
            theme: RwSignal::new(load_theme_from_storage()),
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme_to_storage(theme);
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }

    pub fn is_dark(&self) -> bool {
        self.theme.get().is_dark()
    }
}

/// Theme context, or a fresh one read from storage when none was provided.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| {
        log::warn!("ThemeContext not provided, creating a local one");
        ThemeContext::from_storage()
    })
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="button button--icon theme-toggle"
            title=move || if ctx.is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
            on:click=move |_| ctx.toggle()
        >
            {move || if ctx.is_dark() { icon("sun") } else { icon("moon") }}
        </button>
    }
}
