use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::shared::theme::{use_theme, ThemeToggle};

/// Content wrapper class for a route: console pages vs storefront pages.
pub fn content_class(pathname: &str) -> &'static str {
    if pathname == "/admin" || pathname.starts_with("/admin/") {
        "admin-content"
    } else {
        "store-content"
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Frame around every routed page: header with the theme toggle, dark mode
/// class, and scroll reset on navigation.
#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    let theme = use_theme();
    let location = use_location();
    let pathname = location.pathname;

    Effect::new(move |prev: Option<String>| {
        let current = pathname.get();
        if prev.as_deref() != Some(current.as_str()) {
            scroll_to_top();
        }
        current
    });

    view! {
        <div class="app-layout" class:dark-mode=move || theme.is_dark()>
            <header class="app-header">
                <a class="app-header__brand" href="/admin/inventory">"Catalog Admin"</a>
                <ThemeToggle />
            </header>
            <main class=move || content_class(&pathname.get())>
                {children()}
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_class() {
        assert_eq!(content_class("/admin"), "admin-content");
        assert_eq!(content_class("/admin/inventory"), "admin-content");
        assert_eq!(content_class("/administrator"), "store-content");
        assert_eq!(content_class("/"), "store-content");
    }
}
