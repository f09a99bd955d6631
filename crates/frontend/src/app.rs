use crate::layout::AdminLayout;
use crate::routes::routes::AppRoutes;
use crate::shared::api::{HttpCatalogApi, SharedApi};
use crate::shared::theme::ThemeContext;
use crate::shared::toast::{ToastService, Toaster};
use leptos::prelude::*;
use leptos_router::components::Router;
use std::sync::Arc;

#[component]
pub fn App() -> impl IntoView {
    provide_context(ThemeContext::from_storage());
    provide_context(ToastService::new());

    let http = HttpCatalogApi::from_location();
    log::info!("catalog api at {}", http.base());
    let api: SharedApi = Arc::new(http);
    provide_context(api);

    view! {
        <Router>
            <AdminLayout>
                <AppRoutes />
            </AdminLayout>
        </Router>
        <Toaster />
    }
}
