use crate::pages::inventory::InventoryPage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Routes};
use leptos_router::path;

pub const INVENTORY_PATH: &str = "/admin/inventory";

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1>"Page not found"</h1>
            <a href=INVENTORY_PATH>"Back to inventory"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFound /> }>
            <Route path=path!("/admin/inventory") view=InventoryPage />
            <Route path=path!("/admin") view=|| view! { <Redirect path=INVENTORY_PATH /> } />
            <Route path=path!("/") view=|| view! { <Redirect path=INVENTORY_PATH /> } />
        </Routes>
    }
}
