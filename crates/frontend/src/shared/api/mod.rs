//! REST access for the admin console.
//!
//! - `catalog.rs`: the [`CatalogApi`] adapter contract and its HTTP implementation
//! - `error.rs`: the normalized [`ApiError`]
//! - `item.rs`: the untyped row [`Item`]

mod catalog;
mod error;
mod item;

pub use catalog::{CatalogApi, HttpCatalogApi};
pub use error::ApiError;
pub use item::Item;
pub(crate) use item::{value_as_f64, value_text};

use leptos::prelude::*;
use std::sync::Arc;

/// Adapter handle kept in context; the HTTP client in the app, a mock in tests.
pub type SharedApi = Arc<dyn CatalogApi + Send + Sync>;

/// Adapter from context, or an HTTP client for the current location.
pub fn use_catalog_api() -> SharedApi {
    use_context::<SharedApi>().unwrap_or_else(|| Arc::new(HttpCatalogApi::from_location()))
}

/// Backend port; the API is served next to the page host on this port.
pub const API_PORT: u16 = 3000;

/// Base URL for API requests, e.g. "http://localhost:3000".
///
/// Empty when there is no window (unit tests), so URLs stay relative.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Join the base URL, an endpoint and an optional record id.
pub fn endpoint_url(base: &str, endpoint: &str, id: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    match id {
        Some(id) => format!("{}{}/{}", base, endpoint, urlencoding::encode(id)),
        None => format!("{}{}", base, endpoint),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url() {
        assert_eq!(
            endpoint_url("http://localhost:3000/", "/api/admin/products", None),
            "http://localhost:3000/api/admin/products"
        );
        assert_eq!(
            endpoint_url("", "/api/admin/products", Some("a b")),
            "/api/admin/products/a%20b"
        );
    }
}
