use axum::{routing::get, Router};
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_category::aggregate::Category;
use contracts::domain::a003_manufacturer::aggregate::Manufacturer;
use contracts::domain::common::AggregateRoot;

use crate::handlers;

/// Item route under a collection endpoint, e.g. "/api/admin/products/:id"
fn item_path<A: AggregateRoot>() -> String {
    format!("{}/:id", A::endpoint())
}

/// All HTTP routes of the catalog admin API
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Products
        .route(
            &Product::endpoint(),
            get(handlers::a001_product::list).post(handlers::a001_product::create),
        )
        .route(
            &item_path::<Product>(),
            get(handlers::a001_product::get_by_id)
                .put(handlers::a001_product::update)
                .delete(handlers::a001_product::delete),
        )
        // A002 Categories
        .route(
            &Category::endpoint(),
            get(handlers::a002_category::list).post(handlers::a002_category::create),
        )
        .route(
            &item_path::<Category>(),
            get(handlers::a002_category::get_by_id)
                .put(handlers::a002_category::update)
                .delete(handlers::a002_category::delete),
        )
        // A003 Manufacturers
        .route(
            &Manufacturer::endpoint(),
            get(handlers::a003_manufacturer::list).post(handlers::a003_manufacturer::create),
        )
        .route(
            &item_path::<Manufacturer>(),
            get(handlers::a003_manufacturer::get_by_id)
                .put(handlers::a003_manufacturer::update)
                .delete(handlers::a003_manufacturer::delete),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_paths() {
        assert_eq!(item_path::<Product>(), "/api/admin/products/:id");
        assert_eq!(item_path::<Category>(), "/api/admin/categories/:id");
        assert_eq!(item_path::<Manufacturer>(), "/api/admin/manufacturers/:id");
    }
}
