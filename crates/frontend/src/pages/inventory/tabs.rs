//! Entity tabs of the inventory panel and their table configuration.

use serde_json::Value;

use crate::shared::api::{value_as_f64, value_text, Item};
use crate::shared::data_table::{Cell, ColumnDef, SortOption};
use crate::shared::format::format_currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntityKind {
    #[default]
    Products,
    Categories,
    Manufacturers,
}

#[derive(Debug)]
pub struct TabDefinition {
    pub title: &'static str,
    pub singular_title: &'static str,
    /// Bootstrap icon class
    pub icon: &'static str,
    pub endpoint: &'static str,
    pub columns: &'static [ColumnDef],
    pub sort_options: &'static [SortOption],
}

impl EntityKind {
    /// Tab bar order
    pub const ALL: [EntityKind; 3] = [
        EntityKind::Products,
        EntityKind::Categories,
        EntityKind::Manufacturers,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            EntityKind::Products => "products",
            EntityKind::Categories => "categories",
            EntityKind::Manufacturers => "manufacturers",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == key)
    }

    pub fn definition(&self) -> &'static TabDefinition {
        match self {
            EntityKind::Products => &PRODUCTS,
            EntityKind::Categories => &CATEGORIES,
            EntityKind::Manufacturers => &MANUFACTURERS,
        }
    }
}

/// Price with the compare-at price struck through next to it, when set.
fn format_price(value: &Value, item: &Item) -> Cell {
    let price = value_as_f64(value).unwrap_or(0.0);
    let cell = Cell::text(format_currency(price));
    match item.f64("compare_at_price") {
        Some(compare_at) if compare_at != 0.0 => cell.with_secondary(format_currency(compare_at)),
        _ => cell,
    }
}

/// Stock level, flagged when at or below the low-stock threshold (default 0).
fn format_stock(value: &Value, item: &Item) -> Cell {
    let stock = value_as_f64(value).unwrap_or(0.0);
    let threshold = item.f64("low_stock_threshold").unwrap_or(0.0);
    let cell = Cell::text(value_text(value));
    if stock <= threshold {
        cell.with_class("text-warning")
    } else {
        cell
    }
}

static PRODUCTS: TabDefinition = TabDefinition {
    title: "Products",
    singular_title: "Product",
    icon: "bi-box-seam",
    endpoint: "/api/admin/products",
    columns: &[
        ColumnDef::plain("name", "Name"),
        ColumnDef::formatted("price", "Price", format_price),
        ColumnDef::formatted("stock", "Stock", format_stock),
        ColumnDef::plain("sku", "SKU"),
    ],
    sort_options: &[
        SortOption::asc("name", "Name (A-Z)"),
        SortOption::desc("name", "Name (Z-A)"),
        SortOption::asc("price", "Price (Low-High)"),
        SortOption::desc("price", "Price (High-Low)"),
        SortOption::asc("stock", "Stock (Low-High)"),
        SortOption::desc("stock", "Stock (High-Low)"),
    ],
};

static CATEGORIES: TabDefinition = TabDefinition {
    title: "Categories",
    singular_title: "Category",
    icon: "bi-tags",
    endpoint: "/api/admin/categories",
    columns: &[
        ColumnDef::plain("name", "Name"),
        ColumnDef::plain("description", "Description"),
        ColumnDef::plain("display_order", "Display Order"),
    ],
    sort_options: &[
        SortOption::asc("name", "Name (A-Z)"),
        SortOption::desc("name", "Name (Z-A)"),
        SortOption::asc("display_order", "Display Order (Low-High)"),
        SortOption::desc("display_order", "Display Order (High-Low)"),
    ],
};

static MANUFACTURERS: TabDefinition = TabDefinition {
    title: "Manufacturers",
    singular_title: "Manufacturer",
    icon: "bi-building",
    endpoint: "/api/admin/manufacturers",
    columns: &[
        ColumnDef::plain("name", "Name"),
        ColumnDef::plain("code", "Code"),
        ColumnDef::plain("contact_info", "Contact Info"),
    ],
    sort_options: &[
        SortOption::asc("name", "Name (A-Z)"),
        SortOption::desc("name", "Name (Z-A)"),
        SortOption::asc("code", "Code (A-Z)"),
        SortOption::desc("code", "Code (Z-A)"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::aggregate::Product;
    use contracts::domain::a002_category::aggregate::Category;
    use contracts::domain::a003_manufacturer::aggregate::Manufacturer;
    use contracts::domain::common::AggregateRoot;
    use contracts::shared::list_query::SortDirection;
    use serde_json::json;
    use std::collections::HashSet;

    fn item(v: Value) -> Item {
        Item::from_value(v).unwrap()
    }

    fn column(kind: EntityKind, field: &str) -> &'static ColumnDef {
        kind.definition()
            .columns
            .iter()
            .find(|c| c.field == field)
            .unwrap()
    }

    #[test]
    fn test_keys_round_trip() {
        for kind in EntityKind::ALL {
            assert_eq!(EntityKind::from_key(kind.key()), Some(kind));
        }
        assert_eq!(EntityKind::from_key("attributes"), None);
        assert_eq!(EntityKind::default(), EntityKind::Products);
    }

    #[test]
    fn test_definitions_are_distinct() {
        let endpoints: HashSet<_> = EntityKind::ALL.iter().map(|k| k.definition().endpoint).collect();
        assert_eq!(endpoints.len(), 3);
        for kind in EntityKind::ALL {
            let def = kind.definition();
            assert!(def.endpoint.starts_with("/api/admin/"));
            assert!(def.endpoint.ends_with(kind.key()));
            assert!(!def.columns.is_empty());
            assert_eq!(def.columns[0].field, "name");
        }
    }

    fn naming_of<A: AggregateRoot>() -> (String, &'static str, &'static str) {
        (A::endpoint(), A::list_name(), A::element_name())
    }

    #[test]
    fn test_definitions_follow_aggregate_naming() {
        for kind in EntityKind::ALL {
            let def = kind.definition();
            let (endpoint, title, singular) = match kind {
                EntityKind::Products => naming_of::<Product>(),
                EntityKind::Categories => naming_of::<Category>(),
                EntityKind::Manufacturers => naming_of::<Manufacturer>(),
            };
            assert_eq!(def.endpoint, endpoint);
            assert_eq!(def.title, title);
            assert_eq!(def.singular_title, singular);
        }
    }

    #[test]
    fn test_sort_options_are_paired() {
        for kind in EntityKind::ALL {
            let opts = kind.definition().sort_options;
            assert_eq!(opts.len() % 2, 0);
            for pair in opts.chunks(2) {
                assert_eq!(pair[0].field, pair[1].field);
                assert_eq!(pair[0].direction, SortDirection::Asc);
                assert_eq!(pair[1].direction, SortDirection::Desc);
            }
        }
    }

    #[test]
    fn test_registry_contents() {
        let products = EntityKind::Products.definition();
        assert_eq!(products.singular_title, "Product");
        assert_eq!(products.icon, "bi-box-seam");
        let labels: Vec<_> = products.columns.iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["Name", "Price", "Stock", "SKU"]);

        let manufacturers = EntityKind::Manufacturers.definition();
        assert_eq!(manufacturers.endpoint, "/api/admin/manufacturers");
        assert_eq!(manufacturers.sort_options[2].label, "Code (A-Z)");
        assert_eq!(EntityKind::Categories.definition().icon, "bi-tags");
    }

    #[test]
    fn test_price_cell() {
        let col = column(EntityKind::Products, "price");
        let plain = col.render(&item(json!({"price": 1234.5})));
        assert_eq!(plain.text, "$1,234.50");
        assert_eq!(plain.secondary, None);

        let discounted = col.render(&item(json!({"price": 8, "compare_at_price": 10})));
        assert_eq!(discounted.text, "$8.00");
        assert_eq!(discounted.secondary.as_deref(), Some("$10.00"));

        let zero = col.render(&item(json!({"price": 8, "compare_at_price": 0})));
        assert_eq!(zero.secondary, None);
    }

    #[test]
    fn test_stock_cell_warning() {
        let col = column(EntityKind::Products, "stock");
        let low = col.render(&item(json!({"stock": 3, "low_stock_threshold": 5})));
        assert_eq!(low.text, "3");
        assert_eq!(low.class, Some("text-warning"));

        let at = col.render(&item(json!({"stock": 5, "low_stock_threshold": 5})));
        assert_eq!(at.class, Some("text-warning"));

        let ok = col.render(&item(json!({"stock": 6, "low_stock_threshold": 5})));
        assert_eq!(ok.class, None);
    }

    #[test]
    fn test_stock_threshold_defaults_to_zero() {
        let col = column(EntityKind::Products, "stock");
        assert_eq!(col.render(&item(json!({"stock": 0}))).class, Some("text-warning"));
        assert_eq!(col.render(&item(json!({"stock": 1}))).class, None);
        assert_eq!(
            col.render(&item(json!({"stock": 1, "low_stock_threshold": null}))).class,
            None
        );
    }
}
