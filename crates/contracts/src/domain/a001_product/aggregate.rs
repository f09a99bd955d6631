use serde::{Deserialize, Serialize};

use crate::domain::common::{non_blank, AggregateRoot, EntityMetadata};

// ============================================================================
// ID Type
// ============================================================================

crate::uuid_id!(
    /// Unique product identifier
    ProductId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Sellable catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Stock keeping unit, unique among live products
    pub sku: String,
    pub description: Option<String>,
    pub price: f64,
    /// Previous price, shown struck through next to `price`
    pub compare_at_price: Option<f64>,
    pub stock: i64,
    /// Stock at or below this level is highlighted in the admin table
    pub low_stock_threshold: Option<i64>,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Product {
    /// Build a new product for insertion from a validated form
    pub fn new_for_insert(dto: ProductDto) -> Self {
        let dto = dto.normalized();
        Self {
            id: ProductId::new_v4(),
            name: dto.name,
            sku: dto.sku,
            description: dto.description,
            price: dto.price,
            compare_at_price: dto.compare_at_price,
            stock: dto.stock,
            low_stock_threshold: dto.low_stock_threshold,
            metadata: EntityMetadata::new(),
        }
    }

    /// Apply form data to an existing product
    pub fn update(&mut self, dto: ProductDto) {
        let dto = dto.normalized();
        self.name = dto.name;
        self.sku = dto.sku;
        self.description = dto.description;
        self.price = dto.price;
        self.compare_at_price = dto.compare_at_price;
        self.stock = dto.stock;
        self.low_stock_threshold = dto.low_stock_threshold;
        self.metadata.touch();
    }

    pub fn is_low_on_stock(&self) -> bool {
        self.stock <= self.low_stock_threshold.unwrap_or(0)
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "products"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/update payload for a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProductDto {
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub compare_at_price: Option<f64>,
    pub stock: i64,
    #[serde(default)]
    pub low_stock_threshold: Option<i64>,
}

impl ProductDto {
    /// Trimmed copy with blank optional text mapped to `None`
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            sku: self.sku.trim().to_string(),
            description: non_blank(self.description),
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        if self.sku.trim().is_empty() {
            return Err("SKU is required".into());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err("Price must be a non-negative number".into());
        }
        if let Some(compare_at) = self.compare_at_price {
            if !compare_at.is_finite() || compare_at < 0.0 {
                return Err("Compare-at price must be a non-negative number".into());
            }
        }
        if self.stock < 0 {
            return Err("Stock cannot be negative".into());
        }
        if matches!(self.low_stock_threshold, Some(t) if t < 0) {
            return Err("Low stock threshold cannot be negative".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> ProductDto {
        ProductDto {
            name: "Desk Lamp".into(),
            sku: "LAMP-01".into(),
            description: None,
            price: 49.9,
            compare_at_price: Some(59.9),
            stock: 12,
            low_stock_threshold: Some(5),
        }
    }

    #[test]
    fn test_valid_dto_passes() {
        assert!(dto().validate().is_ok());
    }

    #[test]
    fn test_validation_messages() {
        let mut d = dto();
        d.name = "  ".into();
        assert_eq!(d.validate().unwrap_err(), "Name is required");

        let mut d = dto();
        d.sku = String::new();
        assert_eq!(d.validate().unwrap_err(), "SKU is required");

        let mut d = dto();
        d.price = -1.0;
        assert!(d.validate().is_err());

        let mut d = dto();
        d.compare_at_price = Some(f64::NAN);
        assert!(d.validate().is_err());

        let mut d = dto();
        d.stock = -3;
        assert_eq!(d.validate().unwrap_err(), "Stock cannot be negative");
    }

    #[test]
    fn test_new_for_insert_normalizes_text() {
        let mut d = dto();
        d.name = "  Desk Lamp ".into();
        d.description = Some("   ".into());
        let product = Product::new_for_insert(d);
        assert_eq!(product.name, "Desk Lamp");
        assert_eq!(product.description, None);
        assert_eq!(product.metadata.version, 0);
    }

    #[test]
    fn test_update_touches_metadata() {
        let mut product = Product::new_for_insert(dto());
        let mut d = dto();
        d.stock = 2;
        product.update(d);
        assert_eq!(product.stock, 2);
        assert_eq!(product.metadata.version, 1);
        assert!(product.is_low_on_stock());
    }

    #[test]
    fn test_serialized_shape_is_flat() {
        let product = Product::new_for_insert(dto());
        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("id").and_then(|v| v.as_str()).is_some());
        assert_eq!(json["compare_at_price"], serde_json::json!(59.9));
        assert_eq!(json["low_stock_threshold"], serde_json::json!(5));
        assert!(json.get("created_at").is_some());
    }

    #[test]
    fn test_naming() {
        assert_eq!(Product::table_name(), "a001_product");
        assert_eq!(Product::endpoint(), "/api/admin/products");
    }
}
