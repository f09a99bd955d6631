use contracts::domain::a001_product::aggregate::ProductDto;
use serde_json::Value;

use crate::shared::api::Item;
use crate::shared::form::{non_empty, number_text, opt_text, optional, required, EntityForm};

/// Product form as typed by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub sku: String,
    pub description: String,
    pub price: String,
    pub compare_at_price: String,
    pub stock: String,
    pub low_stock_threshold: String,
}

impl EntityForm for ProductForm {
    const SINGULAR: &'static str = "Product";

    fn from_item(item: Option<&Item>) -> Self {
        let Some(item) = item else {
            return Self::default();
        };
        Self {
            name: item.text("name"),
            sku: item.text("sku"),
            description: opt_text(item.str("description")),
            price: number_text(item, "price"),
            compare_at_price: number_text(item, "compare_at_price"),
            stock: number_text(item, "stock"),
            low_stock_threshold: number_text(item, "low_stock_threshold"),
        }
    }

    fn to_payload(&self) -> Result<Value, String> {
        serde_json::to_value(self.to_dto()?).map_err(|e| e.to_string())
    }
}

impl ProductForm {
    pub fn to_dto(&self) -> Result<ProductDto, String> {
        let dto = ProductDto {
            name: self.name.clone(),
            sku: self.sku.clone(),
            description: non_empty(&self.description),
            price: required(&self.price, "Price must be a non-negative number")?,
            compare_at_price: optional(
                &self.compare_at_price,
                "Compare-at price must be a non-negative number",
            )?,
            stock: required(&self.stock, "Stock must be a whole number")?,
            low_stock_threshold: optional(
                &self.low_stock_threshold,
                "Low stock threshold must be a whole number",
            )?,
        }
        .normalized();
        dto.validate()?;
        Ok(dto)
    }
}
