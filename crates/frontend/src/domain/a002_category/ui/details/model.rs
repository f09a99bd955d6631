use contracts::domain::a002_category::aggregate::CategoryDto;
use serde_json::Value;

use crate::shared::api::Item;
use crate::shared::form::{non_empty, number_text, opt_text, or_default, EntityForm};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForm {
    pub name: String,
    pub description: String,
    /// Blank means 0
    pub display_order: String,
}

impl EntityForm for CategoryForm {
    const SINGULAR: &'static str = "Category";

    fn from_item(item: Option<&Item>) -> Self {
        let Some(item) = item else {
            return Self::default();
        };
        Self {
            name: item.text("name"),
            description: opt_text(item.str("description")),
            display_order: number_text(item, "display_order"),
        }
    }

    fn to_payload(&self) -> Result<Value, String> {
        serde_json::to_value(self.to_dto()?).map_err(|e| e.to_string())
    }
}

impl CategoryForm {
    pub fn to_dto(&self) -> Result<CategoryDto, String> {
        let dto = CategoryDto {
            name: self.name.clone(),
            description: non_empty(&self.description),
            display_order: or_default(&self.display_order, 0, "Display order must be a whole number")?,
        }
        .normalized();
        dto.validate()?;
        Ok(dto)
    }
}
