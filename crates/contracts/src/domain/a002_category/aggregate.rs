use serde::{Deserialize, Serialize};

use crate::domain::common::{non_blank, AggregateRoot, EntityMetadata};

crate::uuid_id!(
    /// Unique category identifier
    CategoryId
);

/// Product grouping shown in the storefront navigation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    /// Position in navigation, ascending
    pub display_order: i32,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Category {
    pub fn new_for_insert(dto: CategoryDto) -> Self {
        let dto = dto.normalized();
        Self {
            id: CategoryId::new_v4(),
            name: dto.name,
            description: dto.description,
            display_order: dto.display_order,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn update(&mut self, dto: CategoryDto) {
        let dto = dto.normalized();
        self.name = dto.name;
        self.description = dto.description;
        self.display_order = dto.display_order;
        self.metadata.touch();
    }
}

impl AggregateRoot for Category {
    type Id = CategoryId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "categories"
    }

    fn element_name() -> &'static str {
        "Category"
    }

    fn list_name() -> &'static str {
        "Categories"
    }
}

/// Create/update payload for a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CategoryDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

impl CategoryDto {
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: non_blank(self.description),
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_name() {
        let dto = CategoryDto::default();
        assert_eq!(dto.validate().unwrap_err(), "Name is required");
    }

    #[test]
    fn test_display_order_defaults_to_zero_when_missing() {
        let dto: CategoryDto = serde_json::from_value(serde_json::json!({ "name": "Lighting" })).unwrap();
        assert_eq!(dto.display_order, 0);
        assert_eq!(dto.description, None);
    }

    #[test]
    fn test_naming() {
        assert_eq!(Category::table_name(), "a002_category");
        assert_eq!(Category::endpoint(), "/api/admin/categories");
    }
}
