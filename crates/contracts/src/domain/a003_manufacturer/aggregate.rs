use serde::{Deserialize, Serialize};

use crate::domain::common::{non_blank, AggregateRoot, EntityMetadata};

crate::uuid_id!(
    /// Unique manufacturer identifier
    ManufacturerId
);

/// Brand or maker of catalog products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub id: ManufacturerId,
    pub name: String,
    /// Short business code, unique among live manufacturers
    pub code: String,
    pub contact_info: Option<String>,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Manufacturer {
    pub fn new_for_insert(dto: ManufacturerDto) -> Self {
        let dto = dto.normalized();
        Self {
            id: ManufacturerId::new_v4(),
            name: dto.name,
            code: dto.code,
            contact_info: dto.contact_info,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn update(&mut self, dto: ManufacturerDto) {
        let dto = dto.normalized();
        self.name = dto.name;
        self.code = dto.code;
        self.contact_info = dto.contact_info;
        self.metadata.touch();
    }
}

impl AggregateRoot for Manufacturer {
    type Id = ManufacturerId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "manufacturers"
    }

    fn element_name() -> &'static str {
        "Manufacturer"
    }

    fn list_name() -> &'static str {
        "Manufacturers"
    }
}

/// Create/update payload for a manufacturer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ManufacturerDto {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub contact_info: Option<String>,
}

impl ManufacturerDto {
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            code: self.code.trim().to_string(),
            contact_info: non_blank(self.contact_info),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        if self.code.trim().is_empty() {
            return Err("Code is required".into());
        }
        Ok(())
    }
}
