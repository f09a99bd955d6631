use contracts::domain::a003_manufacturer::aggregate::ManufacturerDto;
use serde_json::Value;

use crate::shared::api::Item;
use crate::shared::form::{non_empty, opt_text, EntityForm};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManufacturerForm {
    pub name: String,
    pub code: String,
    pub contact_info: String,
}

impl EntityForm for ManufacturerForm {
    const SINGULAR: &'static str = "Manufacturer";

    fn from_item(item: Option<&Item>) -> Self {
        let Some(item) = item else {
            return Self::default();
        };
        Self {
            name: item.text("name"),
            code: item.text("code"),
            contact_info: opt_text(item.str("contact_info")),
        }
    }

    fn to_payload(&self) -> Result<Value, String> {
        serde_json::to_value(self.to_dto()?).map_err(|e| e.to_string())
    }
}

impl ManufacturerForm {
    pub fn to_dto(&self) -> Result<ManufacturerDto, String> {
        let dto = ManufacturerDto {
            name: self.name.clone(),
            code: self.code.clone(),
            contact_info: non_empty(&self.contact_info),
        }
        .normalized();
        dto.validate()?;
        Ok(dto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_item_tolerates_nulls() {
        let item = Item::from_value(json!({"id": 3, "name": "Acme", "code": "ACM", "contact_info": null})).unwrap();
        let form = ManufacturerForm::from_item(Some(&item));
        assert_eq!(form.code, "ACM");
        assert_eq!(form.contact_info, "");
    }

    #[test]
    fn test_payload() {
        let form = ManufacturerForm {
            name: " Acme ".into(),
            code: "ACM".into(),
            contact_info: "  ".into(),
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(payload["name"], json!("Acme"));
        assert!(payload.get("contact_info").map_or(true, Value::is_null));
    }

    #[test]
    fn test_code_is_required() {
        let form = ManufacturerForm {
            name: "Acme".into(),
            ..ManufacturerForm::default()
        };
        assert_eq!(form.to_dto().unwrap_err(), "Code is required");
    }
}
