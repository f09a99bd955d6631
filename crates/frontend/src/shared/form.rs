//! Parsing of raw form input into typed DTO fields.
//!
//! Blank optional inputs become `None`; anything unparsable yields the
//! caller's message.

use leptos::prelude::*;
use serde_json::Value;
use std::str::FromStr;

use crate::shared::api::Item;
use crate::shared::modal::confirm;

/// Form of one entity type, edited as text
pub trait EntityForm: Clone + Default + Send + Sync + 'static {
    /// "Product", used in titles and the delete confirmation
    const SINGULAR: &'static str;

    fn from_item(item: Option<&Item>) -> Self;

    /// Validated request body, or the first validation message.
    fn to_payload(&self) -> Result<Value, String>;
}

/// State and commands of an entity modal
pub struct FormViewModel<F: EntityForm> {
    pub form: RwSignal<F>,
    pub error: RwSignal<Option<String>>,
    item_id: Option<String>,
}

impl<F: EntityForm> Clone for FormViewModel<F> {
    fn clone(&self) -> Self {
        Self {
            form: self.form,
            error: self.error,
            item_id: self.item_id.clone(),
        }
    }
}

impl<F: EntityForm> FormViewModel<F> {
    pub fn new(item: Option<&Item>) -> Self {
        Self {
            form: RwSignal::new(F::from_item(item)),
            error: RwSignal::new(None),
            item_id: item.and_then(Item::id),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.item_id.is_some()
    }

    pub fn title(&self) -> String {
        let verb = if self.is_edit_mode() { "Edit" } else { "Add" };
        format!("{} {}", verb, F::SINGULAR)
    }

    /// Emits the payload only when the form is valid.
    pub fn save_command(&self, on_submit: Callback<Value>) {
        match self.form.with_untracked(F::to_payload) {
            Ok(payload) => {
                self.error.set(None);
                on_submit.run(payload);
            }
            Err(message) => self.error.set(Some(message)),
        }
    }

    /// Asks for confirmation, then emits the edited item's id.
    pub fn delete_command(&self, on_delete: Callback<String>) {
        let Some(id) = self.item_id.clone() else {
            return;
        };
        let message = format!(
            "Are you sure you want to delete this {}?",
            F::SINGULAR.to_lowercase()
        );
        if confirm(&message) {
            on_delete.run(id);
        }
    }
}

pub fn required<T: FromStr>(raw: &str, message: &str) -> Result<T, String> {
    raw.trim().parse().map_err(|_| message.to_string())
}

pub fn optional<T: FromStr>(raw: &str, message: &str) -> Result<Option<T>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse().map(Some).map_err(|_| message.to_string())
}

/// Blank input falls back to `default`.
pub fn or_default<T: FromStr>(raw: &str, default: T, message: &str) -> Result<T, String> {
    Ok(optional(raw, message)?.unwrap_or(default))
}

/// Numeric field as input text; null and missing give an empty input.
pub fn number_text(item: &Item, field: &str) -> String {
    match item.get(field) {
        Some(Value::Null) | None => String::new(),
        Some(_) => item.text(field),
    }
}

pub fn opt_text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

pub fn non_empty(raw: &str) -> Option<String> {
    Some(raw.trim().to_string()).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert_eq!(required::<f64>(" 9.5 ", "bad"), Ok(9.5));
        assert_eq!(required::<f64>("", "Price is required"), Err("Price is required".to_string()));
        assert_eq!(required::<i64>("1.5", "bad"), Err("bad".to_string()));
    }

    #[test]
    fn test_optional() {
        assert_eq!(optional::<i64>("  ", "bad"), Ok(None));
        assert_eq!(optional::<i64>("4", "bad"), Ok(Some(4)));
        assert_eq!(optional::<i64>("four", "bad"), Err("bad".to_string()));
        assert_eq!(or_default::<i32>("", 0, "bad"), Ok(0));
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  "), None);
        assert_eq!(non_empty(" x "), Some("x".to_string()));
    }
}
