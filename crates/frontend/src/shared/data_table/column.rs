use contracts::shared::list_query::SortDirection;
use serde_json::Value;

use crate::shared::api::Item;

/// Rendered content of one table cell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    /// Muted second value next to the main one (struck-through old price)
    pub secondary: Option<String>,
    pub class: Option<&'static str>,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_secondary(mut self, secondary: impl Into<String>) -> Self {
        self.secondary = Some(secondary.into());
        self
    }

    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }
}

/// Formats a field value; receives the whole row for dependent fields.
pub type CellFormatter = fn(&Value, &Item) -> Cell;

#[derive(Clone, Copy)]
pub struct ColumnDef {
    pub field: &'static str,
    pub label: &'static str,
    pub format: Option<CellFormatter>,
}

impl ColumnDef {
    pub const fn plain(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            format: None,
        }
    }

    pub const fn formatted(field: &'static str, label: &'static str, format: CellFormatter) -> Self {
        Self {
            field,
            label,
            format: Some(format),
        }
    }

    pub fn render(&self, item: &Item) -> Cell {
        match (self.format, item.get(self.field)) {
            (Some(format), Some(value)) => format(value, item),
            (Some(format), None) => format(&Value::Null, item),
            (None, _) => Cell::text(item.text(self.field)),
        }
    }
}

impl std::fmt::Debug for ColumnDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnDef")
            .field("field", &self.field)
            .field("label", &self.label)
            .field("formatted", &self.format.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOption {
    pub field: &'static str,
    pub direction: SortDirection,
    pub label: &'static str,
}

impl SortOption {
    pub const fn asc(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
            label,
        }
    }

    pub const fn desc(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
            label,
        }
    }

    /// Value of the `<option>` in the sort select: "price:desc".
    pub fn key(&self) -> String {
        format!("{}:{}", self.field, self.direction.as_str())
    }

    pub fn matches(&self, field: &str, direction: SortDirection) -> bool {
        self.field == field && self.direction == direction
    }
}

/// Inverse of [`SortOption::key`].
pub fn parse_sort_key(key: &str) -> Option<(String, SortDirection)> {
    let (field, dir) = key.rsplit_once(':')?;
    if field.is_empty() {
        return None;
    }
    Some((field.to_string(), SortDirection::parse(dir)?))
}
