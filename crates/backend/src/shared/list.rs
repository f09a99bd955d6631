//! Helpers for the paginated admin list endpoints.

use contracts::shared::list_query::SortDirection;
use sea_orm::sea_query::{Expr, IntoColumnRef, LikeExpr, SimpleExpr};
use sea_orm::Order;

/// Sort column for a request; anything outside `allowed` falls back to `default`.
pub fn resolve_sort<'a>(requested: Option<&str>, allowed: &[&'a str], default: &'a str) -> &'a str {
    requested
        .and_then(|field| allowed.iter().copied().find(|a| *a == field))
        .unwrap_or(default)
}

/// Escape LIKE wildcards for SQLite: %, _ and the escape char itself.
/// Used with ESCAPE '\'.
pub fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '%' => out.push_str("\\%"),
            '_' => out.push_str("\\_"),
            _ => out.push(ch),
        }
    }
    out
}

/// Substring pattern for a search term.
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term))
}

/// `column LIKE pattern ESCAPE '\'`
pub fn like_escaped(column: impl IntoColumnRef, pattern: &str) -> SimpleExpr {
    Expr::col(column).like(LikeExpr::new(pattern).escape('\\'))
}

pub fn order_for(direction: SortDirection) -> Order {
    if direction.is_ascending() {
        Order::Asc
    } else {
        Order::Desc
    }
}
