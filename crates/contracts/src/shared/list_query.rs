//! Paging, sorting and search parameters for the admin list endpoints.
//!
//! The frontend serializes [`ListQuery`] into the query string of
//! `GET {endpoint}`; the backend deserializes it, calls [`ListQuery::normalized`]
//! and answers with a [`ListResponse`].

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }

    pub fn is_ascending(&self) -> bool {
        matches!(self, SortDirection::Asc)
    }
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_dir: SortDirection,
    /// Free-text search term
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
            sort_by: None,
            sort_dir: SortDirection::default(),
            q: None,
        }
    }
}

impl ListQuery {
    /// Clamp paging into range and drop blank sort/search values.
    pub fn normalized(self) -> Self {
        Self {
            page: self.page.max(1),
            page_size: self.page_size.clamp(1, MAX_PAGE_SIZE),
            sort_by: self
                .sort_by
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            sort_dir: self.sort_dir,
            q: self
                .q
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }

    /// Row offset of the first item on the requested page
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1) * self.page_size
    }
}

/// One page of a list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

impl<T> ListResponse<T> {
    pub fn new(items: Vec<T>, total_count: u64, query: &ListQuery) -> Self {
        Self {
            items,
            total_count,
            page: query.page,
            page_size: query.page_size,
            total_pages: Self::total_pages_for(total_count, query.page_size),
        }
    }

    /// Number of pages needed for `total_count` rows; an empty list still has one page.
    pub fn total_pages_for(total_count: u64, page_size: u64) -> u64 {
        if page_size == 0 {
            return 1;
        }
        total_count.div_ceil(page_size).max(1)
    }
}
