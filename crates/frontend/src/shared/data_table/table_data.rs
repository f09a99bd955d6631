//! Paging, sorting, search and fetch state of one data table.
//!
//! [`TableState`] is plain data with synchronous transitions. [`TableData`]
//! wraps it in a signal and runs the list requests.

use contracts::shared::list_query::{ListQuery, ListResponse, SortDirection, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use leptos::prelude::*;

use crate::shared::api::{ApiError, Item, SharedApi};

const PAGE_SIZE_STORAGE_KEY: &str = "catalog-admin-page-size";

/// Outcome of [`TableState::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Done,
    /// A newer fetch was issued; the response was ignored
    Stale,
    /// The requested page no longer exists; `page` now points at the last one
    PageOutOfRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    pub endpoint: String,

    // pagination, 1-based
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub total_count: u64,

    // server sorting, None = backend default order
    pub sort: Option<(String, SortDirection)>,
    pub search: String,

    pub items: Vec<Item>,
    pub is_loading: bool,
    pub error: Option<ApiError>,

    /// Id of the latest issued fetch
    seq: u64,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_pages: 1,
            total_count: 0,
            sort: None,
            search: String::new(),
            items: Vec::new(),
            is_loading: false,
            error: None,
            seq: 0,
        }
    }
}

impl TableState {
    pub fn new(page_size: u64) -> Self {
        Self {
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
            ..Self::default()
        }
    }

    pub fn query(&self) -> ListQuery {
        let (sort_by, sort_dir) = match &self.sort {
            Some((field, dir)) => (Some(field.clone()), *dir),
            None => (None, SortDirection::default()),
        };
        ListQuery {
            page: self.page,
            page_size: self.page_size,
            sort_by,
            sort_dir,
            q: Some(self.search.trim().to_string()).filter(|q| !q.is_empty()),
        }
    }

    /// Start over for another endpoint. Page size is kept.
    ///
    /// Returns false when the endpoint is unchanged.
    pub fn reset_for_endpoint(&mut self, endpoint: &str) -> bool {
        if self.endpoint == endpoint {
            return false;
        }
        *self = Self {
            endpoint: endpoint.to_string(),
            page_size: self.page_size,
            seq: self.seq,
            ..Self::default()
        };
        true
    }

    pub fn set_page(&mut self, page: u64) -> bool {
        let page = page.clamp(1, self.total_pages.max(1));
        if page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    pub fn set_page_size(&mut self, page_size: u64) -> bool {
        let page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        if page_size == self.page_size {
            return false;
        }
        self.page_size = page_size;
        self.page = 1;
        true
    }

    pub fn set_sort(&mut self, sort: Option<(String, SortDirection)>) -> bool {
        if sort == self.sort {
            return false;
        }
        self.sort = sort;
        self.page = 1;
        true
    }

    pub fn set_search(&mut self, term: &str) -> bool {
        let term = term.trim();
        if term == self.search {
            return false;
        }
        self.search = term.to_string();
        self.page = 1;
        true
    }

    /// Mark a request as issued; returns its sequence number and query.
    pub fn begin_fetch(&mut self) -> (u64, ListQuery) {
        self.seq += 1;
        self.is_loading = true;
        self.error = None;
        (self.seq, self.query())
    }

    /// Apply a list response. Responses of superseded fetches are dropped.
    ///
    /// A page past the end (rows were deleted meanwhile) moves to the last
    /// page and asks for a refetch.
    pub fn apply(&mut self, seq: u64, result: Result<ListResponse<Item>, ApiError>) -> Applied {
        if seq != self.seq {
            return Applied::Stale;
        }
        self.is_loading = false;
        match result {
            Ok(resp) => {
                self.items = resp.items;
                self.total_count = resp.total_count;
                self.total_pages = resp.total_pages.max(1);
                self.page = resp.page.max(1);
                self.error = None;
                if self.total_count > 0 && self.page > self.total_pages {
                    self.page = self.total_pages;
                    return Applied::PageOutOfRange;
                }
            }
            Err(e) => {
                self.items.clear();
                self.error = Some(e);
            }
        }
        Applied::Done
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

fn load_page_size() -> u64 {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(PAGE_SIZE_STORAGE_KEY).ok().flatten())
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_PAGE_SIZE)
}

fn save_page_size(page_size: u64) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return;
    };
    let _ = storage.set_item(PAGE_SIZE_STORAGE_KEY, &page_size.to_string());
}

/// Reactive data source of a table
#[derive(Clone, Copy)]
pub struct TableData {
    pub state: RwSignal<TableState>,
    api: StoredValue<SharedApi>,
}

impl TableData {
    pub fn new(api: SharedApi) -> Self {
        Self {
            state: RwSignal::new(TableState::new(load_page_size())),
            api: StoredValue::new(api),
        }
    }

    pub fn api(&self) -> SharedApi {
        self.api.get_value()
    }

    /// Request the current page; the previous request, if any, is superseded.
    pub fn fetch(&self) {
        let Some((seq, query, endpoint)) = self.state.try_update(|s| {
            let (seq, query) = s.begin_fetch();
            (seq, query, s.endpoint.clone())
        }) else {
            return;
        };
        if endpoint.is_empty() {
            return;
        }

        log::debug!("fetch #{} {} {:?}", seq, endpoint, query);
        let api = self.api();
        let data = *self;
        leptos::task::spawn_local(async move {
            let result = api.list(&endpoint, &query).await;
            if let Err(e) = &result {
                log::error!("Failed to load {}: {}", endpoint, e);
            }
            match data.state.try_update(|s| s.apply(seq, result)) {
                Some(Applied::Stale) => {
                    log::debug!("dropped stale response #{} for {}", seq, endpoint);
                }
                Some(Applied::PageOutOfRange) => {
                    log::debug!("page #{} past the end of {}, reloading last page", seq, endpoint);
                    data.fetch();
                }
                _ => {}
            }
        });
    }

    pub fn refresh(&self) {
        self.fetch();
    }

    /// Reset paging/sort/search and load the new endpoint.
    pub fn switch_endpoint(&self, endpoint: &str) {
        if self.state.try_update(|s| s.reset_for_endpoint(endpoint)) == Some(true) {
            self.fetch();
        }
    }

    pub fn set_page(&self, page: u64) {
        if self.state.try_update(|s| s.set_page(page)) == Some(true) {
            self.fetch();
        }
    }

    pub fn set_page_size(&self, page_size: u64) {
        if self.state.try_update(|s| s.set_page_size(page_size)) == Some(true) {
            save_page_size(self.state.with_untracked(|s| s.page_size));
            self.fetch();
        }
    }

    pub fn set_sort(&self, sort: Option<(String, SortDirection)>) {
        if self.state.try_update(|s| s.set_sort(sort)) == Some(true) {
            self.fetch();
        }
    }

    pub fn set_search(&self, term: String) {
        if self.state.try_update(|s| s.set_search(&term)) == Some(true) {
            self.fetch();
        }
    }
}

/// Table data following `endpoint`: every change resets the state and refetches.
pub fn use_table_data(api: SharedApi, endpoint: Signal<&'static str>) -> TableData {
    let data = TableData::new(api);
    Effect::new(move |_| {
        let endpoint = endpoint.get();
        data.switch_endpoint(endpoint);
    });
    data
}
