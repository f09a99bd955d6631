//! Transient state of the inventory panel and its create/update/delete flow.
//!
//! A mutation runs in three steps: `begin_*` checks the submit guard and
//! returns the [`Mutation`] to perform, [`execute`] performs the single
//! request, and [`PanelState::finish`] applies the outcome.

use serde_json::Value;

use super::tabs::EntityKind;
use crate::shared::api::{ApiError, CatalogApi, Item};

pub const SAVE_FAILED: &str = "Failed to save. Please try again.";
pub const DELETE_FAILED: &str = "Failed to delete. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Create { kind: EntityKind, data: Value },
    Update { kind: EntityKind, id: String, data: Value },
    Delete { kind: EntityKind, id: String },
}

impl Mutation {
    pub fn kind(&self) -> EntityKind {
        match self {
            Mutation::Create { kind, .. }
            | Mutation::Update { kind, .. }
            | Mutation::Delete { kind, .. } => *kind,
        }
    }

    /// Past-tense verb used in the success message
    pub fn action(&self) -> &'static str {
        match self {
            Mutation::Create { .. } => "created",
            Mutation::Update { .. } => "updated",
            Mutation::Delete { .. } => "deleted",
        }
    }

    fn is_delete(&self) -> bool {
        matches!(self, Mutation::Delete { .. })
    }
}

/// User feedback for a finished mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(m) | Notice::Error(m) => m,
        }
    }

    /// Rows are reloaded only after a successful mutation.
    pub fn should_refresh(&self) -> bool {
        matches!(self, Notice::Success(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelState {
    pub active_tab: EntityKind,
    pub show_modal: bool,
    /// None while creating
    pub edit_item: Option<Item>,
    pub is_submitting: bool,
}

impl PanelState {
    /// Modal state is left as is.
    pub fn select_tab(&mut self, kind: EntityKind) {
        if self.active_tab != kind {
            log::debug!("tab {} -> {}", self.active_tab.key(), kind.key());
        }
        self.active_tab = kind;
    }

    pub fn open_create(&mut self) {
        self.edit_item = None;
        self.show_modal = true;
    }

    pub fn open_edit(&mut self, item: Option<Item>) {
        let Some(item) = item else {
            return;
        };
        self.edit_item = Some(item);
        self.show_modal = true;
    }

    pub fn close_modal(&mut self) {
        self.show_modal = false;
        self.edit_item = None;
    }

    /// Tab and item the modal should show. Hidden while the list failed to
    /// load; the modal state itself is kept until the user closes it.
    pub fn visible_modal(&self, load_failed: bool) -> Option<(EntityKind, Option<Item>)> {
        (self.show_modal && !load_failed).then(|| (self.active_tab, self.edit_item.clone()))
    }

    /// Create or update for the active tab, depending on the item being
    /// edited. `None` while another mutation is in flight.
    pub fn begin_submit(&mut self, data: Value) -> Option<Mutation> {
        if self.is_submitting {
            log::debug!("submit ignored: a request is already in flight");
            return None;
        }
        let kind = self.active_tab;
        let mutation = match &self.edit_item {
            None => Mutation::Create { kind, data },
            Some(item) => match item.id() {
                Some(id) => Mutation::Update { kind, id, data },
                None => {
                    log::error!("Failed to save: {} being edited has no id", kind.definition().singular_title);
                    return None;
                }
            },
        };
        self.is_submitting = true;
        Some(mutation)
    }

    /// `None` while another mutation is in flight.
    pub fn begin_delete(&mut self, id: String) -> Option<Mutation> {
        if self.is_submitting {
            log::debug!("delete ignored: a request is already in flight");
            return None;
        }
        self.is_submitting = true;
        Some(Mutation::Delete {
            kind: self.active_tab,
            id,
        })
    }

    /// Apply the outcome of `mutation`. A failure leaves the modal and the
    /// edited item untouched so the user can retry.
    pub fn finish(&mut self, mutation: &Mutation, result: Result<(), ApiError>) -> Notice {
        self.is_submitting = false;
        match result {
            Ok(()) => {
                self.close_modal();
                Notice::Success(format!(
                    "{} {} successfully",
                    mutation.kind().definition().singular_title,
                    mutation.action()
                ))
            }
            Err(e) => {
                let fallback = if mutation.is_delete() {
                    log::error!("Failed to delete: {}", e);
                    DELETE_FAILED
                } else {
                    log::error!("Failed to save: {}", e);
                    SAVE_FAILED
                };
                Notice::Error(e.user_message(fallback))
            }
        }
    }
}

/// Perform the request for `mutation` against its tab's endpoint.
pub async fn execute<A: CatalogApi + ?Sized>(api: &A, mutation: &Mutation) -> Result<(), ApiError> {
    let endpoint = mutation.kind().definition().endpoint;
    match mutation {
        Mutation::Create { data, .. } => api.create(endpoint, data).await.map(|_| ()),
        Mutation::Update { id, data, .. } => api.update(endpoint, id, data).await.map(|_| ()),
        Mutation::Delete { id, .. } => api.delete(endpoint, id).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use contracts::shared::list_query::{ListQuery, ListResponse};
    use serde_json::json;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List(String),
        Create(String, Value),
        Update(String, String, Value),
        Delete(String, String),
    }

    /// Records every call and answers with `fail` when set.
    #[derive(Default)]
    struct RecordingApi {
        calls: RefCell<Vec<Call>>,
        fail: Option<ApiError>,
    }

    impl RecordingApi {
        fn failing(err: ApiError) -> Self {
            Self {
                fail: Some(err),
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn answer<T>(&self, call: Call, ok: T) -> Result<T, ApiError> {
            self.calls.borrow_mut().push(call);
            match &self.fail {
                Some(e) => Err(e.clone()),
                None => Ok(ok),
            }
        }
    }

    #[async_trait(?Send)]
    impl CatalogApi for RecordingApi {
        async fn list(&self, endpoint: &str, query: &ListQuery) -> Result<ListResponse<Item>, ApiError> {
            self.answer(Call::List(endpoint.into()), ListResponse::new(vec![], 0, query))
        }

        async fn create(&self, endpoint: &str, data: &Value) -> Result<Item, ApiError> {
            self.answer(Call::Create(endpoint.into(), data.clone()), Item::default())
        }

        async fn update(&self, endpoint: &str, id: &str, data: &Value) -> Result<Item, ApiError> {
            self.answer(Call::Update(endpoint.into(), id.into(), data.clone()), Item::default())
        }

        async fn delete(&self, endpoint: &str, id: &str) -> Result<(), ApiError> {
            self.answer(Call::Delete(endpoint.into(), id.into()), ())
        }
    }

    fn product(id: &str) -> Item {
        Item::from_value(json!({"id": id, "name": "Desk Lamp", "sku": "LAMP-1"})).unwrap()
    }

    /// Runs the three steps the page runs; `None` when the guard dropped it.
    async fn submit(state: &mut PanelState, api: &RecordingApi, data: Value) -> Option<Notice> {
        let mutation = state.begin_submit(data)?;
        let result = execute(api, &mutation).await;
        Some(state.finish(&mutation, result))
    }

    async fn remove(state: &mut PanelState, api: &RecordingApi, id: &str) -> Option<Notice> {
        let mutation = state.begin_delete(id.to_string())?;
        let result = execute(api, &mutation).await;
        Some(state.finish(&mutation, result))
    }

    #[test]
    fn test_initial_state() {
        let state = PanelState::default();
        assert_eq!(state.active_tab, EntityKind::Products);
        assert!(!state.show_modal);
        assert!(state.edit_item.is_none());
        assert!(!state.is_submitting);
    }

    #[tokio::test]
    async fn test_create_calls_create_once_and_closes_modal() {
        let api = RecordingApi::default();
        let mut state = PanelState::default();
        state.open_create();

        let data = json!({"name": "Desk Lamp"});
        let notice = submit(&mut state, &api, data.clone()).await.unwrap();

        assert_eq!(api.calls(), vec![Call::Create("/api/admin/products".into(), data)]);
        assert_eq!(notice, Notice::Success("Product created successfully".into()));
        assert!(notice.should_refresh());
        assert!(!state.show_modal);
        assert!(state.edit_item.is_none());
        assert!(!state.is_submitting);
    }

    #[tokio::test]
    async fn test_update_uses_edited_item_id() {
        let api = RecordingApi::default();
        let mut state = PanelState::default();
        state.select_tab(EntityKind::Categories);
        state.open_edit(Some(product("cat-7")));

        let data = json!({"name": "Lighting"});
        let notice = submit(&mut state, &api, data.clone()).await.unwrap();

        assert_eq!(
            api.calls(),
            vec![Call::Update("/api/admin/categories".into(), "cat-7".into(), data)]
        );
        assert_eq!(notice.message(), "Category updated successfully");
        assert!(!state.show_modal);
        assert!(state.edit_item.is_none());
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_is_dropped() {
        let api = RecordingApi::default();
        let mut state = PanelState::default();
        state.open_create();

        let first = state.begin_submit(json!({"name": "A"})).unwrap();
        assert!(state.is_submitting);
        assert_eq!(state.begin_submit(json!({"name": "B"})), None);
        assert_eq!(state.begin_delete("x".into()), None);

        let result = execute(&api, &first).await;
        state.finish(&first, result);

        assert_eq!(api.calls().len(), 1);
        assert!(!state.is_submitting);
    }

    #[tokio::test]
    async fn test_delete_while_submitting_makes_no_call() {
        let api = RecordingApi::default();
        let mut state = PanelState {
            is_submitting: true,
            ..PanelState::default()
        };
        assert_eq!(remove(&mut state, &api, "p-1").await, None);
        assert!(api.calls().is_empty());
        assert!(state.is_submitting);
    }

    #[tokio::test]
    async fn test_delete_success() {
        let api = RecordingApi::default();
        let mut state = PanelState::default();
        state.select_tab(EntityKind::Manufacturers);
        state.open_edit(Some(product("m-1")));

        let notice = remove(&mut state, &api, "m-1").await.unwrap();

        assert_eq!(
            api.calls(),
            vec![Call::Delete("/api/admin/manufacturers".into(), "m-1".into())]
        );
        assert_eq!(notice.message(), "Manufacturer deleted successfully");
        assert!(!state.show_modal);
        assert!(state.edit_item.is_none());
        assert!(!state.is_submitting);
    }

    #[tokio::test]
    async fn test_save_failure_shows_server_message_and_keeps_modal() {
        let api = RecordingApi::failing(ApiError::from_status(409, Some("Duplicate SKU".into())));
        let mut state = PanelState::default();
        let item = product("p-1");
        state.open_edit(Some(item.clone()));

        let notice = submit(&mut state, &api, json!({"sku": "LAMP-1"})).await.unwrap();

        assert_eq!(notice, Notice::Error("Duplicate SKU".into()));
        assert!(!notice.should_refresh());
        assert!(state.show_modal);
        assert_eq!(state.edit_item, Some(item));
        assert!(!state.is_submitting);
    }

    #[tokio::test]
    async fn test_failure_without_message_uses_generic_text() {
        let api = RecordingApi::failing(ApiError::network("connection refused"));
        let mut state = PanelState::default();
        state.open_create();

        let notice = submit(&mut state, &api, json!({})).await.unwrap();
        assert_eq!(notice.message(), SAVE_FAILED);

        let notice = remove(&mut state, &api, "p-1").await.unwrap();
        assert_eq!(notice.message(), DELETE_FAILED);
        assert!(state.show_modal);
        assert!(!state.is_submitting);
    }

    #[test]
    fn test_open_edit_none_is_a_no_op() {
        let mut state = PanelState::default();
        state.open_edit(None);
        assert_eq!(state, PanelState::default());

        state.open_edit(Some(product("p-1")));
        state.open_edit(None);
        assert!(state.show_modal);
        assert_eq!(state.edit_item, Some(product("p-1")));
    }

    #[test]
    fn test_open_create_clears_edit_item() {
        let mut state = PanelState::default();
        state.open_edit(Some(product("p-1")));
        state.open_create();
        assert!(state.show_modal);
        assert!(state.edit_item.is_none());
    }

    #[test]
    fn test_close_modal() {
        let mut state = PanelState::default();
        state.open_edit(Some(product("p-1")));
        state.close_modal();
        assert!(!state.show_modal);
        assert!(state.edit_item.is_none());
    }

    #[test]
    fn test_select_tab_keeps_modal_state() {
        let mut state = PanelState::default();
        state.open_edit(Some(product("p-1")));
        state.select_tab(EntityKind::Categories);
        assert_eq!(state.active_tab, EntityKind::Categories);
        assert!(state.show_modal);
        assert!(state.edit_item.is_some());
    }

    #[test]
    fn test_modal_hidden_while_list_failed() {
        let mut state = PanelState::default();
        assert_eq!(state.visible_modal(false), None);

        state.open_edit(Some(product("p-1")));
        assert_eq!(state.visible_modal(true), None);
        assert!(state.show_modal);
        assert_eq!(
            state.visible_modal(false),
            Some((EntityKind::Products, Some(product("p-1"))))
        );
    }

    #[test]
    fn test_edit_item_without_id_is_not_submitted() {
        let mut state = PanelState::default();
        state.open_edit(Item::from_value(json!({"name": "orphan"})));
        assert_eq!(state.begin_submit(json!({})), None);
        assert!(!state.is_submitting);
    }

    #[tokio::test]
    async fn test_resolution_after_close_still_applies() {
        let api = RecordingApi::default();
        let mut state = PanelState::default();
        state.open_create();
        let mutation = state.begin_submit(json!({"name": "A"})).unwrap();
        state.close_modal();

        let result = execute(&api, &mutation).await;
        let notice = state.finish(&mutation, result);
        assert!(notice.should_refresh());
        assert!(!state.is_submitting);
        assert!(!state.show_modal);
    }

    #[tokio::test]
    async fn test_every_tab_targets_its_endpoint() {
        for kind in EntityKind::ALL {
            let api = RecordingApi::default();
            let mut state = PanelState::default();
            state.select_tab(kind);
            state.open_create();
            submit(&mut state, &api, json!({})).await.unwrap();
            assert_eq!(
                api.calls(),
                vec![Call::Create(kind.definition().endpoint.into(), json!({}))]
            );
        }
    }
}
