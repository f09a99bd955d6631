use async_trait::async_trait;
use contracts::shared::api_error::ApiErrorBody;
use contracts::shared::list_query::{ListQuery, ListResponse};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{api_base, endpoint_url, ApiError, Item};

/// Data source contract used by the inventory panel
///
/// Implementations must turn every failure (transport, decoding, non-2xx)
/// into an [`ApiError`], keeping the server's `message` when there is one.
#[async_trait(?Send)]
pub trait CatalogApi {
    async fn list(&self, endpoint: &str, query: &ListQuery) -> Result<ListResponse<Item>, ApiError>;

    async fn create(&self, endpoint: &str, data: &Value) -> Result<Item, ApiError>;

    async fn update(&self, endpoint: &str, id: &str, data: &Value) -> Result<Item, ApiError>;

    async fn delete(&self, endpoint: &str, id: &str) -> Result<(), ApiError>;
}

/// [`CatalogApi`] over `fetch`, talking to the catalog backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpCatalogApi {
    base: String,
}

impl HttpCatalogApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Client for the backend next to the current page
    pub fn from_location() -> Self {
        Self::new(api_base())
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, endpoint: &str, id: Option<&str>) -> String {
        endpoint_url(&self.base, endpoint, id)
    }
}

impl Default for HttpCatalogApi {
    fn default() -> Self {
        Self::from_location()
    }
}

/// Query string for a list request, without the leading `?`.
pub(crate) fn list_query_string(query: &ListQuery) -> Result<String, ApiError> {
    serde_qs::to_string(query).map_err(|e| ApiError::decode(None, e))
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let message = response
        .json::<ApiErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    ApiError::from_status(status, message)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    let status = response.status();
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::decode(Some(status), e))
}

#[async_trait(?Send)]
impl CatalogApi for HttpCatalogApi {
    async fn list(&self, endpoint: &str, query: &ListQuery) -> Result<ListResponse<Item>, ApiError> {
        let url = format!("{}?{}", self.url(endpoint, None), list_query_string(query)?);
        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(ApiError::network)?;
        decode(response).await
    }

    async fn create(&self, endpoint: &str, data: &Value) -> Result<Item, ApiError> {
        let response = Request::post(&self.url(endpoint, None))
            .header("Accept", "application/json")
            .json(data)
            .map_err(ApiError::network)?
            .send()
            .await
            .map_err(ApiError::network)?;
        decode(response).await
    }

    async fn update(&self, endpoint: &str, id: &str, data: &Value) -> Result<Item, ApiError> {
        let response = Request::put(&self.url(endpoint, Some(id)))
            .header("Accept", "application/json")
            .json(data)
            .map_err(ApiError::network)?
            .send()
            .await
            .map_err(ApiError::network)?;
        decode(response).await
    }

    async fn delete(&self, endpoint: &str, id: &str) -> Result<(), ApiError> {
        let response = Request::delete(&self.url(endpoint, Some(id)))
            .send()
            .await
            .map_err(ApiError::network)?;
        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_query::SortDirection;

    #[test]
    fn test_list_query_string_skips_empty_options() {
        let qs = list_query_string(&ListQuery::default()).unwrap();
        assert_eq!(qs, "page=1&page_size=10&sort_dir=asc");
    }

    #[test]
    fn test_list_query_string_full() {
        let query = ListQuery {
            page: 2,
            page_size: 25,
            sort_by: Some("price".into()),
            sort_dir: SortDirection::Desc,
            q: Some("desk lamp".into()),
        };
        let qs = list_query_string(&query).unwrap();
        assert!(qs.contains("page=2"));
        assert!(qs.contains("sort_by=price"));
        assert!(qs.contains("sort_dir=desc"));
        assert!(qs.contains("q=desk"));
    }

    #[test]
    fn test_urls() {
        let api = HttpCatalogApi::new("http://localhost:3000");
        assert_eq!(api.url("/api/admin/categories", Some("7")), "http://localhost:3000/api/admin/categories/7");
    }
}
