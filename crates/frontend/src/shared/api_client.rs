//! REST client for the institute API.
//!
//! Thin wrappers over `gloo_net` that attach the bearer token, turn non-2xx
//! answers into [`ApiError::Status`] and unwrap entity-named list envelopes.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use contracts::domain::common::{extract_list, extract_record, EntityRecord};
use contracts::shared::api_error::ApiError;
use contracts::shared::validation::Validate;

use super::config::api_url;
use super::list_controller::{CrudApi, ListSource};
use super::storage;

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

fn url_with_query(path: &str, query: &[(&str, &str)]) -> Result<String, ApiError> {
    let url = api_url(path);
    if query.is_empty() {
        return Ok(url);
    }
    let params: BTreeMap<&str, &str> = query.iter().copied().collect();
    let qs = serde_qs::to_string(&params).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(format!("{}?{}", url, qs))
}

/// Resource path of one record, with the id percent-encoded.
pub fn record_path(collection: &str, id: &str) -> String {
    format!("/{}/{}", collection, urlencoding::encode(id))
}

async fn check(response: Response, method: &str, url: &str) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_status(status, &body);
    if err.is_unauthorized() {
        storage::clear_access_token();
    }
    log::warn!("{} {} failed: {}", method, url, err);
    Err(err)
}

async fn send(builder: RequestBuilder, method: &str, url: &str) -> Result<Response, ApiError> {
    log::debug!("{} {}", method, url);
    let response = with_auth(builder)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| {
            log::error!("{} {} did not complete: {}", method, url, e);
            ApiError::Network(e.to_string())
        })?;
    check(response, method, url).await
}

async fn send_body<B: Serialize>(builder: RequestBuilder, method: &str, url: &str, body: &B) -> Result<Response, ApiError> {
    log::debug!("{} {}", method, url);
    let request = with_auth(builder)
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?;
    let response = request.send().await.map_err(|e| {
        log::error!("{} {} did not complete: {}", method, url, e);
        ApiError::Network(e.to_string())
    })?;
    check(response, method, url).await
}

/// GET a JSON document.
pub async fn get_json(path: &str, query: &[(&str, &str)]) -> Result<Value, ApiError> {
    let url = url_with_query(path, query)?;
    let response = send(Request::get(&url), "GET", &url).await?;
    response
        .json::<Value>()
        .await
        .map_err(|e| ApiError::Decode(format!("Failed to parse response: {}", e)))
}

/// GET a list endpoint and unwrap `{ "<key>": [...] }`.
pub async fn fetch_list<T: DeserializeOwned>(path: &str, query: &[(&str, &str)], key: &str) -> Result<Vec<T>, ApiError> {
    let body = get_json(path, query).await?;
    extract_list(body, key).map_err(ApiError::Decode)
}

/// GET a single record, enveloped under `key` or bare.
pub async fn fetch_record<T: DeserializeOwned>(path: &str, key: &str) -> Result<T, ApiError> {
    let body = get_json(path, &[]).await?;
    extract_record(body, key).map_err(ApiError::Decode)
}

pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let url = api_url(path);
    send_body(Request::post(&url), "POST", &url, body).await.map(|_| ())
}

pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let url = api_url(path);
    send_body(Request::put(&url), "PUT", &url, body).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let url = api_url(path);
    send(Request::delete(&url), "DELETE", &url).await.map(|_| ())
}

// ============================================================================
// Conventional REST collection
// ============================================================================

/// `GET/POST /<collection>`, `PUT/DELETE /<collection>/{id}` for record `T`
/// edited through form `D`.
pub struct RestCollection<T, D> {
    path: &'static str,
    query: &'static [(&'static str, &'static str)],
    _marker: PhantomData<fn() -> (T, D)>,
}

impl<T, D> Clone for RestCollection<T, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, D> Copy for RestCollection<T, D> {}

impl<T: EntityRecord, D> RestCollection<T, D> {
    pub fn new() -> Self {
        Self {
            path: T::collection_name(),
            query: &[],
            _marker: PhantomData,
        }
    }
}

impl<T: EntityRecord, D> Default for RestCollection<T, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, D> RestCollection<T, D> {
    /// Same record type served under another path (e.g. `journal`).
    pub fn at_path(mut self, path: &'static str) -> Self {
        self.path = path;
        self
    }

    /// Fixed query parameters for the list call, e.g. `includeHidden`.
    pub fn with_query(mut self, query: &'static [(&'static str, &'static str)]) -> Self {
        self.query = query;
        self
    }
}

#[async_trait(?Send)]
impl<T, D> ListSource for RestCollection<T, D>
where
    T: EntityRecord + DeserializeOwned + Clone + 'static,
    D: 'static,
{
    type Item = T;

    async fn list(&self) -> Result<Vec<T>, ApiError> {
        fetch_list(&format!("/{}", self.path), self.query, T::envelope_key()).await
    }
}

#[async_trait(?Send)]
impl<T, D> CrudApi for RestCollection<T, D>
where
    T: EntityRecord + DeserializeOwned + Clone + 'static,
    D: Serialize + Validate + 'static,
{
    type Input = D;

    async fn create(&self, input: &D) -> Result<(), ApiError> {
        post_json(&format!("/{}", self.path), input).await
    }

    async fn update(&self, id: &str, input: &D) -> Result<(), ApiError> {
        put_json(&record_path(self.path, id), input).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        delete(&record_path(self.path, id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_path_encodes_id() {
        assert_eq!(record_path("events", "42"), "/events/42");
        assert_eq!(record_path("users", "a b/c"), "/users/a%20b%2Fc");
    }
}
