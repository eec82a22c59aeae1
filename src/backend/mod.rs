//! Typed client for the relational backend's REST facade.
//!
//! All persisted state lives behind this module: filtered reads over the
//! `stores`/`products` tables, inserts and conditional updates on the
//! analytics table, the atomic counter-increment RPC, and the read-only
//! popular-products view. Nothing here swallows errors: repositories and
//! the analytics layer decide what degrades and what is logged.

pub mod select;

pub use select::Select;

use serde::de::DeserializeOwned;

use crate::config::BackendConfig;
use crate::error::{Result, VetrinaError};

/// HTTP client wrapper for the backend endpoint.
pub struct Backend {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl Backend {
    pub fn new(config: &BackendConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    fn url(&self, table: &str) -> String {
        format!("{}/{}", self.base_url, table)
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(VetrinaError::Status {
            status: status.as_u16(),
            body,
        })
    }

    /// Fetch all rows matching `query` from `table`.
    pub async fn select<T: DeserializeOwned>(&self, table: &str, query: &Select) -> Result<Vec<T>> {
        let response = self
            .authed(self.http.get(self.url(table)))
            .query(&query.to_query())
            .send()
            .await?;
        let rows = Self::check(response).await?.json::<Vec<T>>().await?;
        Ok(rows)
    }

    /// Fetch at most one row; `None` when nothing matches.
    pub async fn select_one<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &Select,
    ) -> Result<Option<T>> {
        let mut rows = self.select::<T>(table, &query.clone().limit(1)).await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.swap_remove(0))
        })
    }

    /// Insert one row into `table`.
    pub async fn insert(&self, table: &str, row: &serde_json::Value) -> Result<()> {
        let response = self
            .authed(self.http.post(self.url(table)))
            .json(row)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Patch all rows of `table` matching `query` with the given fields.
    pub async fn update(
        &self,
        table: &str,
        query: &Select,
        patch: &serde_json::Value,
    ) -> Result<()> {
        let response = self
            .authed(self.http.patch(self.url(table)))
            .query(&query.to_query())
            .json(patch)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Call a stored procedure. Used for the server-side atomic counter
    /// increment, which must not be a client read-modify-write.
    pub async fn rpc(&self, function: &str, args: &serde_json::Value) -> Result<()> {
        let response = self
            .authed(self.http.post(self.url(&format!("rpc/{function}"))))
            .json(args)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
