//! Read access to store records.

use std::sync::Arc;

use crate::backend::{Backend, Select};
use crate::error::Result;
use crate::types::Store;

pub struct StoreRepository {
    backend: Arc<Backend>,
}

impl StoreRepository {
    pub fn new(backend: Arc<Backend>) -> Self {
        Self { backend }
    }

    /// All stores, name-ascending.
    ///
    /// A backend failure degrades to an empty list; callers that need to
    /// distinguish "no stores" from "fetch failed" use
    /// [`try_list_stores`](Self::try_list_stores).
    pub async fn list_stores(&self) -> Vec<Store> {
        match self.try_list_stores().await {
            Ok(stores) => stores,
            Err(e) => {
                tracing::error!("[stores] Failed to fetch stores: {}", e);
                Vec::new()
            }
        }
    }

    /// Explicit-error variant of [`list_stores`](Self::list_stores).
    pub async fn try_list_stores(&self) -> Result<Vec<Store>> {
        self.backend
            .select("stores", &Select::new().order_asc("name"))
            .await
    }

    /// Single store by id; absent on not-found or backend failure.
    pub async fn get_store(&self, id: i64) -> Option<Store> {
        match self.try_get_store(id).await {
            Ok(store) => store,
            Err(e) => {
                tracing::error!("[stores] Failed to fetch store {}: {}", id, e);
                None
            }
        }
    }

    /// Explicit-error variant of [`get_store`](Self::get_store).
    pub async fn try_get_store(&self, id: i64) -> Result<Option<Store>> {
        self.backend
            .select_one("stores", &Select::new().eq("id", id))
            .await
    }
}
