//! Read access to product records.
//!
//! Customer-facing listings are filtered to `in_stock = true`, and rows
//! fetched for display carry the owning store's name, address, and rating.
//! The backend returns that join as a nested `stores` object; it is
//! flattened onto the product after fetch so the denormalized fields exist
//! only in the read-result shape.

use std::sync::Arc;

use serde::Deserialize;

use crate::backend::{Backend, Select};
use crate::error::Result;
use crate::types::Product;

/// `select` column list that embeds the owning store's display fields.
const STORE_EMBED: &str = "*,stores(name,address,rating)";

#[derive(Deserialize)]
struct StoreEmbed {
    name: String,
    address: String,
    rating: f64,
}

/// Wire shape of a product row fetched with the store embed.
#[derive(Deserialize)]
struct JoinedProductRow {
    #[serde(flatten)]
    product: Product,
    #[serde(default)]
    stores: Option<StoreEmbed>,
}

impl JoinedProductRow {
    fn into_product(self) -> Product {
        let mut product = self.product;
        if let Some(store) = self.stores {
            product.store_name = Some(store.name);
            product.store_address = Some(store.address);
            product.store_rating = Some(store.rating);
        }
        product
    }
}

pub struct ProductRepository {
    backend: Arc<Backend>,
}

impl ProductRepository {
    pub fn new(backend: Arc<Backend>) -> Self {
        Self { backend }
    }

    /// All in-stock products, name-ascending, with store fields joined on.
    /// Degrades to empty on a backend failure.
    pub async fn list_in_stock(&self) -> Vec<Product> {
        match self.try_list_in_stock().await {
            Ok(products) => products,
            Err(e) => {
                tracing::error!("[products] Failed to fetch products: {}", e);
                Vec::new()
            }
        }
    }

    /// Explicit-error variant of [`list_in_stock`](Self::list_in_stock).
    pub async fn try_list_in_stock(&self) -> Result<Vec<Product>> {
        let select = Select::new()
            .columns(STORE_EMBED)
            .eq("in_stock", true)
            .order_asc("name");
        let rows: Vec<JoinedProductRow> = self.backend.select("products", &select).await?;
        Ok(rows.into_iter().map(JoinedProductRow::into_product).collect())
    }

    /// In-stock products of one store, name-ascending. No store join; the
    /// caller already knows the store.
    pub async fn list_by_store(&self, store_id: i64) -> Vec<Product> {
        match self.try_list_by_store(store_id).await {
            Ok(products) => products,
            Err(e) => {
                tracing::error!(
                    "[products] Failed to fetch products for store {}: {}",
                    store_id,
                    e
                );
                Vec::new()
            }
        }
    }

    /// Explicit-error variant of [`list_by_store`](Self::list_by_store).
    pub async fn try_list_by_store(&self, store_id: i64) -> Result<Vec<Product>> {
        let select = Select::new()
            .eq("store_id", store_id)
            .eq("in_stock", true)
            .order_asc("name");
        self.backend.select("products", &select).await
    }

    /// Free-text match primitive used by the search engine: in-stock rows
    /// whose name or category contains `query` (case-insensitive) or whose
    /// tag set contains it exactly, capped at `cap`, store fields joined on.
    /// Rows come back in backend order; there is no scoring.
    pub(crate) async fn search_in_stock(&self, query: &str, cap: usize) -> Result<Vec<Product>> {
        let select = Select::new()
            .columns(STORE_EMBED)
            .or(search_filter(query))
            .eq("in_stock", true)
            .limit(cap);
        let rows: Vec<JoinedProductRow> = self.backend.select("products", &select).await?;
        Ok(rows.into_iter().map(JoinedProductRow::into_product).collect())
    }
}

/// Disjunction implementing the match policy: substring on name OR
/// substring on category OR exact tag element.
fn search_filter(query: &str) -> String {
    format!("name.ilike.*{query}*,category.ilike.*{query}*,tags.cs.{{{query}}}")
}
