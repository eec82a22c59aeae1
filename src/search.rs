//! Free-text product search with analytics recording as a side effect.

use std::sync::Arc;

use crate::analytics::AnalyticsRecorder;
use crate::backend::Backend;
use crate::error::Result;
use crate::products::ProductRepository;
use crate::session::Session;
use crate::types::Product;

/// Hard cap on results per query.
pub const RESULT_CAP: usize = 20;

pub struct SearchEngine {
    products: ProductRepository,
    recorder: AnalyticsRecorder,
}

impl SearchEngine {
    pub fn new(backend: Arc<Backend>, session: &Session) -> Self {
        Self {
            products: ProductRepository::new(backend.clone()),
            recorder: AnalyticsRecorder::new(backend, session),
        }
    }

    /// Match `query` against in-stock products (substring on name or
    /// category, exact tag element), capped at [`RESULT_CAP`], store fields
    /// joined onto each hit.
    ///
    /// An empty or whitespace-only query returns an empty list without
    /// touching the backend, and without recording an analytics event, so
    /// "no query" never pollutes search volume. Every executed query records
    /// exactly one search event, whether or not it matched anything.
    ///
    /// Backend failures degrade to an empty list and are logged; the
    /// presentation layer never sees them.
    pub async fn search(&self, query: &str) -> Vec<Product> {
        match self.try_search(query).await {
            Ok(products) => products,
            Err(e) => {
                tracing::error!("[search] Query {:?} failed: {}", query, e);
                Vec::new()
            }
        }
    }

    /// Explicit-error variant of [`search`](Self::search). The analytics
    /// event is still only recorded when the match query succeeds.
    pub async fn try_search(&self, query: &str) -> Result<Vec<Product>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let products = self.products.search_in_stock(query, RESULT_CAP).await?;

        // Raw query text, recorded independently of hit count. The recorder
        // swallows its own failures; a dropped event must not fail the search.
        self.recorder.record_search(query, None, None).await;

        Ok(products)
    }
}
