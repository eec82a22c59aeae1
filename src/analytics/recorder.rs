use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;

use crate::backend::{Backend, Select};
use crate::session::Session;

#[derive(Deserialize)]
struct AnalyticRowId {
    id: i64,
}

/// Appends search events and updates click state.
///
/// Every write here is fire-and-forget: failures are logged, never surfaced
/// to the caller, never retried.
pub struct AnalyticsRecorder {
    backend: Arc<Backend>,
    session_id: String,
}

impl AnalyticsRecorder {
    pub fn new(backend: Arc<Backend>, session: &Session) -> Self {
        Self {
            backend,
            session_id: session.id().to_string(),
        }
    }

    /// Append one search event stamped with the current session, optionally
    /// attributed to a product and/or store. `clicked` starts false; the
    /// timestamp is assigned by the backend.
    pub async fn record_search(
        &self,
        term: &str,
        product_id: Option<i64>,
        store_id: Option<i64>,
    ) {
        let row = json!({
            "search_term": term,
            "product_id": product_id,
            "store_id": store_id,
            "user_session": self.session_id,
            "clicked": false,
        });

        if let Err(e) = self.backend.insert("search_analytics", &row).await {
            tracing::error!("[analytics] Failed to record search {:?}: {}", term, e);
        }
    }

    /// Register a click on a product that appeared in results for `term`.
    ///
    /// Two independent, non-atomic effects: flip `clicked` on the most
    /// recent matching search event (a silent no-op when none exists), and
    /// bump the product's `search_count` via the server-side atomic
    /// increment. The increment is unconditional; it fires even when no
    /// search event matched. Neither effect can prevent the other.
    pub async fn record_click(&self, product_id: i64, term: &str) {
        self.mark_clicked(product_id, term).await;
        self.bump_search_count(product_id).await;
    }

    async fn mark_clicked(&self, product_id: i64, term: &str) {
        let newest = Select::new()
            .columns("id")
            .eq("user_session", &self.session_id)
            .eq("product_id", product_id)
            .eq("search_term", term)
            .order_desc("search_timestamp");

        // The session/product/term triple can be ambiguous; exactly one row
        // (the most recent) gets updated, located first so the PATCH targets
        // a single id.
        let row = match self
            .backend
            .select_one::<AnalyticRowId>("search_analytics", &newest)
            .await
        {
            Ok(Some(row)) => row,
            Ok(None) => return,
            Err(e) => {
                tracing::error!(
                    "[analytics] Failed to locate search event for product {}: {}",
                    product_id,
                    e
                );
                return;
            }
        };

        if let Err(e) = self
            .backend
            .update(
                "search_analytics",
                &Select::new().eq("id", row.id),
                &json!({"clicked": true}),
            )
            .await
        {
            tracing::error!(
                "[analytics] Failed to mark search event {} clicked: {}",
                row.id,
                e
            );
        }
    }

    async fn bump_search_count(&self, product_id: i64) {
        if let Err(e) = self
            .backend
            .rpc("increment_search_count", &json!({"product_id": product_id}))
            .await
        {
            tracing::error!(
                "[analytics] Failed to increment search count for product {}: {}",
                product_id,
                e
            );
        }
    }
}
