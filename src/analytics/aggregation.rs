use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::backend::{Backend, Select};
use crate::error::Result;
use crate::types::{PopularProduct, SearchTrend};

/// Rows fetched from the popular-products view per call. Applied to the raw
/// fetch, before grouping, so a store can receive fewer rows even when the
/// view holds more for it.
pub const POPULAR_FETCH_CAP: usize = 5;

/// Default trailing window for [`AnalyticsAggregator::search_trends`].
pub const DEFAULT_TREND_WINDOW_DAYS: i64 = 7;

#[derive(Deserialize)]
struct TimestampRow {
    search_timestamp: DateTime<Utc>,
}

/// Computes derived analytics views: popular products per store and
/// search-volume trends over a trailing window.
pub struct AnalyticsAggregator {
    backend: Arc<Backend>,
}

impl AnalyticsAggregator {
    pub fn new(backend: Arc<Backend>) -> Self {
        Self { backend }
    }

    /// Popular products grouped by store, sourced from the precomputed
    /// `store_popular_products` view. Group membership and order follow the
    /// view's return order. Degrades to an empty map on failure.
    pub async fn popular_products_by_store(&self) -> IndexMap<i64, Vec<PopularProduct>> {
        match self.try_popular_products_by_store().await {
            Ok(grouped) => grouped,
            Err(e) => {
                tracing::error!("[analytics] Failed to fetch popular products: {}", e);
                IndexMap::new()
            }
        }
    }

    /// Explicit-error variant of
    /// [`popular_products_by_store`](Self::popular_products_by_store).
    pub async fn try_popular_products_by_store(
        &self,
    ) -> Result<IndexMap<i64, Vec<PopularProduct>>> {
        let rows: Vec<PopularProduct> = self
            .backend
            .select(
                "store_popular_products",
                &Select::new().limit(POPULAR_FETCH_CAP),
            )
            .await?;
        Ok(group_by_store(rows))
    }

    /// Search volume per calendar date over the trailing `window_days`,
    /// one entry per distinct date. Degrades to empty on failure.
    pub async fn search_trends(&self, window_days: i64) -> Vec<SearchTrend> {
        match self.try_search_trends(window_days).await {
            Ok(trends) => trends,
            Err(e) => {
                tracing::error!("[analytics] Failed to fetch search trends: {}", e);
                Vec::new()
            }
        }
    }

    /// Explicit-error variant of [`search_trends`](Self::search_trends).
    pub async fn try_search_trends(&self, window_days: i64) -> Result<Vec<SearchTrend>> {
        let cutoff = Utc::now() - Duration::days(window_days);
        let select = Select::new()
            .columns("search_timestamp")
            .gte(
                "search_timestamp",
                cutoff.to_rfc3339_opts(SecondsFormat::Millis, true),
            )
            .order_asc("search_timestamp");

        let rows: Vec<TimestampRow> = self.backend.select("search_analytics", &select).await?;
        Ok(bucket_by_date(rows.into_iter().map(|r| r.search_timestamp)))
    }
}

fn group_by_store(rows: Vec<PopularProduct>) -> IndexMap<i64, Vec<PopularProduct>> {
    let mut grouped: IndexMap<i64, Vec<PopularProduct>> = IndexMap::new();
    for row in rows {
        grouped.entry(row.store_id).or_insert_with(Vec::new).push(row);
    }
    grouped
}

/// Bucket timestamps by UTC calendar date. Emission order follows the input;
/// callers feed timestamps pre-sorted ascending, so dates come out ascending
/// without a final sort.
fn bucket_by_date(timestamps: impl IntoIterator<Item = DateTime<Utc>>) -> Vec<SearchTrend> {
    let mut buckets: IndexMap<NaiveDate, u64> = IndexMap::new();
    for ts in timestamps {
        *buckets.entry(ts.date_naive()).or_insert(0) += 1;
    }
    buckets
        .into_iter()
        .map(|(date, searches)| SearchTrend { date, searches })
        .collect()
}
