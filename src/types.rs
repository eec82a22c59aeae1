use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A local store as returned by the `stores` table.
///
/// `rating` is a display value maintained elsewhere; this layer never
/// recomputes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub description: String,
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub category: String,
    pub rating: f64,
    pub is_open: bool,
    pub delivery_time: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A product row, optionally carrying store fields denormalized at read
/// time.
///
/// The `store_*` fields exist only in the read-result shape: they are
/// populated by joining against the owning [`Store`] when a listing or
/// search fetches the row, and are never written back to the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub store_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub search_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    // Joined fields, present only on rows fetched with the store embed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_rating: Option<f64>,
}

/// One recorded search attempt and its eventual click outcome.
///
/// Created with `clicked = false` at search time; a later click flips the
/// flag on the most recent matching row rather than inserting a new one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchAnalytic {
    pub id: i64,
    pub search_term: String,
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub store_id: Option<i64>,
    pub user_session: String,
    pub clicked: bool,
    pub search_timestamp: DateTime<Utc>,
}

/// A row of the read-only `store_popular_products` view: products ranked
/// by search/click volume, precomputed by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopularProduct {
    pub store_id: i64,
    pub store_name: String,
    pub product_id: i64,
    pub product_name: String,
    pub category: String,
    pub price: f64,
    pub search_count: i64,
    pub click_count: i64,
}

/// One calendar-date bucket of search volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTrend {
    pub date: NaiveDate,
    pub searches: u64,
}
