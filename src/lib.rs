//! # Vetrina
//!
//! The data-access layer of a local-commerce storefront: free-text product
//! search across local stores, store listings, and search/click analytics
//! with derived popularity and trend views.
//!
//! All persisted state lives in a network-reachable relational backend
//! (reached through its PostgREST-style REST facade); this crate owns only
//! the per-device session token and transient query results. Reads degrade
//! to empty results on backend failure, so callers never see raw transport
//! errors; the `try_*` variants expose the underlying error for tests and
//! observability.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vetrina::{
//!     AnalyticsRecorder, Backend, BackendConfig, FileSessionStore, SearchEngine, Session,
//! };
//!
//! # #[tokio::main]
//! # async fn main() {
//! let backend = Arc::new(Backend::new(&BackendConfig::from_env()));
//! let session = Session::open(&FileSessionStore::new("./data/session"));
//!
//! let engine = SearchEngine::new(backend.clone(), &session);
//! let hits = engine.search("martello").await;
//! println!("{} products in stock", hits.len());
//!
//! // A later click on a result flips the search event's clicked flag and
//! // bumps the product's popularity counter.
//! if let Some(product) = hits.first() {
//!     let recorder = AnalyticsRecorder::new(backend, &session);
//!     recorder.record_click(product.id, "martello").await;
//! }
//! # }
//! ```
//!
//! ## Components
//!
//! - [`StoreRepository`] / [`ProductRepository`]: read access to store and
//!   product records, with store fields denormalized onto product rows at
//!   read time.
//! - [`SearchEngine`]: free-text matching over in-stock products, capped
//!   at [`RESULT_CAP`], recording one analytics event per executed query.
//! - [`AnalyticsRecorder`] / [`AnalyticsAggregator`]: append-side and
//!   read-side of the usage analytics.
//! - [`Session`]: the opaque per-device identity analytics events are
//!   attributed to, persisted through a pluggable [`SessionStore`].

pub mod analytics;
pub mod backend;
pub mod config;
pub mod error;
pub mod products;
pub mod search;
pub mod session;
pub mod stores;
pub mod types;

pub use analytics::{AnalyticsAggregator, AnalyticsRecorder};
pub use analytics::aggregation::{DEFAULT_TREND_WINDOW_DAYS, POPULAR_FETCH_CAP};
pub use backend::{Backend, Select};
pub use config::BackendConfig;
pub use error::{Result, VetrinaError};
pub use products::ProductRepository;
pub use search::{SearchEngine, RESULT_CAP};
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore};
pub use stores::StoreRepository;
pub use types::*;
