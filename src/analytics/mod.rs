//! Search usage analytics.
//!
//! The recorder appends search events and flips click flags as users
//! interact; the aggregator reads the derived shapes (popular products per
//! store, trailing search-volume trends). Both are fire-and-forget towards
//! the caller: write failures are logged and dropped, read failures degrade
//! to empty results.

pub mod aggregation;
pub mod recorder;

pub use aggregation::AnalyticsAggregator;
pub use recorder::AnalyticsRecorder;
