// crates/oilseed-views/src/lib.rs
//
// oilseed-views: The thin view aggregators behind the role dashboards.
//
// Every function here follows the same shape: fetch rows from the record
// store, reduce them in a single pass, return a plain stats struct. The
// caller's profile is always an explicit argument; nothing reads an
// ambient session.

pub mod analytics;
pub mod credit;
pub mod dashboard;

pub use analytics::{platform_metrics, AnalyticsMetrics};
pub use credit::{credit_summary, CreditSummary};
pub use dashboard::{dashboard_for, DashboardStats, RECENT_ADVISORY_LIMIT};
