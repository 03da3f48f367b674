//! Dashboard routes - overview stats and recent activity
//!
//! Structure:
//! - api.rs: HTMX stat/recent fragments
//! - page.rs: Full page rendering

pub mod api;
pub mod page;

pub use api::{htmx_dashboard_recent, htmx_dashboard_stats};
pub use page::page_dashboard;
