//! Bank API status routes - health cards and request logs
//!
//! The log list filters by level (status slot) and bank (type slot) on top
//! of free-text search over message, bank, and endpoint.
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Full page rendering

pub mod api;
pub mod page;

pub use api::{api_banks, api_logs, htmx_status_bank_logs, htmx_status_banks, htmx_status_logs};
pub use page::page_status;
