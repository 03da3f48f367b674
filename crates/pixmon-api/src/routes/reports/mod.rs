//! Report routes - generated report grid
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Full page rendering

pub mod api;
pub mod page;

pub use api::{api_reports, htmx_reports_list};
pub use page::page_reports;
