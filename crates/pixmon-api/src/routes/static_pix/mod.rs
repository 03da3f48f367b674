//! Static PIX routes - payments received against fixed keys
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Full page rendering

pub mod api;
pub mod page;

pub use api::{api_static_pix, htmx_static_pix_list};
pub use page::page_static_pix;
