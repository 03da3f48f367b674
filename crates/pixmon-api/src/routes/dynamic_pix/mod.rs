//! Dynamic PIX routes - one-time charges with expiration
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Full page rendering

pub mod api;
pub mod page;

pub use api::{api_dynamic_pix, htmx_dynamic_pix_list};
pub use page::page_dynamic_pix;
