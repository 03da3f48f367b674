//! PIX key routes - registered keys list
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Full page rendering

pub mod api;
pub mod page;

pub use api::{api_pix_keys, htmx_pix_keys_list};
pub use page::page_pix_keys;
