//! Transaction routes - list, search, filters, sorting
//!
//! Features:
//! - List transactions with pagination
//! - Search by description, payer, PIX key, or end-to-end id
//! - Status, type, and date-range filters (AND-composed)
//! - Sortable columns with deterministic tie-break
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Full page rendering

pub mod api;
pub mod page;

pub use api::{
    api_transaction_detail, api_transactions, htmx_transaction_detail, htmx_transactions_list,
};

pub use page::page_transactions;
