//! HTTP request handlers.
//!
//! - [`users`]: the five read-only `/conditionN` endpoints
//! - [`static_assets`]: front-end asset serving, with `index.html` for any unmatched path
//!
//! Handlers return [`crate::errors::Error`] on failure, which is logged and converted to a bare
//! `500 Internal Server Error`.

pub mod static_assets;
pub mod users;
