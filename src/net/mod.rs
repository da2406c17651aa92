//! REST API client: wire types and request helpers.
//!
//! DESIGN
//! ======
//! `types` holds the serde mirror of the server's JSON (camelCase, Mongo
//! style `_id` keys). `api` holds one function per endpoint; everything
//! that needs a browser is gated behind the `csr` feature with native
//! stubs so the rest of the crate compiles and tests off-browser.

pub mod api;
pub mod types;
