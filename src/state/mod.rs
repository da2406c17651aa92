//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `toast`, `ui`) so individual
//! components can depend on small focused models. Each is provided to the
//! tree as an `RwSignal` context from `app.rs`; the structs themselves are
//! plain data so the transition logic is testable without a browser.

pub mod session;
pub mod toast;
pub mod ui;
