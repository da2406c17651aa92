//! Shared UI components used across pages.

pub mod footer;
pub mod header;
pub mod project_card;
pub mod toast_stack;
