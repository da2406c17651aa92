//! # cyberhunter-client
//!
//! Leptos + WASM single-page client for the CyberHunter student
//! project/competition platform. Talks to the platform's REST API for
//! authentication, profiles, projects, teams, leaderboards, and events.
//!
//! This crate contains pages, components, application state, the session
//! lifecycle (login/signup, persisted tokens, sign-out), and the route
//! guards that gate the dashboard views.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
