//! Page components, one per route.

pub mod events;
pub mod home;
pub mod leaderboard;
pub mod login;
pub mod profile;
pub mod project_detail;
pub mod projects;
pub mod team;
pub mod user_detail;
