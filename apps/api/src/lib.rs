//! Skillscope — scraped "trending skills" data for the career dashboard.
//!
//! The server binary exposes `GET /api/skills`; the `trends-watch` binary
//! polls it the way the dashboard does.

pub mod client;
pub mod config;
pub mod errors;
pub mod routes;
pub mod state;
pub mod trends;
