//! Web layer for browser-based UI.
//!
//! Provides the home page with the shortening form and per-link statistics
//! pages. Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
