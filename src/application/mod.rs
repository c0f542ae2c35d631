//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Code generation, reservation and lookup
//! - [`services::redirect_service::RedirectService`] - Redirect resolution with expiry policy

pub mod services;
