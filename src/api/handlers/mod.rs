//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod info;
pub mod redirect;
pub mod shorten;

pub use health::health_handler;
pub use info::{info_handler, recent_handler};
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
