//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Link`] - A shortened URL mapping with click counters and lifecycle state
//!
//! Creation input is kept separate in [`NewLink`], so store-assigned fields
//! (`id`, `created_at`, counters) can never be supplied by callers.

pub mod link;

pub use link::{Link, NewLink};
