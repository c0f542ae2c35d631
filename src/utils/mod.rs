//! Utility functions for code generation, URL validation, QR rendering and database errors.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`url_validator`] - Redirect target validation
//! - [`db_error`] - Database error classification
//! - [`qr`] - QR code rendering for short URLs

pub mod code_generator;
pub mod db_error;
pub mod qr;
pub mod url_validator;
