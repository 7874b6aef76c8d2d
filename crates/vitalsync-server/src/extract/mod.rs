//! Enhanced HTTP request extractors with improved error handling and validation.
//!
//! This module provides custom Axum extractors that enhance the default
//! functionality with better error messages, validation, and type safety. All
//! extractors are designed to be drop-in replacements for their standard Axum
//! counterparts while producing the uniform error envelope on failure.
//!
//! # Extractors
//!
//! - [`Json`] - Enhanced JSON deserialization with better error messages
//! - [`ValidateJson`] - JSON extraction with automatic validation

// Request Data Extraction
pub mod reject;

pub use crate::extract::reject::{Json, ValidateJson};
