#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

//! # Vitalsync Core
//!
//! This crate provides the shared vocabulary for the vitalsync services.
//! It defines the service identity and runtime environment descriptors, the
//! process memory sampler backing health reports, and the domain types
//! (missions, users, messaging, events) exchanged over the HTTP surface.

/// Tracing target for memory sampling operations.
pub const TRACING_TARGET_MEMORY: &str = "vitalsync_core::memory";

mod environment;
mod identity;
mod memory;
mod status;

pub mod types;

// Re-export key types for convenience
pub use environment::EnvironmentInfo;
pub use identity::ServiceIdentity;
pub use memory::{MemoryUsage, SampleError};
pub use status::ServiceStatus;
