//! # Oarview API
//!
//! Read-only HTTP client for the OAR resource manager's REST API.
//! This crate wraps the three GET endpoints the tool consumes: the per-site
//! job list, per-job resource detail, and the node status map.

pub mod client;
pub mod errors;

// Re-export common types for convenience
pub use client::*;
pub use errors::*;

// Re-export core types that API consumers will need
pub use oarview_core::{Job, JobList, JobResources, NodeStatus, SiteStatus};
