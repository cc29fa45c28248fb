//! # Oarview Core
//!
//! Core domain logic for oarview OAR status reporting.
//!
//! This crate contains pure business logic with no I/O dependencies:
//! - API payload models
//! - Error definitions
//! - Core-index range compression
//! - Duration formatting
//!
//! ## Design Principles
//!
//! - **Pure Functions**: No side effects, easy to test
//! - **Deterministic**: output never depends on hash-map iteration order
//! - **Dependency-Free**: No I/O, networking, or persistence dependencies

pub mod duration;
pub mod errors;
pub mod models;
pub mod ranges;

// Re-export commonly used types
pub use duration::format_duration;
pub use errors::{CoreError, Result};
pub use models::{Job, JobList, JobResources, NodeStatus, SiteStatus};
pub use ranges::{compress_pairs, parse_token, truncate_text};
