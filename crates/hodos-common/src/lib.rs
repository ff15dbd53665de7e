//! # hodos-common
//!
//! Foundation layer for Hodos: types, errors, and utilities.
//!
//! This crate provides the fundamental building blocks used by all other
//! Hodos crates. It has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions (VertexId, Weight, sentinels)
//! - [`error`] - The error taxonomy and crate-wide `Result` alias
//! - [`hash`] - Fast hash map/set aliases
//! - [`cancel`] - Cooperative cancellation for long-running computations

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cancel;
pub mod error;
pub mod hash;
pub mod types;

// Re-export commonly used types at crate root
pub use cancel::CancelToken;
pub use error::{Error, Result};
pub use types::{VertexId, Weight};
