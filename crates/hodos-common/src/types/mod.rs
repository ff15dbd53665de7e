//! Core type definitions for Hodos.
//!
//! This module contains the fundamental types used throughout the engine:
//! - Identifier types ([`VertexId`])
//! - Weight types and internal sentinels ([`Weight`], [`INF`], [`NO_HOP`])

mod id;
mod weight;

pub use id::VertexId;
pub use weight::{Weight, INF, NEG_INF, NO_HOP};
