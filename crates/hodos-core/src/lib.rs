//! # hodos-core
//!
//! Graph construction and matrix storage for Hodos.
//!
//! This crate owns the input side of the engine: the [`Graph`] edge map that
//! callers populate, and the dense matrix types the solver computes into.
//!
//! ## Modules
//!
//! - [`graph`] - The weighted directed graph builder
//! - [`matrix`] - Dense square matrices, bit matrices, and seeding

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod graph;
pub mod matrix;

// Re-export commonly used types at crate root
pub use graph::Graph;
pub use matrix::{seed_matrices, BitMatrix, DistanceMatrix, NextHopMatrix, SquareMatrix};
