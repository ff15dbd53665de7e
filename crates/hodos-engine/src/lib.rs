//! # hodos-engine
//!
//! The compute layer of Hodos: Floyd-Warshall relaxation, negative-cycle
//! detection, path reconstruction, and transitive closure.
//!
//! The entry point is [`solve`] (or [`solve_with`] for strategy and
//! cancellation control), which consumes a [`Graph`](hodos_core::Graph) by
//! reference and produces a frozen [`ApspSolution`] snapshot. All queries
//! run against that snapshot; changing the graph means solving again.
//!
//! ## Modules
//!
//! - [`solve`] - The relaxation engine and its execution strategies
//! - [`solution`] - The frozen result snapshot and its query surface
//! - [`closure`] - Weight-independent reachability and SCC grouping

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod closure;
mod cycle;
mod path;
pub mod solution;
pub mod solve;

// Re-export the engine surface at crate root
pub use closure::{strongly_connected_components, transitive_closure};
pub use solution::ApspSolution;
pub use solve::{solve, solve_with, SolveOptions, Strategy};
