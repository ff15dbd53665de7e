//! # Hodos
//!
//! An all-pairs shortest path engine: Floyd-Warshall relaxation with path
//! reconstruction, negative-cycle detection, and transitive closure.
//!
//! If you're new here, start with [`Graph`] and [`solve`] - build a graph,
//! solve it once, then query the frozen [`ApspSolution`] as often as you
//! like. Any edge change means solving again; there is no incremental
//! recompute.
//!
//! ## Quick Start
//!
//! ```rust
//! use hodos::{solve, Graph, VertexId};
//!
//! let mut graph = Graph::new(3);
//! graph.add_edge(VertexId::new(0), VertexId::new(1), 1)?;
//! graph.add_edge(VertexId::new(1), VertexId::new(2), 2)?;
//! graph.add_edge(VertexId::new(0), VertexId::new(2), 4)?;
//!
//! let solution = solve(&graph)?;
//! assert_eq!(solution.distance(VertexId::new(0), VertexId::new(2))?, 3);
//! assert_eq!(
//!     solution.path(VertexId::new(0), VertexId::new(2))?,
//!     vec![VertexId::new(0), VertexId::new(1), VertexId::new(2)],
//! );
//! # Ok::<(), hodos::Error>(())
//! ```
//!
//! ## Negative cycles
//!
//! Negative edge weights are valid input. When relaxation detects a
//! negative cycle, the solution is still returned - but distance and path
//! queries refuse with [`Error::NegativeCycle`], since every stored number
//! may be poisoned through the cycle. Reachability queries stay valid.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

// Re-export the main engine API
pub use hodos_engine::{
    solve, solve_with, strongly_connected_components, transitive_closure, ApspSolution,
    SolveOptions, Strategy,
};

// Re-export core types - you'll need these for building graphs and reading
// results
pub use hodos_common::{CancelToken, Error, Result, VertexId, Weight};
pub use hodos_core::Graph;
