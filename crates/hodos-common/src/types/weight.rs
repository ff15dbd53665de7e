//! Edge weights and internal matrix sentinels.

/// Weight of an edge or a path.
///
/// Weights are signed: negative edges are valid input, and negative cycles
/// are detected rather than rejected.
pub type Weight = i64;

/// Internal "no path known" sentinel for distance matrices.
///
/// Deliberately far below `i64::MAX` so that a sum of two sentinel-adjacent
/// values cannot wrap around before an infinity check runs. This constant is
/// an implementation detail of matrix storage: the public query surface
/// reports unreachable pairs through the error taxonomy, never by exposing
/// this value.
pub const INF: Weight = i64::MAX / 4;

/// Internal "pulled arbitrarily negative" sentinel for distance matrices.
///
/// Written into every pair whose cost is undefined because some route
/// passes through a negative cycle. Canonicalizing those cells makes the
/// solved matrices independent of execution strategy; like [`INF`], the
/// value never escapes the public query surface.
pub const NEG_INF: Weight = -INF;

/// Internal "no next hop" sentinel for next-hop matrices.
///
/// Valid vertex indices are `u32` values in `[0, V)` with `V < u32::MAX`, so
/// the maximum value is free to mean "unset".
pub const NO_HOP: u32 = u32::MAX;
