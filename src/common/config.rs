//! Configuration constants for employeedb.

/// Multiplier in the worst-case AVL height bound.
///
/// An AVL tree holding `n` nodes never exceeds
/// `1.4405 · log2(n + 2)` levels (the golden-ratio bound, `1 / log2(φ)`).
pub const AVL_HEIGHT_FACTOR: f64 = 1.4405;

/// Environment variable the binary reads its log filter from.
///
/// Uses `env_logger` filter syntax, e.g. `EMPLOYEEDB_LOG=employeedb=trace`.
pub const LOG_ENV: &str = "EMPLOYEEDB_LOG";

/// Log filter used when [`LOG_ENV`] is unset.
///
/// Kept at `warn` so index chatter does not interleave with the menu.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Largest height a balanced tree of `len` nodes may have.
///
/// # Example
/// ```
/// use employeedb::common::config::max_balanced_height;
///
/// assert_eq!(max_balanced_height(0), 1);
/// assert_eq!(max_balanced_height(7), 4);
/// ```
pub fn max_balanced_height(len: usize) -> usize {
    (AVL_HEIGHT_FACTOR * ((len + 2) as f64).log2()).floor() as usize
}
