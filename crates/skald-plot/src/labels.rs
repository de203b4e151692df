//! Wire-label generation.

/// Default wire-label prefix.
pub const DEFAULT_PREFIX: &str = "q";

/// Generate labels for `n` wires with the default prefix.
///
/// Labels run from the highest qubit index down to zero, matching the
/// top-to-bottom display order of the wires:
///
/// ```rust
/// assert_eq!(skald_plot::wire_labels(2), ["q_1", "q_0"]);
/// ```
pub fn wire_labels(n: u32) -> Vec<String> {
    wire_labels_with_prefix(n, DEFAULT_PREFIX)
}

/// Generate labels for `n` wires with a custom prefix.
///
/// ```rust
/// assert_eq!(skald_plot::wire_labels_with_prefix(3, "j"), ["j_2", "j_1", "j_0"]);
/// ```
pub fn wire_labels_with_prefix(n: u32, prefix: &str) -> Vec<String> {
    (0..n).rev().map(|i| format!("{prefix}_{i}")).collect()
}
