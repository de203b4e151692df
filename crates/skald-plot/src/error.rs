//! Error types for circuit plotting.

use thiserror::Error;

/// Errors that can occur when building or rendering a circuit plot.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PlotError {
    /// Label row does not match the wire count.
    #[error("Expected {expected} wire labels, got {got}")]
    LabelCountMismatch {
        /// The circuit's wire count.
        expected: usize,
        /// Number of labels supplied.
        got: usize,
    },

    /// A gate addresses a wire outside the circuit.
    #[error("Qubit {qubit} out of range for {nqubits}-qubit circuit (gate: {gate})")]
    QubitOutOfRange {
        /// The offending wire index.
        qubit: u32,
        /// The circuit's wire count.
        nqubits: u32,
        /// Name of the gate for context.
        gate: String,
    },

    /// The drawing backend failed.
    #[cfg(feature = "render")]
    #[error("Render backend error: {0}")]
    Backend(String),

    /// Writing the figure to disk failed.
    #[cfg(feature = "render")]
    #[error("Failed to write figure: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for plotting operations.
pub type PlotResult<T> = Result<T, PlotError>;
