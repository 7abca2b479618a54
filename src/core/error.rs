//! Error handling logic

use std::fmt;

/// Error types for the gate kernels and the benchmark harness.
///
/// Every applier validates its preconditions at its boundary and fails fast
/// with one of these rather than silently transforming the wrong array
/// slots.
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum QkernError {
    /// A qubit position outside `[0, num_qubits)` was passed to a kernel.
    InvalidQubit {
        /// The offending qubit position.
        qubit: usize,
        /// Size of the register the kernel was asked to act on.
        num_qubits: usize,
    },

    /// A control set violating the strictly-increasing/distinct contract,
    /// or one referencing qubits outside the register.
    InvalidControls {
        /// InvalidControls failure message
        message: String,
    },

    /// An amplitude array whose length is not a power of two of at least 2,
    /// or a register too large for the native index width.
    InvalidDimension {
        /// InvalidDimension failure message
        message: String,
    },
}

impl fmt::Display for QkernError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QkernError::InvalidQubit { qubit, num_qubits } => write!(
                f,
                "Invalid Qubit: position {} is outside the {}-qubit register",
                qubit, num_qubits
            ),
            QkernError::InvalidControls { message } => {
                write!(f, "Invalid Controls: {}", message)
            }
            QkernError::InvalidDimension { message } => {
                write!(f, "Invalid Dimension: {}", message)
            }
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for QkernError {}
