// src/validation/mod.rs

//! Fail-fast precondition checks for the gate kernels.
//!
//! The index arithmetic in `core::bits` is only total over validated
//! inputs: an out-of-range qubit position or an unsorted control set would
//! make a kernel silently transform the wrong amplitudes. Every public
//! applier therefore runs these checks at its boundary before touching the
//! array.

use crate::core::QkernError;

/// Computes the amplitude-array length `2^num_qubits` for a register,
/// rejecting empty registers and widths the native index type cannot
/// address.
pub fn register_dim(num_qubits: usize) -> Result<usize, QkernError> {
    if num_qubits == 0 {
        return Err(QkernError::InvalidDimension {
            message: "cannot build a statevector over zero qubits".to_string(),
        });
    }
    1usize
        .checked_shl(num_qubits as u32)
        .ok_or_else(|| QkernError::InvalidDimension {
            message: format!("{} qubits overflow the native amplitude index", num_qubits),
        })
}

/// Derives the register width `N` from an amplitude-array length.
///
/// # Arguments
/// * `dim` - Length of the amplitude array.
///
/// # Returns
/// * `Ok(num_qubits)` when `dim` is a power of two of at least 2.
/// * `Err(QkernError::InvalidDimension)` otherwise.
pub fn register_width(dim: usize) -> Result<usize, QkernError> {
    if dim < 2 || !dim.is_power_of_two() {
        return Err(QkernError::InvalidDimension {
            message: format!(
                "amplitude array length {} is not a power of two of at least 2",
                dim
            ),
        });
    }
    Ok(dim.trailing_zeros() as usize)
}

/// Checks that a single qubit position addresses the register.
///
/// # Returns
/// * `Ok(())` when `qubit < num_qubits`.
/// * `Err(QkernError::InvalidQubit)` otherwise.
pub fn check_qubit(qubit: usize, num_qubits: usize) -> Result<(), QkernError> {
    if qubit >= num_qubits {
        return Err(QkernError::InvalidQubit { qubit, num_qubits });
    }
    Ok(())
}

/// Checks a control set: strictly increasing, no duplicates, every position
/// inside the register. The direct enumeration strategy's insert-then-flip
/// expansion requires the controls to arrive lowest-first.
///
/// An empty set is accepted; it denotes an unconditioned transform.
pub fn check_controls(controls: &[usize], num_qubits: usize) -> Result<(), QkernError> {
    for &c in controls {
        check_qubit(c, num_qubits).map_err(|_| QkernError::InvalidControls {
            message: format!(
                "control qubit {} is outside the {}-qubit register",
                c, num_qubits
            ),
        })?;
    }
    for pair in controls.windows(2) {
        if pair[0] >= pair[1] {
            return Err(QkernError::InvalidControls {
                message: format!(
                    "control qubits must be strictly increasing, got {} before {}",
                    pair[0], pair[1]
                ),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_dim() {
        assert_eq!(register_dim(1).unwrap(), 2);
        assert_eq!(register_dim(10).unwrap(), 1024);
        assert!(register_dim(0).is_err());
        assert!(register_dim(usize::BITS as usize).is_err());
    }

    #[test]
    fn test_register_width() {
        assert_eq!(register_width(2).unwrap(), 1);
        assert_eq!(register_width(1024).unwrap(), 10);
        assert!(register_width(0).is_err());
        assert!(register_width(1).is_err());
        assert!(register_width(12).is_err());
    }

    #[test]
    fn test_check_qubit() {
        assert!(check_qubit(0, 4).is_ok());
        assert!(check_qubit(3, 4).is_ok());
        assert_eq!(
            check_qubit(4, 4),
            Err(QkernError::InvalidQubit {
                qubit: 4,
                num_qubits: 4
            })
        );
    }

    #[test]
    fn test_check_controls() {
        assert!(check_controls(&[], 4).is_ok());
        assert!(check_controls(&[0, 2, 3], 4).is_ok());
        // duplicates
        assert!(check_controls(&[1, 1], 4).is_err());
        // not increasing
        assert!(check_controls(&[2, 0], 4).is_err());
        // out of range
        assert!(check_controls(&[0, 4], 4).is_err());
    }
}
