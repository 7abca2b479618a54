// src/qft/mod.rs

//! Quantum Fourier Transform kernels over a dense complex statevector.
//!
//! The gate primitives (Hadamard, controlled-phase, swap) all enumerate
//! their target amplitudes through the affix decompositions in
//! `core::bits`, so no pass ever branches on a per-index predicate or
//! touches amplitudes outside its target subset.
//!
//! Two compositions of the transform are provided:
//!
//! * [`apply_qft_circuit`] evaluates the textbook gate sequence: per
//!   target qubit a Hadamard followed by a chain of controlled-phase
//!   rotations against every lower qubit, then a final bit-order reversal.
//! * [`apply_qft_merged`] replaces each controlled-phase chain with a
//!   single closed-form diagonal: the product of the chain's rotations on
//!   an index with bit `t` set is `exp(i * π/2^t * (index mod 2^t))`, so
//!   one pass over half the array substitutes for `t` separate gate
//!   applications.
//!
//! Both compositions produce the same statevector up to floating-point
//! rounding; demonstrating that the optimization preserves this
//! equivalence is what the accompanying benchmarks measure.

use crate::core::QkernError;
use crate::core::bits::{
    flip_bit, pow2, truncate_bits, zero_bit_from_affix, zero_bits_from_affixes,
};
use crate::validation;
use num_complex::Complex;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// The unit phase factor `e^(i*theta)`.
#[inline]
fn expi(theta: f64) -> Complex<f64> {
    Complex::new(theta.cos(), theta.sin())
}

/// Applies a Hadamard gate to qubit `t`.
///
/// For every pair of indices differing only in bit `t`, replaces the
/// amplitudes `(a0, a1)` with `((a0+a1)/√2, (a0−a1)/√2)`.
pub fn apply_hadamard(psi: &mut [Complex<f64>], t: usize) -> Result<(), QkernError> {
    let num_qubits = validation::register_width(psi.len())?;
    validation::check_qubit(t, num_qubits)?;

    let prefix_count = pow2(num_qubits - (t + 1));
    let suffix_count = pow2(t);

    for j in 0..prefix_count {
        for k in 0..suffix_count {
            // |j>|0>|k> and |j>|1>|k>
            let j0k = zero_bit_from_affix(j, k, t);
            let j1k = flip_bit(j0k, t);

            let a0 = psi[j0k];
            let a1 = psi[j1k];

            psi[j0k] = (a0 + a1) * FRAC_1_SQRT_2;
            psi[j1k] = (a0 - a1) * FRAC_1_SQRT_2;
        }
    }
    Ok(())
}

/// Multiplies by `e^(i*theta)` every amplitude whose index has both the
/// control and the target bit set.
///
/// The gate is symmetric in its two qubits; they are sorted internally and
/// the doubly-forced-zero affix decomposition enumerates exactly the
/// `2^(N-2)` satisfying indices.
pub fn apply_controlled_phase(
    psi: &mut [Complex<f64>],
    c: usize,
    t: usize,
    theta: f64,
) -> Result<(), QkernError> {
    let num_qubits = validation::register_width(psi.len())?;
    validation::check_qubit(c, num_qubits)?;
    validation::check_qubit(t, num_qubits)?;
    if c == t {
        return Err(QkernError::InvalidControls {
            message: format!("controlled-phase control and target coincide at qubit {}", c),
        });
    }

    let t1 = c.min(t);
    let t2 = c.max(t);
    let fac = expi(theta);

    // phase shift |j>|1>|k>|1>|l>
    let prefix_count = pow2(num_qubits - (t2 + 1));
    let infix_count = pow2(t2 - (t1 + 1));
    let suffix_count = pow2(t1);

    for j in 0..prefix_count {
        for k in 0..infix_count {
            for l in 0..suffix_count {
                let j0k0l = zero_bits_from_affixes(j, k, l, t2, t1);
                let j1k1l = flip_bit(flip_bit(j0k0l, t2), t1);

                psi[j1k1l] *= fac;
            }
        }
    }
    Ok(())
}

/// Exchanges the amplitudes of every index pair differing in exactly bits
/// `t1` and `t2` (one set, the other clear).
pub fn apply_swap(psi: &mut [Complex<f64>], t1: usize, t2: usize) -> Result<(), QkernError> {
    let num_qubits = validation::register_width(psi.len())?;
    validation::check_qubit(t1, num_qubits)?;
    validation::check_qubit(t2, num_qubits)?;
    if t1 == t2 {
        return Err(QkernError::InvalidControls {
            message: format!("swap targets coincide at qubit {}", t1),
        });
    }

    let (t1, t2) = (t1.min(t2), t1.max(t2));

    // |j>|0>|k>|1>|l> <-> |j>|1>|k>|0>|l>
    let prefix_count = pow2(num_qubits - (t2 + 1));
    let infix_count = pow2(t2 - (t1 + 1));
    let suffix_count = pow2(t1);

    for j in 0..prefix_count {
        for k in 0..infix_count {
            for l in 0..suffix_count {
                let j0k0l = zero_bits_from_affixes(j, k, l, t2, t1);
                let j0k1l = flip_bit(j0k0l, t1);
                let j1k0l = flip_bit(j0k0l, t2);

                psi.swap(j0k1l, j1k0l);
            }
        }
    }
    Ok(())
}

/// Applies the QFT's chain of controlled-phase rotations sharing control
/// qubit `t_max`: one gate per lower qubit `t`, rotating by `2π/2^m` where
/// `m` starts at 2 for `t = t_max − 1` and increments as `t` descends.
pub fn apply_phase_chain(psi: &mut [Complex<f64>], t_max: usize) -> Result<(), QkernError> {
    let num_qubits = validation::register_width(psi.len())?;
    validation::check_qubit(t_max, num_qubits)?;

    let mut m = 2;
    for t in (0..t_max).rev() {
        let theta = 2.0 * PI / pow2(m) as f64;
        apply_controlled_phase(psi, t_max, t, theta)?;
        m += 1;
    }
    Ok(())
}

/// Applies the single diagonal operator equivalent to
/// [`apply_phase_chain`] for the same `t_max`.
///
/// For an index with bit `t_max` set, the chained rotations multiply to
/// one phase determined by the low `t_max` bits alone:
/// `theta = (π / 2^t_max) * (index mod 2^t_max)`. One pass over the
/// `2^(N-1)` satisfying indices applies it directly.
pub fn apply_merged_phases(psi: &mut [Complex<f64>], t_max: usize) -> Result<(), QkernError> {
    let num_qubits = validation::register_width(psi.len())?;
    validation::check_qubit(t_max, num_qubits)?;

    // |j>|1>|k>
    let prefix_count = pow2(num_qubits - (t_max + 1));
    let suffix_count = pow2(t_max);

    let fac = PI / suffix_count as f64;

    for j in 0..prefix_count {
        for k in 0..suffix_count {
            let j0k = zero_bit_from_affix(j, k, t_max);
            let j1k = flip_bit(j0k, t_max);

            let theta = fac * truncate_bits(j1k, t_max) as f64;
            psi[j1k] *= expi(theta);
        }
    }
    Ok(())
}

/// The full QFT as an explicit gate circuit: for each target from the top
/// qubit down, a Hadamard then its controlled-phase chain; finally the
/// `⌊N/2⌋` swaps reversing qubit order.
pub fn apply_qft_circuit(psi: &mut [Complex<f64>]) -> Result<(), QkernError> {
    let num_qubits = validation::register_width(psi.len())?;

    for t in (1..num_qubits).rev() {
        apply_hadamard(psi, t)?;
        apply_phase_chain(psi, t)?;
    }
    apply_hadamard(psi, 0)?;

    for t in 0..num_qubits / 2 {
        apply_swap(psi, t, num_qubits - t - 1)?;
    }
    Ok(())
}

/// The full QFT with every controlled-phase chain collapsed into its
/// merged diagonal. Agrees with [`apply_qft_circuit`] elementwise up to
/// floating-point rounding.
pub fn apply_qft_merged(psi: &mut [Complex<f64>]) -> Result<(), QkernError> {
    let num_qubits = validation::register_width(psi.len())?;

    for t in (1..num_qubits).rev() {
        apply_hadamard(psi, t)?;
        apply_merged_phases(psi, t)?;
    }
    apply_hadamard(psi, 0)?;

    for t in 0..num_qubits / 2 {
        apply_swap(psi, t, num_qubits - t - 1)?;
    }
    Ok(())
}
