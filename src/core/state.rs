// src/core/state.rs

use crate::core::error::QkernError;
use crate::validation;
use num_complex::Complex;
use num_traits::Zero;
use rand::Rng;
use rand::RngExt;
use std::fmt;

/// A dense statevector over a register of `num_qubits` qubits.
///
/// The amplitude array is owned, contiguous, and always exactly `2^N` long;
/// bit `b` of an array index (bit 0 = least significant) is the value of
/// qubit `b` in the corresponding basis state. That invariant is what lets
/// the gate kernels address amplitudes with pure bit arithmetic, so it is
/// enforced at construction and never revalidated on the hot paths.
///
/// The control-strategy benchmarks operate on plain `&mut [f64]` arrays
/// instead, a documented convenience substitution: the elementwise
/// transform is applied identically regardless of amplitude type. This
/// type carries the complex amplitudes the QFT kernels need.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct Statevector {
    amps: Vec<Complex<f64>>,
    num_qubits: usize,
}

impl Statevector {
    /// Creates the basis state |0...0>: amplitude 1 at index 0, 0 elsewhere.
    pub fn zero(num_qubits: usize) -> Result<Self, QkernError> {
        let dim = validation::register_dim(num_qubits)?;
        let mut amps = vec![Complex::zero(); dim];
        amps[0] = Complex::new(1.0, 0.0);
        Ok(Self { amps, num_qubits })
    }

    /// Creates the unnormalized all-ones vector. Handy as a canonical,
    /// easily-predicted input for kernel tests.
    pub fn uniform_ones(num_qubits: usize) -> Result<Self, QkernError> {
        let dim = validation::register_dim(num_qubits)?;
        Ok(Self {
            amps: vec![Complex::new(1.0, 0.0); dim],
            num_qubits,
        })
    }

    /// Creates a random normalized statevector: each component drawn
    /// uniformly from the square [-1-i, 1+i], then the whole vector scaled
    /// to unit norm.
    ///
    /// The RNG is caller-owned state, so benchmark inputs are reproducible
    /// from a seed and tests can inject their own generator.
    pub fn random<R: Rng>(num_qubits: usize, rng: &mut R) -> Result<Self, QkernError> {
        let dim = validation::register_dim(num_qubits)?;
        let mut amps = Vec::with_capacity(dim);
        let mut norm_sq = 0.0;
        for _ in 0..dim {
            let re = 2.0 * rng.random::<f64>() - 1.0;
            let im = 2.0 * rng.random::<f64>() - 1.0;
            let c = Complex::new(re, im);
            norm_sq += c.norm_sqr();
            amps.push(c);
        }
        let norm = norm_sq.sqrt();
        for c in amps.iter_mut() {
            *c /= norm;
        }
        Ok(Self { amps, num_qubits })
    }

    /// The number of qubits in the register.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The number of amplitudes (`2^num_qubits`).
    pub fn dim(&self) -> usize {
        self.amps.len()
    }

    /// Read-only access to the amplitude array.
    pub fn amplitudes(&self) -> &[Complex<f64>] {
        &self.amps
    }

    /// Mutable access for the gate kernels.
    pub fn amplitudes_mut(&mut self) -> &mut [Complex<f64>] {
        &mut self.amps
    }

    /// Sum of squared amplitude magnitudes (1.0 for a normalized state).
    pub fn norm_sqr(&self) -> f64 {
        self.amps.iter().map(|c| c.norm_sqr()).sum()
    }
}

impl fmt::Display for Statevector {
    // Intended for small registers; prints every amplitude.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statevector[{} qubits]", self.num_qubits)?;
        for (i, c) in self.amps.iter().enumerate() {
            writeln!(f, "  psi[{}] = {:.6} + i({:.6})", i, c.re, c.im)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_zero_state() {
        let psi = Statevector::zero(3).unwrap();
        assert_eq!(psi.dim(), 8);
        assert_eq!(psi.amplitudes()[0], Complex::new(1.0, 0.0));
        assert!(psi.amplitudes()[1..].iter().all(|c| c.is_zero()));
    }

    #[test]
    fn test_zero_qubits_rejected() {
        assert!(matches!(
            Statevector::zero(0),
            Err(QkernError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_random_state_is_normalized() {
        let mut rng = StdRng::seed_from_u64(7);
        let psi = Statevector::random(6, &mut rng).unwrap();
        assert!((psi.norm_sqr() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_random_state_is_reproducible() {
        let a = Statevector::random(4, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = Statevector::random(4, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }
}
