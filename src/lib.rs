// src/lib.rs

//! `qkern` - Local statevector kernels for control-conditioned gates and
//! the quantum Fourier transform
//!
//! Simulating a gate on an `N`-qubit register means transforming a dense
//! array of `2^N` amplitudes, and when the gate carries control qubits
//! only a power-of-two subset of those amplitudes is touched. This crate
//! implements the competing low-level techniques for finding and
//! transforming exactly that subset (predicate scans, branchless blends,
//! and compressed enumerations that never visit a non-satisfying index),
//! together with QFT kernels whose controlled-phase chains can be
//! collapsed into a single closed-form diagonal, and a harness that times
//! the alternatives against each other under identical workloads.
//!
//! ```
//! use qkern::{SingleControlStrategy, apply_single_control};
//!
//! // Transform the amplitudes whose index has bit 1 set.
//! let f = |x: f64| 1.5 * (x - 0.1) * (x - 0.1);
//! let mut amps = vec![1.0; 8];
//! apply_single_control(&mut amps, 1, SingleControlStrategy::PairedHalving, &f, false, 0)?;
//!
//! let hit = f(1.0); // = 1.215
//! assert_eq!(amps, vec![1.0, 1.0, hit, hit, 1.0, 1.0, hit, hit]);
//! # Ok::<(), qkern::QkernError>(())
//! ```

pub mod bench;
pub mod controls;
pub mod core;
pub mod output;
pub mod qft;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use bench::{
    Stopwatch, StrategySweep, SweepReport, TimingStats, sample_sorted_distinct,
    stand_in_transform, sweep_multi_control, sweep_single_control,
};
pub use controls::{
    DEFAULT_PARALLEL_THRESHOLD, MultiControlStrategy, SingleControlStrategy, apply_multi_control,
    apply_single_control,
};
pub use core::{QkernError, Statevector};
pub use output::AssocWriter;
pub use qft::{
    apply_controlled_phase, apply_hadamard, apply_merged_phases, apply_phase_chain,
    apply_qft_circuit, apply_qft_merged, apply_swap,
};
