// src/bench/mod.rs

//! Benchmark harness for the control-strategy kernels.
//!
//! The harness exists to compare the strategies fairly, so it holds every
//! other factor constant: each timed trial sees the same canonical input
//! (the array is refilled before the clock starts, since the first write
//! to a fresh heap page carries a fault cost that would otherwise pollute
//! the first trial), and within a multi-control repetition every strategy
//! faces the identical randomly-drawn control set. Statistics are reduced
//! per (strategy, sweep-position) cell after all repetitions complete.

pub(crate) mod sampler;
pub(crate) mod stats;
pub(crate) mod timer;

pub use sampler::sample_sorted_distinct;
pub use stats::TimingStats;
pub use timer::Stopwatch;

use crate::controls::{
    self, DEFAULT_PARALLEL_THRESHOLD, MultiControlStrategy, SingleControlStrategy,
};
use crate::core::QkernError;
use crate::output::AssocWriter;
use crate::validation;
use rand::Rng;
use std::io;
use std::path::Path;

/// The canonical amplitude every trial starts from.
const CANONICAL_AMP: f64 = 1.0;

/// The stand-in elementwise transform benchmarked in place of a real
/// unitary update. Pure and total, as the branchless strategies require;
/// evaluates to 1.215 at the canonical input, which the concrete test
/// scenarios rely on.
pub fn stand_in_transform(amp: f64) -> f64 {
    1.5 * (amp - 0.1) * (amp - 0.1)
}

/// Timing results for one strategy across a sweep: `mean_durs[p]` and
/// `variances[p]` describe sweep position `p` (control position for the
/// single-control sweep, control count − 2 for the multi-control sweep).
#[derive(Debug, Clone)]
pub struct StrategySweep {
    /// The strategy's short label ("A".."D").
    pub label: &'static str,
    /// Mean trial duration per sweep position, in seconds.
    pub mean_durs: Vec<f64>,
    /// Unbiased variance of the trial durations per sweep position.
    pub variances: Vec<f64>,
}

/// A complete sweep's results, ready for export.
#[derive(Debug, Clone)]
pub struct SweepReport {
    /// Free-form description carried into the output file.
    pub note: &'static str,
    /// Register size the sweep ran at.
    pub num_qubits: usize,
    /// Trials per (strategy, sweep-position) cell.
    pub num_reps: usize,
    /// Per-strategy timing arrays, all the same length.
    pub strategies: Vec<StrategySweep>,
}

impl SweepReport {
    /// Writes the report as an association file for downstream analysis:
    /// scalars first, then per-strategy `dur_<label>` / `var_<label>`
    /// arrays in scientific notation with `precision` digits after the
    /// decimal point.
    /// The file appears atomically at `finish`; readers never observe a
    /// partial record.
    pub fn write_assoc(&self, path: &Path, precision: usize) -> io::Result<()> {
        let mut writer = AssocWriter::new();
        writer.put_str("note", self.note);
        writer.put_int("numQubits", self.num_qubits as i64);
        writer.put_int("numReps", self.num_reps as i64);
        writer.put_int("outPrec", precision as i64);
        for strategy in &self.strategies {
            writer.put_f64_array(
                &format!("dur_{}", strategy.label),
                &strategy.mean_durs,
                precision,
            );
            writer.put_f64_array(
                &format!("var_{}", strategy.label),
                &strategy.variances,
                precision,
            );
        }
        writer.finish(path)
    }
}

/// Benchmarks every single-control strategy at every control position.
///
/// For each of the four strategies and each control qubit `c` in
/// `[0, num_qubits)`, runs `num_reps` trials: refill the array to the
/// canonical value, then time exactly one strategy invocation.
pub fn sweep_single_control(
    num_qubits: usize,
    num_reps: usize,
) -> Result<SweepReport, QkernError> {
    let dim = validation::register_dim(num_qubits)?;
    // Allocated once per sweep; the fill below also pays the first-touch
    // cost before any clock starts.
    let mut amps = vec![CANONICAL_AMP; dim];

    let mut strategies = Vec::with_capacity(SingleControlStrategy::ALL.len());
    for strategy in SingleControlStrategy::ALL {
        let mut mean_durs = Vec::with_capacity(num_qubits);
        let mut variances = Vec::with_capacity(num_qubits);

        for c in 0..num_qubits {
            let mut samples = Vec::with_capacity(num_reps);
            for _ in 0..num_reps {
                amps.fill(CANONICAL_AMP);

                let clock = Stopwatch::start();
                controls::apply_single_control(
                    &mut amps,
                    c,
                    strategy,
                    &stand_in_transform,
                    true,
                    DEFAULT_PARALLEL_THRESHOLD,
                )?;
                samples.push(clock.elapsed_secs());
            }
            let cell = TimingStats::from_samples(&samples);
            mean_durs.push(cell.mean);
            variances.push(cell.variance);
        }

        strategies.push(StrategySweep {
            label: strategy.label(),
            mean_durs,
            variances,
        });
    }

    Ok(SweepReport {
        note: "timings are already per-rep",
        num_qubits,
        num_reps,
        strategies,
    })
}

/// Benchmarks every multi-control strategy across control-set sizes.
///
/// The space of control sets is exponential, so instead of enumerating it
/// the sweep walks `num_ctrls` from 2 to `num_qubits` and draws `num_reps`
/// random sorted-distinct sets per size. The set drawn for a repetition is
/// applied by *every* strategy in that repetition before the next draw;
/// strategies are never compared on different random inputs.
pub fn sweep_multi_control<R: Rng>(
    num_qubits: usize,
    num_reps: usize,
    rng: &mut R,
) -> Result<SweepReport, QkernError> {
    let dim = validation::register_dim(num_qubits)?;
    if num_qubits < 2 {
        return Err(QkernError::InvalidControls {
            message: "multi-control sweep needs a register of at least 2 qubits".to_string(),
        });
    }
    let mut amps = vec![CANONICAL_AMP; dim];

    let num_cells = num_qubits - 1; // num_ctrls = 2..=num_qubits
    let mut mean_durs = vec![Vec::with_capacity(num_cells); MultiControlStrategy::ALL.len()];
    let mut variances = vec![Vec::with_capacity(num_cells); MultiControlStrategy::ALL.len()];

    for num_ctrls in 2..=num_qubits {
        let mut samples: Vec<Vec<f64>> =
            vec![Vec::with_capacity(num_reps); MultiControlStrategy::ALL.len()];

        for _ in 0..num_reps {
            let ctrls = sample_sorted_distinct(rng, num_ctrls, num_qubits);

            for (s, strategy) in MultiControlStrategy::ALL.into_iter().enumerate() {
                amps.fill(CANONICAL_AMP);

                let clock = Stopwatch::start();
                controls::apply_multi_control(
                    &mut amps,
                    &ctrls,
                    strategy,
                    &stand_in_transform,
                    true,
                    DEFAULT_PARALLEL_THRESHOLD,
                )?;
                samples[s].push(clock.elapsed_secs());
            }
        }

        for (s, cell_samples) in samples.iter().enumerate() {
            let cell = TimingStats::from_samples(cell_samples);
            mean_durs[s].push(cell.mean);
            variances[s].push(cell.variance);
        }
    }

    let strategies = MultiControlStrategy::ALL
        .into_iter()
        .enumerate()
        .map(|(s, strategy)| StrategySweep {
            label: strategy.label(),
            mean_durs: std::mem::take(&mut mean_durs[s]),
            variances: std::mem::take(&mut variances[s]),
        })
        .collect();

    Ok(SweepReport {
        note: "timings are already per-rep",
        num_qubits,
        num_reps,
        strategies,
    })
}
