// src/bin/qft_bench.rs

//! Command-line driver for the QFT benchmarks.
//!
//! Times the chain of contiguous controlled-phase gates against its single
//! merged diagonal, then the full QFT circuit against the merged-phase
//! composition, on a random normalized statevector at a hardcoded register
//! size. Takes no arguments.

use qkern::{
    QkernError, Statevector, Stopwatch, apply_merged_phases, apply_phase_chain,
    apply_qft_circuit, apply_qft_merged,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::process;

/// Register size of the benchmark scenario.
const NUM_QUBITS: usize = 24;

/// Fixed seed so successive runs time identical inputs.
const SEED: u64 = 0x5157_4654;

fn run() -> Result<(), QkernError> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut psi = Statevector::random(NUM_QUBITS, &mut rng)?;
    println!("[{} qubits]\n", NUM_QUBITS);

    println!("contiguous phases");
    {
        println!("\tas {} gates", NUM_QUBITS - 1);
        let clock = Stopwatch::start();
        apply_phase_chain(psi.amplitudes_mut(), NUM_QUBITS - 1)?;
        println!("\t\t{:.6} (s)", clock.elapsed_secs());
    }
    {
        println!("\tas 1 merged gate");
        let clock = Stopwatch::start();
        apply_merged_phases(psi.amplitudes_mut(), NUM_QUBITS - 1)?;
        println!("\t\t{:.6} (s)", clock.elapsed_secs());
    }

    println!("QFT");
    {
        println!("\tusing full circuit");
        let clock = Stopwatch::start();
        apply_qft_circuit(psi.amplitudes_mut())?;
        println!("\t\t{:.6} (s)", clock.elapsed_secs());
    }
    {
        println!("\tusing merged phases");
        let clock = Stopwatch::start();
        apply_qft_merged(psi.amplitudes_mut())?;
        println!("\t\t{:.6} (s)", clock.elapsed_secs());
    }

    Ok(())
}

fn main() {
    if env::args().count() > 1 {
        eprintln!("call with no arguments:");
        eprintln!("\tqft_bench");
        process::exit(2);
    }

    if let Err(e) = run() {
        eprintln!("{}", e);
        process::exit(1);
    }
}
