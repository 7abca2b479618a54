// src/bin/control_bench.rs

//! Command-line driver for the control-strategy benchmarks.
//!
//! Run without arguments for a fixed illustrative scenario at a hardcoded
//! register size, printing per-strategy timings to stdout. Run as
//! `control_bench <s|m> <numQubits> <numReps> <outputPath>` for the full
//! single- (`s`) or multi-control (`m`) sweep, written as an association
//! file for downstream analysis. Anything else prints usage and performs
//! no work.

use qkern::{
    DEFAULT_PARALLEL_THRESHOLD, MultiControlStrategy, QkernError, SingleControlStrategy,
    Stopwatch, apply_multi_control, apply_single_control, stand_in_transform,
    sweep_multi_control, sweep_single_control, validation,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::error::Error;
use std::path::Path;
use std::process;

/// Significant digits in the exported scientific notation.
const OUT_PRECISION: usize = 5;

/// Register size of the no-argument illustrative scenario.
const DEMO_NUM_QUBITS: usize = 24;

fn usage(program: &str) -> ! {
    eprintln!("call as either:");
    eprintln!("\t{}", program);
    eprintln!("\t{} <s|m> <numQubits> <numReps> <outputPath>", program);
    process::exit(2);
}

/// One timed pass per strategy at a fixed control assignment.
fn demo() -> Result<(), QkernError> {
    let dim = validation::register_dim(DEMO_NUM_QUBITS)?;
    println!("[{} qubits]\n", DEMO_NUM_QUBITS);

    let mut amps = vec![1.0; dim];

    println!("single control");
    let c = 2;
    for strategy in SingleControlStrategy::ALL {
        println!("{}", strategy.label());
        let clock = Stopwatch::start();
        apply_single_control(
            &mut amps,
            c,
            strategy,
            &stand_in_transform,
            true,
            DEFAULT_PARALLEL_THRESHOLD,
        )?;
        println!("\t\t{:.6} (s)", clock.elapsed_secs());
    }

    println!("multiple controls");
    let ctrls = [0, 2, 4, 6, 7, 15, 16, 20, 21, 22]; // must be increasing
    for strategy in MultiControlStrategy::ALL {
        println!("{}", strategy.label());
        amps.fill(1.0);
        let clock = Stopwatch::start();
        apply_multi_control(
            &mut amps,
            &ctrls,
            strategy,
            &stand_in_transform,
            true,
            DEFAULT_PARALLEL_THRESHOLD,
        )?;
        println!("\t\t{:.6} (s)", clock.elapsed_secs());
    }

    Ok(())
}

fn run_sweep(
    mode: &str,
    num_qubits: usize,
    num_reps: usize,
    out_path: &Path,
    program: &str,
) -> Result<(), Box<dyn Error>> {
    println!("[{} qubits]\n", num_qubits);

    let report = match mode {
        "s" => sweep_single_control(num_qubits, num_reps)?,
        "m" => {
            let mut rng = StdRng::from_rng(&mut rand::rng());
            sweep_multi_control(num_qubits, num_reps, &mut rng)?
        }
        _ => usage(program),
    };

    report.write_assoc(out_path, OUT_PRECISION)?;
    println!("wrote {}", out_path.display());
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("control_bench");

    let outcome: Result<(), Box<dyn Error>> = match args.len() {
        1 => demo().map_err(Into::into),
        5 => {
            let (Ok(num_qubits), Ok(num_reps)) =
                (args[2].parse::<usize>(), args[3].parse::<usize>())
            else {
                usage(program)
            };
            run_sweep(&args[1], num_qubits, num_reps, Path::new(&args[4]), program)
        }
        _ => usage(program),
    };

    if let Err(e) = outcome {
        eprintln!("{}", e);
        process::exit(1);
    }
}
