// benches/strategies.rs

//! Criterion throughput comparison of the gate kernels, complementing the
//! crate's own sweep harness with statistically managed measurements.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use qkern::{
    MultiControlStrategy, SingleControlStrategy, Statevector, apply_merged_phases,
    apply_multi_control, apply_phase_chain, apply_qft_circuit, apply_qft_merged,
    apply_single_control, stand_in_transform,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

const NUM_QUBITS: usize = 16;

fn bench_single_control(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_control");
    let mut amps = vec![1.0; 1 << NUM_QUBITS];

    for strategy in SingleControlStrategy::ALL {
        group.bench_function(strategy.label(), |b| {
            b.iter(|| {
                apply_single_control(
                    &mut amps,
                    black_box(NUM_QUBITS / 2),
                    strategy,
                    &stand_in_transform,
                    false,
                    0,
                )
                .unwrap();
            })
        });
    }
    group.finish();
}

fn bench_multi_control(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_control");
    let mut amps = vec![1.0; 1 << NUM_QUBITS];
    let ctrls = [0, 3, 7, 11, 14];

    for strategy in MultiControlStrategy::ALL {
        group.bench_function(strategy.label(), |b| {
            b.iter(|| {
                apply_multi_control(
                    &mut amps,
                    black_box(&ctrls),
                    strategy,
                    &stand_in_transform,
                    false,
                    0,
                )
                .unwrap();
            })
        });
    }
    group.finish();
}

fn bench_phase_merging(c: &mut Criterion) {
    let mut group = c.benchmark_group("contiguous_phases");
    let t_max = NUM_QUBITS - 1;
    let mut psi = Statevector::uniform_ones(NUM_QUBITS).unwrap();

    group.bench_function("chain", |b| {
        b.iter(|| apply_phase_chain(psi.amplitudes_mut(), black_box(t_max)).unwrap())
    });
    group.bench_function("merged", |b| {
        b.iter(|| apply_merged_phases(psi.amplitudes_mut(), black_box(t_max)).unwrap())
    });
    group.finish();
}

fn bench_qft(c: &mut Criterion) {
    let mut group = c.benchmark_group("qft");
    let psi = Statevector::random(12, &mut StdRng::seed_from_u64(1)).unwrap();

    group.bench_function("circuit", |b| {
        b.iter_batched(
            || psi.clone(),
            |mut s| apply_qft_circuit(s.amplitudes_mut()).unwrap(),
            BatchSize::LargeInput,
        )
    });
    group.bench_function("merged", |b| {
        b.iter_batched(
            || psi.clone(),
            |mut s| apply_qft_merged(s.amplitudes_mut()).unwrap(),
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_single_control,
    bench_multi_control,
    bench_phase_merging,
    bench_qft
);
criterion_main!(benches);
