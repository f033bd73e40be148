use std::time::Duration;

use criterion::{criterion_group, BatchSize, Criterion};
use falling_sand::physics::fallingsand::{
    config::SimulationConfigBuilder, data::simulation::Simulation,
    elements::element::ParticleType, util::vectors::XyVector,
};

const FRAME: Duration = Duration::from_millis(16);

/// The default 200x100 sandbox with the top half full of sand over a stone floor
fn get_simulation() -> Simulation {
    let config = SimulationConfigBuilder::new().build().unwrap();
    let mut simulation = Simulation::new(config).unwrap();
    let cols = simulation.get_grid().get_cols() as isize;
    let rows = simulation.get_grid().get_rows() as isize;
    for x in 0..cols {
        simulation
            .spawn(ParticleType::Stone, XyVector::new(x, 0))
            .unwrap();
    }
    for y in rows / 2..rows {
        for x in 0..cols {
            simulation
                .spawn(ParticleType::Sand, XyVector::new(x, y))
                .unwrap();
        }
    }
    simulation
}

fn bench_tick(c: &mut Criterion) {
    c.bench_function("tick", |b| {
        b.iter_batched(
            get_simulation,
            |mut simulation| {
                simulation.tick(FRAME).unwrap();
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_settle(c: &mut Criterion) {
    let mut group = c.benchmark_group("settle");
    group.sample_size(10);
    group.bench_function("settle_100_ticks", |b| {
        b.iter_batched(
            get_simulation,
            |mut simulation| {
                for _ in 0..100 {
                    simulation.tick(FRAME).unwrap();
                }
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

fn bench_get_texture(c: &mut Criterion) {
    let simulation = get_simulation();
    c.bench_function("get_texture", |b| {
        b.iter(|| {
            simulation.get_texture();
        })
    });
}

criterion_group!(benches, bench_tick, bench_settle, bench_get_texture);
