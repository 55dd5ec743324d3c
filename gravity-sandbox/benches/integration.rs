// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Benchmarks for the all-pairs gravity step
//!
//! These benchmarks measure:
//! - Step throughput for different body counts (the O(n²) force pass dominates)
//! - Force accumulation alone, without the velocity/position update
//! - Buffer reuse versus a fresh integrator per step

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use glam::DVec2;
use gravity_sandbox::{step, BodyKind, Gravity, SemiImplicitEuler, World};

// Star cluster on a jittered ring so no two bodies coincide
fn setup_cluster(body_count: usize) -> World {
    let mut world = World::new();
    for i in 0..body_count {
        let angle = i as f64 * 2.399963; // golden angle
        let radius = 1e10 + (i as f64) * 3.7e8;
        let position = DVec2::new(angle.cos(), angle.sin()) * radius;
        let velocity = DVec2::new(-angle.sin(), angle.cos()) * 20_000.0;
        let kind = if i % 4 == 0 { BodyKind::Star } else { BodyKind::Planet };
        let mass = match kind {
            BodyKind::Star => 5e29 + (i as f64) * 1e27,
            BodyKind::Planet => 1e24 + (i as f64) * 1e22,
        };
        world.add_body(position, velocity, mass, kind).unwrap();
    }
    world
}

fn bench_step_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_throughput");

    for body_count in [10, 50, 200].iter() {
        group.throughput(Throughput::Elements(*body_count as u64));

        group.bench_with_input(
            BenchmarkId::new("semi_implicit_euler", body_count),
            body_count,
            |b, &body_count| {
                let mut world = setup_cluster(body_count);
                let mut integrator = SemiImplicitEuler::new();

                b.iter(|| integrator.step(black_box(&mut world)));
            },
        );
    }

    group.finish();
}

fn bench_force_accumulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("force_accumulation");

    for body_count in [10, 50, 200].iter() {
        group.throughput(Throughput::Elements((*body_count * (*body_count - 1) / 2) as u64));

        group.bench_with_input(BenchmarkId::new("all_pairs", body_count), body_count, |b, &body_count| {
            let world = setup_cluster(body_count);
            let gravity = Gravity::for_world(&world);
            let mut forces = Vec::with_capacity(body_count);

            b.iter(|| {
                gravity.accumulate_forces(black_box(world.bodies()), &mut forces);
                black_box(forces[0])
            });
        });
    }

    group.finish();
}

fn bench_buffer_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_reuse");

    group.bench_function("reused_integrator", |b| {
        let mut world = setup_cluster(50);
        let mut integrator = SemiImplicitEuler::new();
        b.iter(|| integrator.step(black_box(&mut world)));
    });

    group.bench_function("fresh_integrator", |b| {
        let mut world = setup_cluster(50);
        b.iter(|| step(black_box(&mut world)));
    });

    group.finish();
}

criterion_group!(benches, bench_step_throughput, bench_force_accumulation, bench_buffer_reuse);
criterion_main!(benches);
