// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Placement resolver cost per pointer event.
//!
//! Compares:
//! 1. Rectangle room, clamp only
//! 2. L room, single nudge fallback
//! 3. L room, iterative fallback
//!
//! Run with: cargo bench -p roomplan-geometry --bench constrain

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use roomplan_geometry::{
    constrain_with, ConstraintOptions, Fallback, Footprint, FootprintMode, PlanePoint, RoomShape,
    ShapeType,
};

fn bench_constrain(c: &mut Criterion) {
    let mut group = c.benchmark_group("constrain");
    let footprint = Footprint::new(1.0, 1.0);
    // Far corner of each room's bounding box
    let desired = PlanePoint::new(100.0, 100.0);

    let cases = [
        ("rectangle", ShapeType::Rectangle, Fallback::Nudge),
        ("l-nudge", ShapeType::LShape, Fallback::Nudge),
        ("l-iterate", ShapeType::LShape, Fallback::Iterate { max_steps: 50 }),
    ];

    for (name, shape, fallback) in cases {
        let vertices = RoomShape::default_for(shape).vertices();
        let options = ConstraintOptions {
            footprint_mode: FootprintMode::Rotated,
            fallback,
            ..ConstraintOptions::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(name), &vertices, |b, vertices| {
            b.iter(|| {
                constrain_with(
                    black_box(&desired),
                    black_box(&footprint),
                    black_box(0.3),
                    vertices,
                    &options,
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_constrain);
criterion_main!(benches);
