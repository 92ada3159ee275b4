// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sweeps over shape parameters and desired positions checking the outline
//! and placement guarantees.

use roomplan_geometry::{
    constrain, constrain_with, footprint_inside, is_orthogonal, point_in_polygon, ConstraintOptions,
    Fallback, Footprint, FootprintMode, PlanePoint, Point2D, RoomShape,
};

fn shapes() -> Vec<RoomShape> {
    let mut out = Vec::new();
    for width in [150.0, 400.0, 733.0] {
        for depth in [120.0, 300.0, 515.0] {
            out.push(RoomShape::Rectangle { width, depth });
            for frac in [0.1, 0.5, 0.9] {
                out.push(RoomShape::LShape {
                    width,
                    depth,
                    cutout_width: width * frac,
                    cutout_depth: depth * (1.0 - frac),
                });
                out.push(RoomShape::UShape {
                    width,
                    depth,
                    opening_width: width * frac,
                    arm_depth: depth * (1.0 - frac),
                });
            }
        }
    }
    out
}

#[test]
fn every_valid_shape_is_orthogonal() {
    for shape in shapes() {
        let vertices = shape.try_vertices().unwrap();
        assert!(is_orthogonal(&vertices), "{shape:?}");
    }
}

#[test]
fn removed_corner_is_outside() {
    let square = [
        Point2D::new(0.0, 0.0),
        Point2D::new(1.0, 0.0),
        Point2D::new(1.0, 1.0),
        Point2D::new(0.0, 1.0),
    ];
    assert!(point_in_polygon(&PlanePoint::new(0.5, 0.5), &square));
    assert!(!point_in_polygon(&PlanePoint::new(1.5, 0.5), &square));

    let l = RoomShape::LShape {
        width: 500.0,
        depth: 400.0,
        cutout_width: 200.0,
        cutout_depth: 200.0,
    }
    .vertices();
    assert!(point_in_polygon(&PlanePoint::new(1.0, 3.0), &l));
    assert!(!point_in_polygon(&PlanePoint::new(4.0, 3.0), &l));
}

fn grid(min: f64, max: f64, steps: usize) -> impl Iterator<Item = f64> + Clone {
    (0..=steps).map(move |i| min + (max - min) * i as f64 / steps as f64)
}

#[test]
fn contained_positions_are_left_alone() {
    let footprint = Footprint::new(0.8, 0.6);
    for shape in shapes() {
        let vertices = shape.vertices();
        for x in grid(-1.0, 9.0, 40) {
            for z in grid(-1.0, 6.0, 40) {
                let p = PlanePoint::new(x, z);
                if footprint_inside(&p, &footprint, 0.0, FootprintMode::AxisAligned, &vertices) {
                    assert_eq!(constrain(&p, &footprint, &vertices), p, "{shape:?} at {p:?}");
                }
            }
        }
    }
}

#[test]
fn rectangle_rooms_always_contain_the_result() {
    let footprint = Footprint::new(1.2, 0.7);
    for (width, depth) in [(400.0, 300.0), (250.0, 600.0), (130.0, 80.0)] {
        let vertices = RoomShape::Rectangle { width, depth }.vertices();
        if footprint.width > width / 100.0 || footprint.depth > depth / 100.0 {
            continue;
        }
        for x in grid(-20.0, 20.0, 25) {
            for z in grid(-20.0, 20.0, 25) {
                let p = constrain(&PlanePoint::new(x, z), &footprint, &vertices);
                assert!(
                    footprint_inside(&p, &footprint, 0.0, FootprintMode::AxisAligned, &vertices),
                    "{width}x{depth}: ({x}, {z}) -> {p:?}"
                );
            }
        }
    }
}

#[test]
fn rotated_footprints_stay_inside_rectangles() {
    let footprint = Footprint::new(1.5, 0.5);
    let vertices = RoomShape::Rectangle {
        width: 500.0,
        depth: 400.0,
    }
    .vertices();
    let options = ConstraintOptions {
        footprint_mode: FootprintMode::Rotated,
        ..ConstraintOptions::default()
    };

    for yaw in grid(0.0, std::f64::consts::TAU, 16) {
        for (x, z) in [(-9.0, -9.0), (9.0, -9.0), (9.0, 9.0), (-9.0, 9.0), (2.5, 9.0)] {
            let p = constrain_with(&PlanePoint::new(x, z), &footprint, yaw, &vertices, &options);
            assert!(
                footprint_inside(&p, &footprint, yaw, FootprintMode::Rotated, &vertices),
                "yaw {yaw}: ({x}, {z}) -> {p:?}"
            );
        }
    }
}

#[test]
fn iterative_fallback_recovers_in_concave_rooms() {
    let footprint = Footprint::new(1.0, 1.0);
    let options = ConstraintOptions {
        fallback: Fallback::Iterate { max_steps: 60 },
        ..ConstraintOptions::default()
    };
    let rooms = [
        RoomShape::LShape {
            width: 500.0,
            depth: 400.0,
            cutout_width: 200.0,
            cutout_depth: 200.0,
        },
        RoomShape::LShape {
            width: 600.0,
            depth: 600.0,
            cutout_width: 300.0,
            cutout_depth: 400.0,
        },
    ];

    for shape in rooms {
        let vertices = shape.vertices();
        for x in grid(-10.0, 10.0, 20) {
            for z in grid(-10.0, 10.0, 20) {
                let p = constrain_with(&PlanePoint::new(x, z), &footprint, 0.0, &vertices, &options);
                assert!(
                    footprint_inside(&p, &footprint, 0.0, FootprintMode::AxisAligned, &vertices),
                    "{shape:?}: ({x}, {z}) -> {p:?}"
                );
            }
        }
    }
}
