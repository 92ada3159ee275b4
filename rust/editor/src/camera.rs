// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Camera state as seen by the interaction controller.
//!
//! The viewport owns the real camera. The controller only needs the camera's
//! world position and view direction, queried once per input event, plus a
//! handle to switch orbit controls off while an object is being dragged.

use nalgebra::{Point3, Vector3};

/// Capability to enable and disable the viewport's orbit controls.
pub trait CameraControlHandle {
    fn enable(&mut self);
    fn disable(&mut self);
    fn is_enabled(&self) -> bool;
}

/// Plain orbit-controls flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrbitControls {
    enabled: bool,
}

impl OrbitControls {
    pub fn new() -> Self {
        Self { enabled: true }
    }
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraControlHandle for OrbitControls {
    fn enable(&mut self) {
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Snapshot of the camera for one input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    /// World position of the camera.
    pub position: Point3<f64>,
    /// World direction the camera looks along (need not be normalized).
    pub direction: Vector3<f64>,
}

impl CameraView {
    pub fn new(position: Point3<f64>, direction: Vector3<f64>) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// Camera at `position` looking at `target`.
    pub fn looking_at(position: Point3<f64>, target: Point3<f64>) -> Self {
        Self::new(position, target - position)
    }

    /// Unit vectors on the ground plane: `(right, forward)`.
    ///
    /// `forward` is the view direction with its vertical component removed;
    /// `right` is `direction × up`. A camera looking straight down has no
    /// horizontal direction, so `-z` is used as forward.
    pub fn ground_basis(&self) -> (Vector3<f64>, Vector3<f64>) {
        let up = Vector3::y();
        let flat = Vector3::new(self.direction.x, 0.0, self.direction.z);
        let forward = flat.try_normalize(1e-9).unwrap_or_else(|| -Vector3::z());
        let right = forward.cross(&up);
        (right, forward)
    }

    /// The ground basis snapped to the nearest world axis (±x or ±z), so that
    /// keyboard nudges move along room walls.
    pub fn snapped_ground_basis(&self) -> (Vector3<f64>, Vector3<f64>) {
        let (right, forward) = self.ground_basis();
        (snap_to_axis(&right), snap_to_axis(&forward))
    }

    pub fn distance_to(&self, point: &Point3<f64>) -> f64 {
        (point - self.position).norm()
    }
}

/// Closest of ±x / ±z to a horizontal vector. Ties go to x.
fn snap_to_axis(v: &Vector3<f64>) -> Vector3<f64> {
    if v.x.abs() >= v.z.abs() {
        Vector3::new(v.x.signum(), 0.0, 0.0)
    } else {
        Vector3::new(0.0, 0.0, v.z.signum())
    }
}
