// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Interactive manipulation of the selected piece of furniture.
//!
//! [`InteractionController`] turns pointer and keyboard events into position,
//! rotation and size updates and commits them through an [`EntityStore`].
//! Every horizontal move goes through the placement resolver against the
//! furniture's room; vertical moves are only bounded by the floor and a
//! ceiling elevation.
//!
//! Drag gestures run a small state machine:
//!
//! ```text
//!            pointer down on selection
//!   Idle ───────────────────────────────► DraggingHorizontal
//!    ▲                                        │        ▲
//!    │ pointer up / deselect    shift held    │        │ shift released
//!    │                                        ▼        │
//!    └────────────────────────────────── DraggingVertical
//! ```
//!
//! Orbit controls are disabled for exactly as long as a drag is in progress.
//!
//! Nothing here returns an error. An event that cannot be applied (no
//! selection, entity gone, store refused the update) is dropped and reported
//! as "nothing changed".

use std::f64::consts::TAU;

use roomplan_geometry::{constrain_with, PlanePoint};
use tracing::{debug, trace, warn};

use crate::camera::{CameraControlHandle, CameraView};
use crate::config::EditorConfig;
use crate::input::{Direction, InputMode, Key, KeyEvent, PointerEvent};
use crate::model::{Furniture, FurniturePatch, FurnitureSize, Point3D, Rotation};
use crate::store::EntityStore;

/// Drag gesture state. Baselines are captured when a state is entered.
#[derive(Debug, Clone, PartialEq)]
pub enum DragState {
    Idle,
    DraggingHorizontal {
        id: String,
        /// Screen position of the pointer at the baseline.
        screen: (f64, f64),
        /// Floor position of the furniture at the baseline.
        origin: PlanePoint,
        /// Camera distance to the furniture at the baseline.
        distance: f64,
    },
    DraggingVertical {
        id: String,
        /// Screen `y` of the pointer at the baseline.
        screen_y: f64,
        /// Elevation of the furniture at the baseline.
        origin_y: f64,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        !matches!(self, DragState::Idle)
    }

    fn dragged_id(&self) -> Option<&str> {
        match self {
            DragState::Idle => None,
            DragState::DraggingHorizontal { id, .. } | DragState::DraggingVertical { id, .. } => {
                Some(id.as_str())
            }
        }
    }

    fn name(&self) -> &'static str {
        match self {
            DragState::Idle => "idle",
            DragState::DraggingHorizontal { .. } => "dragging-horizontal",
            DragState::DraggingVertical { .. } => "dragging-vertical",
        }
    }
}

/// Which angle a rotation step changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationAxis {
    /// Around the vertical axis (`rotation.y`).
    Yaw,
    /// Around the horizontal `x` axis (`rotation.x`).
    Pitch,
}

/// Wraps `angle` into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

pub struct InteractionController<C: CameraControlHandle> {
    state: DragState,
    controls: C,
    config: EditorConfig,
}

impl<C: CameraControlHandle> InteractionController<C> {
    /// Takes ownership of the orbit controls handle and enables it.
    pub fn new(mut controls: C, config: EditorConfig) -> Self {
        controls.enable();
        Self {
            state: DragState::Idle,
            controls,
            config,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn controls(&self) -> &C {
        &self.controls
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    // ---------------------------------------------------------------------
    // Pointer
    // ---------------------------------------------------------------------

    /// Pointer pressed over `target` (`None` = empty background).
    ///
    /// With a mouse, pressing the selected piece starts a horizontal drag and
    /// pressing another piece selects it. With touch, single taps never
    /// select; use [`InteractionController::double_tap`]. Either way a press
    /// on the background deselects.
    pub fn pointer_down<S: EntityStore>(
        &mut self,
        store: &mut S,
        camera: &CameraView,
        target: Option<&str>,
        event: PointerEvent,
    ) -> bool {
        let Some(id) = target else {
            return self.deselect(store);
        };

        if self.config.input_mode == InputMode::Touch {
            return false;
        }

        let is_active = store.active_entity().is_some_and(|f| f.id == id);
        if is_active {
            self.begin_drag(store, camera, id, event)
        } else {
            // A drag never outlives the selection it started on
            if self.is_dragging() {
                self.end_drag();
            }
            select(store, id)
        }
    }

    /// Double click or double tap on `target`: selects it and starts a drag.
    pub fn double_tap<S: EntityStore>(
        &mut self,
        store: &mut S,
        camera: &CameraView,
        target: &str,
        event: PointerEvent,
    ) -> bool {
        if !select(store, target) {
            return false;
        }
        self.begin_drag(store, camera, target, event)
    }

    fn begin_drag<S: EntityStore>(
        &mut self,
        store: &S,
        camera: &CameraView,
        id: &str,
        event: PointerEvent,
    ) -> bool {
        let Some(furniture) = store.entity(id) else {
            return false;
        };
        let state = horizontal_baseline(furniture, camera, event);
        self.transition(state);
        true
    }

    /// Pointer moved. Returns the committed position, if any.
    ///
    /// Holding Shift switches a horizontal drag to vertical and releasing it
    /// switches back. The event that causes a switch only captures the new
    /// baseline; movement resumes with the next event.
    pub fn pointer_move<S: EntityStore>(
        &mut self,
        store: &mut S,
        camera: &CameraView,
        event: PointerEvent,
    ) -> Option<Point3D> {
        let id = self.state.dragged_id()?.to_string();
        let Some(furniture) = store.entity(&id).cloned() else {
            debug!(furniture = %id, "dragged furniture disappeared");
            self.end_drag();
            return None;
        };

        let shift = event.modifiers.shift;
        match self.state.clone() {
            DragState::DraggingHorizontal { .. } if shift => {
                self.transition(DragState::DraggingVertical {
                    id,
                    screen_y: event.y,
                    origin_y: furniture.position.y,
                });
                None
            }
            DragState::DraggingVertical { .. } if !shift => {
                self.transition(horizontal_baseline(&furniture, camera, event));
                None
            }
            DragState::DraggingHorizontal {
                screen,
                origin,
                distance,
                ..
            } => {
                let (right, forward) = camera.ground_basis();
                let scale = self.config.drag_speed * distance;
                let dx = (event.x - screen.0) * scale;
                let dy = (event.y - screen.1) * scale;
                // Screen y grows downward, so dragging up moves away from the camera
                let delta = right * dx - forward * dy;
                let desired = PlanePoint::new(origin.x + delta.x, origin.z + delta.z);

                let placed = self.contain(store, &furniture, desired, furniture.yaw(), &furniture.size);
                commit_position(store, &id, furniture.position.with_plane(&placed))
            }
            DragState::DraggingVertical {
                screen_y, origin_y, ..
            } => {
                let y = origin_y - (event.y - screen_y) * self.config.vertical_drag_speed;
                let y = self.clamp_elevation(y, &furniture.size);
                commit_position(store, &id, Point3D::new(furniture.position.x, y, furniture.position.z))
            }
            DragState::Idle => None,
        }
    }

    /// Pointer released: ends any drag.
    pub fn pointer_up(&mut self) -> bool {
        if self.is_dragging() {
            self.end_drag();
            true
        } else {
            false
        }
    }

    /// Ends any drag and clears the selection.
    pub fn deselect<S: EntityStore>(&mut self, store: &mut S) -> bool {
        let dragged = self.pointer_up();
        let selected = store.active_entity().is_some();
        if selected {
            if let Err(err) = store.set_active_entity(None) {
                warn!(error = %err, "failed to clear selection");
            }
        }
        dragged || selected
    }

    fn transition(&mut self, next: DragState) {
        debug!(from = self.state.name(), to = next.name(), "drag state");
        self.state = next;
        if self.state.is_dragging() {
            self.controls.disable();
        } else {
            self.controls.enable();
        }
    }

    fn end_drag(&mut self) {
        self.transition(DragState::Idle);
    }

    // ---------------------------------------------------------------------
    // Keyboard and on-screen buttons
    // ---------------------------------------------------------------------

    /// Handles a key press for the selected piece. Returns whether anything
    /// changed.
    pub fn key_down<S: EntityStore>(
        &mut self,
        store: &mut S,
        camera: &CameraView,
        event: KeyEvent,
    ) -> bool {
        let shift = event.modifiers.shift;
        match event.key {
            Key::Deselect => self.deselect(store),
            Key::ArrowUp if shift => self.raise(store, self.config.vertical_step),
            Key::ArrowDown if shift => self.raise(store, -self.config.vertical_step),
            Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight => match event.key.direction() {
                Some(direction) => self.nudge(store, camera, direction),
                None => false,
            },
            Key::Rotate if shift => self.rotate(store, RotationAxis::Pitch),
            Key::Rotate => self.rotate(store, RotationAxis::Yaw),
            Key::Grow => self.resize(store, self.config.resize_step),
            Key::Shrink => self.resize(store, -self.config.resize_step),
        }
    }

    /// Moves the selection one step along the world axis closest to the
    /// screen direction. "Up" is away from the camera.
    pub fn nudge<S: EntityStore>(
        &mut self,
        store: &mut S,
        camera: &CameraView,
        direction: Direction,
    ) -> bool {
        let Some(furniture) = store.active_entity().cloned() else {
            return false;
        };

        let (right, forward) = camera.snapped_ground_basis();
        let axis = match direction {
            Direction::Up => forward,
            Direction::Down => -forward,
            Direction::Right => right,
            Direction::Left => -right,
        };
        let step = axis * self.config.nudge_step;
        let current = furniture.position.plane();
        let desired = PlanePoint::new(current.x + step.x, current.z + step.z);

        let placed = self.contain(store, &furniture, desired, furniture.yaw(), &furniture.size);
        commit_position(store, &furniture.id, furniture.position.with_plane(&placed)).is_some()
    }

    /// Moves the selection up (positive `dy`) or down, within the floor and
    /// ceiling limits. Not checked against the room outline.
    pub fn raise<S: EntityStore>(&mut self, store: &mut S, dy: f64) -> bool {
        let Some(furniture) = store.active_entity().cloned() else {
            return false;
        };
        let y = self.clamp_elevation(furniture.position.y + dy, &furniture.size);
        let p = furniture.position;
        commit_position(store, &furniture.id, Point3D::new(p.x, y, p.z)).is_some()
    }

    /// Advances yaw or pitch by the configured step, wrapped into `[0, 2π)`.
    /// A yaw change re-runs containment when `contain_on_resize` is set.
    pub fn rotate<S: EntityStore>(&mut self, store: &mut S, axis: RotationAxis) -> bool {
        let Some(furniture) = store.active_entity().cloned() else {
            return false;
        };

        let step = self.config.rotation_step;
        let r = furniture.rotation;
        let rotation = match axis {
            RotationAxis::Yaw => Rotation {
                y: normalize_angle(r.y + step),
                ..r
            },
            RotationAxis::Pitch => Rotation {
                x: normalize_angle(r.x + step),
                ..r
            },
        };

        let mut patch = FurniturePatch {
            rotation: Some(rotation),
            ..FurniturePatch::default()
        };
        if axis == RotationAxis::Yaw && self.config.contain_on_resize {
            let placed = self.contain(store, &furniture, furniture.position.plane(), rotation.y, &furniture.size);
            patch.position = Some(furniture.position.with_plane(&placed));
        }
        commit(store, &furniture.id, patch)
    }

    /// Grows (`delta_cm > 0`) or shrinks width and depth together, within
    /// the size limits. Re-runs containment when `contain_on_resize` is set.
    pub fn resize<S: EntityStore>(&mut self, store: &mut S, delta_cm: f64) -> bool {
        let Some(furniture) = store.active_entity().cloned() else {
            return false;
        };

        let s = furniture.size;
        let size = FurnitureSize::new(s.width + delta_cm, s.height, s.depth + delta_cm).clamped();
        if size == s {
            return false;
        }

        let mut patch = FurniturePatch {
            size: Some(size),
            ..FurniturePatch::default()
        };
        if self.config.contain_on_resize {
            let placed = self.contain(store, &furniture, furniture.position.plane(), furniture.yaw(), &size);
            patch.position = Some(furniture.position.with_plane(&placed));
        }
        commit(store, &furniture.id, patch)
    }

    // ---------------------------------------------------------------------
    // Helpers
    // ---------------------------------------------------------------------

    /// Runs the placement resolver against the furniture's room. Furniture
    /// without a room moves freely.
    fn contain<S: EntityStore>(
        &self,
        store: &S,
        furniture: &Furniture,
        desired: PlanePoint,
        yaw: f64,
        size: &FurnitureSize,
    ) -> PlanePoint {
        let rooms = store.rooms_by_id();
        match furniture.room_id.as_deref().and_then(|id| rooms.get(id)) {
            Some(room) => constrain_with(
                &desired,
                &size.footprint(),
                yaw,
                &room.vertices,
                &self.config.constraint_options(),
            ),
            None => desired,
        }
    }

    /// Keeps the box on or above the floor and its center at or below the
    /// ceiling elevation. The floor wins if the two conflict.
    fn clamp_elevation(&self, y: f64, size: &FurnitureSize) -> f64 {
        y.min(self.config.max_elevation).max(size.half_height_m())
    }
}

fn horizontal_baseline(furniture: &Furniture, camera: &CameraView, event: PointerEvent) -> DragState {
    DragState::DraggingHorizontal {
        id: furniture.id.clone(),
        screen: (event.x, event.y),
        origin: furniture.position.plane(),
        distance: camera.distance_to(&furniture.position.to_nalgebra()),
    }
}

fn select<S: EntityStore>(store: &mut S, id: &str) -> bool {
    match store.set_active_entity(Some(id)) {
        Ok(()) => true,
        Err(err) => {
            warn!(error = %err, "selection failed");
            false
        }
    }
}

fn commit_position<S: EntityStore>(store: &mut S, id: &str, position: Point3D) -> Option<Point3D> {
    trace!(furniture = %id, x = position.x, y = position.y, z = position.z, "move");
    commit(store, id, FurniturePatch::position(position)).then_some(position)
}

fn commit<S: EntityStore>(store: &mut S, id: &str, patch: FurniturePatch) -> bool {
    match store.update_entity(id, patch) {
        Ok(()) => true,
        Err(err) => {
            warn!(furniture = %id, error = %err, "update rejected");
            false
        }
    }
}
