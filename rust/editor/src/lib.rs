// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # RoomPlan Editor
//!
//! Rooms, furniture and the interaction logic that moves furniture around
//! inside them.
//!
//! - [`model`]: rooms, furniture, patches and presets
//! - [`store`]: the [`EntityStore`] seam and the in-memory [`Layout`]
//! - [`interaction`]: the drag / keyboard state machine
//! - [`camera`]: camera snapshot and the orbit-controls handle
//! - [`project`]: saved project documents
//!
//! ```
//! use roomplan_editor::{
//!     CameraControlHandle, CameraView, EditorConfig, EntityStore, Furniture, FurnitureSize,
//!     InteractionController, Layout, OrbitControls, PointerEvent, Room,
//! };
//! use roomplan_geometry::{Point3, RoomShape, ShapeType};
//!
//! let mut layout = Layout::from_config(&EditorConfig::default());
//! let room = Room::from_shape("Living", &RoomShape::default_for(ShapeType::Rectangle), 250.0)?;
//! let room_id = layout.add_room(room)?;
//! let desk = Furniture::new("Desk", FurnitureSize::new(100.0, 80.0, 50.0), "#8B4513")?;
//! let desk_id = layout.add_furniture(desk, &room_id)?;
//!
//! let camera = CameraView::looking_at(Point3::new(2.0, 5.0, 8.0), Point3::new(2.0, 0.0, 1.5));
//! let mut controller = InteractionController::new(OrbitControls::new(), EditorConfig::default());
//!
//! controller.double_tap(&mut layout, &camera, &desk_id, PointerEvent::new(0.0, 0.0));
//! assert!(!controller.controls().is_enabled());
//! controller.pointer_move(&mut layout, &camera, PointerEvent::new(1e6, 1e6));
//! controller.pointer_up();
//!
//! let p = layout.entity(&desk_id).unwrap().position;
//! assert!((p.x - 3.5).abs() < 1e-9 && (p.z - 2.75).abs() < 1e-9);
//! # Ok::<(), roomplan_editor::Error>(())
//! ```

pub mod camera;
pub mod config;
pub mod error;
pub mod input;
pub mod interaction;
pub mod model;
pub mod project;
pub mod store;

pub use camera::{CameraControlHandle, CameraView, OrbitControls};
pub use config::EditorConfig;
pub use error::{Error, Result};
pub use input::{Direction, InputMode, Key, KeyEvent, Modifiers, PointerEvent};
pub use interaction::{normalize_angle, DragState, InteractionController, RotationAxis};
pub use model::{
    preset, Furniture, FurniturePatch, FurniturePreset, FurnitureSize, Point3D, Room, RoomPatch,
    Rotation, PRESETS,
};
pub use project::{convert_legacy_furniture, Project, ProjectMetadata, ProjectsData};
pub use store::{EntityStore, Layout, PlacementProblem};
