// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity storage.
//!
//! [`EntityStore`] is the seam between the interaction controller and
//! whatever owns the rooms and furniture. [`Layout`] is the in-memory
//! implementation; `roomplan check` loads projects into one and reports its
//! [`Layout::placement_problems`].

use std::fmt;

use roomplan_geometry::{footprint_within, FootprintMode};
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::config::EditorConfig;
use crate::error::{Error, Result};
use crate::model::{Furniture, FurniturePatch, Room, RoomPatch};
use crate::project::Project;

/// What the interaction controller needs from the application state.
pub trait EntityStore {
    /// Applies a partial update to a piece of furniture.
    fn update_entity(&mut self, id: &str, patch: FurniturePatch) -> Result<()>;

    /// The selected piece of furniture, if any.
    fn active_entity(&self) -> Option<&Furniture>;

    /// Changes the selection. `None` clears it.
    fn set_active_entity(&mut self, id: Option<&str>) -> Result<()>;

    fn entity(&self, id: &str) -> Option<&Furniture>;

    fn rooms_by_id(&self) -> FxHashMap<&str, &Room>;
}

/// Something wrong with where a piece of furniture stands.
#[derive(Debug, Clone, Copy)]
pub enum PlacementProblem<'a> {
    /// Part of the footprint lies outside the piece's room.
    OutsideRoom { furniture: &'a Furniture, room: &'a Room },
    /// Two pieces' bounding boxes intersect.
    Overlap(&'a Furniture, &'a Furniture),
}

impl fmt::Display for PlacementProblem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementProblem::OutsideRoom { furniture, room } => {
                write!(f, "{}: footprint leaves room {}", furniture.name, room.name)
            }
            PlacementProblem::Overlap(a, b) => write!(f, "{} overlaps {}", a.name, b.name),
        }
    }
}

/// Rooms and furniture of one open project.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    rooms: Vec<Room>,
    furniture: Vec<Furniture>,
    active_room_id: Option<String>,
    active_furniture_id: Option<String>,
    max_rooms: Option<usize>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of rooms [`Layout::add_room`] accepts.
    pub fn with_max_rooms(mut self, max_rooms: Option<usize>) -> Self {
        self.max_rooms = max_rooms;
        self
    }

    /// Empty layout with the room limit from `config`.
    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new().with_max_rooms(config.max_rooms)
    }

    /// Builds a layout from a saved project.
    ///
    /// Furniture pointing at a room that is not in the project is detached
    /// rather than rejected.
    pub fn from_project(project: &Project) -> Self {
        let mut layout = Self {
            rooms: project.rooms.clone(),
            furniture: project.furniture.clone(),
            ..Self::default()
        };

        let live: Vec<String> = layout.rooms.iter().map(|r| r.id.clone()).collect();
        for f in &mut layout.furniture {
            if let Some(room_id) = &f.room_id {
                if !live.contains(room_id) {
                    warn!(furniture = %f.id, room = %room_id, "detaching furniture from missing room");
                    f.room_id = None;
                }
            }
        }

        layout.active_room_id = layout.rooms.first().map(|r| r.id.clone());
        layout
    }

    /// Writes the current rooms and furniture back into `project`.
    pub fn snapshot_into(&self, project: &mut Project) {
        project.update(self.rooms.clone(), self.furniture.clone());
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn furniture(&self) -> &[Furniture] {
        &self.furniture
    }

    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn furniture_item(&self, id: &str) -> Option<&Furniture> {
        self.furniture.iter().find(|f| f.id == id)
    }

    /// Furniture assigned to `room_id`.
    pub fn furniture_in<'a>(&'a self, room_id: &'a str) -> impl Iterator<Item = &'a Furniture> + 'a {
        self.furniture
            .iter()
            .filter(move |f| f.room_id.as_deref() == Some(room_id))
    }

    pub fn active_room(&self) -> Option<&Room> {
        self.active_room_id.as_deref().and_then(|id| self.room(id))
    }

    pub fn set_active_room(&mut self, id: Option<&str>) -> Result<()> {
        if let Some(id) = id {
            if self.room(id).is_none() {
                return Err(Error::RoomNotFound(id.to_string()));
            }
        }
        self.active_room_id = id.map(str::to_string);
        Ok(())
    }

    /// Adds a room and returns its id. The first room becomes active.
    pub fn add_room(&mut self, room: Room) -> Result<String> {
        if let Some(max) = self.max_rooms {
            if self.rooms.len() >= max {
                return Err(Error::RoomLimitReached(max));
            }
        }

        let id = room.id.clone();
        if self.active_room_id.is_none() {
            self.active_room_id = Some(id.clone());
        }
        self.rooms.push(room);
        Ok(id)
    }

    pub fn update_room(&mut self, id: &str, patch: RoomPatch) -> Result<()> {
        let room = self
            .rooms
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| Error::RoomNotFound(id.to_string()))?;
        patch.apply(room)
    }

    /// Removes a room together with every piece of furniture in it.
    pub fn delete_room(&mut self, id: &str) -> Result<Room> {
        let index = self
            .rooms
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| Error::RoomNotFound(id.to_string()))?;
        let room = self.rooms.remove(index);

        let before = self.furniture.len();
        self.furniture.retain(|f| f.room_id.as_deref() != Some(id));
        debug!(room = %id, removed = before - self.furniture.len(), "deleted room");

        if self.active_room_id.as_deref() == Some(id) {
            self.active_room_id = self.rooms.first().map(|r| r.id.clone());
        }
        if let Some(active) = &self.active_furniture_id {
            if self.furniture_item(active).is_none() {
                self.active_furniture_id = None;
            }
        }
        Ok(room)
    }

    /// Drops `furniture` at the center of `room_id` and returns its id.
    pub fn add_furniture(&mut self, mut furniture: Furniture, room_id: &str) -> Result<String> {
        let room = self
            .room(room_id)
            .ok_or_else(|| Error::RoomNotFound(room_id.to_string()))?;
        furniture.place_in(room);

        let id = furniture.id.clone();
        self.furniture.push(furniture);
        Ok(id)
    }

    /// Applies `patch` after checking the new size and room reference.
    pub fn update_furniture(&mut self, id: &str, patch: FurniturePatch) -> Result<()> {
        if let Some(size) = &patch.size {
            size.validate()?;
        }
        if let Some(Some(room_id)) = &patch.room_id {
            if self.room(room_id).is_none() {
                return Err(Error::RoomNotFound(room_id.clone()));
            }
        }

        let furniture = self
            .furniture
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| Error::FurnitureNotFound(id.to_string()))?;
        patch.apply(furniture);
        Ok(())
    }

    /// Furniture whose footprint leaves its room, then overlapping pairs.
    /// Unassigned furniture is only checked for overlaps.
    pub fn placement_problems(&self, mode: FootprintMode) -> Vec<PlacementProblem<'_>> {
        let rooms = self.rooms_by_id();
        let mut problems = Vec::new();

        for f in &self.furniture {
            let Some(room) = f.room_id.as_deref().and_then(|id| rooms.get(id).copied()) else {
                continue;
            };
            if !footprint_within(&f.position.plane(), &f.footprint(), f.yaw(), mode, &room.vertices) {
                problems.push(PlacementProblem::OutsideRoom { furniture: f, room });
            }
        }

        for (i, a) in self.furniture.iter().enumerate() {
            for b in &self.furniture[i + 1..] {
                if a.collides_with(b) {
                    problems.push(PlacementProblem::Overlap(a, b));
                }
            }
        }
        problems
    }

    pub fn delete_furniture(&mut self, id: &str) -> Result<Furniture> {
        let index = self
            .furniture
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| Error::FurnitureNotFound(id.to_string()))?;
        if self.active_furniture_id.as_deref() == Some(id) {
            self.active_furniture_id = None;
        }
        Ok(self.furniture.remove(index))
    }
}

impl EntityStore for Layout {
    fn update_entity(&mut self, id: &str, patch: FurniturePatch) -> Result<()> {
        self.update_furniture(id, patch)
    }

    fn active_entity(&self) -> Option<&Furniture> {
        self.active_furniture_id
            .as_deref()
            .and_then(|id| self.furniture_item(id))
    }

    fn set_active_entity(&mut self, id: Option<&str>) -> Result<()> {
        if let Some(id) = id {
            if self.furniture_item(id).is_none() {
                return Err(Error::FurnitureNotFound(id.to_string()));
            }
        }
        self.active_furniture_id = id.map(str::to_string);
        Ok(())
    }

    fn entity(&self, id: &str) -> Option<&Furniture> {
        self.furniture_item(id)
    }

    fn rooms_by_id(&self) -> FxHashMap<&str, &Room> {
        self.rooms.iter().map(|r| (r.id.as_str(), r)).collect()
    }
}
