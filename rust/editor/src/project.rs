// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Project documents.
//!
//! A project is a named snapshot of rooms and furniture. Documents are stored
//! as camelCase JSON so they can be exchanged with the browser front end
//! unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::model::{Furniture, Room};

/// Document format version written into new projects.
pub const PROJECT_VERSION: &str = "1.0.0";

/// Name used when a project is created with a blank name.
pub const DEFAULT_PROJECT_NAME: &str = "New Project";

pub fn new_project_id() -> String {
    format!("project-{}", Uuid::new_v4())
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub rooms: Vec<Room>,
    pub furniture: Vec<Furniture>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: String,
}

impl Project {
    /// Empty project. Blank names fall back to [`DEFAULT_PROJECT_NAME`].
    pub fn new(name: &str) -> Self {
        let name = match name.trim() {
            "" => DEFAULT_PROJECT_NAME,
            trimmed => trimmed,
        };
        let now = Utc::now();
        Self {
            id: new_project_id(),
            name: name.to_string(),
            rooms: Vec::new(),
            furniture: Vec::new(),
            created_at: now,
            updated_at: now,
            version: PROJECT_VERSION.to_string(),
        }
    }

    /// Replaces the contents and bumps `updated_at`.
    pub fn update(&mut self, rooms: Vec<Room>, furniture: Vec<Furniture>) {
        self.rooms = rooms;
        self.furniture = furniture;
        self.updated_at = Utc::now();
    }

    pub fn metadata(&self) -> ProjectMetadata {
        ProjectMetadata {
            id: self.id.clone(),
            name: self.name.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            room_count: self.rooms.len(),
            furniture_count: self.furniture.len(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Summary row for project lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMetadata {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub room_count: usize,
    pub furniture_count: usize,
}

/// All saved projects plus the one currently open.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsData {
    pub projects: Vec<Project>,
    pub active_project_id: Option<String>,
    pub version: String,
}

impl Default for ProjectsData {
    fn default() -> Self {
        Self {
            projects: Vec::new(),
            active_project_id: None,
            version: PROJECT_VERSION.to_string(),
        }
    }
}

impl ProjectsData {
    pub fn active(&self) -> Option<&Project> {
        let id = self.active_project_id.as_deref()?;
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Older documents stored furniture with the plan's `y` axis flipped, which
/// shows up as negative `z`. Flips those positions back in place and returns
/// how many were converted.
pub fn convert_legacy_furniture(furniture: &mut [Furniture]) -> usize {
    let mut converted = 0;
    for f in furniture.iter_mut().filter(|f| f.position.z < 0.0) {
        f.position.z = -f.position.z;
        converted += 1;
    }
    converted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FurnitureSize, Point3D};
    use roomplan_geometry::{RoomShape, ShapeType};

    #[test]
    fn blank_name_gets_default() {
        let p = Project::new("   ");
        assert_eq!(p.name, DEFAULT_PROJECT_NAME);
        assert_eq!(p.version, "1.0.0");
        assert!(p.id.starts_with("project-"));
        assert_eq!(p.created_at, p.updated_at);

        assert_eq!(Project::new("  Flat  ").name, "Flat");
    }

    #[test]
    fn update_and_metadata() {
        let mut p = Project::new("Flat");
        let room = Room::from_shape("Living", &RoomShape::default_for(ShapeType::Rectangle), 250.0).unwrap();
        let mut f = Furniture::new("Desk", FurnitureSize::new(100.0, 80.0, 50.0), "#8B4513").unwrap();
        f.place_in(&room);
        p.update(vec![room], vec![f]);

        let meta = p.metadata();
        assert_eq!(meta.room_count, 1);
        assert_eq!(meta.furniture_count, 1);
        assert!(meta.updated_at >= meta.created_at);
    }

    #[test]
    fn json_field_names() {
        let p = Project::new("Flat");
        let json: serde_json::Value = serde_json::from_str(&p.to_json().unwrap()).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());

        let data = ProjectsData {
            active_project_id: Some(p.id.clone()),
            projects: vec![p.clone()],
            ..ProjectsData::default()
        };
        let back = ProjectsData::from_json(&data.to_json().unwrap()).unwrap();
        assert_eq!(back.active().map(|a| a.id.as_str()), Some(p.id.as_str()));
    }

    #[test]
    fn reads_browser_written_document() {
        let json = r##"{
            "projects": [{
                "id": "project-1700000000000-abc123def",
                "name": "Old",
                "rooms": [{"id": "room-1", "name": "R", "height": 2.5,
                           "vertices": [{"x":0,"y":0},{"x":4,"y":0},{"x":4,"y":3},{"x":0,"y":3}],
                           "floorColor": "#e0e0e0", "wallColor": "#ffffff"}],
                "furniture": [{"id": "furniture-1", "name": "Desk",
                               "position": {"x": 2, "y": 0.4, "z": -1.5},
                               "size": {"width": 100, "height": 80, "depth": 50},
                               "rotation": {"x": 0, "y": 0, "z": 0},
                               "color": "#8B4513", "roomId": "room-1"}],
                "createdAt": "2024-01-01T00:00:00.000Z",
                "updatedAt": "2024-01-02T00:00:00.000Z",
                "version": "1.0.0"
            }],
            "activeProjectId": null,
            "version": "1.0.0"
        }"##;
        let mut data = ProjectsData::from_json(json).unwrap();
        assert!(data.active().is_none());

        let project = &mut data.projects[0];
        assert_eq!(convert_legacy_furniture(&mut project.furniture), 1);
        assert_eq!(project.furniture[0].position, Point3D::new(2.0, 0.4, 1.5));
        assert_eq!(convert_legacy_furniture(&mut project.furniture), 0);
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        assert!(matches!(
            Project::from_json("{\"id\": 1}"),
            Err(crate::Error::Serialization(_))
        ));
    }
}
