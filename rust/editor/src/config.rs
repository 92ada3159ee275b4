// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Editor configuration loaded from environment variables.

use std::f64::consts::FRAC_PI_4;
use std::str::FromStr;

use roomplan_geometry::{ConstraintOptions, Fallback, FootprintMode, NUDGE_STEP};

use crate::input::InputMode;

/// Interaction tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Horizontal keyboard nudge, in meters.
    pub nudge_step: f64,
    /// Vertical keyboard nudge (Shift+arrow), in meters.
    pub vertical_step: f64,
    /// Highest allowed center elevation, in meters.
    pub max_elevation: f64,
    /// World meters per screen pixel per meter of camera distance.
    pub drag_speed: f64,
    /// World meters per screen pixel for vertical drags.
    pub vertical_drag_speed: f64,
    /// Yaw and pitch increment, in radians.
    pub rotation_step: f64,
    /// Width/depth increment for grow/shrink, in centimeters.
    pub resize_step: f64,
    /// Re-run containment after resize and yaw rotation.
    pub contain_on_resize: bool,
    pub footprint_mode: FootprintMode,
    pub fallback: Fallback,
    pub input_mode: InputMode,
    /// Room count limit applied when adding rooms (`None` = unlimited).
    pub max_rooms: Option<usize>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            nudge_step: NUDGE_STEP,
            vertical_step: 0.1,
            max_elevation: 5.0,
            drag_speed: 0.002,
            vertical_drag_speed: 0.01,
            rotation_step: FRAC_PI_4,
            resize_step: 10.0,
            contain_on_resize: true,
            footprint_mode: FootprintMode::Rotated,
            fallback: Fallback::Nudge,
            input_mode: InputMode::Pointer,
            max_rooms: None,
        }
    }
}

impl EditorConfig {
    /// Load configuration from `ROOMPLAN_*` environment variables, falling
    /// back to the defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            nudge_step: env_or("ROOMPLAN_NUDGE_STEP", d.nudge_step),
            vertical_step: env_or("ROOMPLAN_VERTICAL_STEP", d.vertical_step),
            max_elevation: env_or("ROOMPLAN_MAX_ELEVATION", d.max_elevation),
            drag_speed: env_or("ROOMPLAN_DRAG_SPEED", d.drag_speed),
            vertical_drag_speed: env_or("ROOMPLAN_VERTICAL_DRAG_SPEED", d.vertical_drag_speed),
            rotation_step: env_or("ROOMPLAN_ROTATION_STEP", d.rotation_step),
            resize_step: env_or("ROOMPLAN_RESIZE_STEP", d.resize_step),
            contain_on_resize: env_or("ROOMPLAN_CONTAIN_ON_RESIZE", d.contain_on_resize),
            footprint_mode: std::env::var("ROOMPLAN_FOOTPRINT_MODE")
                .ok()
                .and_then(|v| parse_footprint_mode(&v))
                .unwrap_or(d.footprint_mode),
            fallback: match env_or("ROOMPLAN_FALLBACK_STEPS", 0u32) {
                0 => Fallback::Nudge,
                max_steps => Fallback::Iterate { max_steps },
            },
            input_mode: std::env::var("ROOMPLAN_INPUT_MODE")
                .ok()
                .and_then(|v| parse_input_mode(&v))
                .unwrap_or(d.input_mode),
            max_rooms: std::env::var("ROOMPLAN_MAX_ROOMS")
                .ok()
                .and_then(|v| v.trim().parse().ok()),
        }
    }

    /// Options handed to the placement resolver.
    pub fn constraint_options(&self) -> ConstraintOptions {
        ConstraintOptions {
            footprint_mode: self.footprint_mode,
            fallback: self.fallback,
            nudge_step: self.nudge_step,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn parse_footprint_mode(s: &str) -> Option<FootprintMode> {
    match s.trim() {
        "rotated" => Some(FootprintMode::Rotated),
        "axis-aligned" => Some(FootprintMode::AxisAligned),
        _ => None,
    }
}

fn parse_input_mode(s: &str) -> Option<InputMode> {
    match s.trim() {
        "pointer" => Some(InputMode::Pointer),
        "touch" => Some(InputMode::Touch),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = EditorConfig::default();
        assert_eq!(c.nudge_step, 0.1);
        assert_eq!(c.max_elevation, 5.0);
        assert_eq!(c.rotation_step, FRAC_PI_4);
        assert!(c.contain_on_resize);
        assert_eq!(c.constraint_options().fallback, Fallback::Nudge);
    }

    #[test]
    fn mode_parsing() {
        assert_eq!(parse_footprint_mode("axis-aligned"), Some(FootprintMode::AxisAligned));
        assert_eq!(parse_footprint_mode(" rotated "), Some(FootprintMode::Rotated));
        assert_eq!(parse_footprint_mode("diagonal"), None);
        assert_eq!(parse_input_mode("touch"), Some(InputMode::Touch));
    }

    #[test]
    fn env_or_falls_back_on_garbage() {
        std::env::set_var("ROOMPLAN_TEST_ENV_OR", "not-a-number");
        assert_eq!(env_or("ROOMPLAN_TEST_ENV_OR", 3.5), 3.5);
        std::env::set_var("ROOMPLAN_TEST_ENV_OR", " 0.25 ");
        assert_eq!(env_or("ROOMPLAN_TEST_ENV_OR", 3.5), 0.25);
        std::env::remove_var("ROOMPLAN_TEST_ENV_OR");
    }
}
