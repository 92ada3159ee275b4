// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RoomPlan command-line tool.
//!
//! Usage:
//!   roomplan shape --shape l-shape --room-width 600  # print outline vertices
//!   roomplan check projects.json                     # report misplaced furniture
//!   roomplan place --x 10 --z 10 --width 100 --depth 50

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use roomplan_editor::{convert_legacy_furniture, EditorConfig, Layout, Project, ProjectsData};
use roomplan_geometry::{
    cm_to_m, constrain_with, footprint_within, Fallback, Footprint, PlanePoint, RoomShape,
    ShapeType,
};
use serde_json::json;

#[derive(Parser)]
#[command(name = "roomplan")]
#[command(about = "Room outlines and furniture placement checks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum ShapeArg {
    Rectangle,
    LShape,
    UShape,
}

impl From<ShapeArg> for ShapeType {
    fn from(arg: ShapeArg) -> Self {
        match arg {
            ShapeArg::Rectangle => ShapeType::Rectangle,
            ShapeArg::LShape => ShapeType::LShape,
            ShapeArg::UShape => ShapeType::UShape,
        }
    }
}

/// Shape parameters in centimeters. Unset values keep the shape's defaults.
#[derive(clap::Args)]
struct ShapeParams {
    /// Shape kind
    #[arg(long, value_enum, default_value = "rectangle")]
    shape: ShapeArg,
    /// Outer width (cm)
    #[arg(long = "room-width")]
    room_width: Option<f64>,
    /// Outer depth (cm)
    #[arg(long = "room-depth")]
    room_depth: Option<f64>,
    /// L-shape cutout width, or U-shape opening width (cm)
    #[arg(long)]
    cutout_width: Option<f64>,
    /// L-shape cutout depth, or U-shape arm depth (cm)
    #[arg(long)]
    cutout_depth: Option<f64>,
}

impl ShapeParams {
    fn build(&self) -> RoomShape {
        let (w, d, cw, cd) = (self.room_width, self.room_depth, self.cutout_width, self.cutout_depth);
        match RoomShape::default_for(self.shape.into()) {
            RoomShape::Rectangle { width, depth } => RoomShape::Rectangle {
                width: w.unwrap_or(width),
                depth: d.unwrap_or(depth),
            },
            RoomShape::LShape {
                width,
                depth,
                cutout_width,
                cutout_depth,
            } => RoomShape::LShape {
                width: w.unwrap_or(width),
                depth: d.unwrap_or(depth),
                cutout_width: cw.unwrap_or(cutout_width),
                cutout_depth: cd.unwrap_or(cutout_depth),
            },
            RoomShape::UShape {
                width,
                depth,
                opening_width,
                arm_depth,
            } => RoomShape::UShape {
                width: w.unwrap_or(width),
                depth: d.unwrap_or(depth),
                opening_width: cw.unwrap_or(opening_width),
                arm_depth: cd.unwrap_or(arm_depth),
            },
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the outline of a parametric room as JSON (meters)
    Shape {
        #[command(flatten)]
        params: ShapeParams,
    },
    /// Report furniture outside its room or overlapping other furniture, and
    /// projects over the room limit
    Check {
        /// Projects file (`ProjectsData` or a single project)
        path: PathBuf,
        /// Flip negative z positions written by older versions before checking
        #[arg(long)]
        legacy: bool,
    },
    /// Constrain one furniture position against a parametric room
    Place {
        #[command(flatten)]
        params: ShapeParams,
        /// Desired center x (m)
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        /// Desired center z (m)
        #[arg(long, allow_hyphen_values = true)]
        z: f64,
        /// Furniture width (cm)
        #[arg(long)]
        width: f64,
        /// Furniture depth (cm)
        #[arg(long)]
        depth: f64,
        /// Yaw (radians)
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        yaw: f64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let config = EditorConfig::from_env();
    let cli = Cli::parse();

    match cli.command {
        Commands::Shape { params } => shape(&params),
        Commands::Check { path, legacy } => check(&path, legacy, &config),
        Commands::Place {
            params,
            x,
            z,
            width,
            depth,
            yaw,
        } => place(&params, PlanePoint::new(x, z), Footprint::new(cm_to_m(width), cm_to_m(depth)), yaw, &config),
    }
}

fn shape(params: &ShapeParams) -> Result<()> {
    let shape = params.build();
    let vertices = shape.try_vertices()?;
    let out = json!({
        "shape": shape,
        "vertices": vertices,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn place(
    params: &ShapeParams,
    desired: PlanePoint,
    footprint: Footprint,
    yaw: f64,
    config: &EditorConfig,
) -> Result<()> {
    let vertices = params.build().try_vertices()?;
    let options = config.constraint_options();
    let placed = constrain_with(&desired, &footprint, yaw, &vertices, &options);
    let contained = footprint_within(&placed, &footprint, yaw, options.footprint_mode, &vertices);

    tracing::info!(
        x = placed.x,
        z = placed.z,
        contained,
        iterative = matches!(options.fallback, Fallback::Iterate { .. }),
        "placed"
    );
    let out = json!({
        "x": placed.x,
        "z": placed.z,
        "contained": contained,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn load_projects(path: &Path) -> Result<Vec<Project>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    match ProjectsData::from_json(&text) {
        Ok(data) => Ok(data.projects),
        Err(_) => {
            let project = Project::from_json(&text)
                .with_context(|| format!("{} is neither a projects file nor a project", path.display()))?;
            Ok(vec![project])
        }
    }
}

fn check(path: &Path, legacy: bool, config: &EditorConfig) -> Result<()> {
    let mut projects = load_projects(path)?;
    let mut problems = 0usize;

    for project in &mut projects {
        if legacy {
            let converted = convert_legacy_furniture(&mut project.furniture);
            if converted > 0 {
                tracing::info!(project = %project.name, converted, "converted legacy positions");
            }
        }

        let meta = project.metadata();
        println!(
            "{} ({} room(s), {} piece(s) of furniture)",
            meta.name, meta.room_count, meta.furniture_count
        );

        for f in &project.furniture {
            let Some(room_id) = f.room_id.as_deref() else {
                continue;
            };
            if !project.rooms.iter().any(|r| r.id == room_id) {
                println!("  {}: room {} does not exist", f.name, room_id);
                problems += 1;
            }
        }

        let layout = Layout::from_project(project);
        if let Some(max) = config.max_rooms.filter(|&max| layout.rooms().len() > max) {
            println!("  {} room(s), limit is {}", layout.rooms().len(), max);
            problems += 1;
        }
        for problem in layout.placement_problems(config.footprint_mode) {
            println!("  {}", problem);
            problems += 1;
        }
    }

    if problems > 0 {
        anyhow::bail!("{} problem(s) found", problems);
    }
    println!("no problems found");
    Ok(())
}
