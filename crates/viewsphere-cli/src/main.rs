use std::{error::Error, fs, path::Path};

use clap::Parser;
use serde::{Deserialize, Serialize};
use viewsphere_core::{
    Pt3, Real, SphereGrid, SphereGridConfig, DIRECTION_LINE_LENGTH,
};

/// Viewpoint grid generator for photogrammetry rig planning.
#[derive(Debug, Parser)]
#[command(author, version, about = "Generate camera viewpoint poses on a sphere")]
struct Args {
    /// Path to a JSON SphereGridConfig. Overrides the sampling flags below.
    #[arg(long)]
    config: Option<String>,

    /// Sphere radius.
    #[arg(long, default_value_t = 1.0)]
    radius: Real,

    /// Number of vertical steps in each direction.
    #[arg(long, default_value_t = 3)]
    vertical_steps: u32,

    /// Vertical step size in radians.
    #[arg(long, default_value_t = 0.1)]
    vertical_step_size: Real,

    /// Number of horizontal steps in each direction.
    #[arg(long, default_value_t = 3)]
    horizontal_steps: u32,

    /// Horizontal step size in radians.
    #[arg(long, default_value_t = 0.1)]
    horizontal_step_size: Real,

    /// Sample both hemispheres instead of the upper one only.
    #[arg(long)]
    full_sphere: bool,

    /// Sphere center in world coordinates, as `x,y,z`.
    #[arg(long, value_delimiter = ',', num_args = 3, value_names = ["X", "Y", "Z"])]
    base_position: Option<Vec<Real>>,

    /// Include direction-line endpoints in the report.
    #[arg(long)]
    lines: bool,
}

/// One generated pose in the JSON report.
#[derive(Debug, Serialize, Deserialize)]
struct PoseRecord {
    position: [Real; 3],
    /// Unit quaternion in `[x, y, z, w]` order.
    rotation: [Real; 4],
    #[serde(skip_serializing_if = "Option::is_none")]
    line_endpoint: Option<[Real; 3]>,
}

/// JSON report printed on stdout.
#[derive(Debug, Serialize, Deserialize)]
struct GridReport {
    config: SphereGridConfig,
    base_position: [Real; 3],
    pose_count: usize,
    poses: Vec<PoseRecord>,
}

fn load_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, Box<dyn Error>> {
    let data = fs::read_to_string(path)?;
    let value = serde_json::from_str(&data)?;
    Ok(value)
}

fn config_from_args(args: &Args) -> Result<SphereGridConfig, Box<dyn Error>> {
    if let Some(path) = &args.config {
        return load_json_file(Path::new(path));
    }
    Ok(SphereGridConfig {
        radius: args.radius,
        vertical_steps: args.vertical_steps,
        vertical_step_size: args.vertical_step_size,
        horizontal_steps: args.horizontal_steps,
        horizontal_step_size: args.horizontal_step_size,
        up_only: !args.full_sphere,
    })
}

fn build_report(args: &Args) -> Result<GridReport, Box<dyn Error>> {
    let config = config_from_args(args)?;
    let mut grid = SphereGrid::new(config);

    if let Some(base) = &args.base_position {
        grid.set_base_position(Pt3::new(base[0], base[1], base[2]));
    }

    let poses = grid
        .poses()
        .iter()
        .map(|pose| {
            let q = pose.rotation.into_inner();
            PoseRecord {
                position: [pose.x(), pose.y(), pose.z()],
                rotation: [q.coords[0], q.coords[1], q.coords[2], q.coords[3]],
                line_endpoint: args.lines.then(|| {
                    let end = pose.line_endpoint(DIRECTION_LINE_LENGTH);
                    [end.x, end.y, end.z]
                }),
            }
        })
        .collect();

    let base = grid.base_position();
    Ok(GridReport {
        config: *grid.config(),
        base_position: [base.x, base.y, base.z],
        pose_count: grid.len(),
        poses,
    })
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let report = build_report(&args)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
