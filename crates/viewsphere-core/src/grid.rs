//! Spherical sampling grid generator.
//!
//! [`SphereGrid`] enumerates a lattice of viewing directions on a sphere
//! and materializes each direction as a [`Pose`]. The whole grid can be
//! repositioned rigidly afterwards via its base position and rotation;
//! both updates rewrite every stored pose in place rather than
//! regenerating the lattice.

use log::debug;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

use crate::{Pose, Pt3, Real, UnitQ};

/// Sampling parameters for a [`SphereGrid`].
///
/// Degenerate values are accepted and produce degenerate but well-defined
/// grids: a non-positive radius collapses all points toward the origin,
/// zero steps produce a single ring (or a single point).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereGridConfig {
    /// Radius of the sphere the poses are generated on.
    pub radius: Real,
    /// Number of angular steps in each direction of the vertical plane.
    pub vertical_steps: u32,
    /// Size of a vertical step, in radians.
    pub vertical_step_size: Real,
    /// Number of angular steps in each direction of the horizontal plane.
    pub horizontal_steps: u32,
    /// Size of a horizontal step, in radians.
    pub horizontal_step_size: Real,
    /// Restrict vertical sampling to the upper hemisphere.
    pub up_only: bool,
}

impl Default for SphereGridConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            vertical_steps: 3,
            vertical_step_size: 0.1,
            horizontal_steps: 3,
            horizontal_step_size: 0.1,
            up_only: true,
        }
    }
}

impl SphereGridConfig {
    /// Number of poses a grid with this configuration contains.
    ///
    /// `(vertical_steps + 1)` rings when restricted to the upper
    /// hemisphere, `(2 * vertical_steps + 1)` otherwise, each with
    /// `(2 * horizontal_steps + 1)` poses.
    pub fn pose_count(&self) -> usize {
        let vertical = if self.up_only {
            self.vertical_steps as usize + 1
        } else {
            2 * self.vertical_steps as usize + 1
        };
        let horizontal = 2 * self.horizontal_steps as usize + 1;
        vertical * horizontal
    }
}

/// Compute the pose for one sampled direction on the sphere.
///
/// `vertical_angle` is the elevation from the equator, `horizontal_angle`
/// the azimuth around the vertical axis. The position is the Cartesian
/// point on the sphere surface; the orientation is the extrinsic-XYZ Euler
/// rotation `(0, -vertical_angle, horizontal_angle)`, which points the
/// pose's local `-X` axis from the surface toward the sphere center.
///
/// `point_on_sphere(r, 0.0, 0.0)` is the equatorial zero-azimuth reference
/// pose at `(r, 0, 0)`.
pub fn point_on_sphere(radius: Real, vertical_angle: Real, horizontal_angle: Real) -> Pose {
    let polar = FRAC_PI_2 - vertical_angle;
    let position = Pt3::new(
        radius * horizontal_angle.cos() * polar.sin(),
        radius * horizontal_angle.sin() * polar.sin(),
        radius * polar.cos(),
    );
    let rotation = UnitQ::from_euler_angles(0.0, -vertical_angle, horizontal_angle);
    Pose::new(position, rotation)
}

/// A lattice of viewing poses on the surface of a sphere.
///
/// Poses are generated once at construction, ordered with the vertical
/// index as the outer loop (ascending) and the horizontal index as the
/// inner loop (ascending from `-horizontal_steps` to `+horizontal_steps`).
/// That order is stable and is the canonical order of [`SphereGrid::poses`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SphereGrid {
    config: SphereGridConfig,
    base_position: Pt3,
    base_rotation: UnitQ,
    poses: Vec<Pose>,
}

impl SphereGrid {
    /// Generate the full pose lattice for `config`, centered at the origin
    /// with identity base rotation.
    pub fn new(config: SphereGridConfig) -> Self {
        let mut poses = Vec::with_capacity(config.pose_count());

        let v_steps = i64::from(config.vertical_steps);
        let h_steps = i64::from(config.horizontal_steps);
        let v_start = if config.up_only { 0 } else { -v_steps };

        for i in v_start..=v_steps {
            for j in -h_steps..=h_steps {
                poses.push(point_on_sphere(
                    config.radius,
                    config.vertical_step_size * i as Real,
                    config.horizontal_step_size * j as Real,
                ));
            }
        }

        debug!(
            "generated {} poses on a sphere of radius {}",
            poses.len(),
            config.radius
        );

        Self {
            config,
            base_position: Pt3::origin(),
            base_rotation: UnitQ::identity(),
            poses,
        }
    }

    pub fn config(&self) -> &SphereGridConfig {
        &self.config
    }

    /// Generated poses, in canonical generation order.
    pub fn poses(&self) -> &[Pose] {
        &self.poses
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    /// World-space center of the sphere.
    pub fn base_position(&self) -> Pt3 {
        self.base_position
    }

    /// Orientation applied to the whole sphere's frame.
    pub fn base_rotation(&self) -> UnitQ {
        self.base_rotation
    }

    /// Move the sphere center to `position`, translating every pose by the
    /// delta from the previous base.
    ///
    /// Setting the same base twice in a row is a no-op. This is an O(n)
    /// rewrite of the stored poses.
    pub fn set_base_position(&mut self, position: Pt3) {
        let delta = position - self.base_position;
        for pose in &mut self.poses {
            pose.translate(delta);
        }
        self.base_position = position;
        debug!("moved grid base to {:?}", self.base_position);
    }

    /// Reorient the sphere's frame to `rotation`, rotating every pose
    /// about the current base position by the delta from the previous
    /// base rotation.
    ///
    /// Setting the same rotation twice in a row is a no-op. This is an
    /// O(n) rewrite of the stored poses.
    pub fn set_base_rotation(&mut self, rotation: UnitQ) {
        let delta = rotation * self.base_rotation.inverse();
        for pose in &mut self.poses {
            pose.rotate_about(self.base_position, delta);
        }
        self.base_rotation = rotation;
    }
}
