//! Rigid pose type and its mutation/query operations.
//!
//! A [`Pose`] is a position plus an orientation mapping the pose's local
//! frame into the world frame. The orientation is stored as a
//! `UnitQuaternion`, so it is a proper rotation (orthonormal, det +1) by
//! construction.

use nalgebra::Translation3;
use serde::{Deserialize, Serialize};

use crate::{Iso3, Pt3, Real, UnitQ, Vec3};

/// Default length of the direction-indicator segment returned by
/// [`Pose::line_endpoint`].
pub const DIRECTION_LINE_LENGTH: Real = 0.1;

/// A rigid 3D transform: position + orientation.
///
/// The local `-X` axis is the viewing direction; for poses generated by
/// [`crate::SphereGrid`] it points from the sampled point toward the
/// sphere center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// World-space position of the pose.
    pub position: Pt3,
    /// Orientation mapping the local frame into the world frame.
    pub rotation: UnitQ,
}

impl Pose {
    pub fn new(position: Pt3, rotation: UnitQ) -> Self {
        Self { position, rotation }
    }

    /// Build a pose from a rigid isometry.
    pub fn from_isometry(iso: &Iso3) -> Self {
        Self {
            position: Pt3::from(iso.translation.vector),
            rotation: iso.rotation,
        }
    }

    /// The pose as a rigid isometry.
    pub fn isometry(&self) -> Iso3 {
        Iso3::from_parts(Translation3::from(self.position.coords), self.rotation)
    }

    pub fn x(&self) -> Real {
        self.position.x
    }

    pub fn y(&self) -> Real {
        self.position.y
    }

    pub fn z(&self) -> Real {
        self.position.z
    }

    pub fn set_x(&mut self, value: Real) {
        self.position.x = value;
    }

    pub fn set_y(&mut self, value: Real) {
        self.position.y = value;
    }

    pub fn set_z(&mut self, value: Real) {
        self.position.z = value;
    }

    /// World-space endpoint of a segment of `length` along the local
    /// viewing (`-X`) axis.
    ///
    /// Rotates the local vector `(-length, 0, 0)` into the world frame and
    /// offsets it from the position. Used for drawing direction indicators;
    /// the returned point is always at Euclidean distance `length` from the
    /// position.
    pub fn line_endpoint(&self, length: Real) -> Pt3 {
        let line_vector = self.rotation * Vec3::new(-length, 0.0, 0.0);
        self.position + line_vector
    }

    /// Translate the pose by `delta`, component-wise. Always succeeds.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Rotate the pose rigidly about an external `pivot` point.
    ///
    /// The offset from the pivot is rotated and re-added, and the
    /// orientation is composed with the applied rotation:
    ///
    /// `position' = pivot + R * (position - pivot)`
    /// `rotation' = R * rotation`
    pub fn rotate_about(&mut self, pivot: Pt3, rotation: UnitQ) {
        let offset = self.position - pivot;
        self.position = pivot + rotation * offset;
        self.rotation = rotation * self.rotation;
    }
}
