//! Core pose and sphere-grid geometry for `viewsphere`.
//!
//! This crate provides the building blocks for planning sensor/camera
//! viewpoint coverage around an object:
//!
//! - linear algebra type aliases (`Real`, `Vec3`, `Pt3`, and friends),
//! - a rigid [`Pose`] (position + orientation) with pivot-rotation support,
//! - a deterministic [`SphereGrid`] generator that samples viewing
//!   directions on a sphere and materializes each as a pose,
//! - an injectable [`GridRenderer`] collaborator so the geometry stays
//!   free of any display subsystem.
//!
//! # Modules
//!
//! - [`math`]: basic type aliases.
//! - [`pose`]: rigid transform type and its mutation/query operations.
//! - [`grid`]: spherical sampling lattice and base placement.
//! - [`render`]: rendering collaborator trait and driver.
//!
//! # Example
//!
//! ```
//! use viewsphere_core::{Pt3, SphereGrid, SphereGridConfig};
//!
//! let grid = SphereGrid::new(SphereGridConfig {
//!     radius: 0.5,
//!     vertical_steps: 2,
//!     vertical_step_size: 0.3,
//!     horizontal_steps: 4,
//!     horizontal_step_size: 0.2,
//!     up_only: true,
//! });
//! assert_eq!(grid.len(), 3 * 9);
//!
//! let mut grid = grid;
//! grid.set_base_position(Pt3::new(1.0, 1.0, 1.0));
//! ```

/// Linear algebra type aliases.
pub mod math;
/// Rigid pose type and operations.
pub mod pose;
/// Spherical sampling grid generator.
pub mod grid;
/// Rendering collaborator trait and driver.
pub mod render;

pub use grid::*;
pub use math::*;
pub use pose::*;
pub use render::*;
