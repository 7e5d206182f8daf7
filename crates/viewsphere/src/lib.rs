//! High-level entry crate for the `viewsphere` toolbox.
//!
//! Re-exports everything from [`viewsphere_core`]: the [`Pose`] type, the
//! [`SphereGrid`] generator and the [`GridRenderer`] collaborator trait.
//!
//! A typical rig-planning session builds a grid, places it around the
//! object under capture, and hands the primitives to a renderer:
//!
//! ```
//! use viewsphere::{
//!     render_grid, Pt3, RecordingRenderer, SphereGrid, SphereGridConfig, UnitQ,
//! };
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut grid = SphereGrid::new(SphereGridConfig {
//!     radius: 0.8,
//!     vertical_steps: 3,
//!     vertical_step_size: 0.2,
//!     horizontal_steps: 6,
//!     horizontal_step_size: 0.25,
//!     up_only: true,
//! });
//!
//! // Center the rig on the object and tilt the whole sphere.
//! grid.set_base_position(Pt3::new(1.0, 1.0, 1.0));
//! grid.set_base_rotation(UnitQ::from_euler_angles(0.0, 0.1, 0.0));
//!
//! let mut renderer = RecordingRenderer::default();
//! render_grid(&grid, &mut renderer, true)?;
//! assert_eq!(renderer.points.len(), grid.len() + 1);
//! # Ok(())
//! # }
//! ```

pub use viewsphere_core::*;
