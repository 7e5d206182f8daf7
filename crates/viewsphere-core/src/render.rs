//! Rendering collaborator trait and driver.
//!
//! The grid itself is display-free; anything that wants to draw it
//! implements [`GridRenderer`] and is driven by [`render_grid`]. The
//! renderer only ever sees the public pose surface: positions and
//! direction-line endpoints.

use anyhow::Result;

use crate::{Pt3, SphereGrid, DIRECTION_LINE_LENGTH};

/// Drawing surface for a [`SphereGrid`].
pub trait GridRenderer {
    /// Draw a single point.
    fn point(&mut self, position: Pt3) -> Result<()>;

    /// Draw a line segment between two points.
    fn segment(&mut self, start: Pt3, end: Pt3) -> Result<()>;
}

/// Draw `grid` on `renderer`: the base position, every pose position and,
/// if `show_direction_lines` is set, a short segment from each pose to its
/// direction-line endpoint.
pub fn render_grid<R: GridRenderer>(
    grid: &SphereGrid,
    renderer: &mut R,
    show_direction_lines: bool,
) -> Result<()> {
    renderer.point(grid.base_position())?;
    for pose in grid.poses() {
        renderer.point(pose.position)?;
        if show_direction_lines {
            renderer.segment(pose.position, pose.line_endpoint(DIRECTION_LINE_LENGTH))?;
        }
    }
    Ok(())
}

/// Renderer that records every draw call. Convenient for tests and for
/// handing the primitives to an external plotting backend.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    /// Points in draw order; the grid base comes first.
    pub points: Vec<Pt3>,
    /// Direction-line segments in draw order.
    pub segments: Vec<(Pt3, Pt3)>,
}

impl GridRenderer for RecordingRenderer {
    fn point(&mut self, position: Pt3) -> Result<()> {
        self.points.push(position);
        Ok(())
    }

    fn segment(&mut self, start: Pt3, end: Pt3) -> Result<()> {
        self.segments.push((start, end));
        Ok(())
    }
}
