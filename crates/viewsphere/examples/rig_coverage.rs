//! Plan an upper-hemisphere capture rig around an object and print the
//! draw primitives a plotting backend would receive.

use viewsphere::{
    render_grid, GridRenderer, Pt3, RecordingRenderer, SphereGrid, SphereGridConfig, UnitQ,
};

/// Renderer that forwards primitives to stdout, one per line.
struct ConsoleRenderer;

impl GridRenderer for ConsoleRenderer {
    fn point(&mut self, position: Pt3) -> anyhow::Result<()> {
        println!("point   {:8.4} {:8.4} {:8.4}", position.x, position.y, position.z);
        Ok(())
    }

    fn segment(&mut self, start: Pt3, end: Pt3) -> anyhow::Result<()> {
        println!(
            "segment {:8.4} {:8.4} {:8.4} -> {:8.4} {:8.4} {:8.4}",
            start.x, start.y, start.z, end.x, end.y, end.z
        );
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let mut grid = SphereGrid::new(SphereGridConfig {
        radius: 1.0,
        vertical_steps: 3,
        vertical_step_size: 0.1,
        horizontal_steps: 3,
        horizontal_step_size: 0.1,
        up_only: true,
    });

    // Center the rig on the object.
    grid.set_base_position(Pt3::new(1.0, 1.0, 1.0));
    // A small roll of the whole sphere, e.g. to match the turntable tilt.
    grid.set_base_rotation(UnitQ::from_euler_angles(0.05, 0.0, 0.0));

    println!("planned {} viewpoints", grid.len());
    render_grid(&grid, &mut ConsoleRenderer, true)?;

    // The recording renderer captures the same primitives as data, which is
    // what an embedding application would hand to its plotting backend.
    let mut recorder = RecordingRenderer::default();
    render_grid(&grid, &mut recorder, true)?;
    println!(
        "captured {} points and {} segments",
        recorder.points.len(),
        recorder.segments.len()
    );

    Ok(())
}
