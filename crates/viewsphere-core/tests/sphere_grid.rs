//! Integration tests for the sphere grid generator.
//!
//! Exercises the documented end-to-end behavior: pose counts, sphere
//! membership after repositioning, and the canonical three-pose equatorial
//! example.

use std::f64::consts::FRAC_PI_2;

use approx::assert_relative_eq;
use viewsphere_core::{point_on_sphere, Pt3, SphereGrid, SphereGridConfig, UnitQ};

#[test]
fn equatorial_ring_example() {
    // radius 1, no vertical steps, one horizontal step of pi/2 in each
    // direction: three poses on the equator.
    let grid = SphereGrid::new(SphereGridConfig {
        radius: 1.0,
        vertical_steps: 0,
        vertical_step_size: 0.7,
        horizontal_steps: 1,
        horizontal_step_size: FRAC_PI_2,
        up_only: true,
    });

    assert_eq!(grid.len(), 3);

    let expected = [
        Pt3::new(0.0, -1.0, 0.0),
        Pt3::new(1.0, 0.0, 0.0),
        Pt3::new(0.0, 1.0, 0.0),
    ];
    for (pose, expected) in grid.poses().iter().zip(expected) {
        assert!(
            (pose.position - expected).norm() < 1e-12,
            "pose at {:?}, expected {:?}",
            pose.position,
            expected
        );
    }
}

#[test]
fn full_sphere_counts_both_hemispheres() {
    let up_only = SphereGrid::new(SphereGridConfig {
        vertical_steps: 4,
        horizontal_steps: 2,
        up_only: true,
        ..SphereGridConfig::default()
    });
    let full = SphereGrid::new(SphereGridConfig {
        vertical_steps: 4,
        horizontal_steps: 2,
        up_only: false,
        ..SphereGridConfig::default()
    });

    assert_eq!(up_only.len(), 5 * 5);
    assert_eq!(full.len(), 9 * 5);
}

#[test]
fn repositioned_grid_stays_on_its_sphere() {
    let mut grid = SphereGrid::new(SphereGridConfig {
        radius: 0.75,
        ..SphereGridConfig::default()
    });

    let base = Pt3::new(1.0, 1.0, 1.0);
    grid.set_base_position(base);
    grid.set_base_rotation(UnitQ::from_euler_angles(0.3, -0.4, 1.2));

    assert_eq!(grid.base_position(), base);
    for pose in grid.poses() {
        let dist = (pose.position - base).norm();
        assert_relative_eq!(dist, 0.75, epsilon = 1e-10);
    }
}

#[test]
fn base_rotation_carries_direction_lines_along() {
    // A pose and its direction-line endpoint are rotated rigidly together.
    let mut grid = SphereGrid::new(SphereGridConfig {
        radius: 2.0,
        vertical_steps: 1,
        vertical_step_size: 0.5,
        horizontal_steps: 1,
        horizontal_step_size: 0.5,
        up_only: false,
    });

    let rotation = UnitQ::from_euler_angles(0.0, 0.0, FRAC_PI_2);
    let endpoints_before: Vec<Pt3> = grid.poses().iter().map(|p| p.line_endpoint(0.1)).collect();

    grid.set_base_rotation(rotation);

    for (pose, before) in grid.poses().iter().zip(endpoints_before) {
        let expected = Pt3::origin() + rotation * (before - Pt3::origin());
        let actual = pose.line_endpoint(0.1);
        assert!(
            (actual - expected).norm() < 1e-12,
            "endpoint {:?} expected {:?}",
            actual,
            expected
        );
    }
}

#[test]
fn translation_then_rotation_matches_composed_transform() {
    let config = SphereGridConfig {
        radius: 1.5,
        vertical_steps: 2,
        vertical_step_size: 0.3,
        horizontal_steps: 2,
        horizontal_step_size: 0.6,
        up_only: true,
    };

    let mut grid = SphereGrid::new(config);
    let reference = SphereGrid::new(config);

    let base = Pt3::new(0.5, -0.5, 2.0);
    let rotation = UnitQ::from_euler_angles(0.2, 0.1, -0.9);
    grid.set_base_position(base);
    grid.set_base_rotation(rotation);

    for (pose, original) in grid.poses().iter().zip(reference.poses()) {
        // Rotate the original offset about the base, then add the base.
        let expected = base + rotation * original.position.coords;
        assert!((pose.position - expected).norm() < 1e-10);
    }
}

#[test]
fn point_on_sphere_matches_grid_entries() {
    let config = SphereGridConfig {
        radius: 1.0,
        vertical_steps: 1,
        vertical_step_size: 0.4,
        horizontal_steps: 1,
        horizontal_step_size: 0.8,
        up_only: false,
    };
    let grid = SphereGrid::new(config);

    let mut idx = 0;
    for i in -1..=1i32 {
        for j in -1..=1i32 {
            let expected = point_on_sphere(1.0, 0.4 * f64::from(i), 0.8 * f64::from(j));
            assert_eq!(grid.poses()[idx], expected);
            idx += 1;
        }
    }
    assert_eq!(idx, grid.len());
}

#[test]
fn zero_steps_grid_is_a_single_pose() {
    let grid = SphereGrid::new(SphereGridConfig {
        radius: 3.0,
        vertical_steps: 0,
        vertical_step_size: 0.0,
        horizontal_steps: 0,
        horizontal_step_size: 0.0,
        up_only: true,
    });

    assert_eq!(grid.len(), 1);
    assert!((grid.poses()[0].position - Pt3::new(3.0, 0.0, 0.0)).norm() < 1e-12);
}
