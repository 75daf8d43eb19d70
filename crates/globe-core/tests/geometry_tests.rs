// Host-side tests for tile patches, tile meshes and the graticule.

use globe_core::geometry::{
    build_graticule, build_tile_mesh, point_to_angles, sphere_point, TilePatch,
};
use globe_core::grid::GridSpec;
use std::f32::consts::{PI, TAU};

#[test]
fn patch_extent_matches_cell() {
    let grid = GridSpec::default();
    let p = TilePatch::for_cell(&grid, 3, 5);
    assert!((p.phi_start - 3.0 * TAU / 16.0).abs() < 1e-6);
    assert!((p.phi_length - TAU / 16.0).abs() < 1e-6);
    assert!((p.theta_start - 5.0 * PI / 12.0).abs() < 1e-6);
    assert!((p.theta_length - PI / 12.0).abs() < 1e-6);
}

#[test]
fn patch_contains_wraps_longitude() {
    let grid = GridSpec::default();
    // lon index 17 is one revolution past column 1
    let wrapped = TilePatch::for_cell(&grid, 17, 6);
    let (phi, theta) = TilePatch::for_cell(&grid, 1, 6).center();
    assert!(wrapped.contains(phi, theta));
    assert!(!wrapped.contains(phi + grid.tile_width(), theta));
    assert!(!wrapped.contains(phi, theta + grid.tile_height()));
}

#[test]
fn sphere_point_round_trips_through_angles() {
    for &(phi, theta) in &[(0.3_f32, 0.4_f32), (2.0, 1.5), (5.9, 2.8), (3.2, 0.9)] {
        let p = sphere_point(phi, theta, 100.0);
        assert!((p.length() - 100.0).abs() < 1e-3);
        let (phi2, theta2) = point_to_angles(p);
        assert!((phi - phi2).abs() < 1e-4, "phi {phi} vs {phi2}");
        assert!((theta - theta2).abs() < 1e-4, "theta {theta} vs {theta2}");
    }
}

#[test]
fn tile_mesh_has_expected_layout() {
    let grid = GridSpec::default();
    let patch = TilePatch::for_cell(&grid, 2, 4);
    let mesh = build_tile_mesh(&patch, 100.0, 3, 2);
    assert_eq!(mesh.vertices.len(), 4 * 3);
    assert_eq!(mesh.indices.len(), 3 * 2 * 6);
    assert!(mesh
        .indices
        .iter()
        .all(|&i| (i as usize) < mesh.vertices.len()));
    for v in &mesh.vertices {
        let r = glam::Vec3::from(v.position).length();
        assert!((r - 100.0).abs() < 1e-3);
        assert!((0.0..=1.0).contains(&v.uv[0]) && (0.0..=1.0).contains(&v.uv[1]));
    }
    assert_eq!(mesh.vertices[0].uv, [0.0, 0.0]);
    assert_eq!(mesh.vertices.last().unwrap().uv, [1.0, 1.0]);
}

#[test]
fn graticule_is_a_line_list_on_the_sphere() {
    let grid = GridSpec::default();
    let lines = build_graticule(&grid, 100.0, 5.0, 90.0);
    assert!(!lines.is_empty());
    assert_eq!(lines.len() % 2, 0);
    for v in &lines {
        let r = glam::Vec3::from(v.position).length();
        assert!((r - 100.0).abs() < 1e-2);
    }
}

#[test]
fn minor_meridians_stop_short_of_the_poles() {
    let grid = GridSpec::default();
    let lines = build_graticule(&grid, 1.0, 5.0, 90.0);
    let pole_cap = grid.tile_height().cos() + 1e-4;
    let cap: Vec<_> = lines
        .iter()
        .filter(|v| v.position[1].abs() > pole_cap)
        .collect();
    assert!(!cap.is_empty(), "major meridians should reach the poles");
    for v in cap {
        let horizontal = (v.position[0].powi(2) + v.position[2].powi(2)).sqrt();
        if horizontal < 1e-4 {
            continue; // the pole itself
        }
        let deg = v.position[2]
            .atan2(-v.position[0])
            .rem_euclid(TAU)
            .to_degrees();
        let off_major = (deg / 90.0 - (deg / 90.0).round()).abs() * 90.0;
        assert!(off_major < 0.01, "minor line inside polar cap at {deg} degrees");
    }
}
