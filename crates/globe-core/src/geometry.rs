//! Sphere patches for project tiles and the graticule line set.
//!
//! Angles follow the polar convention used throughout the crate: `phi` is the
//! longitude measured around +Y, `theta` the polar angle measured down from +Y.

use crate::grid::GridSpec;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Angular extent of one tile on the sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TilePatch {
    pub phi_start: f32,
    pub phi_length: f32,
    pub theta_start: f32,
    pub theta_length: f32,
}

impl TilePatch {
    pub fn for_cell(grid: &GridSpec, lon_index: u32, lat_index: u32) -> Self {
        Self {
            phi_start: lon_index as f32 * grid.tile_width(),
            phi_length: grid.tile_width(),
            theta_start: lat_index as f32 * grid.tile_height(),
            theta_length: grid.tile_height(),
        }
    }

    /// Whether the direction `(phi, theta)` falls inside the patch; longitude wraps.
    pub fn contains(&self, phi: f32, theta: f32) -> bool {
        let dphi = (phi - self.phi_start).rem_euclid(TAU);
        dphi < self.phi_length
            && theta >= self.theta_start
            && theta < self.theta_start + self.theta_length
    }

    pub fn center(&self) -> (f32, f32) {
        (
            self.phi_start + self.phi_length * 0.5,
            self.theta_start + self.theta_length * 0.5,
        )
    }
}

#[inline]
pub fn sphere_point(phi: f32, theta: f32, radius: f32) -> Vec3 {
    Vec3::new(
        -radius * phi.cos() * theta.sin(),
        radius * theta.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

/// Inverse of [`sphere_point`] for a point given in the globe's local frame.
/// Returns `(phi in [0, 2π), theta in [0, π])`.
pub fn point_to_angles(p: Vec3) -> (f32, f32) {
    let r = p.length();
    if r <= f32::EPSILON {
        return (0.0, 0.0);
    }
    let theta = (p.y / r).clamp(-1.0, 1.0).acos();
    let phi = p.z.atan2(-p.x).rem_euclid(TAU);
    (phi, theta)
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TileVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct TileMesh {
    pub vertices: Vec<TileVertex>,
    pub indices: Vec<u16>,
}

/// Triangulate a patch as a `(width_segments + 1) × (height_segments + 1)`
/// vertex grid. UVs run left to right along longitude and top to bottom.
pub fn build_tile_mesh(
    patch: &TilePatch,
    radius: f32,
    width_segments: u32,
    height_segments: u32,
) -> TileMesh {
    let ws = width_segments.max(1);
    let hs = height_segments.max(1);
    let mut mesh = TileMesh::default();
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        let theta = patch.theta_start + v * patch.theta_length;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let phi = patch.phi_start + u * patch.phi_length;
            let p = sphere_point(phi, theta, radius);
            let n = p.normalize_or_zero();
            mesh.vertices.push(TileVertex {
                position: p.to_array(),
                normal: n.to_array(),
                uv: [u, v],
            });
        }
    }
    let row = ws + 1;
    for iy in 0..hs {
        for ix in 0..ws {
            let a = (iy * row + ix + 1) as u16;
            let b = (iy * row + ix) as u16;
            let c = ((iy + 1) * row + ix) as u16;
            let d = ((iy + 1) * row + ix + 1) as u16;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}

fn push_polyline(out: &mut Vec<LineVertex>, points: impl Iterator<Item = Vec3>) {
    let mut prev: Option<Vec3> = None;
    for p in points {
        if let Some(q) = prev {
            out.push(LineVertex { position: q.to_array() });
            out.push(LineVertex { position: p.to_array() });
        }
        prev = Some(p);
    }
}

fn meridian(out: &mut Vec<LineVertex>, phi: f32, theta0: f32, theta1: f32, radius: f32, step: f32) {
    let n = ((theta1 - theta0) / step).ceil().max(1.0) as u32;
    push_polyline(
        out,
        (0..=n).map(|i| sphere_point(phi, theta0 + (theta1 - theta0) * i as f32 / n as f32, radius)),
    );
}

fn parallel(out: &mut Vec<LineVertex>, theta: f32, radius: f32, step: f32) {
    let n = (TAU / step).ceil().max(3.0) as u32;
    push_polyline(
        out,
        (0..=n).map(|i| sphere_point(TAU * i as f32 / n as f32, theta, radius)),
    );
}

/// Line-list vertices for the graticule: minor lines at tile resolution that
/// stop one tile short of each pole, major meridians every `major_step_deg`
/// pole to pole, and the equator.
pub fn build_graticule(
    grid: &GridSpec,
    radius: f32,
    precision_deg: f32,
    major_step_deg: f32,
) -> Vec<LineVertex> {
    let step = precision_deg.max(0.1).to_radians();
    let major = major_step_deg.to_radians();
    let is_major = |angle: f32| {
        let r = angle.rem_euclid(major);
        r < 1e-4 || major - r < 1e-4
    };
    let mut out = Vec::new();
    let (w, h) = (grid.tile_width(), grid.tile_height());

    for k in 0..grid.lon_tiles() {
        let phi = k as f32 * w;
        if is_major(phi) {
            meridian(&mut out, phi, 0.0, PI, radius, step);
        } else {
            meridian(&mut out, phi, h, PI - h, radius, step);
        }
    }
    for j in 1..grid.lat_tiles() {
        let theta = j as f32 * h;
        parallel(&mut out, theta, radius, step);
    }
    if grid.lat_tiles() % 2 == 1 {
        parallel(&mut out, PI * 0.5, radius, step);
    }
    out
}
