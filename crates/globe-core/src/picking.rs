use crate::camera::{Camera, CameraState};
use crate::geometry::{point_to_angles, TilePatch};
use crate::placement::TileId;
use glam::{Vec3, Vec4};

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    ray_sphere_hits(ray_origin, ray_dir, center, radius)
        .and_then(|(near, far)| [near, far].into_iter().find(|t| *t >= 0.0))
}

/// Both intersection distances `(near, far)` of a ray with a sphere, if any.
#[inline]
pub fn ray_sphere_hits(
    ray_origin: Vec3,
    ray_dir: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<(f32, f32)> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let s = disc.sqrt();
    Some((-b - s, -b + s))
}

/// World-space ray through a pixel of a `width × height` viewport.
///
/// Returns `(ray_origin, ray_direction)`.
pub fn screen_to_world_ray(width: f32, height: f32, sx: f32, sy: f32, camera: &Camera) -> (Vec3, Vec3) {
    let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
    let inv = camera.view_projection().inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = camera.eye;
    let rd = (p1 - ro).normalize();
    (ro, rd)
}

/// First tile hit by a world-space ray. Tiles are double-sided and the globe
/// has no opaque core, so a ray that misses every front tile may still pick
/// one on the far side.
pub fn pick_tile(
    patches: &[TilePatch],
    state: &CameraState,
    radius: f32,
    ray_origin: Vec3,
    ray_dir: Vec3,
) -> Option<TileId> {
    let inv = state.globe_matrix().inverse();
    let ro = inv.transform_point3(ray_origin);
    let rd = inv.transform_vector3(ray_dir).normalize();
    let (near, far) = ray_sphere_hits(ro, rd, Vec3::ZERO, radius)?;
    [near, far]
        .into_iter()
        .filter(|t| *t >= 0.0)
        .find_map(|t| {
            let (phi, theta) = point_to_angles(ro + rd * t);
            patches
                .iter()
                .position(|p| p.contains(phi, theta))
                .map(TileId)
        })
}
