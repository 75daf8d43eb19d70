//! Rotate-to-face math and the tweens that fly a tile to the camera.

use crate::camera::CameraState;
use crate::constants::{FLIGHT_DURATION_MS, FOCUS_DISTANCE, SNAP_BACK_DISTANCE};
use crate::geometry::TilePatch;
use crate::grid::GridSpec;
use crate::placement::TileId;
use crate::tween::{Easing, Tween, TweenCategory, TweenEvent, TweenProperty};
use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::time::Duration;

/// Globe pitch/yaw that puts the centre of `patch` in front of the camera.
pub fn focus_orientation(patch: &TilePatch, grid: &GridSpec) -> (f32, f32) {
    let pitch = FRAC_PI_2 - patch.theta_start - PI / (2 * grid.lat_tiles()) as f32;
    let yaw = FRAC_PI_2 - patch.phi_start - PI / grid.lon_tiles() as f32;
    (pitch, yaw)
}

/// Signed rotation in `(-π, π]` that takes `current` to an angle equivalent to `target`.
pub fn shortest_yaw_delta(current: f32, target: f32) -> f32 {
    let d = (PI + target - current).rem_euclid(TAU) - PI;
    if d <= -PI {
        d + TAU
    } else {
        d
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusPlan {
    pub tile: TileId,
    pub pitch: f32,
    pub yaw: f32,
    pub distance_easing: Easing,
}

impl FocusPlan {
    pub fn new(tile: TileId, patch: &TilePatch, grid: &GridSpec, camera: &CameraState) -> Self {
        let (pitch, target_yaw) = focus_orientation(patch, grid);
        let yaw = camera.yaw + shortest_yaw_delta(camera.yaw, target_yaw);
        // Already close: pull back a little before diving in.
        let distance_easing = if camera.distance < SNAP_BACK_DISTANCE {
            Easing::BackIn
        } else {
            Easing::QuarticOut
        };
        Self {
            tile,
            pitch,
            yaw,
            distance_easing,
        }
    }

    /// Orientation and distance flights; the orientation one reports arrival.
    pub fn tweens(&self, camera: &CameraState) -> [Tween; 2] {
        let duration = Duration::from_millis(FLIGHT_DURATION_MS);
        [
            Tween::new(
                TweenProperty::Orientation,
                Vec3::new(camera.pitch, camera.yaw, 0.0),
                Vec3::new(self.pitch, self.yaw, 0.0),
                duration,
            )
            .easing(Easing::QuarticInOut)
            .category(TweenCategory::Flight)
            .on_complete(TweenEvent::FlightArrived(self.tile)),
            Tween::new(
                TweenProperty::Distance,
                Vec3::new(camera.distance, 0.0, 0.0),
                Vec3::new(FOCUS_DISTANCE, 0.0, 0.0),
                duration,
            )
            .easing(self.distance_easing)
            .category(TweenCategory::Flight),
        ]
    }
}

/// Pairs a press with a release on the same tile so that releasing a drag
/// over a tile does not select it.
#[derive(Clone, Copy, Debug, Default)]
pub struct TapTracker {
    pressed: Option<TileId>,
}

impl TapTracker {
    pub fn press(&mut self, tile: TileId) {
        self.pressed = Some(tile);
    }

    /// True when `tile` completes a tap started on it.
    pub fn release(&mut self, tile: TileId) -> bool {
        if self.pressed == Some(tile) {
            self.pressed = None;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.pressed = None;
    }

    pub fn pressed(&self) -> Option<TileId> {
        self.pressed
    }
}
