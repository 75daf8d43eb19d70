//! Camera and globe-orientation state shared with the web frontend.
//!
//! The camera stays on the +Z axis looking at the origin; orbiting is done by
//! rotating the globe frame instead. These types avoid platform APIs so the
//! picking and rendering math can be tested on the host.

use crate::constants::{
    INITIAL_DISTANCE, INITIAL_PITCH, MAX_DISTANCE, PITCH_LIMIT, TILT_DIVISOR, TILT_START_DISTANCE,
};
use glam::{Mat4, Vec3};

/// Zoom distance plus the Euler angles of the rotating globe frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            distance: INITIAL_DISTANCE,
            yaw: 0.0,
            pitch: INITIAL_PITCH,
            roll: tilt_for_distance(INITIAL_DISTANCE),
        }
    }
}

impl CameraState {
    /// Globe model matrix, Euler order ZXY (roll, then pitch, then yaw).
    pub fn globe_matrix(&self) -> Mat4 {
        Mat4::from_rotation_z(self.roll)
            * Mat4::from_rotation_x(self.pitch)
            * Mat4::from_rotation_y(self.yaw)
    }

    pub fn eye(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.distance)
    }
}

/// Sideways tilt that grows once the camera pulls back past the threshold.
#[inline]
pub fn tilt_for_distance(distance: f32) -> f32 {
    -((distance - TILT_START_DISTANCE) / TILT_DIVISOR).max(0.0)
}

#[inline]
pub fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT)
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn for_state(state: &CameraState, aspect: f32) -> Self {
        Self {
            eye: state.eye(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: 50f32.to_radians(),
            znear: 0.1,
            zfar: MAX_DISTANCE,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
