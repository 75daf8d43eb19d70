use crate::camera::{clamp_pitch, tilt_for_distance, CameraState};
use crate::constants::{
    AUTOROTATE_STEP, DRAG_ROTATE_SCALE, MAX_DISTANCE, MIN_DISTANCE, ZOOM_VELOCITY_DECAY,
    ZOOM_VELOCITY_DIVISOR, ZOOM_VELOCITY_EPSILON,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitParams {
    pub min_distance: f32,
    pub max_distance: f32,
    pub autorotate_step: f32,
    pub zoom_divisor: f32,
    pub zoom_decay: f32,
    pub zoom_epsilon: f32,
    pub drag_scale: f32,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            min_distance: MIN_DISTANCE,
            max_distance: MAX_DISTANCE,
            autorotate_step: AUTOROTATE_STEP,
            zoom_divisor: ZOOM_VELOCITY_DIVISOR,
            zoom_decay: ZOOM_VELOCITY_DECAY,
            zoom_epsilon: ZOOM_VELOCITY_EPSILON,
            drag_scale: DRAG_ROTATE_SCALE,
        }
    }
}

/// Zoom inertia, drag rotation and the idle spin of the globe.
#[derive(Clone, Debug)]
pub struct OrbitController {
    pub params: OrbitParams,
    untouched: bool,
    zoom_velocity: f32,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new(OrbitParams::default())
    }
}

impl OrbitController {
    pub fn new(params: OrbitParams) -> Self {
        Self {
            params,
            untouched: true,
            zoom_velocity: 0.0,
        }
    }

    pub fn is_untouched(&self) -> bool {
        self.untouched
    }

    /// Stops the idle spin for the rest of the session.
    pub fn touch(&mut self) {
        if self.untouched {
            log::debug!("[orbit] first interaction, autorotate off");
        }
        self.untouched = false;
    }

    pub fn zoom_velocity(&self) -> f32 {
        self.zoom_velocity
    }

    pub fn add_zoom_velocity(&mut self, delta: f32) {
        if delta.is_finite() {
            self.zoom_velocity += delta;
        }
    }

    /// Advance the idle spin. Returns true when the globe moved.
    pub fn autorotate(&mut self, camera: &mut CameraState, flight_active: bool) -> bool {
        if !self.untouched || flight_active {
            return false;
        }
        camera.yaw += self.params.autorotate_step;
        true
    }

    pub fn set_distance(&self, camera: &mut CameraState, distance: f32) {
        camera.distance = distance.clamp(self.params.min_distance, self.params.max_distance);
        camera.roll = tilt_for_distance(camera.distance);
    }

    /// Apply one frame of zoom inertia. Returns true when the distance changed.
    pub fn tick_zoom(&mut self, camera: &mut CameraState) -> bool {
        if self.zoom_velocity == 0.0 {
            return false;
        }
        let next = camera.distance * (1.0 + self.zoom_velocity / self.params.zoom_divisor);
        self.set_distance(camera, next);
        self.zoom_velocity *= self.params.zoom_decay;
        if self.zoom_velocity.abs() < self.params.zoom_epsilon {
            self.zoom_velocity = 0.0;
        }
        true
    }

    /// Rotate by a pointer delta in CSS pixels; farther cameras turn faster.
    pub fn drag(&mut self, camera: &mut CameraState, dx: f32, dy: f32) {
        let k = camera.distance / self.params.drag_scale;
        camera.pitch = clamp_pitch(camera.pitch + k * dy);
        camera.yaw += k * dx;
    }
}
