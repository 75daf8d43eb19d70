//! Pointer bookkeeping for one-finger orbit and two-finger pinch zoom.

use crate::camera::CameraState;
use crate::constants::PINCH_ZOOM_SCALE;
use crate::orbit::OrbitController;
use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureMode {
    Idle,
    Dragging,
    Pinching,
}

#[derive(Clone, Debug, Default)]
pub struct GestureRouter {
    pointers: FnvHashMap<i32, Vec2>,
    pinch_baseline: Option<f32>,
}

impl GestureRouter {
    pub fn mode(&self) -> GestureMode {
        match self.pointers.len() {
            0 => GestureMode::Idle,
            1 => GestureMode::Dragging,
            _ => GestureMode::Pinching,
        }
    }

    pub fn active_pointers(&self) -> usize {
        self.pointers.len()
    }

    pub fn pinch_baseline(&self) -> Option<f32> {
        self.pinch_baseline
    }

    pub fn pointer_down(&mut self, id: i32, pos: Vec2, orbit: &mut OrbitController) -> bool {
        orbit.touch();
        if self.pointers.insert(id, pos).is_none() {
            self.pinch_baseline = None;
        }
        true
    }

    /// Returns false when the pointer is not tracked (e.g. a hover without a press).
    pub fn pointer_move(
        &mut self,
        id: i32,
        pos: Vec2,
        orbit: &mut OrbitController,
        camera: &mut CameraState,
    ) -> bool {
        let Some(prev) = self.pointers.get(&id).copied() else {
            return false;
        };
        self.pointers.insert(id, pos);
        if self.pointers.len() == 1 {
            let d = pos - prev;
            orbit.drag(camera, d.x, d.y);
        } else if let Some(curr) = self.pinch_span() {
            if let Some(base) = self.pinch_baseline {
                orbit.add_zoom_velocity((base - curr) / PINCH_ZOOM_SCALE);
            }
            self.pinch_baseline = Some(curr);
        }
        true
    }

    /// Up, cancel, out and leave all land here. Unknown pointers are ignored.
    pub fn pointer_up(&mut self, id: i32) -> bool {
        if self.pointers.remove(&id).is_none() {
            return false;
        }
        // The pinch pair may have changed.
        self.pinch_baseline = None;
        true
    }

    /// Horizontal distance between the two lowest pointer ids.
    fn pinch_span(&self) -> Option<f32> {
        let mut ids: SmallVec<[i32; 4]> = self.pointers.keys().copied().collect();
        ids.sort_unstable();
        let a = self.pointers.get(ids.first()?)?;
        let b = self.pointers.get(ids.get(1)?)?;
        Some((a.x - b.x).abs())
    }
}
