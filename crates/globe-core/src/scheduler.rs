use std::time::Duration;

/// Dirty-flag gate in front of the draw call.
#[derive(Clone, Debug)]
pub struct RenderScheduler {
    dirty: bool,
    rendered: u32,
    skipped: u32,
    window: Duration,
}

impl Default for RenderScheduler {
    fn default() -> Self {
        Self {
            dirty: true,
            rendered: 0,
            skipped: 0,
            window: Duration::ZERO,
        }
    }
}

impl RenderScheduler {
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Decide whether this frame draws. A covered scene keeps its dirty flag
    /// so the first frame after the overlay closes redraws.
    pub fn should_render(&mut self, overlay_visible: bool) -> bool {
        if !overlay_visible && self.dirty {
            self.dirty = false;
            self.rendered += 1;
            true
        } else {
            self.skipped += 1;
            false
        }
    }

    /// Accumulate frame time and emit per-second counts at debug level.
    pub fn tick_stats(&mut self, dt: Duration) {
        self.window += dt;
        if self.window >= Duration::from_secs(1) {
            log::debug!(
                "[frame] {} rendered, {} skipped",
                self.rendered,
                self.skipped
            );
            self.rendered = 0;
            self.skipped = 0;
            self.window = Duration::ZERO;
        }
    }

    pub fn rendered(&self) -> u32 {
        self.rendered
    }

    pub fn skipped(&self) -> u32 {
        self.skipped
    }
}
