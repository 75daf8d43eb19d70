use crate::constants::{WHEEL_LINE_PX, WHEEL_PAGE_PX};
use glam::Vec2;

// DOM_DELTA_* values from the WheelEvent interface.
const DELTA_LINE: u32 = 1;
const DELTA_PAGE: u32 = 2;

/// Wheel delta in pixels regardless of the reporting mode.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32) -> f32 {
    let d = delta_y as f32;
    match delta_mode {
        DELTA_LINE => d * WHEEL_LINE_PX,
        DELTA_PAGE => d * WHEEL_PAGE_PX,
        _ => d,
    }
}

/// Map a CSS-pixel offset inside an element of `css_size` to backing-store pixels.
#[inline]
pub fn css_to_canvas_px(offset_css: Vec2, css_size: Vec2, canvas_px: Vec2) -> Vec2 {
    if css_size.x <= 0.0 || css_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    offset_css / css_size * canvas_px
}

#[cfg(target_arch = "wasm32")]
pub use dom_input::*;

#[cfg(target_arch = "wasm32")]
mod dom_input {
    use super::css_to_canvas_px;
    use glam::Vec2;
    use web_sys as web;

    /// Backing-store pixel position of a pointer event on the canvas.
    #[inline]
    pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        let offset = Vec2::new(
            ev.client_x() as f32 - rect.left() as f32,
            ev.client_y() as f32 - rect.top() as f32,
        );
        css_to_canvas_px(
            offset,
            Vec2::new(rect.width() as f32, rect.height() as f32),
            canvas_size(canvas),
        )
    }

    /// Pointer position in CSS pixels relative to the canvas; drag deltas use these.
    #[inline]
    pub fn pointer_css(ev: &web::PointerEvent) -> Vec2 {
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
    }

    #[inline]
    pub fn canvas_size(canvas: &web::HtmlCanvasElement) -> Vec2 {
        Vec2::new(canvas.width() as f32, canvas.height() as f32)
    }
}
