use super::Wiring;
use crate::constants::{ABOUT_ID, CLOSE_ID, DARKMODE_ID, LIGHT_BODY_CLASS};
use crate::dom;
use globe_core::constants::CONTENT_PATH_PREFIX;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Close button, theme toggle, "about" link and window resize.
pub fn wire_controls(w: &Wiring) {
    let wc = w.clone();
    dom::add_listeners(&w.document, CLOSE_ID, &["click", "touchend"], move || {
        log::info!("[overlay] close");
        wc.close_overlay();
    });

    let wd = w.clone();
    dom::add_click_listener(&w.document, DARKMODE_ID, move || {
        let dark = wd.viewport.borrow_mut().toggle_dark_mode();
        apply_body_theme(&wd.document, dark);
    });

    let wa = w.clone();
    dom::add_click_listener(&w.document, ABOUT_ID, move || {
        let command = wa.viewport.borrow_mut().open_content(CONTENT_PATH_PREFIX);
        wa.run([command]);
    });

    wire_canvas_resize(w);
}

/// Body class `light` when the light theme is on.
pub fn apply_body_theme(document: &web::Document, dark: bool) {
    if let Some(body) = document.body() {
        let cl = body.class_list();
        _ = if dark {
            cl.remove_1(LIGHT_BODY_CLASS)
        } else {
            cl.add_1(LIGHT_BODY_CLASS)
        };
    }
}

fn sync_size(w: &Wiring) {
    dom::sync_canvas_backing_size(&w.canvas);
    w.viewport
        .borrow_mut()
        .resize(w.canvas.width() as f32, w.canvas.height() as f32);
}

fn wire_canvas_resize(w: &Wiring) {
    sync_size(w);
    let wr = w.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        sync_size(&wr);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
