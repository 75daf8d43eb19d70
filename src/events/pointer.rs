use super::Wiring;
use crate::input;
use globe_core::TileId;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_input_handlers(w: &Wiring) {
    wire_pointerdown(w);
    wire_pointermove(w);
    wire_pointerup(w);
    wire_pointer_release(w, &["pointercancel", "pointerout", "pointerleave"]);
    wire_wheel(w);
}

fn pick(w: &Wiring, ev: &web::PointerEvent) -> Option<TileId> {
    let px = input::pointer_canvas_px(ev, &w.canvas);
    w.viewport
        .borrow()
        .pick(input::canvas_size(&w.canvas), px)
}

fn listen<E: FromWasmAbi + 'static>(
    canvas: &web::HtmlCanvasElement,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &Wiring) {
    let w = w.clone();
    listen(&w.canvas.clone(), "pointerdown", move |ev: web::PointerEvent| {
        let hit = pick(&w, &ev);
        w.viewport
            .borrow_mut()
            .pointer_down(ev.pointer_id(), input::pointer_css(&ev), hit);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        if let Some(tile) = hit {
            log::debug!("[mouse] press on tile {}", tile.0);
        }
    });
}

fn wire_pointermove(w: &Wiring) {
    let w = w.clone();
    listen(&w.canvas.clone(), "pointermove", move |ev: web::PointerEvent| {
        let hit = pick(&w, &ev);
        let commands = w
            .viewport
            .borrow_mut()
            .pointer_move(ev.pointer_id(), input::pointer_css(&ev), hit);
        w.run(commands);
    });
}

fn wire_pointerup(w: &Wiring) {
    let w = w.clone();
    listen(&w.canvas.clone(), "pointerup", move |ev: web::PointerEvent| {
        let hit = pick(&w, &ev);
        let commands = w.viewport.borrow_mut().pointer_up(ev.pointer_id(), hit);
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
        w.run(commands);
    });
}

/// Pointers that go away without a release never select anything.
fn wire_pointer_release(w: &Wiring, events: &[&str]) {
    for event in events {
        let w = w.clone();
        listen(&w.canvas.clone(), event, move |ev: web::PointerEvent| {
            let commands = {
                let mut vp = w.viewport.borrow_mut();
                vp.pointer_cancel(ev.pointer_id());
                vp.set_hover(None)
            };
            w.run(commands);
        });
    }
}

fn wire_wheel(w: &Wiring) {
    let w = w.clone();
    listen(&w.canvas.clone(), "wheel", move |ev: web::WheelEvent| {
        ev.prevent_default();
        let delta = input::wheel_delta_px(ev.delta_y(), ev.delta_mode());
        w.viewport.borrow_mut().wheel(delta);
    });
}
