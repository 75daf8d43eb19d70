use crate::events::Wiring;
use crate::render;
use crate::textures::TextureQueue;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub wiring: Wiring,
    pub gpu: Option<render::GpuState>,
    pub textures: TextureQueue,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let uploaded = self.upload_textures();
        let outcome = {
            let mut vp = self.wiring.viewport.borrow_mut();
            if uploaded {
                vp.texture_ready();
            }
            vp.frame(dt)
        };
        self.wiring.run(outcome.commands);

        if !outcome.render {
            return;
        }
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.wiring.canvas.width(), self.wiring.canvas.height());
            if let Err(e) = g.render(&self.wiring.viewport.borrow()) {
                log::error!("render error: {:?}", e);
            }
        }
    }

    fn upload_textures(&mut self) -> bool {
        let ready: Vec<_> = self.textures.borrow_mut().drain(..).collect();
        if ready.is_empty() {
            return false;
        }
        match &mut self.gpu {
            Some(g) => {
                for (tile, bitmap) in ready {
                    g.upload_texture(tile.0, bitmap);
                }
                true
            }
            None => false,
        }
    }
}

pub async fn init_gpu(w: &Wiring) -> Option<render::GpuState> {
    // Snapshot the scene so no borrow is held across the await.
    let (tiles, grid, radius) = {
        let vp = w.viewport.borrow();
        (vp.tiles().to_vec(), vp.grid, vp.radius)
    };
    match render::GpuState::new(&w.canvas, &tiles, &grid, radius).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
