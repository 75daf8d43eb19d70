#![cfg(target_arch = "wasm32")]
use globe_core::{TileId, ViewportConfig, ViewportState};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod content;
mod dom;
mod events;
mod frame;
mod input;
mod manifest;
mod overlay;
mod render;
mod textures;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let dark_mode = dom::prefers_dark_scheme(&window, constants::DARK_SCHEME_QUERY);
    let projects = manifest::projects();
    let mut rng = StdRng::from_entropy();
    let viewport = ViewportState::new(
        ViewportConfig {
            default_title: overlay::default_title(&document),
            dark_mode,
            ..ViewportConfig::default()
        },
        &projects,
        &mut rng,
    );
    let wiring = events::Wiring {
        viewport: Rc::new(RefCell::new(viewport)),
        canvas: canvas.clone(),
        document: document.clone(),
    };
    events::apply_body_theme(&document, dark_mode);

    // Size the canvas before the surface is configured.
    dom::sync_canvas_backing_size(&canvas);
    let gpu = frame::init_gpu(&wiring).await;

    let queue: textures::TextureQueue = Rc::new(RefCell::new(Vec::new()));
    let urls = projects
        .iter()
        .enumerate()
        .map(|(i, p)| (TileId(i), p.texture_url.clone()))
        .collect();
    textures::load_all(urls, queue.clone(), canvas.clone());

    events::wire_input_handlers(&wiring);
    events::wire_controls(&wiring);

    let deep_link = window.location().pathname().ok().and_then(|path| {
        wiring
            .viewport
            .borrow_mut()
            .open_deep_link(&path)
    });
    if let Some(command) = deep_link {
        log::info!("[overlay] deep link");
        wiring.run([command]);
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        wiring,
        gpu,
        textures: queue,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
