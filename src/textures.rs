use crate::content::fetch_blob;
use crate::dom;
use anyhow::anyhow;
use globe_core::TileId;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Decoded images waiting for the next frame to upload them.
pub type TextureQueue = Rc<RefCell<Vec<(TileId, web::ImageBitmap)>>>;

async fn fetch_bitmap(url: &str) -> anyhow::Result<web::ImageBitmap> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let blob = fetch_blob(url).await?;
    let promise = window
        .create_image_bitmap_with_blob(&blob)
        .map_err(|e| anyhow!("createImageBitmap {url}: {:?}", e))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("decode {url}: {:?}", e))?
        .dyn_into()
        .map_err(|_| anyhow!("decode {url}: not an ImageBitmap"))
}

/// Fetch and decode every tile image. Once all have settled, successfully
/// or not, the canvas fades in.
pub fn load_all(urls: Vec<(TileId, String)>, queue: TextureQueue, canvas: web::HtmlCanvasElement) {
    let remaining = Rc::new(Cell::new(urls.len()));
    if urls.is_empty() {
        reveal(&canvas);
        return;
    }
    for (tile, url) in urls {
        let queue = queue.clone();
        let remaining = remaining.clone();
        let canvas = canvas.clone();
        spawn_local(async move {
            match fetch_bitmap(&url).await {
                Ok(bitmap) => queue.borrow_mut().push((tile, bitmap)),
                Err(e) => log::error!("[textures] {:?}", e),
            }
            remaining.set(remaining.get().saturating_sub(1));
            if remaining.get() == 0 {
                log::info!("[textures] all settled");
                reveal(&canvas);
            }
        });
    }
}

fn reveal(canvas: &web::HtmlCanvasElement) {
    dom::set_style(canvas, "opacity", "1");
}
