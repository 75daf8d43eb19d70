use crate::{content, overlay};
use globe_core::{Command, Cursor, ViewportState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod controls;
mod pointer;

pub use controls::{apply_body_theme, wire_controls};
pub use pointer::wire_input_handlers;

/// Handles shared by every DOM callback.
#[derive(Clone)]
pub struct Wiring {
    pub viewport: Rc<RefCell<ViewportState>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
}

impl Wiring {
    /// Carry out what the viewport asked for. Must not be called while the
    /// viewport is borrowed.
    pub fn run(&self, commands: impl IntoIterator<Item = Command>) {
        for command in commands {
            match command {
                Command::LoadContent(request) => self.load_content(request),
                Command::ShowOverlay => self.show_overlay(),
                Command::SetCursor(cursor) => {
                    let value = match cursor {
                        Cursor::Default => "initial",
                        Cursor::Pointer => "pointer",
                    };
                    crate::dom::set_style(&self.canvas, "cursor", value);
                }
            }
        }
    }

    fn show_overlay(&self) {
        let (title, tab_title) = {
            let vp = self.viewport.borrow();
            (vp.overlay.title().to_string(), vp.overlay.document_title())
        };
        overlay::set_title(&self.document, &title, &tab_title);
        overlay::show(&self.document);
    }

    fn load_content(&self, request: globe_core::overlay::ContentRequest) {
        let w = self.clone();
        spawn_local(async move {
            let page = match content::load_page(&request.path).await {
                Ok(page) => page,
                Err(e) => {
                    log::warn!("[content] {:?}", e);
                    w.viewport.borrow_mut().content_failed(request.id);
                    return;
                }
            };
            if !w.viewport.borrow().overlay.is_current(request.id) {
                log::debug!("[content] dropping stale {}", request.path);
                return;
            }
            if let Err(e) = overlay::replace_content(&w.document, &page.body) {
                log::warn!("[content] {:?}", e);
                w.viewport.borrow_mut().content_failed(request.id);
                return;
            }
            overlay::replace_history(&request.path);
            let show = w
                .viewport
                .borrow_mut()
                .content_arrived(request.id, &page.title);
            if show {
                w.show_overlay();
            }
        });
    }

    pub fn close_overlay(&self) {
        let (title, tab_title) = {
            let mut vp = self.viewport.borrow_mut();
            vp.close_overlay();
            (vp.overlay.title().to_string(), vp.overlay.document_title())
        };
        overlay::hide(&self.document);
        overlay::clear_content(&self.document);
        overlay::set_title(&self.document, &title, &tab_title);
        overlay::replace_history("/");
    }
}
