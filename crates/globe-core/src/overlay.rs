//! Visibility and title bookkeeping for the project content overlay.
//!
//! The DOM side fetches and moves nodes; this type decides when the overlay
//! may open. A selection opens it only after both the camera flight has
//! landed and the content of that same request has arrived.

use crate::constants::{CONTENT_PATH_PREFIX, SITE_NAME};

/// Canonical content path for a project id.
pub fn page_url(id: &str) -> String {
    format!("{CONTENT_PATH_PREFIX}{id}/")
}

/// Content path to open on page load, or `None` for the bare globe.
pub fn deep_link_path(pathname: &str) -> Option<String> {
    let trimmed = pathname.trim_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    Some(format!("/{trimmed}/"))
}

/// Browser tab title for an overlay title.
pub fn document_title(title: &str, default_title: &str) -> String {
    if title == default_title {
        title.to_string()
    } else {
        format!("{title} | {SITE_NAME}")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentRequest {
    pub id: u64,
    pub path: String,
}

#[derive(Clone, Debug)]
struct PendingShow {
    request: u64,
    flight_done: bool,
    loaded_title: Option<String>,
}

#[derive(Clone, Debug)]
pub struct OverlayState {
    visible: bool,
    title: String,
    default_title: String,
    pending: Option<PendingShow>,
    next_request: u64,
}

impl OverlayState {
    pub fn new(default_title: impl Into<String>) -> Self {
        let default_title = default_title.into();
        Self {
            visible: false,
            title: default_title.clone(),
            default_title,
            pending: None,
            next_request: 1,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn default_title(&self) -> &str {
        &self.default_title
    }

    pub fn document_title(&self) -> String {
        document_title(&self.title, &self.default_title)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Begin loading `path`. With `after_flight` the overlay additionally
    /// waits for [`OverlayState::flight_arrived`]. A newer request supersedes
    /// any older one still in flight.
    pub fn request(&mut self, path: impl Into<String>, after_flight: bool) -> ContentRequest {
        let id = self.next_request;
        self.next_request += 1;
        self.pending = Some(PendingShow {
            request: id,
            flight_done: !after_flight,
            loaded_title: None,
        });
        let path = path.into();
        log::debug!("[overlay] request #{id} {path}");
        ContentRequest { id, path }
    }

    /// Whether `request` is still the one the overlay is waiting for.
    pub fn is_current(&self, request: u64) -> bool {
        self.pending.as_ref().is_some_and(|p| p.request == request)
    }

    /// Returns true when this made the overlay visible.
    pub fn flight_arrived(&mut self) -> bool {
        if let Some(p) = self.pending.as_mut() {
            p.flight_done = true;
        }
        self.try_show()
    }

    /// Returns true when this made the overlay visible. Stale requests are ignored.
    pub fn content_arrived(&mut self, request: u64, title: impl Into<String>) -> bool {
        match self.pending.as_mut() {
            Some(p) if p.request == request => p.loaded_title = Some(title.into()),
            _ => return false,
        }
        self.try_show()
    }

    /// Drop a failed request; the overlay stays closed.
    pub fn content_failed(&mut self, request: u64) {
        if self.is_current(request) {
            log::debug!("[overlay] request #{request} abandoned");
            self.pending = None;
        }
    }

    fn try_show(&mut self) -> bool {
        let ready = matches!(
            &self.pending,
            Some(PendingShow { flight_done: true, loaded_title: Some(_), .. })
        );
        if !ready {
            return false;
        }
        if let Some(PendingShow {
            loaded_title: Some(title),
            ..
        }) = self.pending.take()
        {
            self.title = title;
        }
        self.visible = true;
        log::info!("[overlay] showing \"{}\"", self.title);
        true
    }

    /// Hide the overlay and forget any pending show. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        let was_visible = self.visible;
        self.visible = false;
        self.pending = None;
        self.title = self.default_title.clone();
        was_visible
    }
}
