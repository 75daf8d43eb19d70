// Host-side tests for overlay visibility, titles and content paths.

use globe_core::overlay::{deep_link_path, document_title, page_url, OverlayState};

const DEFAULT: &str = "the Futile Corporation";

#[test]
fn page_url_uses_about_prefix() {
    assert_eq!(page_url("landuse"), "/about/landuse/");
}

#[test]
fn deep_link_ignores_root_and_normalises_slashes() {
    assert_eq!(deep_link_path("/"), None);
    assert_eq!(deep_link_path(""), None);
    assert_eq!(deep_link_path("/about/za"), Some("/about/za/".to_string()));
    assert_eq!(deep_link_path("/about/"), Some("/about/".to_string()));
}

#[test]
fn document_title_appends_site_name_for_projects() {
    assert_eq!(document_title(DEFAULT, DEFAULT), DEFAULT);
    assert_eq!(
        document_title("Land Use", DEFAULT),
        "Land Use | the Futile Corporation"
    );
}

#[test]
fn selection_waits_for_flight_and_content() {
    let mut o = OverlayState::new(DEFAULT);
    let req = o.request("/about/za/", true);
    assert!(!o.flight_arrived());
    assert!(!o.is_visible());
    assert!(o.content_arrived(req.id, "ZA"));
    assert!(o.is_visible());
    assert_eq!(o.title(), "ZA");
    assert_eq!(o.document_title(), "ZA | the Futile Corporation");
}

#[test]
fn content_before_flight_shows_on_arrival() {
    let mut o = OverlayState::new(DEFAULT);
    let req = o.request("/about/za/", true);
    assert!(!o.content_arrived(req.id, "ZA"));
    assert!(o.flight_arrived());
    assert!(o.is_visible());
}

#[test]
fn failed_content_never_opens() {
    let mut o = OverlayState::new(DEFAULT);
    let req = o.request("/about/za/", true);
    o.content_failed(req.id);
    assert!(!o.is_pending());
    assert!(!o.flight_arrived());
    assert!(!o.is_visible());
}

#[test]
fn stale_responses_are_ignored() {
    let mut o = OverlayState::new(DEFAULT);
    let old = o.request("/about/a/", false);
    let new = o.request("/about/b/", false);
    assert!(!o.is_current(old.id));
    assert!(!o.content_arrived(old.id, "A"));
    o.content_failed(old.id);
    assert!(o.is_pending());
    assert!(o.content_arrived(new.id, "B"));
    assert_eq!(o.title(), "B");
}

#[test]
fn direct_requests_open_without_flight() {
    let mut o = OverlayState::new(DEFAULT);
    let req = o.request("/about/", false);
    assert!(o.content_arrived(req.id, "About"));
}

#[test]
fn close_resets_title_and_pending() {
    let mut o = OverlayState::new(DEFAULT);
    let req = o.request("/about/za/", false);
    o.content_arrived(req.id, "ZA");
    assert!(o.close());
    assert!(!o.is_visible());
    assert_eq!(o.title(), DEFAULT);
    assert!(!o.close());

    // A response landing after close does nothing.
    let req = o.request("/about/za/", true);
    o.close();
    assert!(!o.content_arrived(req.id, "ZA"));
    assert!(!o.is_visible());
}
