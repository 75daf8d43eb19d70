/// Page wiring and shading constants for the web frontend.
///
/// Kept free of web-sys types so host tests can `include!` this file.

// Element ids the page template provides.
pub const CANVAS_ID: &str = "app-canvas";
pub const TITLE_ID: &str = "title";
pub const OVERLAY_ID: &str = "overlay";
pub const CONTENT_ID: &str = "content";
pub const CLOSE_ID: &str = "close";
pub const DARKMODE_ID: &str = "darkmode";
pub const ABOUT_ID: &str = "about";

// Classes and attributes.
pub const VISIBLE_CLASS: &str = "visible";
pub const LIGHT_BODY_CLASS: &str = "light";
pub const DEFAULT_TITLE_ATTR: &str = "data-default";
pub const CONTENT_TITLE_ATTR: &str = "data-title";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// Lighting: grey ambient plus one white directional light from the front left.
pub const AMBIENT_LIGHT: [f32; 3] = [0.733, 0.733, 0.733];
pub const LIGHT_DIRECTION: [f32; 3] = [-0.5, 0.0, 0.5];
pub const LIGHT_INTENSITY: f32 = 0.8;

// Fragments below this alpha are discarded on transparent tiles.
pub const ALPHA_CUTOFF: f32 = 0.01;

// Browsers report wheel deltas in pixels, lines or pages.
pub const WHEEL_LINE_PX: f32 = 16.0;
pub const WHEEL_PAGE_PX: f32 = 800.0;
