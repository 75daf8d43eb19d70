// Shared globe/camera tuning constants used by the core and the web frontend.

// Scene layout
pub const GLOBE_RADIUS: f32 = 100.0;

// Grid
pub const LON_TILES: u32 = 16;
pub const LAT_TILES: u32 = 12;
pub const USABLE_LAT_BAND: u32 = 6; // leaves three rows free at each pole
pub const LON_STEP_MAX: u32 = 2; // forward steps of 1..=3 cells

// Tile mesh resolution
pub const TILE_WIDTH_SEGMENTS: u32 = 3;
pub const TILE_HEIGHT_SEGMENTS: u32 = 2;
pub const GRATICULE_PRECISION_DEG: f32 = 5.0;
pub const GRATICULE_MAJOR_STEP_DEG: f32 = 90.0;

// Camera distances, as multiples of the radius
pub const INITIAL_DISTANCE: f32 = GLOBE_RADIUS * 7.0;
pub const MIN_DISTANCE: f32 = GLOBE_RADIUS * 1.2;
pub const MAX_DISTANCE: f32 = GLOBE_RADIUS * 400.0; // also the far plane
pub const FOCUS_DISTANCE: f32 = GLOBE_RADIUS * 1.3;
pub const REST_DISTANCE: f32 = GLOBE_RADIUS * 1.9;
pub const SNAP_BACK_DISTANCE: f32 = GLOBE_RADIUS * 2.0; // closer than this uses Back.In

// Orientation
pub const INITIAL_PITCH: f32 = 0.7; // tilt slightly to front
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_4;
pub const AUTOROTATE_STEP: f32 = 0.004; // radians per frame
pub const TILT_START_DISTANCE: f32 = GLOBE_RADIUS * 2.0;
pub const TILT_DIVISOR: f32 = GLOBE_RADIUS * 7.0;

// Zoom inertia
pub const ZOOM_VELOCITY_DIVISOR: f32 = 2500.0;
pub const ZOOM_VELOCITY_DECAY: f32 = 0.8;
pub const ZOOM_VELOCITY_EPSILON: f32 = 0.1;

// Gestures
pub const DRAG_ROTATE_SCALE: f32 = 80_000.0;
pub const PINCH_ZOOM_SCALE: f32 = 0.1;

// Tween timings (milliseconds)
pub const FLIGHT_DURATION_MS: u64 = 1500;
pub const HOVER_IN_DURATION_MS: u64 = 200;
pub const HOVER_OUT_DURATION_MS: u64 = 100;
pub const THEME_DURATION_MS: u64 = 1000;
pub const HOVER_SCALE: f32 = 1.05;

// Graticule look
pub const GRATICULE_OPACITY: f32 = 0.4;

// Overlay
pub const SITE_NAME: &str = "the Futile Corporation";
pub const CONTENT_PATH_PREFIX: &str = "/about/";
