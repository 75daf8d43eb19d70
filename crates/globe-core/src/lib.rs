//! Platform-free core of the globe portfolio: grid placement, geometry,
//! orbit/gesture/tween state and the render gate. The web frontend owns the
//! DOM, the network and the GPU; everything here runs and tests on the host.

pub mod camera;
pub mod constants;
pub mod focus;
pub mod geometry;
pub mod gesture;
pub mod grid;
pub mod orbit;
pub mod overlay;
pub mod picking;
pub mod placement;
pub mod scheduler;
pub mod tween;
pub mod viewport;

pub use camera::*;
pub use geometry::{LineVertex, TilePatch, TileVertex};
pub use grid::{GridError, GridSpec};
pub use placement::{place_tiles, ProjectEntry, TileId, TilePlacement};
pub use viewport::{Command, Commands, Cursor, FrameOutcome, ViewportConfig, ViewportState};

pub static GLOBE_WGSL: &str = include_str!("../shaders/globe.wgsl");
pub static LINES_WGSL: &str = include_str!("../shaders/lines.wgsl");
