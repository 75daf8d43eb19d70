//! All mutable scene state in one place, driven by input handlers and the
//! frame loop. Every operation that changes what is on screen marks the
//! render scheduler dirty; operations that need the DOM or the network hand
//! back [`Command`]s for the caller to carry out.

use crate::camera::{Camera, CameraState};
use crate::constants::{
    FLIGHT_DURATION_MS, GLOBE_RADIUS, HOVER_IN_DURATION_MS, HOVER_OUT_DURATION_MS, HOVER_SCALE,
    REST_DISTANCE, THEME_DURATION_MS,
};
use crate::focus::{FocusPlan, TapTracker};
use crate::geometry::TilePatch;
use crate::gesture::GestureRouter;
use crate::grid::GridSpec;
use crate::orbit::{OrbitController, OrbitParams};
use crate::overlay::{deep_link_path, page_url, ContentRequest, OverlayState};
use crate::picking::{pick_tile, screen_to_world_ray};
use crate::placement::{place_tiles, ProjectEntry, TileId, TilePlacement};
use crate::scheduler::RenderScheduler;
use crate::tween::{Easing, Tween, TweenCategory, TweenEvent, TweenProperty, TweenRegistry};
use glam::{Vec2, Vec3};
use rand::Rng;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Pointer,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Fetch a content document for the overlay.
    LoadContent(ContentRequest),
    /// The overlay just became visible.
    ShowOverlay,
    SetCursor(Cursor),
}

pub type Commands = SmallVec<[Command; 2]>;

#[derive(Clone, Debug, Default)]
pub struct FrameOutcome {
    pub render: bool,
    pub commands: Commands,
}

#[derive(Clone, Debug)]
pub struct ViewportConfig {
    pub grid: GridSpec,
    pub orbit: OrbitParams,
    pub radius: f32,
    pub default_title: String,
    pub dark_mode: bool,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            grid: GridSpec::default(),
            orbit: OrbitParams::default(),
            radius: GLOBE_RADIUS,
            default_title: String::new(),
            dark_mode: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Tile {
    pub placement: TilePlacement,
    pub patch: TilePatch,
    pub scale: f32,
}

pub struct ViewportState {
    pub grid: GridSpec,
    pub radius: f32,
    pub camera: CameraState,
    pub orbit: OrbitController,
    pub gestures: GestureRouter,
    pub tweens: TweenRegistry,
    pub scheduler: RenderScheduler,
    pub overlay: OverlayState,
    tiles: Vec<Tile>,
    hovered: Option<TileId>,
    taps: TapTracker,
    dark_mode: bool,
    graticule_color: Vec3,
    aspect: f32,
}

impl ViewportState {
    pub fn new<R: Rng + ?Sized>(
        config: ViewportConfig,
        entries: &[ProjectEntry],
        rng: &mut R,
    ) -> Self {
        let grid = config.grid;
        let tiles = place_tiles(&grid, entries, rng)
            .into_iter()
            .map(|placement| Tile {
                patch: placement.patch(&grid),
                placement,
                scale: 1.0,
            })
            .collect::<Vec<_>>();
        log::info!("[viewport] placed {} tiles", tiles.len());
        let mut state = Self {
            grid,
            radius: config.radius,
            camera: CameraState::default(),
            orbit: OrbitController::new(config.orbit),
            gestures: GestureRouter::default(),
            tweens: TweenRegistry::default(),
            scheduler: RenderScheduler::default(),
            overlay: OverlayState::new(config.default_title),
            tiles,
            hovered: None,
            taps: TapTracker::default(),
            dark_mode: config.dark_mode,
            graticule_color: Vec3::ONE,
            aspect: 1.0,
        };
        state.start_theme_tween();
        state
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.0)
    }

    pub fn hovered(&self) -> Option<TileId> {
        self.hovered
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn graticule_color(&self) -> Vec3 {
        self.graticule_color
    }

    /// Background is the inverse of the line colour.
    pub fn clear_color(&self) -> Vec3 {
        Vec3::ONE - self.graticule_color
    }

    pub fn render_camera(&self) -> Camera {
        Camera::for_state(&self.camera, self.aspect)
    }

    /// Advance one display frame.
    pub fn frame(&mut self, dt: Duration) -> FrameOutcome {
        let mut out = FrameOutcome::default();

        let flight_active = self.tweens.has_category(TweenCategory::Flight);
        if self.orbit.autorotate(&mut self.camera, flight_active) {
            self.scheduler.mark_dirty();
        }

        if !self.tweens.is_empty() {
            let Self {
                tweens,
                camera,
                orbit,
                tiles,
                graticule_color,
                ..
            } = self;
            let events = tweens.update(dt, |property, v| match property {
                TweenProperty::Orientation => {
                    camera.pitch = v.x;
                    camera.yaw = v.y;
                }
                TweenProperty::Distance => orbit.set_distance(camera, v.x),
                TweenProperty::TileScale(id) => {
                    if let Some(t) = tiles.get_mut(id.0) {
                        t.scale = v.x;
                    }
                }
                TweenProperty::GraticuleColor => *graticule_color = v,
            });
            self.scheduler.mark_dirty();
            for ev in events {
                match ev {
                    TweenEvent::FlightArrived(id) => {
                        log::debug!("[focus] arrived at tile {}", id.0);
                        if self.overlay.flight_arrived() {
                            out.commands.push(Command::ShowOverlay);
                        }
                    }
                }
            }
        }

        if self.orbit.tick_zoom(&mut self.camera) {
            self.scheduler.mark_dirty();
        }

        out.render = self.scheduler.should_render(self.overlay.is_visible());
        self.scheduler.tick_stats(dt);
        out
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.aspect = width / height.max(1.0);
        self.scheduler.mark_dirty();
    }

    pub fn texture_ready(&mut self) {
        self.scheduler.mark_dirty();
    }

    /// Tile under a canvas pixel, if any.
    pub fn pick(&self, viewport: Vec2, px: Vec2) -> Option<TileId> {
        let cam = self.render_camera();
        let (ro, rd) = screen_to_world_ray(viewport.x, viewport.y, px.x, px.y, &cam);
        let patches: SmallVec<[TilePatch; 16]> = self.tiles.iter().map(|t| t.patch).collect();
        pick_tile(&patches, &self.camera, self.radius, ro, rd)
    }

    pub fn wheel(&mut self, delta_px: f32) {
        self.orbit.touch();
        self.orbit.add_zoom_velocity(delta_px);
        self.scheduler.mark_dirty();
    }

    pub fn pointer_down(&mut self, id: i32, pos: Vec2, hit: Option<TileId>) {
        if self.gestures.pointer_down(id, pos, &mut self.orbit) {
            self.scheduler.mark_dirty();
        }
        if let Some(tile) = hit {
            self.taps.press(tile);
        }
    }

    pub fn pointer_move(&mut self, id: i32, pos: Vec2, hit: Option<TileId>) -> Commands {
        if self
            .gestures
            .pointer_move(id, pos, &mut self.orbit, &mut self.camera)
        {
            self.scheduler.mark_dirty();
        }
        self.set_hover(hit)
    }

    /// A released pointer; completes a tap when it lifts over the tile it pressed.
    pub fn pointer_up(&mut self, id: i32, hit: Option<TileId>) -> Commands {
        if self.gestures.pointer_up(id) {
            self.scheduler.mark_dirty();
        }
        match hit {
            Some(tile) if self.taps.release(tile) => self.select_tile(tile),
            _ => Commands::new(),
        }
    }

    /// Cancel, out and leave: drop the pointer without selecting anything.
    pub fn pointer_cancel(&mut self, id: i32) {
        if self.gestures.pointer_up(id) {
            self.scheduler.mark_dirty();
        }
    }

    pub fn set_hover(&mut self, hit: Option<TileId>) -> Commands {
        let mut commands = Commands::new();
        if hit == self.hovered {
            return commands;
        }
        if let Some(old) = self.hovered.take() {
            self.tweens.cancel_category(TweenCategory::Hover);
            self.taps.clear();
            self.start_scale_tween(old, 1.0, HOVER_OUT_DURATION_MS);
            commands.push(Command::SetCursor(Cursor::Default));
        }
        self.hovered = hit;
        if let Some(tile) = hit {
            if !self.overlay.is_visible() {
                self.start_scale_tween(tile, HOVER_SCALE, HOVER_IN_DURATION_MS);
                commands.push(Command::SetCursor(Cursor::Pointer));
            }
        }
        self.scheduler.mark_dirty();
        commands
    }

    fn start_scale_tween(&mut self, tile: TileId, to: f32, ms: u64) {
        let Some(t) = self.tiles.get(tile.0) else {
            return;
        };
        self.tweens.start(
            Tween::new(
                TweenProperty::TileScale(tile),
                Vec3::splat(t.scale),
                Vec3::splat(to),
                Duration::from_millis(ms),
            )
            .category(TweenCategory::Hover),
        );
    }

    /// Fly `tile` to the camera and start loading its content.
    pub fn select_tile(&mut self, tile: TileId) -> Commands {
        let mut commands = Commands::new();
        let Some(t) = self.tiles.get(tile.0) else {
            return commands;
        };
        self.orbit.touch();
        let plan = FocusPlan::new(tile, &t.patch, &self.grid, &self.camera);
        let request = self.overlay.request(page_url(&t.placement.project.id), true);
        log::info!(
            "[focus] {} -> pitch={:.3} yaw={:.3}",
            t.placement.project.id,
            plan.pitch,
            plan.yaw
        );
        for tween in plan.tweens(&self.camera) {
            self.tweens.start(tween);
        }
        self.scheduler.mark_dirty();
        commands.push(Command::LoadContent(request));
        commands
    }

    /// Open content directly, without a flight (e.g. the "about" link).
    pub fn open_content(&mut self, path: &str) -> Command {
        Command::LoadContent(self.overlay.request(path, false))
    }

    /// Open whatever the page URL points at on load. Stops the idle spin.
    pub fn open_deep_link(&mut self, pathname: &str) -> Option<Command> {
        let path = deep_link_path(pathname)?;
        self.orbit.touch();
        Some(self.open_content(&path))
    }

    /// Returns true when the overlay should now be shown.
    pub fn content_arrived(&mut self, request: u64, title: &str) -> bool {
        self.overlay.content_arrived(request, title)
    }

    pub fn content_failed(&mut self, request: u64) {
        self.overlay.content_failed(request);
    }

    /// Hide the overlay and ease the camera back to the resting distance.
    pub fn close_overlay(&mut self) {
        self.overlay.close();
        self.tweens.start(
            Tween::new(
                TweenProperty::Distance,
                Vec3::new(self.camera.distance, 0.0, 0.0),
                Vec3::new(REST_DISTANCE, 0.0, 0.0),
                Duration::from_millis(FLIGHT_DURATION_MS),
            )
            .easing(Easing::QuarticOut)
            .category(TweenCategory::Flight),
        );
        self.scheduler.mark_dirty();
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.start_theme_tween();
        self.dark_mode
    }

    fn start_theme_tween(&mut self) {
        let target = if self.dark_mode { Vec3::ONE } else { Vec3::ZERO };
        self.tweens.start(
            Tween::new(
                TweenProperty::GraticuleColor,
                self.graticule_color,
                target,
                Duration::from_millis(THEME_DURATION_MS),
            )
            .category(TweenCategory::Theme),
        );
        self.scheduler.mark_dirty();
    }
}
