// Host-side tests driving the whole viewport the way the web frontend does.

use glam::Vec2;
use globe_core::constants::{FOCUS_DISTANCE, INITIAL_DISTANCE, REST_DISTANCE};
use globe_core::placement::{ProjectEntry, TileId};
use globe_core::viewport::{Command, Cursor, ViewportConfig, ViewportState};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn entries() -> Vec<ProjectEntry> {
    ["a", "b", "c"]
        .iter()
        .map(|id| ProjectEntry::new(*id, format!("/img/{id}.jpg"), false))
        .collect()
}

fn viewport() -> ViewportState {
    let mut rng = StdRng::seed_from_u64(7);
    let config = ViewportConfig {
        default_title: "the Futile Corporation".into(),
        ..ViewportConfig::default()
    };
    let mut vp = ViewportState::new(config, &entries(), &mut rng);
    vp.resize(800.0, 600.0);
    vp
}

fn run(vp: &mut ViewportState, total: Duration) -> Vec<Command> {
    let mut commands = Vec::new();
    let mut t = Duration::ZERO;
    while t < total {
        commands.extend(vp.frame(FRAME).commands);
        t += FRAME;
    }
    commands
}

#[test]
fn tiles_are_placed_in_manifest_order() {
    let vp = viewport();
    assert_eq!(vp.tiles().len(), 3);
    assert_eq!(vp.tiles()[0].placement.project.id, "a");
    assert_eq!(vp.tiles()[2].placement.project.id, "c");
    assert!(vp.tiles().iter().all(|t| t.scale == 1.0));
    assert_eq!(vp.camera.distance, INITIAL_DISTANCE);
}

#[test]
fn idle_globe_spins_until_touched() {
    let mut vp = viewport();
    let yaw = vp.camera.yaw;
    assert!(vp.frame(FRAME).render);
    assert!(vp.camera.yaw > yaw);

    vp.pointer_down(1, Vec2::new(10.0, 10.0), None);
    vp.pointer_cancel(1);
    let yaw = vp.camera.yaw;
    run(&mut vp, Duration::from_millis(100));
    assert_eq!(vp.camera.yaw, yaw);
}

#[test]
fn settled_scene_stops_rendering() {
    let mut vp = viewport();
    vp.wheel(0.0);
    // Let the initial theme fade finish.
    run(&mut vp, Duration::from_millis(1100));
    assert!(vp.tweens.is_empty());
    let before = vp.scheduler.skipped();
    assert!(!vp.frame(FRAME).render);
    assert!(!vp.frame(FRAME).render);
    assert_eq!(vp.scheduler.skipped(), before + 2);
}

#[test]
fn wheel_zoom_moves_the_camera_and_stops() {
    let mut vp = viewport();
    vp.wheel(-500.0);
    assert!(vp.orbit.zoom_velocity() < 0.0);
    run(&mut vp, Duration::from_millis(1000));
    assert!(vp.camera.distance < INITIAL_DISTANCE);
    assert_eq!(vp.orbit.zoom_velocity(), 0.0);
}

#[test]
fn hover_scales_tile_and_sets_cursor() {
    let mut vp = viewport();
    let cmds = vp.set_hover(Some(TileId(1)));
    assert_eq!(cmds.as_slice(), &[Command::SetCursor(Cursor::Pointer)]);
    assert_eq!(vp.hovered(), Some(TileId(1)));
    run(&mut vp, Duration::from_millis(250));
    assert!((vp.tiles()[1].scale - 1.05).abs() < 1e-5);

    let cmds = vp.set_hover(None);
    assert_eq!(cmds.as_slice(), &[Command::SetCursor(Cursor::Default)]);
    run(&mut vp, Duration::from_millis(150));
    assert!((vp.tiles()[1].scale - 1.0).abs() < 1e-5);
}

#[test]
fn repeated_hover_of_the_same_tile_is_silent() {
    let mut vp = viewport();
    vp.set_hover(Some(TileId(0)));
    assert!(vp.set_hover(Some(TileId(0))).is_empty());
}

#[test]
fn drag_released_over_another_tile_does_not_select() {
    let mut vp = viewport();
    vp.pointer_down(1, Vec2::new(100.0, 100.0), Some(TileId(0)));
    vp.pointer_move(1, Vec2::new(140.0, 100.0), Some(TileId(1)));
    let cmds = vp.pointer_up(1, Some(TileId(1)));
    assert!(!cmds.iter().any(|c| matches!(c, Command::LoadContent(_))));
}

#[test]
fn tap_flies_to_tile_then_shows_content() {
    let mut vp = viewport();
    vp.pointer_down(1, Vec2::new(100.0, 100.0), Some(TileId(2)));
    let cmds = vp.pointer_up(1, Some(TileId(2)));
    let request = match cmds.as_slice() {
        [Command::LoadContent(req)] => req.clone(),
        other => panic!("unexpected commands {other:?}"),
    };
    assert_eq!(request.path, "/about/c/");

    // Content lands mid-flight; the overlay still waits for the camera.
    run(&mut vp, Duration::from_millis(500));
    assert!(!vp.content_arrived(request.id, "Project C"));
    assert!(!vp.overlay.is_visible());

    let cmds = run(&mut vp, Duration::from_millis(1100));
    assert!(cmds.contains(&Command::ShowOverlay));
    assert!(vp.overlay.is_visible());
    assert_eq!(vp.overlay.document_title(), "Project C | the Futile Corporation");
    assert!((vp.camera.distance - FOCUS_DISTANCE).abs() < 1e-3);

    // Covered scene does not draw.
    assert!(!vp.frame(FRAME).render);
}

#[test]
fn failed_content_keeps_overlay_closed() {
    let mut vp = viewport();
    let cmds = vp.select_tile(TileId(0));
    let Some(Command::LoadContent(req)) = cmds.first().cloned() else {
        panic!("expected a content request");
    };
    vp.content_failed(req.id);
    let cmds = run(&mut vp, Duration::from_millis(1600));
    assert!(!cmds.contains(&Command::ShowOverlay));
    assert!(!vp.overlay.is_visible());
}

#[test]
fn close_returns_camera_to_rest_distance() {
    let mut vp = viewport();
    let Command::LoadContent(req) = vp.open_content("/about/") else {
        panic!("expected a content request");
    };
    assert!(vp.content_arrived(req.id, "About"));
    vp.close_overlay();
    assert!(!vp.overlay.is_visible());
    assert_eq!(vp.overlay.title(), "the Futile Corporation");
    run(&mut vp, Duration::from_millis(1504));
    assert!((vp.camera.distance - REST_DISTANCE).abs() < 1e-3);
}

#[test]
fn deep_link_stops_autorotate() {
    let mut vp = viewport();
    assert!(vp.open_deep_link("/").is_none());
    assert!(vp.orbit.is_untouched());
    match vp.open_deep_link("/about/b") {
        Some(Command::LoadContent(req)) => assert_eq!(req.path, "/about/b/"),
        other => panic!("unexpected {other:?}"),
    }
    assert!(!vp.orbit.is_untouched());
}

#[test]
fn theme_toggle_fades_to_inverse_colours() {
    let mut vp = viewport();
    run(&mut vp, Duration::from_millis(1100));
    assert_eq!(vp.graticule_color(), glam::Vec3::ONE);
    assert!(!vp.toggle_dark_mode());
    run(&mut vp, Duration::from_millis(1100));
    assert_eq!(vp.graticule_color(), glam::Vec3::ZERO);
    assert_eq!(vp.clear_color(), glam::Vec3::ONE);
}

#[test]
fn hovering_away_mid_flight_keeps_the_flight() {
    let mut vp = viewport();
    let Some(Command::LoadContent(req)) = vp.select_tile(TileId(2)).first().cloned() else {
        panic!("expected a content request");
    };
    assert!(!vp.content_arrived(req.id, "Project C"));

    vp.set_hover(Some(TileId(0)));
    run(&mut vp, Duration::from_millis(300));
    vp.set_hover(None);
    run(&mut vp, Duration::from_millis(200));
    assert!(!vp.overlay.is_visible());

    let cmds = run(&mut vp, Duration::from_millis(1100));
    assert!(cmds.contains(&Command::ShowOverlay));
    assert!(vp.overlay.is_visible());
    assert!((vp.camera.distance - FOCUS_DISTANCE).abs() < 1e-3);
}
