// Host-side tests for the pointer state machine.

use glam::Vec2;
use globe_core::camera::CameraState;
use globe_core::constants::PITCH_LIMIT;
use globe_core::gesture::{GestureMode, GestureRouter};
use globe_core::orbit::OrbitController;

fn setup() -> (GestureRouter, OrbitController, CameraState) {
    (
        GestureRouter::default(),
        OrbitController::default(),
        CameraState::default(),
    )
}

#[test]
fn single_pointer_drags_the_globe() {
    let (mut g, mut orbit, mut cam) = setup();
    let yaw0 = cam.yaw;
    assert!(g.pointer_down(1, Vec2::new(100.0, 100.0), &mut orbit));
    assert_eq!(g.mode(), GestureMode::Dragging);
    assert!(!orbit.is_untouched());
    assert!(g.pointer_move(1, Vec2::new(140.0, 100.0), &mut orbit, &mut cam));
    assert!(cam.yaw > yaw0);
    assert!(g.pointer_up(1));
    assert_eq!(g.mode(), GestureMode::Idle);
}

#[test]
fn moves_of_untracked_pointers_are_ignored() {
    let (mut g, mut orbit, mut cam) = setup();
    let before = cam;
    assert!(!g.pointer_move(9, Vec2::new(5.0, 5.0), &mut orbit, &mut cam));
    assert_eq!(cam, before);
}

#[test]
fn release_without_press_is_a_no_op() {
    let (mut g, mut orbit, _) = setup();
    assert!(!g.pointer_up(42));
    g.pointer_down(1, Vec2::ZERO, &mut orbit);
    assert!(!g.pointer_up(42));
    assert_eq!(g.active_pointers(), 1);
}

#[test]
fn pinch_sets_baseline_then_feeds_zoom_velocity() {
    let (mut g, mut orbit, mut cam) = setup();
    g.pointer_down(1, Vec2::new(100.0, 0.0), &mut orbit);
    g.pointer_down(2, Vec2::new(300.0, 0.0), &mut orbit);
    assert_eq!(g.mode(), GestureMode::Pinching);
    assert_eq!(g.pinch_baseline(), None);

    g.pointer_move(2, Vec2::new(300.0, 0.0), &mut orbit, &mut cam);
    assert_eq!(g.pinch_baseline(), Some(200.0));
    assert_eq!(orbit.zoom_velocity(), 0.0);

    // Fingers apart -> zoom in (negative velocity shrinks distance).
    g.pointer_move(2, Vec2::new(320.0, 0.0), &mut orbit, &mut cam);
    assert!(orbit.zoom_velocity() < 0.0);
    assert_eq!(g.pinch_baseline(), Some(220.0));
}

#[test]
fn pinch_does_not_rotate() {
    let (mut g, mut orbit, mut cam) = setup();
    g.pointer_down(1, Vec2::new(0.0, 0.0), &mut orbit);
    g.pointer_down(2, Vec2::new(50.0, 0.0), &mut orbit);
    let (yaw, pitch) = (cam.yaw, cam.pitch);
    g.pointer_move(1, Vec2::new(10.0, 30.0), &mut orbit, &mut cam);
    assert_eq!((cam.yaw, cam.pitch), (yaw, pitch));
}

#[test]
fn leaving_pinch_resets_baseline() {
    let (mut g, mut orbit, mut cam) = setup();
    g.pointer_down(1, Vec2::new(0.0, 0.0), &mut orbit);
    g.pointer_down(2, Vec2::new(50.0, 0.0), &mut orbit);
    g.pointer_move(2, Vec2::new(60.0, 0.0), &mut orbit, &mut cam);
    assert!(g.pinch_baseline().is_some());
    g.pointer_up(2);
    assert_eq!(g.pinch_baseline(), None);
    assert_eq!(g.mode(), GestureMode::Dragging);

    // Re-entering pinch starts from a fresh baseline.
    g.pointer_down(3, Vec2::new(200.0, 0.0), &mut orbit);
    assert_eq!(g.pinch_baseline(), None);
    let v = orbit.zoom_velocity();
    g.pointer_move(3, Vec2::new(210.0, 0.0), &mut orbit, &mut cam);
    assert_eq!(orbit.zoom_velocity(), v);
}

#[test]
fn long_drags_keep_pitch_clamped() {
    let (mut g, mut orbit, mut cam) = setup();
    g.pointer_down(1, Vec2::ZERO, &mut orbit);
    for i in 1..200 {
        g.pointer_move(1, Vec2::new(0.0, i as f32 * 50.0), &mut orbit, &mut cam);
        assert!(cam.pitch <= PITCH_LIMIT);
    }
    assert!((cam.pitch - PITCH_LIMIT).abs() < 1e-6);
    for i in (0..400).rev() {
        g.pointer_move(1, Vec2::new(0.0, i as f32 * -50.0), &mut orbit, &mut cam);
        assert!(cam.pitch >= -PITCH_LIMIT);
    }
}

#[test]
fn three_pointer_pinch_uses_the_two_lowest_ids() {
    let (mut g, mut orbit, mut cam) = setup();
    g.pointer_down(3, Vec2::new(400.0, 0.0), &mut orbit);
    g.pointer_down(1, Vec2::new(0.0, 0.0), &mut orbit);
    g.pointer_down(2, Vec2::new(200.0, 0.0), &mut orbit);
    assert_eq!(g.mode(), GestureMode::Pinching);

    g.pointer_move(2, Vec2::new(210.0, 0.0), &mut orbit, &mut cam);
    assert_eq!(g.pinch_baseline(), Some(210.0));
    assert_eq!(orbit.zoom_velocity(), 0.0);

    // Fingers together -> zoom out.
    g.pointer_move(2, Vec2::new(150.0, 0.0), &mut orbit, &mut cam);
    assert_eq!(g.pinch_baseline(), Some(150.0));
    assert!(orbit.zoom_velocity() > 0.0);

    // The third finger is outside the pair and does not change the span.
    let v = orbit.zoom_velocity();
    g.pointer_move(3, Vec2::new(900.0, 0.0), &mut orbit, &mut cam);
    assert_eq!(orbit.zoom_velocity(), v);
    assert_eq!(g.pinch_baseline(), Some(150.0));
}

#[test]
fn lifting_a_pinch_finger_promotes_the_next_id() {
    let (mut g, mut orbit, mut cam) = setup();
    g.pointer_down(1, Vec2::new(0.0, 0.0), &mut orbit);
    g.pointer_down(2, Vec2::new(100.0, 0.0), &mut orbit);
    g.pointer_down(3, Vec2::new(300.0, 0.0), &mut orbit);
    g.pointer_move(2, Vec2::new(100.0, 0.0), &mut orbit, &mut cam);
    assert_eq!(g.pinch_baseline(), Some(100.0));

    g.pointer_up(2);
    assert_eq!(g.pinch_baseline(), None);
    g.pointer_move(3, Vec2::new(300.0, 0.0), &mut orbit, &mut cam);
    assert_eq!(g.pinch_baseline(), Some(300.0));
}
