// Host-side tests for the dirty-flag render gate.

use globe_core::scheduler::RenderScheduler;

#[test]
fn first_frame_renders_then_rest_skips() {
    let mut s = RenderScheduler::default();
    assert!(s.should_render(false));
    assert!(!s.should_render(false));
    assert!(!s.should_render(false));
    assert_eq!(s.rendered(), 1);
    assert_eq!(s.skipped(), 2);
}

#[test]
fn covered_scene_keeps_its_dirty_flag() {
    let mut s = RenderScheduler::default();
    s.should_render(false);
    s.mark_dirty();
    assert!(!s.should_render(true));
    assert!(s.is_dirty());
    assert!(s.should_render(false));
    assert!(!s.is_dirty());
}
