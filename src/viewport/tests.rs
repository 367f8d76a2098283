//! Viewport domain: tests for follow conditions and scroll clamping.

use super::systems::camera_x;
use super::{FollowDirection, STAGE_SIZE, ScrollBounds, ViewportState, ViewportTuning};
use crate::movement::Facing;

fn viewport(scroll: f32) -> ViewportState {
    ViewportState {
        scroll_offset_x: scroll,
        ..Default::default()
    }
}

#[test]
fn test_midpoint_tracks_scroll() {
    let tuning = ViewportTuning::default();
    assert_eq!(viewport(0.0).midpoint(&tuning), 448.0);
    assert_eq!(viewport(-500.0).midpoint(&tuning), 948.0);
}

#[test]
fn test_follow_left_requires_room_to_scroll_back() {
    let tuning = ViewportTuning::default();

    // At the left edge of the world nothing to scroll back to
    let follow = viewport(0.0).follow_direction(200.0, &tuning);
    assert_eq!(follow, FollowDirection::default());

    let follow = viewport(-100.0).follow_direction(200.0, &tuning);
    assert!(follow.left);
    assert!(!follow.right);
}

#[test]
fn test_follow_right_stops_at_world_end() {
    let tuning = ViewportTuning::default();

    let follow = viewport(0.0).follow_direction(600.0, &tuning);
    assert!(follow.right);

    let follow = viewport(-2048.0).follow_direction(2600.0, &tuning);
    assert!(!follow.right);
}

#[test]
fn test_step_toward_moves_by_scroll_step() {
    let tuning = ViewportTuning::default();
    let mut state = viewport(-100.0);

    let follow = state.follow_direction(200.0, &tuning);
    state.step_toward(Facing::Left, follow, &tuning);
    assert_eq!(state.scroll_offset_x, -95.0);

    let mut state = viewport(0.0);
    let follow = state.follow_direction(600.0, &tuning);
    state.step_toward(Facing::Right, follow, &tuning);
    assert_eq!(state.scroll_offset_x, -5.0);
}

#[test]
fn test_step_toward_ignores_wrong_direction() {
    let tuning = ViewportTuning::default();
    let mut state = viewport(-100.0);

    // Character left of midpoint but walking right
    let follow = state.follow_direction(200.0, &tuning);
    state.step_toward(Facing::Right, follow, &tuning);
    assert_eq!(state.scroll_offset_x, -100.0);
}

#[test]
fn test_step_toward_clamps_at_bounds() {
    let tuning = ViewportTuning::default();

    let mut state = viewport(-3.0);
    let follow = state.follow_direction(10.0, &tuning);
    state.step_toward(Facing::Left, follow, &tuning);
    assert_eq!(state.scroll_offset_x, 0.0);

    let mut state = viewport(-2046.0);
    let follow = state.follow_direction(2900.0, &tuning);
    state.step_toward(Facing::Right, follow, &tuning);
    assert_eq!(state.scroll_offset_x, -2048.0);
}

#[test]
fn test_absorb_drift_follows_displacement() {
    let tuning = ViewportTuning::default();
    let mut state = viewport(-100.0);

    // Drifted 12 units right while airborne, right of midpoint
    let follow = state.follow_direction(612.0, &tuning);
    state.absorb_drift(600.0, 612.0, follow, &tuning);
    assert_eq!(state.scroll_offset_x, -112.0);
}

#[test]
fn test_absorb_drift_needs_follow_condition() {
    let tuning = ViewportTuning::default();
    let mut state = viewport(0.0);

    // Left of midpoint with the view already at its left edge
    let follow = state.follow_direction(100.0, &tuning);
    state.absorb_drift(120.0, 100.0, follow, &tuning);
    assert_eq!(state.scroll_offset_x, 0.0);
}

#[test]
fn test_absorb_drift_is_clamped() {
    let tuning = ViewportTuning::default();
    let mut state = viewport(-2040.0);

    let follow = state.follow_direction(2600.0, &tuning);
    state.absorb_drift(2500.0, 2600.0, follow, &tuning);
    assert_eq!(state.scroll_offset_x, -2048.0);
}

#[test]
fn test_scroll_stays_in_bounds_for_long_sequences() {
    let tuning = ViewportTuning::default();
    let mut state = viewport(0.0);

    for _ in 0..1000 {
        let follow = state.follow_direction(3000.0, &tuning);
        state.step_toward(Facing::Right, follow, &tuning);
        assert!(state.scroll_offset_x >= -2048.0 && state.scroll_offset_x <= 0.0);
    }
    assert_eq!(state.scroll_offset_x, -2048.0);
}

#[test]
fn test_bounds_clamp() {
    let bounds = ScrollBounds::default();
    assert_eq!(bounds.clamp(10.0), 0.0);
    assert_eq!(bounds.clamp(-5000.0), -2048.0);
    assert_eq!(bounds.clamp(-42.0), -42.0);
}

#[test]
fn test_camera_x_places_left_edge_at_scroll() {
    let half_view = STAGE_SIZE.x as f32 * 0.5;
    assert_eq!(camera_x(&viewport(0.0)), 512.0);

    for scroll in [0.0, -1000.0, -2048.0] {
        let state = viewport(scroll);
        let left_edge = camera_x(&state) - half_view;
        assert_eq!(left_edge, -scroll);

        // Overlay screen x agrees with where the camera actually draws
        let world_x = 1200.0;
        assert_eq!(state.to_screen_x(world_x), world_x - left_edge);
    }
}

#[test]
fn test_follow_midpoint_is_inside_the_view() {
    let tuning = ViewportTuning::default();
    let state = viewport(-700.0);
    let screen_midpoint = state.to_screen_x(state.midpoint(&tuning));
    assert!(screen_midpoint > 0.0);
    assert!(screen_midpoint < STAGE_SIZE.x as f32);
}
