// Host-side tests for the drag/throw controller.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod notes {
    include!("../src/core/notes.rs");
}
mod drag {
    include!("../src/core/drag.rs");
}

use constants::*;
use drag::*;
use glam::Vec2;
use instant::Instant;
use notes::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn field_with(pos: Vec2, vel: Vec2) -> (NoteField, NoteId) {
    let mut field = NoteField::default();
    let id = field.insert(FloatingNote {
        pos,
        vel,
        cruise_speed: NOTE_CRUISE_SPEED,
        dragging: false,
        height: 100.0,
    });
    (field, id)
}

#[test]
fn press_grabs_note_at_offset() {
    let (mut field, id) = field_with(Vec2::new(100.0, 50.0), Vec2::ZERO);
    let mut drag = DragController::new();
    let t0 = Instant::now();
    assert!(drag.press(&mut field, id, Vec2::new(130.0, 70.0), t0));
    assert!(field.get(id).unwrap().dragging);
    assert_eq!(drag.held(), Some(id));
    match drag.state() {
        DragState::Dragging(grab) => assert_eq!(grab.grab_offset, Vec2::new(30.0, 20.0)),
        DragState::Idle => panic!("expected dragging"),
    }

    let moved = drag.drag_to(&mut field, Vec2::new(230.0, 170.0), t0 + ms(16));
    assert_eq!(moved, Some((id, Vec2::new(200.0, 150.0))));
    assert_eq!(field.get(id).unwrap().pos, Vec2::new(200.0, 150.0));
}

#[test]
fn drag_velocity_is_frame_normalized_and_halved() {
    let (mut field, id) = field_with(Vec2::ZERO, Vec2::ZERO);
    let mut drag = DragController::new();
    let t0 = Instant::now();
    drag.press(&mut field, id, Vec2::ZERO, t0);
    drag.drag_to(&mut field, Vec2::new(10.0, -4.0), t0 + ms(16));
    let v = field.get(id).unwrap().vel;
    assert!((v - Vec2::new(5.0, -2.0)).length() < 1e-3, "vel {:?}", v);

    // same distance over twice the time is half the speed
    drag.drag_to(&mut field, Vec2::new(20.0, -8.0), t0 + ms(48));
    let v = field.get(id).unwrap().vel;
    assert!((v - Vec2::new(2.5, -1.0)).length() < 1e-3, "vel {:?}", v);
}

#[test]
fn throw_keeps_motion_with_small_jitter() {
    let mut rng = StdRng::seed_from_u64(4);
    let (mut field, id) = field_with(Vec2::ZERO, Vec2::ZERO);
    let mut drag = DragController::new();
    let t0 = Instant::now();
    drag.press(&mut field, id, Vec2::ZERO, t0);
    drag.drag_to(&mut field, Vec2::new(10.0, -4.0), t0 + ms(16));

    let released = drag.release(&mut field, t0 + ms(40), &mut rng);
    let Some(Release::Thrown { note, velocity }) = released else {
        panic!("expected a throw, got {:?}", released);
    };
    assert_eq!(note, id);
    assert!((velocity.x - 5.0).abs() <= THROW_JITTER_SPAN * 0.5);
    assert!((velocity.y + 2.0).abs() <= THROW_JITTER_SPAN * 0.5);
    let body = field.get(id).unwrap();
    assert!(!body.dragging);
    assert_eq!(body.vel, velocity);
    assert!(!drag.is_dragging());
}

#[test]
fn throw_is_clamped_per_axis() {
    let mut rng = StdRng::seed_from_u64(8);
    for (dx, dy) in [(1000.0, 0.0), (-1000.0, 700.0), (5.0, -9000.0)] {
        let (mut field, id) = field_with(Vec2::ZERO, Vec2::ZERO);
        let mut drag = DragController::new();
        let t0 = Instant::now();
        drag.press(&mut field, id, Vec2::ZERO, t0);
        drag.drag_to(&mut field, Vec2::new(dx, dy), t0 + ms(16));
        drag.release(&mut field, t0 + ms(30), &mut rng);
        let v = field.get(id).unwrap().vel;
        assert!(v.x.abs() <= THROW_MAX_VELOCITY && v.y.abs() <= THROW_MAX_VELOCITY, "{:?}", v);
    }
}

#[test]
fn still_release_gets_a_fresh_drift() {
    let mut rng = StdRng::seed_from_u64(15);
    for _ in 0..50 {
        let (mut field, id) = field_with(Vec2::ZERO, Vec2::ZERO);
        let mut drag = DragController::new();
        let t0 = Instant::now();
        drag.press(&mut field, id, Vec2::new(5.0, 5.0), t0);
        let released = drag.release(&mut field, t0 + ms(400), &mut rng);
        assert!(matches!(released, Some(Release::Thrown { .. })));
        let v = field.get(id).unwrap().vel;
        assert!(v != Vec2::ZERO);
        assert!(v.x.abs() <= 0.25 && v.y.abs() <= 0.25, "{:?}", v);
    }
}

#[test]
fn quick_still_release_is_a_click() {
    let mut rng = StdRng::seed_from_u64(16);
    let start_vel = Vec2::new(0.3, -0.2);
    let (mut field, id) = field_with(Vec2::new(10.0, 10.0), start_vel);
    let mut drag = DragController::new();
    let t0 = Instant::now();
    drag.press(&mut field, id, Vec2::new(20.0, 20.0), t0);
    let released = drag.release(&mut field, t0 + ms(50), &mut rng);
    assert_eq!(released, Some(Release::Click(id)));
    let body = field.get(id).unwrap();
    assert_eq!(body.vel, start_vel);
    assert!(!body.dragging);
}

#[test]
fn movement_or_long_hold_is_not_a_click() {
    let mut rng = StdRng::seed_from_u64(17);
    let t0 = Instant::now();

    let (mut field, id) = field_with(Vec2::ZERO, Vec2::ZERO);
    let mut drag = DragController::new();
    drag.press(&mut field, id, Vec2::ZERO, t0);
    drag.drag_to(&mut field, Vec2::new(3.0, 0.0), t0 + ms(20));
    let released = drag.release(&mut field, t0 + ms(50), &mut rng);
    assert!(matches!(released, Some(Release::Thrown { .. })));

    let (mut field, id) = field_with(Vec2::ZERO, Vec2::ZERO);
    let mut drag = DragController::new();
    drag.press(&mut field, id, Vec2::ZERO, t0);
    let released = drag.release(&mut field, t0 + ms(CLICK_MAX_MS + 1), &mut rng);
    assert!(matches!(released, Some(Release::Thrown { .. })));
}

#[test]
fn move_to_same_spot_does_not_count_as_movement() {
    let mut rng = StdRng::seed_from_u64(18);
    let (mut field, id) = field_with(Vec2::ZERO, Vec2::new(0.4, 0.0));
    let mut drag = DragController::new();
    let t0 = Instant::now();
    drag.press(&mut field, id, Vec2::new(1.0, 1.0), t0);
    drag.drag_to(&mut field, Vec2::new(1.0, 1.0), t0 + ms(10));
    let released = drag.release(&mut field, t0 + ms(30), &mut rng);
    assert_eq!(released, Some(Release::Click(id)));

    let v = field.get(id).unwrap().vel;
    assert!(v != Vec2::ZERO);
    assert_eq!(v, Vec2::new(0.4, 0.0));
}

#[test]
fn click_on_still_note_restarts_it() {
    let mut rng = StdRng::seed_from_u64(19);
    let (mut field, id) = field_with(Vec2::new(100.0, 100.0), Vec2::ZERO);
    let mut drag = DragController::new();
    let t0 = Instant::now();
    drag.press(&mut field, id, Vec2::new(110.0, 110.0), t0);
    let released = drag.release(&mut field, t0 + ms(30), &mut rng);
    assert_eq!(released, Some(Release::Click(id)));

    let v = field.get(id).unwrap().vel;
    assert!(v != Vec2::ZERO);
    assert!(v.x.abs() <= 0.25 && v.y.abs() <= 0.25, "{:?}", v);
}

#[test]
fn second_press_while_holding_is_ignored() {
    let mut field = NoteField::default();
    let a = field.insert(FloatingNote {
        pos: Vec2::ZERO,
        vel: Vec2::ZERO,
        cruise_speed: NOTE_CRUISE_SPEED,
        dragging: false,
        height: 100.0,
    });
    let b = field.insert(FloatingNote {
        pos: Vec2::new(300.0, 300.0),
        vel: Vec2::new(0.1, 0.1),
        cruise_speed: NOTE_CRUISE_SPEED,
        dragging: false,
        height: 100.0,
    });
    let mut drag = DragController::new();
    let t0 = Instant::now();
    assert!(drag.press(&mut field, a, Vec2::new(5.0, 5.0), t0));
    assert!(!drag.press(&mut field, b, Vec2::new(305.0, 305.0), t0 + ms(5)));
    assert_eq!(drag.held(), Some(a));
    assert!(!field.get(b).unwrap().dragging);

    drag.drag_to(&mut field, Vec2::new(50.0, 5.0), t0 + ms(21));
    assert_eq!(field.get(a).unwrap().pos, Vec2::new(45.0, 0.0));
    assert_eq!(field.get(b).unwrap().pos, Vec2::new(300.0, 300.0));
}

#[test]
fn deleted_note_ends_the_drag() {
    let mut rng = StdRng::seed_from_u64(19);
    let (mut field, id) = field_with(Vec2::ZERO, Vec2::ZERO);
    let mut drag = DragController::new();
    let t0 = Instant::now();
    drag.press(&mut field, id, Vec2::ZERO, t0);
    field.remove(id);
    assert_eq!(drag.drag_to(&mut field, Vec2::new(9.0, 9.0), t0 + ms(16)), None);
    assert!(!drag.is_dragging());
    assert_eq!(drag.release(&mut field, t0 + ms(30), &mut rng), None);
}

#[test]
fn idle_controller_ignores_moves_and_releases() {
    let mut rng = StdRng::seed_from_u64(20);
    let (mut field, id) = field_with(Vec2::new(1.0, 2.0), Vec2::ZERO);
    let mut drag = DragController::new();
    let now = Instant::now();
    assert_eq!(drag.drag_to(&mut field, Vec2::new(9.0, 9.0), now), None);
    assert_eq!(drag.release(&mut field, now, &mut rng), None);
    assert_eq!(field.get(id).unwrap().pos, Vec2::new(1.0, 2.0));
}
