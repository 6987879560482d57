//! Listener lifecycle: global pointer listeners are acquired exactly at
//! drag start and released on every exit path, including session drop
//! mid-drag.

use crate::helpers::{
    engine_over, init_tracing, left_press, mouse_move, standard_surface, sticker_at, CommitLog,
};

#[test]
fn test_listener_symmetry_over_many_gestures() {
    init_tracing();
    let engine = engine_over(standard_surface());
    let item = sticker_at("star", 45.0, 35.0);
    let log = CommitLog::new();
    let mut session = engine.mount_session(&item, log.callback(), true);

    for _ in 0..5 {
        session.pointer_down(&left_press(300.0, 150.0));
        session.pointer_move(&mouse_move(340.0, 170.0));
        session.release();
    }

    assert_eq!(engine.listeners().registrations(), 5);
    assert_eq!(engine.listeners().releases(), 5);
    assert_eq!(engine.listeners().active(), 0);
}

#[test]
fn test_session_drop_mid_drag_releases_without_commit() {
    let engine = engine_over(standard_surface());
    let item = sticker_at("star", 45.0, 35.0);
    let log = CommitLog::new();

    {
        let mut session = engine.mount_session(&item, log.callback(), true);
        session.pointer_down(&left_press(300.0, 150.0));
        session.pointer_move(&mouse_move(340.0, 170.0));
        assert_eq!(engine.listeners().active(), 1);
        // Host unmounts the component while the gesture is in flight.
    }

    assert_eq!(log.count(), 0);
    assert_eq!(engine.listeners().registrations(), 1);
    assert_eq!(engine.listeners().releases(), 1);
    assert_eq!(engine.listeners().active(), 0);
}

#[test]
fn test_listeners_held_only_while_dragging() {
    let engine = engine_over(standard_surface());
    let item = sticker_at("star", 45.0, 35.0);
    let log = CommitLog::new();
    let mut session = engine.mount_session(&item, log.callback(), true);

    assert_eq!(engine.listeners().active(), 0);

    session.pointer_down(&left_press(300.0, 150.0));
    assert_eq!(engine.listeners().active(), 1);

    session.release();
    assert_eq!(engine.listeners().active(), 0);

    // Releasing while Idle is a no-op, not a double release.
    session.release();
    assert_eq!(engine.listeners().releases(), 1);
    assert_eq!(log.count(), 1);
}

#[test]
fn test_two_sessions_share_one_listener_registry() {
    let engine = engine_over(standard_surface());
    let first = sticker_at("star", 10.0, 10.0);
    let second = sticker_at("heart", 70.0, 70.0);
    let log = CommitLog::new();

    let mut a = engine.mount_session(&first, log.callback(), true);
    let mut b = engine.mount_session(&second, log.callback(), true);

    a.pointer_down(&left_press(150.0, 80.0));
    a.release();
    b.pointer_down(&left_press(400.0, 200.0));
    b.release();

    assert_eq!(engine.listeners().registrations(), 2);
    assert_eq!(engine.listeners().releases(), 2);
    assert_eq!(log.count(), 2);
}
