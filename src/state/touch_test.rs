#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// ActivePointers
// =============================================================

#[test]
fn starts_empty() {
    let pointers = ActivePointers::default();
    assert!(pointers.is_empty());
    assert_eq!(pointers.len(), 0);
    assert_eq!(pointers.first(), None);
}

#[test]
fn press_keeps_order() {
    let mut pointers = ActivePointers::default();
    assert!(pointers.press(7, pt(1.0, 1.0)));
    assert!(pointers.press(3, pt(2.0, 2.0)));
    let ids: Vec<i32> = pointers.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, [7, 3]);
}

#[test]
fn third_press_is_refused() {
    let mut pointers = ActivePointers::default();
    pointers.press(1, pt(0.0, 0.0));
    pointers.press(2, pt(0.0, 0.0));
    assert!(!pointers.press(3, pt(0.0, 0.0)));
    assert_eq!(pointers.len(), 2);
    assert!(!pointers.contains(3));
}

#[test]
fn repeated_press_updates_in_place() {
    let mut pointers = ActivePointers::default();
    pointers.press(1, pt(0.0, 0.0));
    pointers.press(1, pt(5.0, 6.0));
    assert_eq!(pointers.len(), 1);
    assert_eq!(pointers.first().map(|r| r.position), Some(pt(5.0, 6.0)));
}

#[test]
fn update_unknown_id_is_ignored() {
    let mut pointers = ActivePointers::default();
    pointers.press(1, pt(0.0, 0.0));
    assert!(!pointers.update(9, pt(3.0, 3.0)));
    assert_eq!(pointers.first().map(|r| r.position), Some(pt(0.0, 0.0)));
}

#[test]
fn release_unknown_id_is_noop() {
    let mut pointers = ActivePointers::default();
    pointers.press(1, pt(0.0, 0.0));
    let before = pointers.clone();
    assert!(!pointers.release(42));
    assert_eq!(pointers, before);
}

#[test]
fn release_removes_only_that_pointer() {
    let mut pointers = ActivePointers::default();
    pointers.press(1, pt(0.0, 0.0));
    pointers.press(2, pt(9.0, 0.0));
    assert!(pointers.release(1));
    assert_eq!(pointers.len(), 1);
    assert_eq!(pointers.first().map(|r| r.id), Some(2));
}

#[test]
fn pinch_distance_is_absolute_x_delta() {
    let mut pointers = ActivePointers::default();
    pointers.press(1, pt(200.0, 10.0));
    assert_eq!(pointers.pinch_distance(), None);
    pointers.press(2, pt(100.0, 500.0));
    assert_eq!(pointers.pinch_distance(), Some(100.0));
}

// =============================================================
// GestureSession
// =============================================================

#[test]
fn session_default_is_idle() {
    let session = GestureSession::default();
    assert!(!session.is_active());
    assert_eq!(session.anchor(), None);
    assert_eq!(session.prev_pinch_distance(), 0.0);
}

#[test]
fn begin_anchors_relative_to_translate() {
    let session = GestureSession::begin(pt(50.0, 50.0), pt(-20.0, -5.0));
    assert!(session.is_active());
    assert_eq!(session.anchor(), Some(pt(70.0, 55.0)));
}

#[test]
fn pinching_reports_distance() {
    let session = GestureSession::Pinching { anchor: pt(0.0, 0.0), prev_distance: 110.0 };
    assert_eq!(session.prev_pinch_distance(), 110.0);
    assert!(session.is_active());
}
