use super::*;

#[test]
fn drag_state_default_is_idle() {
    assert_eq!(DragState::default(), DragState::Idle);
}

#[test]
fn buttons_are_distinct() {
    assert_ne!(Button::Primary, Button::Middle);
    assert_ne!(Button::Primary, Button::Secondary);
    assert_ne!(Button::Middle, Button::Secondary);
}

#[test]
fn wheel_delta_fields() {
    let delta = WheelDelta { dx: 1.5, dy: -3.0 };
    assert!(delta.dx > 0.0);
    assert!(delta.dy < 0.0);
}

#[test]
fn dragging_state_carries_gesture_context() {
    let state = DragState::Dragging {
        origin: Point::new(1.0, 2.0),
        last_screen: Point::new(3.0, 4.0),
        moved: false,
    };
    let DragState::Dragging { origin, last_screen, moved } = state else {
        panic!("expected Dragging");
    };
    assert_eq!(origin, Point::new(1.0, 2.0));
    assert_eq!(last_screen, Point::new(3.0, 4.0));
    assert!(!moved);
}
