use approx::assert_abs_diff_eq;
use viewport_rs::api::{EngineConfig, ViewportEngine};
use viewport_rs::core::{DataPoint, Padding, Rect, Surface};
use viewport_rs::interaction::{GestureConfig, InteractionMode, Modifiers, PointerEvent};
use viewport_rs::render::NullRenderer;
use viewport_rs::ViewportError;

/// 400x200 plot without padding over the diagonal `y = x` for `x` in 0..=1000,
/// looking at (100, 100, 100, 100): one logical pixel is 0.25 data units
/// horizontally and 0.5 vertically.
fn engine_with(gestures: GestureConfig) -> ViewportEngine<NullRenderer> {
    let config = EngineConfig::new(Surface::new(400.0, 200.0, 1.0).expect("surface"))
        .with_padding(Padding::zero())
        .with_gestures(gestures);
    let points = (0..=1000)
        .map(|i| DataPoint::new(f64::from(i), f64::from(i)))
        .collect();
    let mut engine = ViewportEngine::new(NullRenderer::default(), points, config).expect("engine");
    engine
        .set_view(Rect::new(100.0, 100.0, 100.0, 100.0))
        .expect("view");
    engine
}

fn engine() -> ViewportEngine<NullRenderer> {
    engine_with(GestureConfig::default())
}

fn assert_view(actual: Rect, expected: Rect) {
    assert_abs_diff_eq!(actual.x, expected.x, epsilon = 1e-9);
    assert_abs_diff_eq!(actual.y, expected.y, epsilon = 1e-9);
    assert_abs_diff_eq!(actual.width, expected.width, epsilon = 1e-9);
    assert_abs_diff_eq!(actual.height, expected.height, epsilon = 1e-9);
}

#[test]
fn horizontal_wheel_pans_and_follows_right_edge() {
    let mut engine = engine();
    assert!(engine.handle_wheel(PointerEvent::wheel(200.0, 100.0, 40.0, 0.0)).expect("wheel"));
    // Panned 10 units right; the sample at x = 210 sits above the view, so
    // the view is lifted until it touches the top edge.
    assert_view(engine.view(), Rect::new(110.0, 110.0, 100.0, 100.0));
}

#[test]
fn leftward_pan_follows_left_edge() {
    let mut engine = engine();
    engine
        .handle_wheel(PointerEvent::wheel(200.0, 100.0, -40.0, 0.0))
        .expect("wheel");
    assert_view(engine.view(), Rect::new(90.0, 90.0, 100.0, 100.0));
}

#[test]
fn pan_without_edge_follow_keeps_vertical_position() {
    let mut engine = engine_with(GestureConfig {
        edge_follow: false,
        ..GestureConfig::default()
    });
    engine
        .handle_wheel(PointerEvent::wheel(200.0, 100.0, 40.0, 0.0))
        .expect("wheel");
    assert_view(engine.view(), Rect::new(110.0, 100.0, 100.0, 100.0));
}

#[test]
fn vertical_wheel_pans_down_without_follow() {
    let mut engine = engine();
    // Positive screen delta moves toward smaller data y.
    engine
        .handle_wheel(PointerEvent::wheel(200.0, 100.0, 0.0, 20.0))
        .expect("wheel");
    assert_view(engine.view(), Rect::new(100.0, 90.0, 100.0, 100.0));
}

#[test]
fn control_wheel_zooms_around_cursor() {
    let mut engine = engine();
    let event = PointerEvent::wheel(200.0, 100.0, 0.0, -100.0).with_modifiers(Modifiers::control());
    engine.handle_wheel(event).expect("zoom");
    assert_view(engine.view(), Rect::new(125.0, 125.0, 50.0, 50.0));
}

#[test]
fn alt_restricts_zoom_to_x() {
    let mut engine = engine();
    let event = PointerEvent::wheel(200.0, 100.0, 0.0, -100.0)
        .with_modifiers(Modifiers::control().with_alt());
    engine.handle_wheel(event).expect("zoom");
    assert_view(engine.view(), Rect::new(125.0, 100.0, 50.0, 100.0));
}

#[test]
fn zoom_factor_has_a_floor() {
    let mut engine = engine();
    let event =
        PointerEvent::wheel(200.0, 100.0, 0.0, -10_000.0).with_modifiers(Modifiers::control());
    engine.handle_wheel(event).expect("zoom");
    assert_abs_diff_eq!(engine.view().width, 5.0, epsilon = 1e-9);
}

#[test]
fn zero_delta_wheel_is_ignored() {
    let mut engine = engine();
    let before = engine.view();
    assert!(!engine.handle_wheel(PointerEvent::wheel(10.0, 10.0, 0.0, 0.0)).expect("wheel"));
    assert_eq!(engine.view(), before);
}

#[test]
fn non_finite_event_is_rejected() {
    let mut engine = engine();
    let err = engine
        .handle_wheel(PointerEvent::wheel(f64::NAN, 10.0, 1.0, 0.0))
        .expect_err("nan event");
    assert!(matches!(err, ViewportError::InvalidData(_)));
}

#[test]
fn drag_zooms_to_selection() {
    let mut engine = engine();
    engine
        .handle_pointer_down(PointerEvent::at(100.0, 50.0))
        .expect("down");
    assert_eq!(engine.interaction_mode(), InteractionMode::Selecting);
    engine
        .handle_pointer_move(PointerEvent::at(300.0, 150.0))
        .expect("move");
    let selection = engine.selection().expect("selection");
    assert_view(selection, Rect::new(125.0, 125.0, 50.0, 50.0));

    let view = engine
        .handle_pointer_up(PointerEvent::at(300.0, 150.0))
        .expect("up")
        .expect("zoomed");
    assert_view(view, Rect::new(125.0, 125.0, 50.0, 50.0));
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
    assert!(engine.selection().is_none());
}

#[test]
fn pointer_up_without_drag_start_is_noop() {
    let mut engine = engine();
    let before = engine.view();
    assert!(engine
        .handle_pointer_up(PointerEvent::at(300.0, 150.0))
        .expect("up")
        .is_none());
    assert_eq!(engine.view(), before);
}

#[test]
fn click_without_drag_zooms_to_minimum_extent() {
    // With the default zero drag threshold a click is a zero-size selection,
    // which clamps to the minimum view extent at the click position.
    let mut engine = engine();
    engine
        .handle_pointer_down(PointerEvent::at(200.0, 100.0))
        .expect("down");
    let view = engine
        .handle_pointer_up(PointerEvent::at(200.0, 100.0))
        .expect("up")
        .expect("zoomed");
    assert_view(view, Rect::new(150.0, 150.0, 1.0, 1.0));
}

#[test]
fn short_drag_below_minimum_distance_is_ignored() {
    let mut engine = engine_with(GestureConfig {
        min_drag_distance_px: 5.0,
        ..GestureConfig::default()
    });
    let before = engine.view();
    engine
        .handle_pointer_down(PointerEvent::at(100.0, 50.0))
        .expect("down");
    assert!(engine
        .handle_pointer_up(PointerEvent::at(102.0, 51.0))
        .expect("up")
        .is_none());
    assert_eq!(engine.view(), before);
}

#[test]
fn crosshair_snaps_to_nearest_sample() {
    let mut engine = engine();
    let crosshair = engine
        .handle_pointer_move(PointerEvent::at(201.0, 100.0))
        .expect("move");
    assert!(crosshair.visible);
    let data = crosshair.data.expect("data");
    assert_abs_diff_eq!(data.x, 150.25, epsilon = 1e-9);

    let snap = crosshair.snap.expect("snap");
    assert_eq!(snap.index, 150);
    assert_eq!(snap.sample, DataPoint::new(150.0, 150.0));
    assert_abs_diff_eq!(snap.x, 200.0, epsilon = 1e-9);
    assert_abs_diff_eq!(snap.y, 100.0, epsilon = 1e-9);
}

#[test]
fn crosshair_follows_view_changes() {
    let mut engine = engine();
    engine
        .handle_pointer_move(PointerEvent::at(200.0, 100.0))
        .expect("move");
    engine.translate_view(20.0, 0.0).expect("pan");
    let snap = engine.crosshair().snap.expect("snap");
    assert_eq!(snap.index, 170);
}

#[test]
fn pointer_leave_hides_crosshair_but_keeps_drag() {
    let mut engine = engine();
    engine
        .handle_pointer_down(PointerEvent::at(100.0, 50.0))
        .expect("down");
    engine
        .handle_pointer_move(PointerEvent::at(150.0, 60.0))
        .expect("move");
    engine.handle_pointer_leave();

    assert!(!engine.crosshair().visible);
    assert!(engine.selection().is_some());
    assert_eq!(engine.interaction_mode(), InteractionMode::Selecting);

    engine.cancel_selection();
    assert!(engine.selection().is_none());
}

#[test]
fn conflicting_modifiers_are_rejected() {
    let mut engine = engine();
    let gestures = GestureConfig {
        x_only_zoom_modifier: GestureConfig::default().zoom_modifier,
        ..GestureConfig::default()
    };
    assert!(matches!(
        engine.set_gesture_config(gestures),
        Err(ViewportError::Configuration(_))
    ));
}
