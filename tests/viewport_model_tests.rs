use approx::assert_abs_diff_eq;
use viewport_rs::ViewportError;
use viewport_rs::core::{
    AxisLock, DataPoint, EMPTY_DOMAIN, GestureIntent, Padding, PinnedAxis, Rect, Surface,
    ViewportModel, domain_from_points,
};

fn model_with(domain: Rect, surface: Surface, padding: Padding) -> ViewportModel {
    ViewportModel::new(domain, surface, padding).expect("model")
}

fn default_model() -> ViewportModel {
    model_with(
        Rect::new(0.0, 0.0, 100.0, 10.0),
        Surface::new(400.0, 200.0, 1.0).expect("surface"),
        Padding::zero(),
    )
}

fn assert_rect_eq(actual: Rect, expected: Rect) {
    assert_abs_diff_eq!(actual.x, expected.x, epsilon = 1e-9);
    assert_abs_diff_eq!(actual.y, expected.y, epsilon = 1e-9);
    assert_abs_diff_eq!(actual.width, expected.width, epsilon = 1e-9);
    assert_abs_diff_eq!(actual.height, expected.height, epsilon = 1e-9);
}

#[test]
fn anchored_half_scale_centers_on_anchor() {
    let mut model = default_model();
    model.reset_view();
    let view = model
        .scale_view(0.5, DataPoint::new(50.0, 5.0), AxisLock::Free)
        .expect("scale");
    assert_rect_eq(view, Rect::new(25.0, 2.5, 50.0, 5.0));
}

#[test]
fn y_locked_scale_only_changes_x() {
    let mut model = default_model();
    let view = model
        .scale_view(0.5, DataPoint::new(20.0, 5.0), AxisLock::LockY)
        .expect("scale");
    assert_rect_eq(view, Rect::new(10.0, 0.0, 50.0, 10.0));
}

#[test]
fn zoom_out_past_domain_clamps_to_domain() {
    let mut model = default_model();
    let view = model
        .scale_view(8.0, DataPoint::new(90.0, 1.0), AxisLock::Free)
        .expect("scale");
    assert_rect_eq(view, model.domain());
}

#[test]
fn translate_is_clamped_at_domain_edges() {
    let mut model = default_model();
    model.set_view(Rect::new(10.0, 2.0, 20.0, 4.0));
    let view = model.translate_view(1_000.0, -1_000.0).expect("pan");
    assert_rect_eq(view, Rect::new(80.0, 0.0, 20.0, 4.0));
}

#[test]
fn set_view_enforces_minimum_extent() {
    let mut model = default_model();
    let view = model.set_view(Rect::new(40.0, 4.0, 0.01, 0.0));
    assert_rect_eq(view, Rect::new(40.0, 4.0, 1.0, 1.0));
}

#[test]
fn intents_route_to_model_operations() {
    let mut model = default_model();
    model
        .apply_intent(GestureIntent::SetViewRect {
            rect: Rect::new(10.0, 1.0, 20.0, 2.0),
        })
        .expect("set");
    let view = model
        .apply_intent(GestureIntent::Pan { dx: 5.0, dy: 1.0 })
        .expect("pan");
    assert_rect_eq(view, Rect::new(15.0, 2.0, 20.0, 2.0));
}

#[test]
fn unproject_accounts_for_padding_and_dpr() {
    let model = model_with(
        Rect::new(0.0, 0.0, 100.0, 10.0),
        Surface::new(120.0, 70.0, 2.0).expect("surface"),
        Padding {
            left: 10.0,
            top: 10.0,
            right: 10.0,
            bottom: 10.0,
        },
    );
    // Plot area is 100x50 logical px starting at (10, 10).
    let bottom_left = model.unproject(10.0, 60.0).expect("unproject");
    assert_abs_diff_eq!(bottom_left.x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bottom_left.y, 0.0, epsilon = 1e-9);

    let center = model.unproject(60.0, 35.0).expect("unproject");
    assert_abs_diff_eq!(center.x, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(center.y, 5.0, epsilon = 1e-9);

    let physical = model.project_physical(DataPoint::new(100.0, 10.0));
    assert_abs_diff_eq!(physical.x, 220.0, epsilon = 1e-9);
    assert_abs_diff_eq!(physical.y, 20.0, epsilon = 1e-9);
}

#[test]
fn resize_rederives_transforms() {
    let mut model = default_model();
    let before = model.transforms();
    model.resize(800.0, 200.0, 1.5).expect("resize");
    assert_ne!(model.transforms(), before);

    let center = model.unproject(400.0, 100.0).expect("unproject");
    assert_abs_diff_eq!(center.x, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(center.y, 5.0, epsilon = 1e-9);
}

#[test]
fn invalid_resize_is_rejected_and_keeps_surface() {
    let mut model = default_model();
    let result = model.resize(0.0, 100.0, 1.0);
    assert!(matches!(result, Err(ViewportError::InvalidSurface { .. })));
    assert_eq!(model.surface(), Surface::new(400.0, 200.0, 1.0).expect("surface"));
}

#[test]
fn sub_pixel_resize_is_rejected() {
    let mut model = default_model();
    let result = model.resize(0.4, 100.0, 1.0);
    assert!(matches!(
        result,
        Err(ViewportError::InvalidSurface { width, dpr, .. }) if width == 0.4 && dpr == 1.0
    ));
    assert_eq!(model.surface(), Surface::new(400.0, 200.0, 1.0).expect("surface"));

    // Half a logical pixel still covers one physical pixel at dpr 2.
    model.resize(0.5, 100.0, 2.0).expect("one physical pixel");
    assert_eq!(model.surface().physical_width(), 1.0);
}

#[test]
fn pinned_axis_fixes_extent() {
    let mut model = default_model();
    model
        .set_pinned_axis(Some(PinnedAxis::Y { extent: 2.0 }))
        .expect("pin");
    let view = model
        .scale_view(0.5, DataPoint::new(50.0, 5.0), AxisLock::Free)
        .expect("scale");
    assert_abs_diff_eq!(view.height, 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(view.width, 50.0, epsilon = 1e-9);
}

#[test]
fn degenerate_axes_widen_to_minimum_extent() {
    let flat = [
        DataPoint::new(5.0, 3.0),
        DataPoint::new(5.0, 3.0),
        DataPoint::new(5.0, 3.0),
    ];
    let domain = domain_from_points(&flat);
    assert_eq!(domain, Rect::new(4.5, 2.5, 1.0, 1.0));

    let model = model_with(domain, Surface::default(), Padding::default());
    let transforms = model.transforms();
    assert!(transforms.view_projection_matrix.determinant().is_finite());
    assert!(model.try_unproject(10.0, 10.0).is_ok());
}

#[test]
fn empty_dataset_uses_unit_domain() {
    let domain = domain_from_points(&[]);
    assert_eq!(domain, EMPTY_DOMAIN);
    let model = model_with(domain, Surface::default(), Padding::default());
    assert_eq!(model.view(), EMPTY_DOMAIN);
}

#[test]
fn invalid_domain_is_rejected() {
    let result = ViewportModel::new(
        Rect::new(0.0, 0.0, 0.0, 1.0),
        Surface::default(),
        Padding::default(),
    );
    assert!(matches!(result, Err(ViewportError::InvalidData(_))));
}
