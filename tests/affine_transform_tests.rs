use approx::assert_abs_diff_eq;
use viewport_rs::ViewportError;
use viewport_rs::core::{AffineTransform2D, DataPoint};

#[test]
fn compose_is_associative_for_mixed_transforms() {
    let a = AffineTransform2D::translation(3.0, -2.0);
    let b = AffineTransform2D::scale(2.0, 0.5);
    let c = AffineTransform2D::from_coefficients(1.0, 0.25, -0.5, 1.0, 7.0, 1.0);

    let left = a.then(b).then(c);
    let right = a.then(b.then(c));
    let point = DataPoint::new(1.5, -4.0);

    let l = left.apply(point);
    let r = right.apply(point);
    assert_abs_diff_eq!(l.x, r.x, epsilon = 1e-12);
    assert_abs_diff_eq!(l.y, r.y, epsilon = 1e-12);
}

#[test]
fn coefficient_accessors_follow_row_vector_layout() {
    let m = AffineTransform2D::scale(2.0, 3.0).then(AffineTransform2D::translation(5.0, -1.0));
    assert_eq!(m.scale_x(), 2.0);
    assert_eq!(m.scale_y(), 3.0);
    assert_eq!(m.translate_x(), 5.0);
    assert_eq!(m.translate_y(), -1.0);
    assert_eq!(m.to_array()[2], [5.0, -1.0, 1.0]);
}

#[test]
fn compose_matches_sequential_application() {
    let a = AffineTransform2D::scale(4.0, 2.0);
    let b = AffineTransform2D::translation(-1.0, 10.0);
    let point = DataPoint::new(2.0, 3.0);

    let composed = AffineTransform2D::compose(a, b).apply(point);
    let sequential = b.apply(a.apply(point));
    assert_eq!(composed, sequential);
    assert_eq!(composed, DataPoint::new(7.0, 16.0));
}

#[test]
fn inverse_undoes_transform() {
    let transform = AffineTransform2D::scale_about(0.25, 3.0, DataPoint::new(10.0, -5.0))
        .then(AffineTransform2D::translation(100.0, 0.5));
    let inverse = transform.invert().expect("invertible");

    let point = DataPoint::new(-42.0, 17.5);
    let back = inverse.apply(transform.apply(point));
    assert_abs_diff_eq!(back.x, point.x, epsilon = 1e-9);
    assert_abs_diff_eq!(back.y, point.y, epsilon = 1e-9);

    let identity = transform.then(inverse);
    for (row, expected_row) in identity
        .to_array()
        .iter()
        .zip(AffineTransform2D::IDENTITY.to_array().iter())
    {
        for (value, expected) in row.iter().zip(expected_row.iter()) {
            assert_abs_diff_eq!(*value, *expected, epsilon = 1e-12);
        }
    }
}

#[test]
fn scale_about_keeps_anchor_fixed() {
    let anchor = DataPoint::new(50.0, 5.0);
    let transform = AffineTransform2D::scale_about(0.5, 0.5, anchor);
    assert_eq!(transform.apply(anchor), anchor);
}

#[test]
fn singular_transform_reports_determinant() {
    let collapsed = AffineTransform2D::from_coefficients(1.0, 2.0, 2.0, 4.0, 0.0, 0.0);
    match collapsed.invert() {
        Err(ViewportError::SingularTransform { determinant }) => assert_eq!(determinant, 0.0),
        other => panic!("expected singular transform, got {other:?}"),
    }
}

#[test]
fn non_finite_transform_is_rejected() {
    let broken = AffineTransform2D::scale(f64::INFINITY, 1.0);
    assert!(matches!(
        broken.invert(),
        Err(ViewportError::SingularTransform { .. })
    ));
}
