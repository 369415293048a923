#![cfg(feature = "cairo-backend")]

use viewport_rs::ViewportError;
use viewport_rs::api::{EngineConfig, ViewportEngine};
use viewport_rs::core::{DataPoint, Surface};
use viewport_rs::interaction::PointerEvent;
use viewport_rs::render::{CairoPainter, PainterRenderer};

#[test]
fn cairo_painter_rejects_invalid_surface_size() {
    let err = CairoPainter::new_image(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ViewportError::Configuration(_)));
}

#[test]
fn cairo_renderer_paints_series_and_overlay() {
    let series = CairoPainter::new_image(600, 300).expect("series surface");
    let overlay = CairoPainter::new_image(600, 300).expect("overlay surface");
    let config = EngineConfig::new(Surface::new(600.0, 300.0, 1.0).expect("surface"));
    let points = (0..50)
        .map(|i| DataPoint::new(f64::from(i), f64::from(i % 5)))
        .collect();
    let mut engine =
        ViewportEngine::new(PainterRenderer::new(series, overlay), points, config).expect("engine");

    engine
        .handle_pointer_move(PointerEvent::at(200.0, 120.0))
        .expect("move");
    engine.render_now().expect("render");

    // The last frame painted is the overlay: two guides, the dot and a label.
    let stats = engine.renderer().last_stats();
    assert_eq!(stats.lines_drawn, 2);
    assert_eq!(stats.markers_drawn, 1);
    assert_eq!(stats.texts_drawn, 1);

    let (series, _) = engine.into_renderer().into_painters();
    assert_eq!(series.backend_name(), "cairo+pango+pangocairo");
    assert!(series.surface().is_some());
}
