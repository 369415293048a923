use viewport_rs::api::{EngineConfig, ViewportEngine};
use viewport_rs::core::{AxisLock, DataPoint, Padding, Rect, Surface};
use viewport_rs::interaction::{Modifiers, PointerEvent};
use viewport_rs::render::NullRenderer;

fn sine(n: usize) -> Vec<DataPoint> {
    (0..n)
        .map(|i| {
            let x = i as f64 * 0.01;
            DataPoint::new(x, x.sin())
        })
        .collect()
}

#[test]
fn engine_smoke_flow() {
    let config = EngineConfig::new(Surface::new(800.0, 400.0, 2.0).expect("surface"));
    let mut engine =
        ViewportEngine::new(NullRenderer::default(), sine(10_000), config).expect("engine init");

    assert_eq!(engine.view(), engine.domain());
    assert!(engine.on_animation_frame().expect("first frame"));
    assert_eq!(engine.renderer().series_frames, 1);
    let series = engine
        .renderer()
        .last_series_frame
        .as_ref()
        .expect("series frame");
    assert!(series.vertex_count() > 0);

    engine
        .handle_wheel(PointerEvent::wheel(400.0, 200.0, 0.0, -60.0).with_modifiers(Modifiers::control()))
        .expect("zoom");
    engine
        .handle_wheel(PointerEvent::wheel(400.0, 200.0, 30.0, 0.0))
        .expect("pan");
    engine
        .handle_pointer_move(PointerEvent::at(300.0, 150.0))
        .expect("move");
    assert!(engine.on_animation_frame().expect("second frame"));
    assert_eq!(engine.renderer().series_frames, 2);
    assert!(engine.crosshair().visible);

    let view = engine.view();
    assert!(view.width < engine.domain().width);
    assert!(engine.domain().contains(view.origin()));

    engine.reset_view().expect("reset");
    assert_eq!(engine.view(), engine.domain());
}

#[test]
fn unproject_and_project_are_inverse() {
    let config = EngineConfig::new(Surface::new(640.0, 480.0, 1.5).expect("surface"))
        .with_padding(Padding::uniform(20.0));
    let engine = ViewportEngine::new(NullRenderer::default(), sine(1_000), config).expect("engine");

    let data = engine.unproject(123.0, 321.0).expect("unproject");
    let back = engine.project(data);
    assert!((back.x - 123.0).abs() < 1e-9);
    assert!((back.y - 321.0).abs() < 1e-9);

    // The plot's top-left corner maps to the view's left/top.
    let corner = engine.try_unproject(20.0, 20.0).expect("corner");
    let view = engine.view();
    assert!((corner.x - view.x).abs() < 1e-9);
    assert!((corner.y - view.top()).abs() < 1e-9);
}

#[test]
fn scale_view_is_clamped_to_domain() {
    let config = EngineConfig::new(Surface::new(400.0, 300.0, 1.0).expect("surface"));
    let mut engine =
        ViewportEngine::new(NullRenderer::default(), sine(2_000), config).expect("engine");
    let domain = engine.domain();

    let view = engine
        .scale_view(4.0, domain.center(), AxisLock::Free)
        .expect("zoom out");
    assert_eq!(view, domain);

    let view = engine
        .set_view(Rect::new(domain.x - 50.0, domain.y, 5.0, domain.height))
        .expect("set view");
    assert_eq!(view.x, domain.x);
}

#[test]
fn single_sample_dataset_is_usable() {
    let mut engine = ViewportEngine::new(
        NullRenderer::default(),
        vec![DataPoint::new(3.0, 7.0)],
        EngineConfig::default(),
    )
    .expect("engine");
    assert!(engine.domain().width > 0.0);
    assert!(engine.domain().height > 0.0);
    engine.render_now().expect("render");
    let series = engine
        .renderer()
        .last_series_frame
        .as_ref()
        .expect("series frame");
    assert_eq!(series.markers.len(), 1);
}
