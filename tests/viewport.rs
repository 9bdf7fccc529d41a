use forcelab::*;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn unit_zoom_is_identity() {
    let mut viewport = Viewport::default();
    viewport.pan(17.3, -8.1);
    let before = viewport.clone();

    for pivot in [point(0.0, 0.0), point(0.1, 0.7), point(640.0, 480.0), point(-3.0, 1e6)] {
        viewport.zoom(1.0, pivot);
        assert_eq!(viewport, before);
    }
}

#[test]
fn invalid_zoom_factors_are_ignored() {
    let mut viewport = Viewport::default();
    let before = viewport.clone();

    for factor in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 0.0, -2.0] {
        viewport.zoom(factor, point(100.0, 100.0));
        assert_eq!(viewport, before);
    }
    assert_eq!(viewport.scale(), 30.0);
    assert_eq!(viewport.offset(), vector(0.0, 0.0));
}

#[test]
fn zoom_moves_offset_relative_to_pivot() {
    let mut viewport = Viewport::default();
    viewport.pan(10.0, 20.0);

    viewport.zoom(2.0, point(110.0, 220.0));

    assert_eq!(viewport.scale(), 60.0);
    // offset' = pivot - (pivot - offset) * 2
    assert_close(viewport.offset().x, -90.0);
    assert_close(viewport.offset().y, -180.0);
}

#[test]
fn zoom_is_clamped_to_scale_range() {
    let mut viewport = Viewport::default();

    viewport.zoom(100.0, point(300.0, 300.0));
    assert_eq!(viewport.scale(), 200.0);

    let offset = viewport.offset();
    viewport.zoom(1.5, point(10.0, 10.0));
    assert_eq!(viewport.scale(), 200.0);
    assert_eq!(viewport.offset(), offset);

    viewport.zoom(1e-6, point(300.0, 300.0));
    assert_eq!(viewport.scale(), 20.0);
}

#[test]
fn wheel_notches_scale_by_zoom_step() {
    let mut viewport = Viewport::default();

    viewport.zoom_step(1.0, point(0.0, 0.0));
    assert_close(viewport.scale(), 33.0);

    viewport.zoom_step(-1.0, point(0.0, 0.0));
    assert_close(viewport.scale(), 30.0);

    viewport.zoom_step(0.0, point(0.0, 0.0));
    assert_close(viewport.scale(), 30.0);
}

#[test]
fn pan_adds_screen_delta() {
    let mut viewport = Viewport::default();
    viewport.pan(10.0, -10.0);
    viewport.pan(2.5, 4.0);
    assert_eq!(viewport.offset(), vector(12.5, -6.0));
}

#[test]
fn to_screen_is_anchored_at_offset() {
    let mut viewport = Viewport::default();
    viewport.pan(10.0, 20.0);

    // ratio = 30 / 50
    let screen = viewport.to_screen(point(110.0, 120.0));
    assert_close(screen.x, 70.0);
    assert_close(screen.y, 80.0);

    let anchor = viewport.to_screen(point(10.0, 20.0));
    assert_eq!(anchor, point(10.0, 20.0));
}

#[test]
fn reset_restores_defaults() {
    let mut viewport = Viewport::default();
    viewport.pan(40.0, 40.0);
    viewport.zoom(3.0, point(5.0, 5.0));

    viewport.reset();

    assert_eq!(viewport, Viewport::default());
}

#[test]
fn initial_scale_outside_range_is_clamped() {
    let viewport = Viewport::new(ViewportConfig {
        initial_scale: 500.0,
        ..ViewportConfig::default()
    });
    assert_eq!(viewport.scale(), 200.0);
}
