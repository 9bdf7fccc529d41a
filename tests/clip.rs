use forcelab::*;

const RECT: Bounds = Bounds::new(0.0, 0.0, 100.0, 50.0);

#[test]
fn inside_segment_is_unchanged() {
    let start = point(10.5, 3.25);
    let end = point(99.0, 49.0);
    assert_eq!(clip_line(start, end, &RECT), Some((start, end)));
}

#[test]
fn segment_sharing_an_outside_region_is_rejected() {
    assert_eq!(clip_line(point(-10.0, 5.0), point(-1.0, 45.0), &RECT), None);
    assert_eq!(clip_line(point(110.0, 5.0), point(150.0, 45.0), &RECT), None);
    assert_eq!(clip_line(point(10.0, -5.0), point(90.0, -1.0), &RECT), None);
    assert_eq!(clip_line(point(10.0, 60.0), point(90.0, 51.0), &RECT), None);
}

#[test]
fn segment_missing_a_corner_is_rejected() {
    assert_eq!(clip_line(point(-10.0, 5.0), point(5.0, -10.0), &RECT), None);
}

#[test]
fn crossing_one_boundary_lands_on_it() {
    let inside = point(50.0, 25.0);
    let cases: [(Point, fn(Point) -> bool); 4] = [
        (point(150.0, 30.0), |p: Point| p.x == 100.0),
        (point(-50.0, 30.0), |p: Point| p.x == 0.0),
        (point(60.0, -25.0), |p: Point| p.y == 0.0),
        (point(60.0, 75.0), |p: Point| p.y == 50.0),
    ];

    for (outside, on_boundary) in cases {
        let (start, end) = clip_line(inside, outside, &RECT).expect("partly visible");
        assert_eq!(start, inside);
        assert!(on_boundary(end), "{end:?} is not on the crossed boundary");
        assert_eq!(region_code(end, &RECT), OutCode::INSIDE);

        let (start, end) = clip_line(outside, inside, &RECT).expect("partly visible");
        assert_eq!(end, inside);
        assert!(on_boundary(start), "{start:?} is not on the crossed boundary");
    }
}

#[test]
fn crossing_point_follows_the_segment() {
    let (_, end) = clip_line(point(50.0, 25.0), point(150.0, 30.0), &RECT).expect("visible");
    assert_eq!(end.x, 100.0);
    assert!((end.y - 27.5).abs() < 1e-12);
}

#[test]
fn segment_through_the_rect_is_trimmed_on_both_ends() {
    let (start, end) =
        clip_line(point(-10.0, 25.0), point(110.0, 25.0), &RECT).expect("passes through");
    assert_eq!(start, point(0.0, 25.0));
    assert_eq!(end, point(100.0, 25.0));
}

#[test]
fn region_codes_use_swapped_vertical_labels() {
    assert_eq!(region_code(point(50.0, 60.0), &RECT), OutCode::TOP);
    assert_eq!(region_code(point(50.0, -10.0), &RECT), OutCode::BOTTOM);
    assert_eq!(
        region_code(point(120.0, -10.0), &RECT),
        OutCode::RIGHT | OutCode::BOTTOM
    );
}

#[test]
fn circle_on_a_corner_is_culled() {
    assert!(!clip_circle(point(0.0, 0.0), 51.0, &RECT));
    assert!(!clip_circle(point(100.0, 50.0), 60.0, &RECT));
}

#[test]
fn circle_partially_outside_is_culled() {
    assert!(!clip_circle(point(98.0, 25.0), 7.0, &RECT));
    assert!(!clip_circle(point(50.0, 45.0), 7.0, &RECT));
}

#[test]
fn circle_fully_inside_is_drawn() {
    assert!(clip_circle(point(50.0, 25.0), 7.0, &RECT));
    assert!(clip_circle(point(50.0, 25.0), 25.0, &RECT));
    assert!(!clip_circle(point(50.0, 25.0), 25.5, &RECT));
}
