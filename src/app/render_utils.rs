use eframe::egui::{Color32, Painter, Pos2, Stroke, Vec2, pos2};
use forcelab::{Bounds, Point, Viewport, point};

const BOX_THICKNESS: usize = 5;

pub(super) const NODE_COLOR: Color32 = Color32::from_rgb(36, 99, 176);
pub(super) const EDGE_COLOR: Color32 = Color32::BLACK;
pub(super) const LABEL_COLOR: Color32 = Color32::from_gray(40);

/// Canvas-local simulation/screen point to an egui position. `origin` is the
/// canvas' top-left corner.
pub(super) fn to_pos2(origin: Vec2, position: Point) -> Pos2 {
    pos2(position.x as f32, position.y as f32) + origin
}

pub(super) fn to_point(origin: Vec2, position: Pos2) -> Point {
    let local = position - origin;
    point(f64::from(local.x), f64::from(local.y))
}

pub(super) fn draw_grid(painter: &Painter, origin: Vec2, bounds: &Bounds, viewport: &Viewport) {
    let cell = viewport.grid_cell_size();
    if cell < 1.0 {
        return;
    }

    let stroke = Stroke::new(1.0, Color32::from_gray(0xDD));
    let start = viewport.grid_origin(bounds);

    let mut x = start.x;
    while x <= bounds.right {
        if x >= bounds.left {
            painter.line_segment(
                [
                    to_pos2(origin, point(x, bounds.top)),
                    to_pos2(origin, point(x, bounds.bottom)),
                ],
                stroke,
            );
        }
        x += cell;
    }

    let mut y = start.y;
    while y <= bounds.bottom {
        if y >= bounds.top {
            painter.line_segment(
                [
                    to_pos2(origin, point(bounds.left, y)),
                    to_pos2(origin, point(bounds.right, y)),
                ],
                stroke,
            );
        }
        y += cell;
    }
}

/// Outline of the confinement box, grown outward one pixel per ring.
pub(super) fn draw_confinement_box(painter: &Painter, origin: Vec2, bounds: &Bounds) {
    let stroke = Stroke::new(1.0, Color32::BLACK);

    for ring in 0..BOX_THICKNESS {
        let inset = ring as f64;
        let top_left = to_pos2(origin, point(bounds.left - inset, bounds.top - inset));
        let top_right = to_pos2(origin, point(bounds.right + inset, bounds.top - inset));
        let bottom_right = to_pos2(origin, point(bounds.right + inset, bounds.bottom + inset));
        let bottom_left = to_pos2(origin, point(bounds.left - inset, bounds.bottom + inset));

        painter.line_segment([top_left, top_right], stroke);
        painter.line_segment([top_right, bottom_right], stroke);
        painter.line_segment([bottom_right, bottom_left], stroke);
        painter.line_segment([bottom_left, top_left], stroke);
    }
}
