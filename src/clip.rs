//! Visibility tests against an axis-aligned clip rectangle.

use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::geometry::{Bounds, Point, point};

/// Cohen-Sutherland region code.
///
/// The vertical labels are swapped relative to the screen-down convention:
/// `TOP` marks `y > bottom` and `BOTTOM` marks `y < top`. Only the names are
/// unusual, every bit still selects the boundary it was compared against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OutCode(u8);

impl OutCode {
    pub const INSIDE: Self = Self(0);
    pub const LEFT: Self = Self(1);
    pub const RIGHT: Self = Self(2);
    pub const BOTTOM: Self = Self(4);
    pub const TOP: Self = Self(8);

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_inside(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }
}

impl BitOr for OutCode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for OutCode {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for OutCode {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

// Each pass moves one endpoint onto a boundary; rounding near a corner can
// re-flag the other axis once, so a handful of passes always suffice.
const MAX_CLIP_PASSES: usize = 8;

pub fn region_code(position: Point, rect: &Bounds) -> OutCode {
    let mut code = OutCode::INSIDE;

    if position.x < rect.left {
        code |= OutCode::LEFT;
    } else if position.x > rect.right {
        code |= OutCode::RIGHT;
    }
    if position.y < rect.top {
        code |= OutCode::BOTTOM;
    } else if position.y > rect.bottom {
        code |= OutCode::TOP;
    }

    code
}

/// Clips the segment `start`-`end` to `rect`, `None` when nothing of it is
/// inside.
pub fn clip_line(start: Point, end: Point, rect: &Bounds) -> Option<(Point, Point)> {
    let (mut start, mut end) = (start, end);
    let mut start_code = region_code(start, rect);
    let mut end_code = region_code(end, rect);

    for _ in 0..MAX_CLIP_PASSES {
        if start_code.is_inside() && end_code.is_inside() {
            return Some((start, end));
        }
        if !(start_code & end_code).is_inside() {
            return None;
        }

        let outside = if start_code.is_inside() {
            end_code
        } else {
            start_code
        };
        let crossing = boundary_crossing(start, end, outside, rect);

        if outside == start_code {
            start = crossing;
            start_code = region_code(start, rect);
        } else {
            end = crossing;
            end_code = region_code(end, rect);
        }
    }

    tracing::warn!(?start, ?end, "line clipping did not converge, dropping segment");
    None
}

// `outside` shares no bit with the other endpoint's code, so the segment spans
// the selected boundary and the divisor below is never zero.
fn boundary_crossing(start: Point, end: Point, outside: OutCode, rect: &Bounds) -> Point {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    if outside.contains(OutCode::TOP) {
        point(start.x + dx * (rect.bottom - start.y) / dy, rect.bottom)
    } else if outside.contains(OutCode::BOTTOM) {
        point(start.x + dx * (rect.top - start.y) / dy, rect.top)
    } else if outside.contains(OutCode::RIGHT) {
        point(rect.right, start.y + dy * (rect.right - start.x) / dx)
    } else {
        point(rect.left, start.y + dy * (rect.left - start.x) / dx)
    }
}

/// All-or-nothing disc test: true only when the disc's bounding square lies
/// entirely inside `rect`. Partially visible discs are culled.
pub fn clip_circle(center: Point, radius: f64, rect: &Bounds) -> bool {
    center.x - radius >= rect.left
        && center.x + radius <= rect.right
        && center.y - radius >= rect.top
        && center.y + radius <= rect.bottom
}
