use crate::config::ViewportConfig;
use crate::geometry::{Bounds, Point, Vector, point};

/// Zoom and pan state mapping simulation space onto the screen.
///
/// The mapping is anchored at `offset` rather than at the origin:
/// `screen = offset + (sim - offset) * scale / base_scale`. Pan and zoom are
/// therefore coupled, which is the behavior the wheel and keyboard handlers
/// are tuned against.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    config: ViewportConfig,
    scale: f64,
    offset: Vector,
}

impl Viewport {
    pub fn new(config: ViewportConfig) -> Self {
        Self {
            scale: config
                .initial_scale
                .max(config.min_scale)
                .min(config.max_scale),
            offset: Vector::zero(),
            config,
        }
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> Vector {
        self.offset
    }

    pub fn scale_ratio(&self) -> f64 {
        self.scale / self.config.base_scale
    }

    /// Multiplies the scale by `factor`, clamped to the configured range, and
    /// moves the offset to `pivot - (pivot - offset) * (new_scale / scale)`.
    /// Non-finite or non-positive factors are ignored.
    pub fn zoom(&mut self, factor: f64, pivot: Point) {
        if !(factor.is_finite() && factor > 0.0) {
            return;
        }
        let new_scale = (self.scale * factor)
            .max(self.config.min_scale)
            .min(self.config.max_scale);
        if new_scale == self.scale {
            return;
        }

        let ratio = new_scale / self.scale;
        let pivot = pivot.to_vector();
        self.offset = pivot - (pivot - self.offset) * ratio;
        self.scale = new_scale;
    }

    /// One wheel notch toward (`direction > 0`) or away from the pivot.
    pub fn zoom_step(&mut self, direction: f64, pivot: Point) {
        if direction > 0.0 {
            self.zoom(self.config.zoom_step, pivot);
        } else if direction < 0.0 {
            self.zoom(1.0 / self.config.zoom_step, pivot);
        }
    }

    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset += Vector::new(dx, dy);
    }

    pub fn to_screen(&self, sim: Point) -> Point {
        let anchor = self.offset.to_point();
        anchor + (sim - anchor) * self.scale_ratio()
    }

    pub fn to_sim(&self, screen: Point) -> Point {
        let anchor = self.offset.to_point();
        anchor + (screen - anchor) / self.scale_ratio()
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone());
    }

    /// Pitch of the background grid in screen units.
    pub fn grid_cell_size(&self) -> f64 {
        self.scale
    }

    /// First grid line coordinates at or before `bounds`' top-left corner.
    pub fn grid_origin(&self, bounds: &Bounds) -> Point {
        let cell = self.grid_cell_size();
        point(
            (bounds.left + self.offset.x).rem_euclid(cell),
            (bounds.top + self.offset.y).rem_euclid(cell),
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ViewportConfig::default())
    }
}
