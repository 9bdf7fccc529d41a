use eframe::egui::{self, Context, Key, Rect, Ui};

use super::super::ViewModel;
use super::super::render_utils::to_point;

impl ViewModel {
    /// Wheel zoom toward the pointer, only while it hovers the confinement
    /// box.
    pub(in crate::app) fn handle_graph_zoom(
        &mut self,
        ui: &Ui,
        rect: Rect,
        response: &egui::Response,
    ) {
        if !response.hovered() {
            return;
        }

        let scroll = ui.input(|input| input.raw_scroll_delta.y);
        if scroll.abs() <= f32::EPSILON {
            return;
        }

        let Some(pointer) = ui.input(|input| input.pointer.hover_pos()) else {
            return;
        };
        let pivot = to_point(rect.min.to_vec2(), pointer);
        if !self.session.config().confinement.contains(pivot) {
            return;
        }

        self.session
            .viewport_mut()
            .zoom_step(f64::from(scroll.signum()), pivot);
    }

    pub(in crate::app) fn handle_graph_pan(&mut self, response: &egui::Response) {
        if response.dragged_by(egui::PointerButton::Secondary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            let delta = response.drag_delta();
            self.session
                .viewport_mut()
                .pan(f64::from(delta.x), f64::from(delta.y));
        }
    }

    /// Arrow keys step, space toggles auto-play, W/A/S/D pan. Skipped while a
    /// widget holds keyboard focus.
    pub(in crate::app) fn handle_keyboard(&mut self, ctx: &Context) {
        if ctx.memory(|memory| memory.focused().is_some()) {
            return;
        }

        let (forward, backward, toggle, up, down, left, right) = ctx.input(|input| {
            (
                input.key_pressed(Key::ArrowRight),
                input.key_pressed(Key::ArrowLeft),
                input.key_pressed(Key::Space),
                input.key_pressed(Key::W),
                input.key_pressed(Key::S),
                input.key_pressed(Key::A),
                input.key_pressed(Key::D),
            )
        });

        if forward {
            let result = self.session.step_forward();
            self.apply_outcome(result);
        }
        if backward {
            let result = self.session.step_backward();
            self.apply_outcome(result);
        }
        if toggle {
            self.session.toggle_play();
        }

        let step = self.session.viewport().config().pan_step;
        let viewport = self.session.viewport_mut();
        if up {
            viewport.pan(0.0, step);
        }
        if down {
            viewport.pan(0.0, -step);
        }
        if left {
            viewport.pan(step, 0.0);
        }
        if right {
            viewport.pan(-step, 0.0);
        }
    }
}
