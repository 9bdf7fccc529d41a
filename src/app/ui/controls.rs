use eframe::egui::{self, Color32, Slider, Ui};
use forcelab::CoolingSchedule;

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.heading("Simulation");
        ui.separator();
        ui.add_space(4.0);

        let playing = self.session.is_playing();
        ui.horizontal(|ui| {
            let play_label = if playing { "Pause" } else { "Play" };
            if ui
                .button(play_label)
                .on_hover_text("Space: toggle auto-play.")
                .clicked()
            {
                self.session.toggle_play();
            }

            let back = ui
                .add_enabled(!playing, egui::Button::new("◀ Step"))
                .on_hover_text("Left arrow: restore the previous frame.");
            if back.clicked() {
                let result = self.session.step_backward();
                self.apply_outcome(result);
            }

            let forward = ui
                .add_enabled(!playing, egui::Button::new("Step ▶"))
                .on_hover_text("Right arrow: compute the next frame.");
            if forward.clicked() {
                let result = self.session.step_forward();
                self.apply_outcome(result);
            }
        });

        ui.add_space(4.0);
        let latest = self.session.computed().saturating_sub(1);
        let mut frame = self.session.iteration();
        let scrub = ui
            .add_enabled(
                latest > 0,
                Slider::new(&mut frame, 0..=latest).text("frame"),
            )
            .on_hover_text("Scrub through already computed frames.");
        if scrub.changed() && frame != self.session.iteration() {
            let result = self.session.scrub_to(frame);
            self.apply_outcome(result);
        }

        ui.add_space(4.0);
        if ui
            .button("Generate Nodes")
            .on_hover_text("Scatter the nodes again and start a new timeline.")
            .clicked()
        {
            self.session.regenerate();
            self.last_tick_secs = None;
            self.last_error = None;
        }

        ui.separator();
        ui.label("Temperature");

        let mut temperature = self.session.temperature();
        if ui
            .add(Slider::new(&mut temperature, 0.0..=200.0).text("max step"))
            .on_hover_text("Largest per-axis move a node can make in one frame.")
            .changed()
        {
            self.session.set_temperature(temperature);
        }

        let mut cooling_enabled = matches!(
            self.session.cooling(),
            CoolingSchedule::Geometric { .. }
        );
        let mut cooling_changed = ui
            .checkbox(&mut cooling_enabled, "Cooling")
            .on_hover_text("Decay the temperature geometrically with the frame index.")
            .changed();
        cooling_changed |= ui
            .add_enabled(
                cooling_enabled,
                Slider::new(&mut self.cooling_factor, 0.80..=0.999).text("factor"),
            )
            .changed();
        if cooling_changed {
            let schedule = if cooling_enabled {
                CoolingSchedule::geometric(self.cooling_factor)
            } else {
                CoolingSchedule::Constant
            };
            self.session.set_cooling(schedule);
        }
        ui.label(format!(
            "next frame temperature: {:.2}",
            self.session.temperature_for_next_step()
        ));

        ui.separator();
        ui.label("View");

        let viewport = self.session.viewport();
        ui.label(format!(
            "scale {:.0}  offset ({:.0}, {:.0})",
            viewport.scale(),
            viewport.offset().x,
            viewport.offset().y
        ));
        if let Some(pointer_text) = self.pointer_text() {
            ui.label(pointer_text);
        }
        ui.checkbox(&mut self.show_grid, "Grid");
        ui.checkbox(&mut self.show_labels, "Labels");
        if ui
            .button("Reset view")
            .on_hover_text("Back to the initial zoom and offset.")
            .clicked()
        {
            self.session.reset_viewport();
        }

        ui.separator();
        ui.small("Wheel: zoom at pointer  W/A/S/D or right-drag: pan");

        if let Some(error) = &self.last_error {
            ui.add_space(6.0);
            ui.colored_label(Color32::from_rgb(200, 60, 50), error.as_str());
        }
    }
}
