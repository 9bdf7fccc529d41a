use std::collections::VecDeque;

use eframe::egui::{self, Align, Context, Layout};
use forcelab::{CoolingSchedule, Session};

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn new(session: Session) -> Self {
        let cooling_factor = match session.cooling() {
            CoolingSchedule::Geometric { factor, .. } => factor,
            CoolingSchedule::Constant => CoolingSchedule::DEFAULT_FACTOR,
        };

        Self {
            session,
            last_tick_secs: None,
            show_grid: true,
            show_labels: true,
            cooling_factor,
            pointer_sim: None,
            last_error: None,
            frame_times: VecDeque::new(),
            drawn_node_count: 0,
            drawn_edge_count: 0,
        }
    }

    pub(in crate::app) fn show(&mut self, ctx: &Context) {
        self.record_frame_time(ctx);
        self.handle_keyboard(ctx);
        self.drive_playback(ctx);

        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Fruchterman-Reingold");
                    ui.separator();
                    ui.label(self.frame_text());
                    ui.label(self.playback_text());
                    ui.label(format!(
                        "nodes: {}  edges: {}",
                        self.session.graph().node_count(),
                        self.session.graph().edge_count()
                    ));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(self.drawn_graph_text());
                        if let Some(rate) = self.frame_rate_text() {
                            ui.label(rate);
                        }
                    });
                });
            });

        egui::SidePanel::right("controls")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| self.draw_controls(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.draw_graph(ui));
    }

    /// Runs one auto-play tick whenever the configured interval has elapsed.
    fn drive_playback(&mut self, ctx: &Context) {
        if !self.session.is_playing() {
            self.last_tick_secs = None;
            return;
        }

        let now = ctx.input(|input| input.time);
        let interval = self.session.tick_interval();
        let due = self
            .last_tick_secs
            .is_none_or(|last| now - last >= interval.as_secs_f64());
        if due {
            self.last_tick_secs = Some(now);
            let result = self.session.tick();
            self.apply_outcome(result);
        }

        ctx.request_repaint_after(interval);
    }
}
