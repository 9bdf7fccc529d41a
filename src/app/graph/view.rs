use eframe::egui::{Align2, Color32, FontId, Sense, Stroke, Ui, vec2};
use forcelab::{clip_circle, clip_line};

use super::super::ViewModel;
use super::super::render_utils::{
    EDGE_COLOR, LABEL_COLOR, NODE_COLOR, draw_confinement_box, draw_grid, to_point, to_pos2,
};

impl ViewModel {
    /// Read-only render pass: positions come from the session as they are,
    /// nothing here advances the simulation.
    pub(in crate::app) fn draw_graph(&mut self, ui: &mut Ui) {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);
        let origin = rect.min.to_vec2();

        self.handle_graph_zoom(ui, rect, &response);
        self.handle_graph_pan(&response);

        self.pointer_sim = ui
            .input(|input| input.pointer.hover_pos())
            .filter(|pointer| rect.contains(*pointer))
            .map(|pointer| {
                self.session
                    .viewport()
                    .to_sim(to_point(origin, pointer))
            });

        painter.rect_filled(rect, 0.0, Color32::WHITE);

        let confinement = self.session.config().confinement;
        let viewport = self.session.viewport();
        let graph = self.session.graph();

        if self.show_grid {
            draw_grid(&painter, origin, &confinement, viewport);
        }
        draw_confinement_box(&painter, origin, &confinement);

        let node_count = graph.node_count();
        let screen_positions = graph
            .positions()
            .map(|position| viewport.to_screen(position))
            .collect::<Vec<_>>();

        let mut drawn_edges = 0usize;
        let edge_stroke = Stroke::new(1.0, EDGE_COLOR);
        for edge in &graph.edges {
            if edge.from >= node_count || edge.to >= node_count {
                continue;
            }

            let Some((start, end)) = clip_line(
                screen_positions[edge.from],
                screen_positions[edge.to],
                &confinement,
            ) else {
                continue;
            };

            painter.line_segment([to_pos2(origin, start), to_pos2(origin, end)], edge_stroke);
            drawn_edges += 1;
        }

        let radius = self.session.config().node_radius;
        let mut drawn_nodes = 0usize;
        for (index, &center) in screen_positions.iter().enumerate() {
            if !clip_circle(center, radius, &confinement) {
                continue;
            }

            let position = to_pos2(origin, center);
            painter.circle_filled(position, radius as f32, NODE_COLOR);
            drawn_nodes += 1;

            if self.show_labels
                && let Some(label) = graph.label(index)
            {
                painter.text(
                    position + vec2(radius as f32 + 3.0, -(radius as f32) - 3.0),
                    Align2::LEFT_BOTTOM,
                    label,
                    FontId::proportional(12.0),
                    LABEL_COLOR,
                );
            }
        }

        self.drawn_node_count = drawn_nodes;
        self.drawn_edge_count = drawn_edges;
    }
}
