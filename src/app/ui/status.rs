use eframe::egui::Context;

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn record_frame_time(&mut self, ctx: &Context) {
        const WINDOW_SECS: f32 = 1.0;

        let dt = ctx.input(|input| input.stable_dt);
        if dt <= f32::EPSILON {
            return;
        }

        self.frame_times.push_back(dt);
        let mut total: f32 = self.frame_times.iter().sum();
        while total > WINDOW_SECS && self.frame_times.len() > 1 {
            if let Some(oldest) = self.frame_times.pop_front() {
                total -= oldest;
            }
        }
    }

    /// Frame rate averaged over the recorded window, plus the mean frame time.
    pub(in crate::app) fn frame_rate_text(&self) -> Option<String> {
        let (rate, mean_ms) = frame_rate(self.frame_times.iter().copied())?;
        Some(format!("{rate:.0} fps ({mean_ms:.1} ms)"))
    }

    pub(in crate::app) fn frame_text(&self) -> String {
        format!(
            "Frame: {} / {}",
            self.session.iteration(),
            self.session.capacity() - 1
        )
    }

    pub(in crate::app) fn playback_text(&self) -> &'static str {
        if self.session.is_playing() {
            "playing"
        } else if self.session.is_at_end() {
            "finished"
        } else {
            "paused"
        }
    }

    pub(in crate::app) fn drawn_graph_text(&self) -> String {
        format!(
            "drawn: {} nodes / {} edges",
            self.drawn_node_count.min(self.session.graph().node_count()),
            self.drawn_edge_count.min(self.session.graph().edge_count())
        )
    }

    pub(in crate::app) fn pointer_text(&self) -> Option<String> {
        self.pointer_sim
            .map(|position| format!("pointer: ({:.1}, {:.1})", position.x, position.y))
    }
}

/// Frames per second and mean frame time in milliseconds.
fn frame_rate(frame_times: impl ExactSizeIterator<Item = f32>) -> Option<(f32, f32)> {
    let frames = frame_times.len() as f32;
    let total: f32 = frame_times.sum();
    if total <= f32::EPSILON {
        return None;
    }
    Some((frames / total, 1000.0 * total / frames))
}

#[cfg(test)]
mod tests {
    use super::frame_rate;

    #[test]
    fn frame_rate_averages_the_window() {
        let (rate, mean_ms) = frame_rate([0.02_f32, 0.03, 0.05].into_iter()).expect("frames");
        assert!((rate - 30.0).abs() < 1e-3);
        assert!((mean_ms - 33.333).abs() < 1e-2);
    }

    #[test]
    fn empty_window_has_no_rate() {
        assert_eq!(frame_rate(std::iter::empty()), None);
    }
}
