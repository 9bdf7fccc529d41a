use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use anyhow::Context as _;
use eframe::egui::{self, Context};
use forcelab::{Point, Session, SessionConfig, SessionError, StepOutcome, Topology};

mod graph;
mod render_utils;
mod ui;

pub struct ForceLabApp {
    config: SessionConfig,
    graph_path: Option<PathBuf>,
    seed: Option<u64>,
    state: AppState,
}

enum AppState {
    Loading {
        rx: Receiver<Result<Topology, String>>,
    },
    Ready(Box<ViewModel>),
    Error(String),
}

struct ViewModel {
    session: Session,
    last_tick_secs: Option<f64>,
    show_grid: bool,
    show_labels: bool,
    cooling_factor: f64,
    pointer_sim: Option<Point>,
    last_error: Option<String>,
    /// Durations of the frames painted during roughly the last second.
    frame_times: VecDeque<f32>,
    drawn_node_count: usize,
    drawn_edge_count: usize,
}

impl ForceLabApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: SessionConfig,
        graph_path: Option<PathBuf>,
        seed: Option<u64>,
    ) -> Self {
        let state = Self::start_load(graph_path.clone(), &config, seed);
        Self {
            config,
            graph_path,
            seed,
            state,
        }
    }

    fn spawn_load(path: PathBuf) -> Receiver<Result<Topology, String>> {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = Topology::from_path(&path)
                .with_context(|| format!("failed to load graph {}", path.display()))
                .map_err(|error| format!("{error:#}"));
            let _ = tx.send(result);
        });

        rx
    }

    fn start_load(
        graph_path: Option<PathBuf>,
        config: &SessionConfig,
        seed: Option<u64>,
    ) -> AppState {
        match graph_path {
            Some(path) => AppState::Loading {
                rx: Self::spawn_load(path),
            },
            None => Self::start_session(config, &Topology::sample(), seed),
        }
    }

    fn start_session(config: &SessionConfig, topology: &Topology, seed: Option<u64>) -> AppState {
        match Session::seeded(config.clone(), topology, seed) {
            Ok(session) => AppState::Ready(Box::new(ViewModel::new(session))),
            Err(error) => {
                tracing::error!(%error, "failed to start session");
                AppState::Error(error.to_string())
            }
        }
    }
}

impl eframe::App for ForceLabApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;

        match &mut self.state {
            AppState::Loading { rx } => {
                if let Ok(result) = rx.try_recv() {
                    transition = Some(match result {
                        Ok(topology) => Self::start_session(&self.config, &topology, self.seed),
                        Err(error) => {
                            tracing::error!(%error, "graph load failed");
                            AppState::Error(error)
                        }
                    });
                } else {
                    ctx.request_repaint();
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading graph...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
            }
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to start the layout session");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        transition = Some(Self::start_load(
                            self.graph_path.clone(),
                            &self.config,
                            self.seed,
                        ));
                    }
                });
            }
            AppState::Ready(model) => model.show(ctx),
        }

        if let Some(next_state) = transition {
            self.state = next_state;
        }
    }
}

impl ViewModel {
    /// Records a failed timeline request. These are contract violations, not
    /// user errors, so they are logged and surfaced in the side panel only.
    fn apply_outcome(&mut self, result: Result<StepOutcome, SessionError>) {
        match result {
            Ok(outcome) => {
                if outcome.iteration().is_some() {
                    self.last_error = None;
                }
            }
            Err(error) => {
                tracing::error!(%error, "timeline request failed");
                self.last_error = Some(error.to_string());
            }
        }
    }
}
