use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::graph::{Graph, Topology};
use crate::layout::{CoolingSchedule, LayoutEngine};
use crate::timeline::{StepOutcome, TimelineCache};
use crate::viewport::Viewport;

/// Everything one simulation run owns: the graph, its timeline, the engine
/// driving it, the viewport looking at it and the playback state.
///
/// All mutation happens through the intent methods below; rendering only
/// reads [`Session::graph`] and [`Session::viewport`].
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    engine: LayoutEngine,
    graph: Graph,
    timeline: TimelineCache,
    viewport: Viewport,
    rng: StdRng,
    temperature: f64,
    cooling: CoolingSchedule,
    playing: bool,
}

impl Session {
    pub fn new(
        config: SessionConfig,
        topology: &Topology,
        mut rng: StdRng,
    ) -> Result<Self, SessionError> {
        config.validate()?;
        topology.validate()?;

        let graph = Graph::scatter(topology, config.confinement, &mut rng);
        let timeline = TimelineCache::new(config.capacity, &graph)?;
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            capacity = config.capacity,
            "session started"
        );

        Ok(Self {
            engine: LayoutEngine::new(config.layout, config.confinement),
            viewport: Viewport::new(config.viewport.clone()),
            temperature: config.temperature,
            cooling: config.cooling,
            playing: false,
            graph,
            timeline,
            rng,
            config,
        })
    }

    /// Like [`Session::new`], seeding placement from `seed` or from the OS.
    pub fn seeded(
        config: SessionConfig,
        topology: &Topology,
        seed: Option<u64>,
    ) -> Result<Self, SessionError> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(config, topology, rng)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn timeline(&self) -> &TimelineCache {
        &self.timeline
    }

    pub fn iteration(&self) -> usize {
        self.timeline.cursor()
    }

    pub fn computed(&self) -> usize {
        self.timeline.computed()
    }

    pub fn capacity(&self) -> usize {
        self.timeline.capacity()
    }

    pub fn is_at_end(&self) -> bool {
        self.timeline.is_at_end()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.config.tick_interval_ms)
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn set_temperature(&mut self, temperature: f64) {
        if temperature.is_finite() {
            self.temperature = temperature.max(0.0);
        }
    }

    pub fn cooling(&self) -> CoolingSchedule {
        self.cooling
    }

    pub fn set_cooling(&mut self, cooling: CoolingSchedule) {
        self.cooling = cooling;
    }

    /// Temperature the next forward step will run at.
    pub fn temperature_for_next_step(&self) -> f64 {
        self.cooling
            .temperature_at(self.temperature, self.timeline.cursor() + 1)
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn reset_viewport(&mut self) {
        self.viewport.reset();
    }

    /// Manual step forward. Ignored while auto-play is running.
    pub fn step_forward(&mut self) -> Result<StepOutcome, SessionError> {
        if self.playing {
            return Ok(StepOutcome::Ignored);
        }
        self.advance()
    }

    /// Manual step backward, restoring the cached previous iteration.
    /// Ignored while auto-play is running.
    pub fn step_backward(&mut self) -> Result<StepOutcome, SessionError> {
        if self.playing {
            return Ok(StepOutcome::Ignored);
        }
        Ok(self.timeline.step_backward(&mut self.graph)?)
    }

    /// Restores any computed iteration and pauses playback.
    pub fn scrub_to(&mut self, iteration: usize) -> Result<StepOutcome, SessionError> {
        self.pause();
        Ok(self.timeline.scrub_to(iteration, &mut self.graph)?)
    }

    /// Flips auto-play and returns the new state.
    pub fn toggle_play(&mut self) -> bool {
        self.playing = !self.playing;
        tracing::debug!(playing = self.playing, iteration = self.iteration(), "playback toggled");
        self.playing
    }

    pub fn pause(&mut self) {
        if self.playing {
            self.playing = false;
            tracing::debug!(iteration = self.iteration(), "playback paused");
        }
    }

    /// One auto-play tick. Disengages auto-play once the last iteration has
    /// been computed.
    pub fn tick(&mut self) -> Result<StepOutcome, SessionError> {
        if !self.playing {
            return Ok(StepOutcome::Ignored);
        }

        let outcome = match self.advance() {
            Ok(outcome) => outcome,
            Err(error) => {
                self.playing = false;
                return Err(error);
            }
        };
        if self.timeline.is_at_end() {
            self.playing = false;
            tracing::debug!(iteration = self.iteration(), "reached timeline end");
        }
        Ok(outcome)
    }

    /// Scatters the nodes again and starts a fresh timeline. The viewport is
    /// left alone.
    pub fn regenerate(&mut self) {
        self.graph
            .rescatter(self.config.confinement, &mut self.rng);
        self.timeline.reset(&self.graph);
        self.playing = false;
        self.temperature = self.config.temperature;
        tracing::debug!(nodes = self.graph.node_count(), "nodes regenerated");
    }

    fn advance(&mut self) -> Result<StepOutcome, SessionError> {
        let temperature = self.temperature_for_next_step();
        Ok(self
            .timeline
            .step_forward(&self.engine, &mut self.graph, temperature)?)
    }
}
