use serde::Deserialize;

use crate::geometry::{Bounds, Vector};
use crate::graph::Graph;

/// Force constants of the layout model.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// `k_repel`: repulsion between any two nodes is `repulsion / distance`.
    pub repulsion: f64,
    /// `k_attract`: attraction along an edge is `distance² / attraction`.
    pub attraction: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            repulsion: 1000.0,
            attraction: 1000.0,
        }
    }
}

/// Optional temperature decay. The engine never applies it on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CoolingSchedule {
    #[default]
    Constant,
    Geometric {
        factor: f64,
        #[serde(default)]
        floor: f64,
    },
}

impl CoolingSchedule {
    pub const DEFAULT_FACTOR: f64 = 0.95;

    pub fn geometric(factor: f64) -> Self {
        Self::Geometric { factor, floor: 0.0 }
    }

    /// One explicit cooling application between two steps.
    pub fn apply(self, temperature: f64) -> f64 {
        match self {
            Self::Constant => temperature,
            Self::Geometric { factor, floor } => (temperature * factor).max(floor),
        }
    }

    /// Temperature for step `iteration` starting from `base` at step 1.
    ///
    /// A pure function of the index, so recomputing a step after scrubbing
    /// back reproduces the same trajectory.
    pub fn temperature_at(self, base: f64, iteration: usize) -> f64 {
        match self {
            Self::Constant => base,
            Self::Geometric { factor, floor } => {
                let exponent = i32::try_from(iteration.saturating_sub(1)).unwrap_or(i32::MAX);
                (base * factor.powi(exponent)).max(floor)
            }
        }
    }
}

/// Simplified Fruchterman-Reingold: inverse-distance repulsion between all
/// pairs, quadratic attraction along edges, per-axis step cap and a hard
/// confinement wall.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutEngine {
    config: LayoutConfig,
    confinement: Bounds,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig, confinement: Bounds) -> Self {
        Self {
            config,
            confinement,
        }
    }

    pub fn config(&self) -> LayoutConfig {
        self.config
    }

    pub fn confinement(&self) -> Bounds {
        self.confinement
    }

    /// Magnitude of the push between two nodes `distance` apart, `None` when
    /// they coincide.
    pub fn repulsive_force(&self, distance: f64) -> Option<f64> {
        (distance > 0.0).then(|| self.config.repulsion / distance)
    }

    /// Magnitude of the pull along an edge of length `distance`, `None` when
    /// the endpoints coincide.
    pub fn attractive_force(&self, distance: f64) -> Option<f64> {
        (distance > 0.0).then(|| (distance * distance) / self.config.attraction)
    }

    /// Runs one simulation step, mutating node positions in place.
    ///
    /// `temperature` bounds the per-axis move of every node. Coincident
    /// nodes exert no force on each other and therefore never separate.
    pub fn step(&self, graph: &mut Graph, temperature: f64, iteration: usize) {
        let Graph { nodes, edges, .. } = graph;
        let node_count = nodes.len();

        for node in nodes.iter_mut() {
            node.displacement = Vector::zero();
        }

        for i in 0..node_count {
            for j in (i + 1)..node_count {
                let delta = nodes[i].position - nodes[j].position;
                let distance = delta.length();
                let Some(force) = self.repulsive_force(distance) else {
                    continue;
                };

                let push = (delta / distance) * force;
                nodes[i].displacement += push;
                nodes[j].displacement -= push;
            }
        }

        for edge in edges.iter() {
            let (from, to) = (edge.from, edge.to);
            if from >= node_count || to >= node_count {
                continue;
            }

            let delta = nodes[from].position - nodes[to].position;
            let distance = delta.length();
            let Some(force) = self.attractive_force(distance) else {
                continue;
            };

            let pull = (delta / distance) * force;
            nodes[from].displacement -= pull;
            nodes[to].displacement += pull;
        }

        let limit = temperature.max(0.0);
        for node in nodes.iter_mut() {
            let capped = Vector::new(
                node.displacement.x.max(-limit).min(limit),
                node.displacement.y.max(-limit).min(limit),
            );
            node.position = self.confinement.clamp(node.position + capped);
        }

        tracing::trace!(iteration, temperature, node_count, "layout step");
    }
}
