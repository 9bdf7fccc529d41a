use std::fs;
use std::path::Path;

use rand::Rng;
use serde::Deserialize;

use crate::error::GraphError;
use crate::geometry::{Bounds, Point, Vector, point};

const SAMPLE_LABELS: [&str; 21] = [
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r", "s",
    "t", "z",
];

#[rustfmt::skip]
const SAMPLE_EDGES: [(usize, usize); 42] = [
    (0, 1), (0, 2), (0, 3), (1, 2), (1, 4), (2, 4), (2, 5),
    (3, 5), (3, 6), (4, 7), (5, 7), (5, 8), (5, 9), (5, 6),
    (6, 10), (7, 14), (7, 11), (8, 11), (8, 12), (8, 9), (9, 12),
    (9, 13), (9, 10), (10, 13), (10, 17), (11, 14), (11, 12), (12, 14),
    (12, 15), (12, 13), (13, 16), (13, 17), (14, 18), (14, 15), (15, 18),
    (15, 19), (15, 16), (16, 19), (16, 17), (17, 19), (18, 20), (19, 20),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub position: Point,
    /// Per-step accumulator, only meaningful inside a layout step.
    pub displacement: Vector,
}

impl Node {
    pub fn at(position: Point) -> Self {
        Self {
            position,
            displacement: Vector::zero(),
        }
    }
}

/// Undirected edge between two node indices. Deserializes from `[from, to]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "(usize, usize)")]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

impl Edge {
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

impl From<(usize, usize)> for Edge {
    fn from((from, to): (usize, usize)) -> Self {
        Self { from, to }
    }
}

/// Static description of a graph: how many nodes, which pairs are joined.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Topology {
    pub node_count: usize,
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl Topology {
    /// The 21-node, 42-edge graph the visualizer ships with.
    pub fn sample() -> Self {
        Self {
            node_count: SAMPLE_LABELS.len(),
            edges: SAMPLE_EDGES.iter().copied().map(Edge::from).collect(),
            labels: SAMPLE_LABELS.iter().map(|label| (*label).to_owned()).collect(),
        }
    }

    pub fn from_json(text: &str) -> Result<Self, GraphError> {
        let topology: Self = serde_json::from_str(text)?;
        topology.validate()?;
        Ok(topology)
    }

    pub fn from_path(path: &Path) -> Result<Self, GraphError> {
        let text = fs::read_to_string(path).map_err(|source| GraphError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), GraphError> {
        if self.node_count == 0 {
            return Err(GraphError::Empty);
        }

        for (edge, &Edge { from, to }) in self.edges.iter().enumerate() {
            if from >= self.node_count || to >= self.node_count {
                return Err(GraphError::EdgeOutOfRange {
                    edge,
                    from,
                    to,
                    node_count: self.node_count,
                });
            }
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    labels: Vec<String>,
}

impl Graph {
    pub fn from_positions(positions: impl IntoIterator<Item = Point>, edges: Vec<Edge>) -> Self {
        Self {
            nodes: positions.into_iter().map(Node::at).collect(),
            edges,
            labels: Vec::new(),
        }
    }

    /// Places every node of `topology` uniformly at random inside `bounds`.
    pub fn scatter<R: Rng + ?Sized>(topology: &Topology, bounds: Bounds, rng: &mut R) -> Self {
        let mut graph = Self {
            nodes: vec![Node::at(bounds.min()); topology.node_count],
            edges: topology.edges.clone(),
            labels: topology.labels.clone(),
        };
        graph.rescatter(bounds, rng);
        graph
    }

    /// New random placement for the same topology.
    pub fn rescatter<R: Rng + ?Sized>(&mut self, bounds: Bounds, rng: &mut R) {
        for node in &mut self.nodes {
            *node = Node::at(point(
                sample_axis(rng, bounds.left, bounds.right),
                sample_axis(rng, bounds.top, bounds.bottom),
            ));
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes.iter().map(|node| node.position)
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }
}

fn sample_axis<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    if high > low {
        rng.random_range(low..=high)
    } else {
        low
    }
}
