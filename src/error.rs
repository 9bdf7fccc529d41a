use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    #[error("timeline capacity must be at least one iteration")]
    ZeroCapacity,
    #[error("iteration {iteration} is outside the timeline capacity of {capacity}")]
    IndexOutOfRange { iteration: usize, capacity: usize },
    #[error("iteration {iteration} has not been computed")]
    NotComputed { iteration: usize },
    #[error("iteration {iteration} would leave a gap after {computed} computed iterations")]
    Gap { iteration: usize, computed: usize },
    #[error("iteration 0 is frozen at session start")]
    FrozenOrigin,
    #[error("snapshot holds {expected} nodes but the graph has {actual}")]
    NodeCountMismatch { expected: usize, actual: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("graph topology has no nodes")]
    Empty,
    #[error("edge {edge} ({from} -> {to}) references a node outside 0..{node_count}")]
    EdgeOutOfRange {
        edge: usize,
        from: usize,
        to: usize,
        node_count: usize,
    },
    #[error("failed to read graph file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed graph topology")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed session config")]
    Parse(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Timeline(#[from] TimelineError),
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
