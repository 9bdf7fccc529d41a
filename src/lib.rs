pub mod clip;
pub mod config;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod layout;
pub mod session;
pub mod timeline;
pub mod viewport;

pub use clip::{OutCode, clip_circle, clip_line, region_code};
pub use config::{SessionConfig, ViewportConfig};
pub use error::{ConfigError, GraphError, SessionError, TimelineError};
pub use geometry::{Bounds, Point, Vector, point, vector};
pub use graph::{Edge, Graph, Node, Topology};
pub use layout::{CoolingSchedule, LayoutConfig, LayoutEngine};
pub use session::Session;
pub use timeline::{Snapshot, StepOutcome, TimelineCache};
pub use viewport::Viewport;
