use crate::error::TimelineError;
use crate::geometry::Point;
use crate::graph::Graph;
use crate::layout::LayoutEngine;

/// Node positions frozen at one iteration.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    positions: Box<[Point]>,
}

impl Snapshot {
    pub fn capture(graph: &Graph) -> Self {
        Self {
            positions: graph.positions().collect(),
        }
    }

    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Copies the stored positions back into `graph` bit for bit.
    pub fn apply_to(&self, graph: &mut Graph) -> Result<(), TimelineError> {
        if self.positions.len() != graph.nodes.len() {
            return Err(TimelineError::NodeCountMismatch {
                expected: self.positions.len(),
                actual: graph.nodes.len(),
            });
        }

        for (node, &position) in graph.nodes.iter_mut().zip(self.positions.iter()) {
            node.position = position;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// A new iteration was computed and cached.
    Advanced(usize),
    /// A cached iteration was restored without recomputation.
    Restored(usize),
    AtEnd,
    AtStart,
    /// The request was dropped because auto-play owns the timeline.
    Ignored,
}

impl StepOutcome {
    pub fn iteration(self) -> Option<usize> {
        match self {
            Self::Advanced(iteration) | Self::Restored(iteration) => Some(iteration),
            Self::AtEnd | Self::AtStart | Self::Ignored => None,
        }
    }
}

/// One snapshot per computed iteration, populated strictly forward.
///
/// Snapshot 0 is the placement before any step. Snapshot `k` exists only if
/// every iteration before it exists too, so stepping backward is always a
/// plain lookup.
#[derive(Clone, Debug)]
pub struct TimelineCache {
    capacity: usize,
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

impl TimelineCache {
    pub fn new(capacity: usize, graph: &Graph) -> Result<Self, TimelineError> {
        if capacity == 0 {
            return Err(TimelineError::ZeroCapacity);
        }

        Ok(Self {
            capacity,
            snapshots: vec![Snapshot::capture(graph)],
            cursor: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of stored snapshots, iteration 0 included.
    pub fn computed(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor + 1 >= self.capacity
    }

    /// Stores `snapshot` as iteration `iteration`, overwriting that slot if it
    /// was already computed. Later iterations are kept.
    pub fn append(&mut self, iteration: usize, snapshot: Snapshot) -> Result<(), TimelineError> {
        if iteration >= self.capacity {
            return Err(TimelineError::IndexOutOfRange {
                iteration,
                capacity: self.capacity,
            });
        }
        if iteration == 0 {
            return Err(TimelineError::FrozenOrigin);
        }
        if iteration > self.snapshots.len() {
            return Err(TimelineError::Gap {
                iteration,
                computed: self.snapshots.len(),
            });
        }

        match self.snapshots.get_mut(iteration) {
            Some(slot) => *slot = snapshot,
            None => self.snapshots.push(snapshot),
        }
        Ok(())
    }

    pub fn get(&self, iteration: usize) -> Result<&Snapshot, TimelineError> {
        self.snapshots
            .get(iteration)
            .ok_or(TimelineError::NotComputed { iteration })
    }

    pub fn step_forward(
        &mut self,
        engine: &LayoutEngine,
        graph: &mut Graph,
        temperature: f64,
    ) -> Result<StepOutcome, TimelineError> {
        let next = self.cursor + 1;
        if next >= self.capacity {
            return Ok(StepOutcome::AtEnd);
        }

        engine.step(graph, temperature, next);
        self.append(next, Snapshot::capture(graph))?;
        self.cursor = next;
        Ok(StepOutcome::Advanced(next))
    }

    pub fn step_backward(&mut self, graph: &mut Graph) -> Result<StepOutcome, TimelineError> {
        if self.cursor == 0 {
            return Ok(StepOutcome::AtStart);
        }

        let previous = self.cursor - 1;
        self.get(previous)?.apply_to(graph)?;
        self.cursor = previous;
        tracing::trace!(iteration = previous, "restored snapshot");
        Ok(StepOutcome::Restored(previous))
    }

    /// Jumps to any already computed iteration.
    pub fn scrub_to(
        &mut self,
        iteration: usize,
        graph: &mut Graph,
    ) -> Result<StepOutcome, TimelineError> {
        self.get(iteration)?.apply_to(graph)?;
        self.cursor = iteration;
        tracing::trace!(iteration, "scrubbed to snapshot");
        Ok(StepOutcome::Restored(iteration))
    }

    /// Forgets every iteration and freezes the current graph as iteration 0.
    pub fn reset(&mut self, graph: &Graph) {
        self.snapshots.clear();
        self.snapshots.push(Snapshot::capture(graph));
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point;
    use crate::graph::Edge;

    fn pair() -> Graph {
        Graph::from_positions(
            [point(100.0, 100.0), point(110.0, 100.0)],
            vec![Edge::new(0, 1)],
        )
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert!(matches!(
            TimelineCache::new(0, &pair()),
            Err(TimelineError::ZeroCapacity)
        ));
    }

    #[test]
    fn append_enforces_capacity_and_order() {
        let graph = pair();
        let mut cache = TimelineCache::new(3, &graph).expect("capacity is positive");

        assert!(matches!(
            cache.append(0, Snapshot::capture(&graph)),
            Err(TimelineError::FrozenOrigin)
        ));
        assert!(matches!(
            cache.append(2, Snapshot::capture(&graph)),
            Err(TimelineError::Gap {
                iteration: 2,
                computed: 1
            })
        ));
        assert!(matches!(
            cache.append(3, Snapshot::capture(&graph)),
            Err(TimelineError::IndexOutOfRange {
                iteration: 3,
                capacity: 3
            })
        ));

        cache.append(1, Snapshot::capture(&graph)).expect("next slot");
        cache.append(2, Snapshot::capture(&graph)).expect("next slot");
        assert_eq!(cache.computed(), 3);
    }

    #[test]
    fn replacing_an_iteration_keeps_later_ones() {
        let graph = pair();
        let mut cache = TimelineCache::new(5, &graph).expect("capacity is positive");
        for iteration in 1..=3 {
            cache.append(iteration, Snapshot::capture(&graph)).expect("next slot");
        }

        let moved = Graph::from_positions(
            [point(200.0, 200.0), point(210.0, 200.0)],
            vec![Edge::new(0, 1)],
        );
        cache.append(2, Snapshot::capture(&moved)).expect("existing slot");

        assert_eq!(cache.computed(), 4);
        let moved_positions: Vec<Point> = moved.positions().collect();
        let original_positions: Vec<Point> = graph.positions().collect();
        assert_eq!(cache.get(2).expect("replaced").positions(), &moved_positions[..]);
        assert_eq!(cache.get(3).expect("kept").positions(), &original_positions[..]);
    }

    #[test]
    fn snapshot_rejects_foreign_graph() {
        let snapshot = Snapshot::capture(&pair());
        let mut single = Graph::from_positions([point(0.0, 0.0)], Vec::new());
        assert!(matches!(
            snapshot.apply_to(&mut single),
            Err(TimelineError::NodeCountMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }
}
