use std::{
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
};

/// Unique node identifier in a [`DiGraph`](crate::DiGraph) - an index in range `0 .. node_count()`.
pub type NodeIndex = usize;

/// A directed arc between two nodes, with an optional cost.
///
/// Arc identity is the ordered `(source, destination)` pair:
/// [`PartialEq`] and [`Hash`] ignore the cost.
/// Whether the nodes exist is up to the graph the arc is used with.
#[derive(Clone, Copy, Debug)]
pub struct Arc {
    source: NodeIndex,
    destination: NodeIndex,
    cost: f64,
}

impl Arc {
    /// Creates a new arc `source -> destination` with zero cost.
    pub fn new(source: NodeIndex, destination: NodeIndex) -> Self {
        Self {
            source,
            destination,
            cost: 0.0,
        }
    }

    /// Returns the same arc with its cost set to `cost`.
    ///
    /// To change the cost of an arc stored in a graph, see [`DiGraph::set_arc_cost`](crate::DiGraph::set_arc_cost).
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    pub fn source(&self) -> NodeIndex {
        self.source
    }

    pub fn destination(&self) -> NodeIndex {
        self.destination
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Returns `true` if the arc starts and ends at the same node.
    pub fn is_loop(&self) -> bool {
        self.source == self.destination
    }

    /// Returns the arc `destination -> source`, keeping the cost.
    pub fn reversed(&self) -> Self {
        Self {
            source: self.destination,
            destination: self.source,
            cost: self.cost,
        }
    }
}

impl PartialEq for Arc {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.destination == other.destination
    }
}

impl Eq for Arc {}

impl Hash for Arc {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.destination.hash(state);
    }
}

impl Display for Arc {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "({}, {})", self.source, self.destination)
    }
}
