use {
    crate::*,
    std::{fmt::Display, io, path::Path},
};

/// Operations shared by every directed graph representation.
///
/// Nodes are identified by their [`NodeIndex`] in range `0 .. node_count()`,
/// carry no payload and are never removed.
/// Arcs are unique per ordered `(source, destination)` pair.
///
/// Invalid node indices never modify the graph: mutators return an [`ArcError`],
/// queries return `None` / `false`.
///
/// Implemented by [`ListGraph`] and [`MatrixGraph`], which must stay interchangeable.
pub trait DiGraph: Clone + Display {
    /// Creates a graph with `node_count` unconnected nodes.
    fn with_nodes(node_count: usize) -> Self;

    /// Same as [`with_nodes`](DiGraph::with_nodes), but returns `None` if the representation
    /// cannot hold `node_count` nodes.
    fn try_with_nodes(node_count: usize) -> Option<Self> {
        Some(Self::with_nodes(node_count))
    }

    /// Creates a copy of `other`, which may use another representation.
    ///
    /// Arc costs are copied if this representation stores them.
    fn from_graph<G: DiGraph>(other: &G) -> Self {
        let mut graph = Self::with_nodes(other.node_count());

        for arc in other.arcs() {
            let added = graph.add_arc_with_cost(arc.source(), arc.destination(), arc.cost());
            debug_assert!(added.is_ok(), "source graph arcs must be valid and unique");
        }

        graph
    }

    /// Returns the current number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Returns the current number of arcs in the graph.
    fn arc_count(&self) -> usize;

    /// Appends `count` new unconnected nodes to the graph. Existing arcs are preserved.
    fn add_nodes(&mut self, count: usize);

    /// If node indices `src` and `dst` are valid, tries to add an arc between them.
    ///
    /// Fails if the arc already exists.
    fn add_arc(&mut self, src: NodeIndex, dst: NodeIndex) -> Result<Arc, ArcError> {
        self.add_arc_with_cost(src, dst, 0.0)
    }

    /// Same as [`add_arc`](DiGraph::add_arc), also setting the arc `cost`
    /// (if the representation stores costs at all).
    ///
    /// Fails if the arc already exists - use [`set_arc_cost`](DiGraph::set_arc_cost) to change it.
    fn add_arc_with_cost(
        &mut self,
        src: NodeIndex,
        dst: NodeIndex,
        cost: f64,
    ) -> Result<Arc, ArcError>;

    /// If the arc `src -> dst` exists, sets its `cost` and returns the updated arc.
    fn set_arc_cost(&mut self, src: NodeIndex, dst: NodeIndex, cost: f64)
        -> Result<Arc, ArcError>;

    /// If the arc `src -> dst` exists, removes and returns it.
    fn del_arc(&mut self, src: NodeIndex, dst: NodeIndex) -> Result<Arc, ArcError>;

    /// Returns the arc `src -> dst`, if it exists.
    fn arc(&self, src: NodeIndex, dst: NodeIndex) -> Option<Arc>;

    /// Returns `true` if the arc `src -> dst` exists. `false` for invalid node indices.
    fn is_arc(&self, src: NodeIndex, dst: NodeIndex) -> bool;

    /// Removes all arcs from the graph and returns them, in [`arcs`](DiGraph::arcs) order.
    fn remove_all_arcs(&mut self) -> Vec<Arc>;

    /// If the arc `src -> dst` exists, replaces it with `dst -> src`.
    ///
    /// Returns `false` and does nothing if the arc does not exist
    /// or if the reversed arc already exists.
    fn reverse_arc(&mut self, src: NodeIndex, dst: NodeIndex) -> bool;

    /// Reverses all arcs in the graph.
    ///
    /// Either all arcs are reversed or (on `false`) the graph is left unchanged.
    fn reverse_arcs(&mut self) -> bool;

    /// If node `node` is valid, returns the number of its outbound arcs.
    fn out_degree(&self, node: NodeIndex) -> Option<usize>;

    /// If node `node` is valid, returns the number of its inbound arcs.
    fn in_degree(&self, node: NodeIndex) -> Option<usize>;

    /// If node `node` is valid, returns the total number of its inbound and outbound arcs.
    ///
    /// A loop arc counts twice.
    fn degree(&self, node: NodeIndex) -> Option<usize> {
        Some(self.in_degree(node)? + self.out_degree(node)?)
    }

    /// If node `node` is valid, returns the sources of all its inbound arcs.
    fn predecessors(&self, node: NodeIndex) -> Option<Vec<NodeIndex>>;

    /// If node `node` is valid, returns the destinations of all its outbound arcs.
    fn successors(&self, node: NodeIndex) -> Option<Vec<NodeIndex>>;

    /// If node `node` is valid, returns all its inbound arcs.
    fn in_arcs(&self, node: NodeIndex) -> Option<Vec<Arc>>;

    /// If node `node` is valid, returns all its outbound arcs.
    fn out_arcs(&self, node: NodeIndex) -> Option<Vec<Arc>>;

    /// Returns all arcs in the graph, grouped by source node in ascending order.
    fn arcs(&self) -> Vec<Arc> {
        (0..self.node_count())
            .filter_map(|node| self.out_arcs(node))
            .flatten()
            .collect()
    }

    /// Returns `true` if `node` is a valid node index.
    fn is_node(&self, node: NodeIndex) -> bool {
        node < self.node_count()
    }

    /// Returns `true` if `other` (in any representation) has the same nodes and arcs.
    ///
    /// Compares node counts, per-node degrees, and checks every arc of `self` is present in `other`.
    fn equals<G: DiGraph>(&self, other: &G) -> bool {
        if self.node_count() != other.node_count() {
            return false;
        }

        (0..self.node_count()).all(|node| {
            self.degree(node) == other.degree(node)
                && self
                    .successors(node)
                    .unwrap_or_default()
                    .into_iter()
                    .all(|succ| other.is_arc(node, succ))
        })
    }

    /// Returns a new graph which is the reflexive-transitive closure of this graph,
    /// computed with the Roy-Warshall algorithm.
    ///
    /// The closure has an arc `i -> j` iff `j` is reachable from `i` in zero or more steps.
    /// This graph is not modified.
    fn transitive_closure(&self) -> Self {
        closure::roy_warshall(self)
    }

    /// Returns `true` if the graph contains a cycle (a loop arc counts as a cycle).
    fn is_cyclic(&self) -> bool {
        closure::is_cyclic(self)
    }

    /// Replaces the contents of this graph with the graph stored in the file at `path`.
    ///
    /// On error the graph is left unchanged.
    /// See the [`format`](crate::format) module for the file format.
    fn read(&mut self, path: impl AsRef<Path>) -> Result<(), GraphFileError> {
        *self = format::read_graph(path)?;
        Ok(())
    }

    /// Writes this graph to the file at `path`, in its [`Display`] form.
    fn write(&self, path: impl AsRef<Path>) -> io::Result<()> {
        format::write_graph(self, path)
    }
}

/// Checks both node indices of an arc `src -> dst`.
pub(crate) fn check_arc_nodes<G: DiGraph>(
    graph: &G,
    src: NodeIndex,
    dst: NodeIndex,
) -> Result<(), ArcError> {
    if !graph.is_node(src) {
        return Err(ArcError::InvalidSource);
    }

    if !graph.is_node(dst) {
        return Err(ArcError::InvalidDestination);
    }

    Ok(())
}

/// Graph representation selector.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Representation {
    /// [`ListGraph`].
    List,
    /// [`MatrixGraph`].
    Matrix,
}

impl Representation {
    /// Picks the matrix for graphs with more nodes than arcs, adjacency lists otherwise.
    pub fn choose(node_count: usize, arc_count: usize) -> Self {
        if node_count > arc_count {
            Representation::Matrix
        } else {
            Representation::List
        }
    }
}
