use {
    crate::*,
    std::{
        fmt::{Display, Formatter},
        iter::Iterator,
    },
};

/// Number of in- and outbound arcs per node we store inline
/// (using [`smallvec::SmallVec`]).
pub(crate) const NUM_ARCS: usize = 4;

/// Storage for the node's in- and outbound arcs, in insertion order.
type Arcs = SmallSet<Arc, NUM_ARCS>;

/// Graph node state as contained in the [`ListGraph`]: its in- and outbound arcs.
#[derive(Clone, Debug)]
struct Node {
    /// Inbound arcs for this node (i.e. the node is their destination).
    in_arcs: Arcs,
    /// Outbound arcs for this node (i.e. the node is their source).
    out_arcs: Arcs,
}

impl Node {
    fn new() -> Self {
        Self {
            in_arcs: Arcs::new(),
            out_arcs: Arcs::new(),
        }
    }
}

/// Represents a digraph as per-node lists of in- and outbound arcs.
///
/// Arc costs are stored.
/// [`add_arc`](DiGraph::add_arc) / [`del_arc`](DiGraph::del_arc) / [`is_arc`](DiGraph::is_arc)
/// are `O(out-degree)`; successor / predecessor queries return arcs in insertion order.
#[derive(Clone, Debug)]
pub struct ListGraph {
    nodes: Vec<Node>,
    /// Number of arcs in the graph.
    num_arcs: usize,
}

impl ListGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::with_nodes(0)
    }

    /// The caller guarantees the node `node` is valid.
    fn out_arcs_unchecked(&self, node: NodeIndex) -> impl Iterator<Item = &Arc> {
        self.nodes[node].out_arcs.iter()
    }

    /// The caller guarantees the node `node` is valid.
    fn in_arcs_unchecked(&self, node: NodeIndex) -> impl Iterator<Item = &Arc> {
        self.nodes[node].in_arcs.iter()
    }

    /// Inserts `arc` into both of its nodes' arc lists.
    ///
    /// The caller guarantees the arc nodes are valid.
    /// Returns `false` if the arc already existed.
    fn try_insert(&mut self, arc: Arc) -> bool {
        if !self.nodes[arc.source()].out_arcs.insert(arc) {
            debug_assert!(
                self.nodes[arc.destination()].in_arcs.contains(&arc),
                "in / out arc mismatch"
            );
            return false;
        }

        let did_not_exist = self.nodes[arc.destination()].in_arcs.insert(arc);
        debug_assert!(did_not_exist, "in / out arc mismatch");

        // Increment the arc counter.
        self.num_arcs += 1;

        true
    }

    /// Removes the arc `src -> dst` from both of its nodes' arc lists.
    ///
    /// The caller guarantees the node indices are valid.
    fn try_remove(&mut self, src: NodeIndex, dst: NodeIndex) -> Option<Arc> {
        let key = Arc::new(src, dst);

        let arc = self.nodes[src].out_arcs.take(&key)?;

        let existed = self.nodes[dst].in_arcs.remove(&key);
        debug_assert!(existed, "in / out arc mismatch");

        // Decrement the arc counter.
        debug_assert!(self.num_arcs > 0);
        self.num_arcs -= 1;

        Some(arc)
    }

    /// Roy-Warshall over the arc lists: for every intermediate `k`,
    /// connects the sources of `k`'s inbound arcs to the destinations of its outbound arcs.
    fn roy_warshall(&self) -> Self {
        let mut closure = self.clone();

        for node in 0..closure.node_count() {
            closure.try_insert(Arc::new(node, node));
        }

        let mut added = 0;

        for k in 0..closure.node_count() {
            // Adding `i -> j` at this step only changes `k`'s lists when `i` or `j` is `k`,
            // which already have these arcs, so snapshots are exact.
            let sources: Vec<_> = closure
                .in_arcs_unchecked(k)
                .map(Arc::source)
                .filter(|&i| i != k)
                .collect();
            let destinations: Vec<_> = closure.out_arcs_unchecked(k).map(Arc::destination).collect();

            for &i in &sources {
                for &j in &destinations {
                    if closure.try_insert(Arc::new(i, j)) {
                        added += 1;
                    }
                }
            }
        }

        log::debug!(
            "list closure of {} nodes: {} -> {} arcs ({} transitive)",
            self.node_count(),
            self.arc_count(),
            closure.arc_count(),
            added
        );

        closure
    }
}

impl Default for ListGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl DiGraph for ListGraph {
    fn with_nodes(node_count: usize) -> Self {
        Self {
            nodes: (0..node_count).map(|_| Node::new()).collect(),
            num_arcs: 0,
        }
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn arc_count(&self) -> usize {
        self.num_arcs
    }

    fn add_nodes(&mut self, count: usize) {
        self.nodes.extend((0..count).map(|_| Node::new()));
    }

    fn add_arc_with_cost(
        &mut self,
        src: NodeIndex,
        dst: NodeIndex,
        cost: f64,
    ) -> Result<Arc, ArcError> {
        check_arc_nodes(self, src, dst)?;

        let arc = Arc::new(src, dst).with_cost(cost);

        if self.try_insert(arc) {
            Ok(arc)
        } else {
            Err(ArcError::AlreadyExists)
        }
    }

    fn set_arc_cost(
        &mut self,
        src: NodeIndex,
        dst: NodeIndex,
        cost: f64,
    ) -> Result<Arc, ArcError> {
        check_arc_nodes(self, src, dst)?;

        let key = Arc::new(src, dst);

        let out_arc = self.nodes[src]
            .out_arcs
            .get_mut(&key)
            .ok_or(ArcError::DoesNotExist)?;
        *out_arc = out_arc.with_cost(cost);
        let arc = *out_arc;

        // Keep the inbound copy in sync.
        let in_arc = self.nodes[dst].in_arcs.get_mut(&key);
        debug_assert!(in_arc.is_some(), "in / out arc mismatch");
        if let Some(in_arc) = in_arc {
            *in_arc = arc;
        }

        Ok(arc)
    }

    fn del_arc(&mut self, src: NodeIndex, dst: NodeIndex) -> Result<Arc, ArcError> {
        check_arc_nodes(self, src, dst)?;

        self.try_remove(src, dst).ok_or(ArcError::DoesNotExist)
    }

    fn arc(&self, src: NodeIndex, dst: NodeIndex) -> Option<Arc> {
        if !self.is_node(src) || !self.is_node(dst) {
            return None;
        }

        self.nodes[src].out_arcs.get(&Arc::new(src, dst)).copied()
    }

    fn is_arc(&self, src: NodeIndex, dst: NodeIndex) -> bool {
        self.arc(src, dst).is_some()
    }

    fn remove_all_arcs(&mut self) -> Vec<Arc> {
        let mut arcs = Vec::with_capacity(self.num_arcs);

        for node in self.nodes.iter_mut() {
            arcs.extend(node.out_arcs.drain());
            node.in_arcs = Arcs::new();
        }

        debug_assert_eq!(arcs.len(), self.num_arcs);
        self.num_arcs = 0;

        arcs
    }

    fn reverse_arc(&mut self, src: NodeIndex, dst: NodeIndex) -> bool {
        if !self.is_arc(src, dst) {
            return false;
        }

        // A loop arc is its own reverse.
        if src == dst {
            return true;
        }

        if self.is_arc(dst, src) {
            return false;
        }

        // Checked above, both must succeed.
        let arc = self.try_remove(src, dst);
        debug_assert!(arc.is_some());
        let inserted = arc.map_or(false, |arc| self.try_insert(arc.reversed()));
        debug_assert!(inserted);

        inserted
    }

    fn reverse_arcs(&mut self) -> bool {
        // Build the reversed lists on the side and swap them in once complete.
        let mut reversed = Self::with_nodes(self.node_count());

        for arc in self.arcs() {
            if !reversed.try_insert(arc.reversed()) {
                return false;
            }
        }

        debug_assert_eq!(reversed.num_arcs, self.num_arcs);
        *self = reversed;

        true
    }

    fn out_degree(&self, node: NodeIndex) -> Option<usize> {
        self.nodes.get(node).map(|node| node.out_arcs.len())
    }

    fn in_degree(&self, node: NodeIndex) -> Option<usize> {
        self.nodes.get(node).map(|node| node.in_arcs.len())
    }

    fn predecessors(&self, node: NodeIndex) -> Option<Vec<NodeIndex>> {
        self.nodes
            .get(node)
            .map(|node| node.in_arcs.iter().map(Arc::source).collect())
    }

    fn successors(&self, node: NodeIndex) -> Option<Vec<NodeIndex>> {
        self.nodes
            .get(node)
            .map(|node| node.out_arcs.iter().map(Arc::destination).collect())
    }

    fn in_arcs(&self, node: NodeIndex) -> Option<Vec<Arc>> {
        self.nodes
            .get(node)
            .map(|node| node.in_arcs.iter().copied().collect())
    }

    fn out_arcs(&self, node: NodeIndex) -> Option<Vec<Arc>> {
        self.nodes
            .get(node)
            .map(|node| node.out_arcs.iter().copied().collect())
    }

    fn transitive_closure(&self) -> Self {
        self.roy_warshall()
    }
}

impl PartialEq for ListGraph {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Display for ListGraph {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        format::fmt_graph(self, f)
    }
}
