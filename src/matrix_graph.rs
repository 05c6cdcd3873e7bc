use {
    crate::*,
    std::fmt::{Display, Formatter},
};

/// Represents a digraph as an `N x N` boolean adjacency matrix.
///
/// Arc costs are not stored: all arcs returned by the graph have zero cost.
/// [`add_arc`](DiGraph::add_arc) / [`del_arc`](DiGraph::del_arc) / [`is_arc`](DiGraph::is_arc)
/// are `O(1)`; node queries scan a matrix row / column and return nodes in ascending order.
#[derive(Clone, Debug)]
pub struct MatrixGraph {
    /// Row-major `num_nodes * num_nodes` cells; `src` row, `dst` column.
    matrix: Vec<bool>,
    num_nodes: usize,
    /// Number of `true` cells in the `matrix`.
    num_arcs: usize,
}

impl MatrixGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::with_nodes(0)
    }

    /// The caller guarantees the node indices are valid.
    fn cell(&self, src: NodeIndex, dst: NodeIndex) -> bool {
        self.matrix[src * self.num_nodes + dst]
    }

    /// The caller guarantees the node indices are valid.
    fn cell_mut(&mut self, src: NodeIndex, dst: NodeIndex) -> &mut bool {
        &mut self.matrix[src * self.num_nodes + dst]
    }

    /// The caller guarantees the node `node` is valid.
    fn row(&self, node: NodeIndex) -> &[bool] {
        let start = node * self.num_nodes;
        &self.matrix[start..start + self.num_nodes]
    }

    fn column(&self, node: NodeIndex) -> impl Iterator<Item = bool> + '_ {
        self.matrix
            .iter()
            .skip(node)
            .step_by(self.num_nodes.max(1))
            .copied()
    }

    /// Returns the number of matrix cells for `node_count` nodes, if it fits in a `Vec`.
    fn cell_count(node_count: usize) -> Option<usize> {
        node_count
            .checked_mul(node_count)
            .filter(|&cells| cells <= isize::MAX as usize)
    }

    fn count_arcs(&self) -> usize {
        self.matrix.iter().filter(|&&cell| cell).count()
    }

    /// Roy-Warshall on the raw matrix: for every intermediate `k`,
    /// ORs row `k` into every row `i` with `i -> k`.
    fn roy_warshall(&self) -> Self {
        let n = self.num_nodes;
        let mut closure = self.clone();

        // M := M + I
        for node in 0..n {
            *closure.cell_mut(node, node) = true;
        }

        for k in 0..n {
            for i in 0..n {
                if i != k && closure.cell(i, k) {
                    log::trace!("closure: {} reaches everything {} reaches", i, k);

                    for j in 0..n {
                        if closure.cell(k, j) {
                            *closure.cell_mut(i, j) = true;
                        }
                    }
                }
            }
        }

        // Cells were set without checking, tally the result.
        closure.num_arcs = closure.count_arcs();

        log::debug!(
            "matrix closure of {} nodes: {} -> {} arcs",
            n,
            self.num_arcs,
            closure.num_arcs
        );

        closure
    }
}

impl Default for MatrixGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl DiGraph for MatrixGraph {
    /// # Panics
    ///
    /// Panics if the `node_count x node_count` matrix size overflows,
    /// see [`try_with_nodes`](DiGraph::try_with_nodes).
    fn with_nodes(node_count: usize) -> Self {
        Self::try_with_nodes(node_count)
            .unwrap_or_else(|| panic!("adjacency matrix of {} nodes is too large", node_count))
    }

    fn try_with_nodes(node_count: usize) -> Option<Self> {
        Self::cell_count(node_count).map(|cells| Self {
            matrix: vec![false; cells],
            num_nodes: node_count,
            num_arcs: 0,
        })
    }

    fn node_count(&self) -> usize {
        self.num_nodes
    }

    fn arc_count(&self) -> usize {
        self.num_arcs
    }

    fn add_nodes(&mut self, count: usize) {
        if count == 0 {
            return;
        }

        let mut grown = Self::with_nodes(self.num_nodes + count);

        for src in 0..self.num_nodes {
            let start = src * grown.num_nodes;
            grown.matrix[start..start + self.num_nodes].copy_from_slice(self.row(src));
        }

        grown.num_arcs = self.num_arcs;
        *self = grown;
    }

    fn add_arc_with_cost(
        &mut self,
        src: NodeIndex,
        dst: NodeIndex,
        cost: f64,
    ) -> Result<Arc, ArcError> {
        check_arc_nodes(self, src, dst)?;

        let cell = self.cell_mut(src, dst);

        if *cell {
            return Err(ArcError::AlreadyExists);
        }

        *cell = true;
        self.num_arcs += 1;

        Ok(Arc::new(src, dst).with_cost(cost))
    }

    /// The matrix does not store costs: only validates the arc and returns it with the new `cost`.
    fn set_arc_cost(
        &mut self,
        src: NodeIndex,
        dst: NodeIndex,
        cost: f64,
    ) -> Result<Arc, ArcError> {
        check_arc_nodes(self, src, dst)?;

        if self.cell(src, dst) {
            Ok(Arc::new(src, dst).with_cost(cost))
        } else {
            Err(ArcError::DoesNotExist)
        }
    }

    fn del_arc(&mut self, src: NodeIndex, dst: NodeIndex) -> Result<Arc, ArcError> {
        check_arc_nodes(self, src, dst)?;

        let cell = self.cell_mut(src, dst);

        if !*cell {
            return Err(ArcError::DoesNotExist);
        }

        *cell = false;
        debug_assert!(self.num_arcs > 0);
        self.num_arcs -= 1;

        Ok(Arc::new(src, dst))
    }

    fn arc(&self, src: NodeIndex, dst: NodeIndex) -> Option<Arc> {
        self.is_arc(src, dst).then(|| Arc::new(src, dst))
    }

    fn is_arc(&self, src: NodeIndex, dst: NodeIndex) -> bool {
        self.is_node(src) && self.is_node(dst) && self.cell(src, dst)
    }

    fn remove_all_arcs(&mut self) -> Vec<Arc> {
        let arcs = self.arcs();

        self.matrix.fill(false);
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

        if self.cell(dst, src) {
            return false;
        }

        *self.cell_mut(src, dst) = false;
        *self.cell_mut(dst, src) = true;

        true
    }

    fn reverse_arcs(&mut self) -> bool {
        // Build the transposed matrix on the side and swap it in once complete.
        let mut reversed = Self::with_nodes(self.num_nodes);

        for src in 0..self.num_nodes {
            for dst in 0..self.num_nodes {
                *reversed.cell_mut(dst, src) = self.cell(src, dst);
            }
        }

        reversed.num_arcs = self.num_arcs;
        *self = reversed;

        true
    }

    fn out_degree(&self, node: NodeIndex) -> Option<usize> {
        self.is_node(node)
            .then(|| self.row(node).iter().filter(|&&cell| cell).count())
    }

    fn in_degree(&self, node: NodeIndex) -> Option<usize> {
        self.is_node(node)
            .then(|| self.column(node).filter(|&cell| cell).count())
    }

    fn predecessors(&self, node: NodeIndex) -> Option<Vec<NodeIndex>> {
        self.is_node(node).then(|| {
            self.column(node)
                .enumerate()
                .filter_map(|(src, cell)| cell.then_some(src))
                .collect()
        })
    }

    fn successors(&self, node: NodeIndex) -> Option<Vec<NodeIndex>> {
        self.is_node(node).then(|| {
            self.row(node)
                .iter()
                .enumerate()
                .filter_map(|(dst, &cell)| cell.then_some(dst))
                .collect()
        })
    }

    fn in_arcs(&self, node: NodeIndex) -> Option<Vec<Arc>> {
        self.predecessors(node)
            .map(|preds| preds.into_iter().map(|src| Arc::new(src, node)).collect())
    }

    fn out_arcs(&self, node: NodeIndex) -> Option<Vec<Arc>> {
        self.successors(node)
            .map(|succs| succs.into_iter().map(|dst| Arc::new(node, dst)).collect())
    }

    fn transitive_closure(&self) -> Self {
        self.roy_warshall()
    }
}

impl PartialEq for MatrixGraph {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Display for MatrixGraph {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        format::fmt_graph(self, f)
    }
}
