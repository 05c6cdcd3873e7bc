//! Reachability over any [`DiGraph`] representation.
//!
//! [`roy_warshall`] is the representation-independent form of the closure, written only in terms of
//! [`DiGraph::is_arc`] / [`DiGraph::add_arc`]. [`ListGraph`] and [`MatrixGraph`] override
//! [`DiGraph::transitive_closure`] with versions tuned to their storage; all of them must agree arc for arc.

use crate::*;

/// Returns the reflexive-transitive closure of `graph`, computed with the Roy-Warshall algorithm.
///
/// `O(n^3)` arc lookups. `graph` is not modified.
pub fn roy_warshall<G: DiGraph>(graph: &G) -> G {
    let n = graph.node_count();
    let mut closure = graph.clone();

    // Every node reaches itself.
    for node in 0..n {
        let _ = closure.add_arc(node, node);
    }

    // `k` must be the outermost loop: after step `k` every path whose intermediate nodes
    // are all in `0 ..= k` is represented by an arc.
    for k in 0..n {
        for i in 0..n {
            if i != k && closure.is_arc(i, k) {
                for j in 0..n {
                    if closure.is_arc(k, j) {
                        // Fails harmlessly if the arc already exists.
                        let _ = closure.add_arc(i, j);
                    }
                }
            }
        }
    }

    log::debug!(
        "closure of {} nodes: {} -> {} arcs",
        n,
        graph.arc_count(),
        closure.arc_count()
    );

    closure
}

/// Returns `true` if the graph contains a cycle. Loop arcs are cycles.
///
/// Iterative depth first search, `O(n + m)`.
pub fn is_cyclic<G: DiGraph>(graph: &G) -> bool {
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum State {
        Unvisited,
        /// On the current DFS path.
        InProgress,
        Done,
    }

    let n = graph.node_count();
    let mut state = vec![State::Unvisited; n];
    // (node, its successors, index of the next successor to visit)
    let mut stack: Vec<(NodeIndex, Vec<NodeIndex>, usize)> = Vec::new();

    for root in 0..n {
        if state[root] != State::Unvisited {
            continue;
        }

        state[root] = State::InProgress;
        stack.push((root, graph.successors(root).unwrap_or_default(), 0));

        while let Some((node, successors, next)) = stack.last_mut() {
            if let Some(&child) = successors.get(*next) {
                *next += 1;

                match state[child] {
                    State::InProgress => return true,
                    State::Unvisited => {
                        state[child] = State::InProgress;
                        let grandchildren = graph.successors(child).unwrap_or_default();
                        stack.push((child, grandchildren, 0));
                    }
                    State::Done => {}
                }
            } else {
                state[*node] = State::Done;
                stack.pop();
            }
        }
    }

    false
}
