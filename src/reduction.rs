//! Transitive reduction on top of the [`closure`](DiGraph::transitive_closure).
//!
//! A predecessor `p` of node `n` is *shadowed* if it reaches some other predecessor `q` of `n`
//! (`q != p`, `q != n`): the arc `p -> n` is then implied by `p -> .. -> q -> n`.
//! The *immediate* predecessors of `n` are its closure predecessors which are not shadowed.
//!
//! Shadowing is always decided on the unmodified closure, so the order in which shadowed arcs
//! are removed never changes the result.
//!
//! <https://en.wikipedia.org/wiki/Transitive_reduction>

use crate::*;

/// Returns the predecessors of `node` in `closure`, other than `node` itself, which are not shadowed.
///
/// The caller guarantees the node `node` is valid.
fn immediate_predecessors_of<G: DiGraph>(closure: &G, node: NodeIndex) -> Vec<NodeIndex> {
    let predecessors: Vec<_> = closure
        .predecessors(node)
        .unwrap_or_default()
        .into_iter()
        .filter(|&pred| pred != node)
        .collect();

    predecessors
        .iter()
        .copied()
        .filter(|&pred| {
            !predecessors
                .iter()
                .any(|&other| other != pred && closure.is_arc(pred, other))
        })
        .collect()
}

/// For every node of the (reflexive-transitive) `closure`, returns its immediate predecessors,
/// in the closure's predecessor order.
pub fn immediate_predecessors<G: DiGraph>(closure: &G) -> Vec<Vec<NodeIndex>> {
    (0..closure.node_count())
        .map(|node| immediate_predecessors_of(closure, node))
        .collect()
}

/// Returns a copy of the (reflexive-transitive) `closure` with loop arcs and shadowed arcs removed.
pub fn reduce_closure<G: DiGraph>(closure: &G) -> G {
    let mut reduced = closure.clone();

    for node in 0..closure.node_count() {
        // Loop arcs are not prerequisites.
        let _ = reduced.del_arc(node, node);

        let predecessors = closure.predecessors(node).unwrap_or_default();
        let immediate = immediate_predecessors_of(closure, node);

        for pred in predecessors
            .into_iter()
            .filter(|&pred| pred != node && !immediate.contains(&pred))
        {
            let removed = reduced.del_arc(pred, node);
            debug_assert!(removed.is_ok(), "closure arc missing from its copy");
        }
    }

    log::debug!(
        "reduced closure of {} nodes: {} -> {} arcs",
        closure.node_count(),
        closure.arc_count(),
        reduced.arc_count()
    );

    reduced
}

/// Returns the transitive reduction of `graph`: the arcs of its closure which are not implied by other arcs.
///
/// For an acyclic graph this is its unique minimal equivalent graph.
/// In a cycle every node is reachable from every other one, so cycle members shadow each other.
/// `graph` is not modified.
pub fn transitive_reduction<G: DiGraph>(graph: &G) -> G {
    reduce_closure(&graph.transitive_closure())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut nodes: Vec<NodeIndex>) -> Vec<NodeIndex> {
        nodes.sort_unstable();
        nodes
    }

    #[test]
    fn shortcut_is_shadowed() {
        // { A -> B -> C; A -> C }
        let (a, b, c) = (0, 1, 2);

        let mut graph = ListGraph::with_nodes(3);
        graph.add_arc(a, b).unwrap();
        graph.add_arc(b, c).unwrap();
        graph.add_arc(a, c).unwrap();

        let closure = graph.transitive_closure();

        assert!(closure.is_arc(a, a));
        assert!(closure.is_arc(a, c));

        let immediate = immediate_predecessors(&closure);

        assert!(immediate[a].is_empty());
        assert_eq!(immediate[b], vec![a]);
        assert_eq!(immediate[c], vec![b]);

        let reduced = reduce_closure(&closure);

        assert_eq!(reduced.arc_count(), 2);
        assert!(reduced.is_arc(a, b));
        assert!(reduced.is_arc(b, c));
        assert!(!reduced.is_arc(a, c));
        assert!(!reduced.is_arc(a, a));

        // The closure is untouched.
        assert_eq!(closure.arc_count(), 6);
    }

    #[test]
    fn transitive_reduction_both_representations() {
        //   /----->-----\
        //  /---->---\    \
        // A -> B -> C -> D -> E    A -> B -> C -> D -> E
        //  \    \------>-----/      \--> F
        //   \--> F
        //                       =>
        // G -> H -> I               G -> H -> I
        //  \--->---/

        fn build<G: DiGraph>() -> G {
            let (a, b, c, d, e, f, g, h, i) = (0, 1, 2, 3, 4, 5, 6, 7, 8);

            let mut graph = G::with_nodes(9);

            graph.add_arc(a, b).unwrap();
            graph.add_arc(a, f).unwrap();
            graph.add_arc(b, c).unwrap();
            graph.add_arc(c, d).unwrap();
            graph.add_arc(d, e).unwrap();

            graph.add_arc(a, c).unwrap(); // Redundant arc.
            graph.add_arc(a, d).unwrap(); // Redundant arc.
            graph.add_arc(b, e).unwrap(); // Redundant arc.

            graph.add_arc(g, h).unwrap();
            graph.add_arc(h, i).unwrap();

            graph.add_arc(g, i).unwrap(); // Redundant arc.

            graph
        }

        let list: ListGraph = build();
        let matrix: MatrixGraph = build();

        assert_eq!(list.arc_count(), 11);

        let reduced_list = transitive_reduction(&list);
        let reduced_matrix = transitive_reduction(&matrix);

        assert_eq!(reduced_list.node_count(), 9);
        assert_eq!(reduced_list.arc_count(), 7); // Redundant arcs removed.
        assert!(reduced_list.equals(&reduced_matrix));

        let mut arcs: Vec<_> = reduced_list
            .arcs()
            .iter()
            .map(|arc| (arc.source(), arc.destination()))
            .collect();
        arcs.sort_unstable();

        assert_eq!(
            arcs,
            vec![(0, 1), (0, 5), (1, 2), (2, 3), (3, 4), (6, 7), (7, 8)]
        );

        // The input is untouched.
        assert_eq!(list.arc_count(), 11);
        assert_eq!(matrix.arc_count(), 11);
    }

    #[test]
    fn diamond_keeps_both_branches() {
        // { A -> B -> D; A -> C -> D; A -> D }
        let mut graph = MatrixGraph::with_nodes(4);

        graph.add_arc(0, 1).unwrap();
        graph.add_arc(0, 2).unwrap();
        graph.add_arc(1, 3).unwrap();
        graph.add_arc(2, 3).unwrap();
        graph.add_arc(0, 3).unwrap();

        let immediate = immediate_predecessors(&graph.transitive_closure());

        assert_eq!(sorted(immediate[3].clone()), vec![1, 2]);
        assert_eq!(immediate[1], vec![0]);
        assert_eq!(immediate[2], vec![0]);
        assert!(immediate[0].is_empty());
    }

    #[test]
    fn order_independent() {
        // Same arcs inserted in opposite orders produce different list orders,
        // but the same reduction.
        let arcs = [(0, 1), (1, 2), (2, 3), (0, 2), (0, 3), (1, 3)];

        let mut forward = ListGraph::with_nodes(4);
        for &(src, dst) in arcs.iter() {
            forward.add_arc(src, dst).unwrap();
        }

        let mut backward = ListGraph::with_nodes(4);
        for &(src, dst) in arcs.iter().rev() {
            backward.add_arc(src, dst).unwrap();
        }

        let forward = transitive_reduction(&forward);
        let backward = transitive_reduction(&backward);

        assert_eq!(forward, backward);
        assert_eq!(forward.arc_count(), 3);
    }

    #[test]
    fn cycle_members_shadow_each_other() {
        // { A -> B -> A; B -> C }
        let mut graph = ListGraph::with_nodes(3);

        graph.add_arc(0, 1).unwrap();
        graph.add_arc(1, 0).unwrap();
        graph.add_arc(1, 2).unwrap();

        let immediate = immediate_predecessors(&graph.transitive_closure());

        assert_eq!(immediate[0], vec![1]);
        assert_eq!(immediate[1], vec![0]);
        assert!(immediate[2].is_empty());
    }

    #[test]
    fn empty_and_isolated() {
        assert!(immediate_predecessors(&ListGraph::new()).is_empty());

        let reduced = transitive_reduction(&MatrixGraph::with_nodes(3));

        assert_eq!(reduced.node_count(), 3);
        assert_eq!(reduced.arc_count(), 0);
    }
}
