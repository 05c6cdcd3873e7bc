use minidigraph::*;
use proptest::prelude::*;
use std::collections::{BTreeSet, VecDeque};

#[ctor::ctor]
fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Clone)]
enum Operation {
    Add(usize, usize),
    Del(usize, usize),
    Reverse(usize, usize),
    ReverseAll,
    AddNodes(usize),
    RemoveAll,
}

fn operation() -> impl Strategy<Value = Operation> {
    // Indices past the node count exercise the invalid node paths.
    prop_oneof![
        4 => (0..10usize, 0..10usize).prop_map(|(s, d)| Operation::Add(s, d)),
        2 => (0..10usize, 0..10usize).prop_map(|(s, d)| Operation::Del(s, d)),
        2 => (0..10usize, 0..10usize).prop_map(|(s, d)| Operation::Reverse(s, d)),
        1 => Just(Operation::ReverseAll),
        1 => (0..3usize).prop_map(Operation::AddNodes),
        1 => Just(Operation::RemoveAll),
    ]
}

/// `(node_count, arcs)` with all arc indices in range.
fn graph_arcs() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (0..9usize).prop_flat_map(|n| {
        let arcs = if n == 0 {
            Just(Vec::new()).boxed()
        } else {
            proptest::collection::vec((0..n, 0..n), 0..24).boxed()
        };
        (Just(n), arcs)
    })
}

fn build<G: DiGraph>(n: usize, arcs: &[(usize, usize)]) -> G {
    let mut graph = G::with_nodes(n);
    for &(src, dst) in arcs {
        // Repeats fail, which is fine.
        let _ = graph.add_arc(src, dst);
    }
    graph
}

fn sorted_arcs<G: DiGraph>(graph: &G) -> BTreeSet<(usize, usize)> {
    graph
        .arcs()
        .iter()
        .map(|arc| (arc.source(), arc.destination()))
        .collect()
}

fn reachable(n: usize, arcs: &BTreeSet<(usize, usize)>, from: usize) -> BTreeSet<usize> {
    let mut seen = BTreeSet::new();
    let mut queue = VecDeque::new();

    seen.insert(from);
    queue.push_back(from);

    while let Some(node) = queue.pop_front() {
        for next in (0..n).filter(|&next| arcs.contains(&(node, next))) {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }

    seen
}

proptest! {
    #[test]
    fn test_representations_match_model(
        initial in 0..6usize,
        ops in proptest::collection::vec(operation(), 1..80),
    ) {
        let mut model = BTreeSet::new();
        let mut n = initial;

        let mut list = ListGraph::with_nodes(n);
        let mut matrix = MatrixGraph::with_nodes(n);

        for op in ops {
            match op {
                Operation::Add(s, d) => {
                    let expected = if s >= n {
                        Err(ArcError::InvalidSource)
                    } else if d >= n {
                        Err(ArcError::InvalidDestination)
                    } else if !model.insert((s, d)) {
                        Err(ArcError::AlreadyExists)
                    } else {
                        Ok(Arc::new(s, d))
                    };

                    prop_assert_eq!(list.add_arc(s, d), expected);
                    prop_assert_eq!(matrix.add_arc(s, d), expected);
                }
                Operation::Del(s, d) => {
                    let expected = if s >= n {
                        Err(ArcError::InvalidSource)
                    } else if d >= n {
                        Err(ArcError::InvalidDestination)
                    } else if !model.remove(&(s, d)) {
                        Err(ArcError::DoesNotExist)
                    } else {
                        Ok(Arc::new(s, d))
                    };

                    prop_assert_eq!(list.del_arc(s, d), expected);
                    prop_assert_eq!(matrix.del_arc(s, d), expected);
                }
                Operation::Reverse(s, d) => {
                    let expected = model.contains(&(s, d))
                        && (s == d || !model.contains(&(d, s)));

                    if expected && s != d {
                        model.remove(&(s, d));
                        model.insert((d, s));
                    }

                    prop_assert_eq!(list.reverse_arc(s, d), expected);
                    prop_assert_eq!(matrix.reverse_arc(s, d), expected);
                }
                Operation::ReverseAll => {
                    model = model.iter().map(|&(s, d)| (d, s)).collect();

                    prop_assert!(list.reverse_arcs());
                    prop_assert!(matrix.reverse_arcs());
                }
                Operation::AddNodes(count) => {
                    n += count;

                    list.add_nodes(count);
                    matrix.add_nodes(count);
                }
                Operation::RemoveAll => {
                    let removed = model.len();
                    model.clear();

                    prop_assert_eq!(list.remove_all_arcs().len(), removed);
                    prop_assert_eq!(matrix.remove_all_arcs().len(), removed);
                }
            }

            prop_assert_eq!(list.node_count(), n);
            prop_assert_eq!(matrix.node_count(), n);
            prop_assert_eq!(list.arc_count(), model.len());
            prop_assert_eq!(matrix.arc_count(), model.len());
            prop_assert_eq!(&sorted_arcs(&list), &model);
            prop_assert_eq!(&sorted_arcs(&matrix), &model);
            prop_assert!(list.equals(&matrix));
            prop_assert!(matrix.equals(&list));
        }

        for node in 0..n {
            let out = model.iter().filter(|&&(s, _)| s == node).count();
            let inb = model.iter().filter(|&&(_, d)| d == node).count();

            prop_assert_eq!(list.out_degree(node), Some(out));
            prop_assert_eq!(matrix.in_degree(node), Some(inb));
            prop_assert_eq!(list.degree(node), matrix.degree(node));
        }

        prop_assert_eq!(list.out_degree(n), None);
        prop_assert_eq!(matrix.in_degree(n), None);
    }

    #[test]
    fn test_closure_is_reachability((n, arcs) in graph_arcs()) {
        let list: ListGraph = build(n, &arcs);
        let matrix: MatrixGraph = build(n, &arcs);
        let model = sorted_arcs(&list);

        let list_closure = list.transitive_closure();
        let matrix_closure = matrix.transitive_closure();

        prop_assert!(list_closure.equals(&matrix_closure));
        prop_assert!(closure::roy_warshall(&list).equals(&list_closure));
        prop_assert!(closure::roy_warshall(&matrix).equals(&matrix_closure));

        for i in 0..n {
            let reach = reachable(n, &model, i);

            for j in 0..n {
                prop_assert_eq!(list_closure.is_arc(i, j), reach.contains(&j));
            }
        }

        // Closing a closure changes nothing.
        prop_assert_eq!(&list_closure.transitive_closure(), &list_closure);
        prop_assert_eq!(&matrix_closure.transitive_closure(), &matrix_closure);

        // The inputs are untouched.
        prop_assert_eq!(&sorted_arcs(&list), &model);
        prop_assert_eq!(&sorted_arcs(&matrix), &model);
    }

    #[test]
    fn test_reduction((n, arcs) in graph_arcs()) {
        let list: ListGraph = build(n, &arcs);
        let matrix: MatrixGraph = build(n, &arcs);

        let reduced_list = transitive_reduction(&list);
        let reduced_matrix = transitive_reduction(&matrix);

        prop_assert!(reduced_list.equals(&reduced_matrix));

        let closure = list.transitive_closure();

        for arc in reduced_list.arcs() {
            prop_assert!(!arc.is_loop());
            prop_assert!(closure.is_arc(arc.source(), arc.destination()));
        }

        // Without cycles the reduction has the same reachability as the input.
        if !list.is_cyclic() {
            prop_assert!(reduced_list.transitive_closure().equals(&closure));
        }
    }

    #[test]
    fn test_clone_and_double_reverse((n, arcs) in graph_arcs()) {
        let original: ListGraph = build(n, &arcs);

        let mut copy = original.clone();
        prop_assert!(copy.reverse_arcs());
        prop_assert_eq!(copy.arc_count(), original.arc_count());
        prop_assert!(copy.reverse_arcs());
        prop_assert_eq!(&copy, &original);

        let mut copy = original.clone();
        copy.remove_all_arcs();
        prop_assert_eq!(copy.arc_count(), 0);
        prop_assert_eq!(&sorted_arcs(&original), &arcs.iter().copied().collect::<BTreeSet<_>>());

        let matrix: MatrixGraph = build(n, &arcs);
        let mut copy = matrix.clone();
        prop_assert!(copy.reverse_arcs());
        prop_assert!(copy.reverse_arcs());
        prop_assert_eq!(&copy, &matrix);
    }
}
