mod common;

use common::{digraph, init_tracing, Lcg};
use graph_algorithms::graph::{Digraph, Edge};
use graph_algorithms::shortest_path::{Acyclic, ArrayDijkstra, BellmanFord, EagerDijkstra, LazyDijkstra, ShortestPaths, Spfa};
use graph_algorithms::{Error, Result};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[derive(Debug, Clone, Copy)]
enum Solver {
    Acyclic,
    ArrayDijkstra,
    EagerDijkstra,
    LazyDijkstra,
    BellmanFord,
    Spfa,
}

impl Solver {
    fn solve(self, graph: &Digraph<i64>, source: usize) -> Result<ShortestPaths<i64>> {
        match self {
            Solver::Acyclic => Acyclic::default().solve(graph, source),
            Solver::ArrayDijkstra => ArrayDijkstra::default().solve(graph, source),
            Solver::EagerDijkstra => EagerDijkstra.solve(graph, source),
            Solver::LazyDijkstra => LazyDijkstra.solve(graph, source),
            Solver::BellmanFord => BellmanFord.solve(graph, source),
            Solver::Spfa => Spfa::default().solve(graph, source),
        }
    }
}

fn small_dag() -> Digraph<i64> {
    digraph(4, &[(0, 1, 1), (0, 2, 4), (1, 2, 2), (1, 3, 5), (2, 3, 1)])
}

#[rstest]
fn finds_distances_on_small_dag(
    #[values(Solver::Acyclic, Solver::ArrayDijkstra, Solver::EagerDijkstra, Solver::LazyDijkstra, Solver::BellmanFord, Solver::Spfa)] solver: Solver,
) {
    init_tracing();
    let paths = solver.solve(&small_dag(), 0).unwrap();

    assert_eq!(paths.distances(), &[Some(0), Some(1), Some(3), Some(4)]);
    assert_eq!(paths.source(), 0);
    assert_eq!(paths.edge_to(0), None);
    assert_eq!(paths.path_to(3).unwrap(), vec![Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(2, 3, 1)]);
    assert!(paths.path_to(0).unwrap().is_empty());
}

#[rstest]
fn leaves_unreachable_vertices_absent(
    #[values(Solver::Acyclic, Solver::ArrayDijkstra, Solver::EagerDijkstra, Solver::LazyDijkstra, Solver::BellmanFord, Solver::Spfa)] solver: Solver,
) {
    let graph = digraph(5, &[(1, 0, 3), (1, 2, 1), (3, 4, 2)]);
    let paths = solver.solve(&graph, 1).unwrap();

    assert_eq!(paths.distances(), &[Some(3), Some(0), Some(1), None, None]);
    assert!(!paths.has_path_to(4));
    assert_eq!(paths.edge_to(4), None);
    assert_eq!(paths.path_to(3), None);
    assert_eq!(paths.dist_to(99), None);
}

#[rstest]
fn rejects_unknown_source(
    #[values(Solver::Acyclic, Solver::ArrayDijkstra, Solver::EagerDijkstra, Solver::LazyDijkstra, Solver::BellmanFord, Solver::Spfa)] solver: Solver,
) {
    assert!(matches!(solver.solve(&small_dag(), 4), Err(Error::VertexOutOfRange { vertex: 4, num_vertices: 4 })));
}

#[rstest]
fn dijkstra_rejects_negative_weights(#[values(Solver::ArrayDijkstra, Solver::EagerDijkstra, Solver::LazyDijkstra)] solver: Solver) {
    let graph = digraph(3, &[(0, 1, 2), (1, 2, -1)]);
    assert!(matches!(solver.solve(&graph, 0), Err(Error::NegativeWeight { from: 1, to: 2 })));
}

#[rstest]
fn handles_negative_weights(#[values(Solver::Acyclic, Solver::BellmanFord, Solver::Spfa)] solver: Solver) {
    init_tracing();
    let graph = digraph(5, &[(0, 1, 4), (0, 2, 2), (2, 1, -3), (1, 3, 2), (2, 3, 5), (3, 4, -1)]);
    let paths = solver.solve(&graph, 0).unwrap();

    assert_eq!(paths.distances(), &[Some(0), Some(-1), Some(2), Some(1), Some(0)]);
    assert_eq!(paths.edge_to(1), Some(&Edge::new(2, 1, -3)));
}

#[rstest]
#[case::two_cycle(vec![(0, 1, -1), (1, 0, -1)])]
#[case::behind_a_tail(vec![(0, 1, 1), (1, 2, 2), (2, 3, -4), (3, 1, 1)])]
fn detects_negative_cycle(#[values(Solver::BellmanFord, Solver::Spfa)] solver: Solver, #[case] edges: Vec<(usize, usize, i64)>) {
    init_tracing();
    let graph = digraph(4, &edges);
    assert!(matches!(solver.solve(&graph, 0), Err(Error::NegativeCycle { .. })));
}

#[rstest]
fn ignores_negative_cycle_out_of_reach(#[values(Solver::BellmanFord, Solver::Spfa)] solver: Solver) {
    let graph = digraph(4, &[(0, 1, 2), (2, 3, -5), (3, 2, 1)]);
    let paths = solver.solve(&graph, 0).unwrap();
    assert_eq!(paths.distances(), &[Some(0), Some(2), None, None]);
}

#[test]
fn positive_cycle_is_harmless() {
    let graph = digraph(3, &[(0, 1, 1), (1, 2, 1), (2, 0, 1)]);
    for solver in [Solver::ArrayDijkstra, Solver::EagerDijkstra, Solver::LazyDijkstra, Solver::BellmanFord, Solver::Spfa] {
        assert_eq!(solver.solve(&graph, 1).unwrap().distances(), &[Some(2), Some(0), Some(1)], "{solver:?}");
    }
    assert!(matches!(Solver::Acyclic.solve(&graph, 0), Err(Error::CyclicGraph)));
}

#[rstest]
#[case(2)]
#[case(9)]
#[case(31)]
fn solvers_agree_on_random_graphs(#[case] seed: u64) {
    let mut rng = Lcg(seed);
    let n = 40;
    let mut graph = Digraph::new(n);
    for _ in 0..200 {
        let from = (rng.next() % n as u64) as usize;
        let to = (rng.next() % n as u64) as usize;
        graph.add_edge(from, to, (rng.next() % 50) as i64).unwrap();
    }

    let expected = BellmanFord.solve(&graph, 0).unwrap();
    for solver in [Solver::ArrayDijkstra, Solver::EagerDijkstra, Solver::LazyDijkstra, Solver::Spfa] {
        let paths = solver.solve(&graph, 0).unwrap();
        assert_eq!(paths.distances(), expected.distances(), "{solver:?}");
        for v in 0..n {
            // the recorded path must add up to the distance
            let total = paths.path_to(v).map(|path| path.iter().map(|e| e.weight).sum::<i64>());
            assert_eq!(total, expected.dist_to(v), "{solver:?} vertex {v}");
        }
    }
}

#[test]
fn distance_overflow_is_an_error() {
    let mut graph = Digraph::new(3);
    graph.add_edge(0, 1, i32::MAX).unwrap();
    graph.add_edge(1, 2, 1).unwrap();

    let results = [
        Acyclic::default().solve(&graph, 0),
        ArrayDijkstra::default().solve(&graph, 0),
        EagerDijkstra.solve(&graph, 0),
        LazyDijkstra.solve(&graph, 0),
        BellmanFord.solve(&graph, 0),
        Spfa::default().solve(&graph, 0),
    ];
    for result in results {
        assert!(matches!(result, Err(Error::WeightOverflow { from: 1, to: 2 })), "{result:?}");
    }

    // reaching the maximum exactly is fine
    let mut graph = Digraph::new(3);
    graph.add_edge(0, 1, i32::MAX - 1).unwrap();
    graph.add_edge(1, 2, 1).unwrap();
    assert_eq!(BellmanFord.solve(&graph, 0).unwrap().dist_to(2), Some(i32::MAX));
    assert_eq!(EagerDijkstra.solve(&graph, 0).unwrap().dist_to(2), Some(i32::MAX));
}
