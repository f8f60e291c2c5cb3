use graphwalk::prelude::*;
use petgraph::algo::dijkstra;
use petgraph::graphmap::UnGraphMap;
use proptest::prelude::*;
use proptest::sample::Index;

fn edge_list() -> impl Strategy<Value = Vec<(u8, u8)>> {
    proptest::collection::vec((0u8..12, 0u8..12), 1..30)
}

// Every consecutive pair is an edge and no vertex repeats
fn assert_simple_path(graph: &Graph<u8>, path: &[&u8]) {
    for pair in path.windows(2) {
        let neighbors = graph.neighbors(pair[0]).unwrap();
        assert!(neighbors.contains(&pair[1]), "{:?} is not an edge", pair);
    }
    let mut seen: Vec<&u8> = path.to_vec();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), path.len(), "path {:?} revisits a vertex", path);
}

proptest! {
    #[test]
    fn test_bfs_is_shortest_and_never_longer_than_dfs(
        edges in edge_list(),
        start_pick in any::<Index>(),
        end_pick in any::<Index>(),
    ) {
        let graph = Graph::new(edges.clone());
        let vertices: Vec<u8> = graph.nodes().map(|n| *n.content()).collect();
        if vertices.is_empty() {
            return Ok(());
        }
        let start = vertices[start_pick.index(vertices.len())];
        let end = vertices[end_pick.index(vertices.len())];

        let mut oracle = UnGraphMap::<u8, ()>::new();
        for &(a, b) in edges.iter().filter(|(a, b)| a != b) {
            oracle.add_edge(a, b, ());
        }
        let distances = dijkstra(&oracle, start, Some(end), |_| 1usize);

        let mut bfs = BreadthFirstSearch::from_graph(graph.clone());
        bfs.set_start(start);
        bfs.set_end(end);
        let bfs_found = bfs.process().unwrap();

        let mut dfs = DepthFirstSearch::from_graph(graph.clone());
        dfs.set_start(start);
        dfs.set_end(end);
        let dfs_found = dfs.process().unwrap();

        match distances.get(&end) {
            Some(&hops) => {
                prop_assert!(bfs_found && dfs_found);
                let bfs_path = bfs.result();
                let dfs_path = dfs.result();
                prop_assert_eq!(bfs_path.len() - 1, hops);
                prop_assert!(bfs_path.len() <= dfs_path.len());
                for path in [&bfs_path, &dfs_path] {
                    prop_assert_eq!(path.first(), Some(&&start));
                    prop_assert_eq!(path.last(), Some(&&end));
                    assert_simple_path(&graph, path);
                }
            }
            None => {
                prop_assert!(!bfs_found && !dfs_found);
                prop_assert!(bfs.result().is_empty() && dfs.result().is_empty());
            }
        }
    }

    #[test]
    fn test_adjacency_is_symmetric_sorted_and_loop_free(edges in edge_list()) {
        let graph = Graph::new(edges);
        for node in graph.nodes() {
            let content = node.content();
            let neighbors = graph.neighbors(content).unwrap();
            prop_assert!(neighbors.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(!neighbors.contains(&content));
            for neighbor in neighbors {
                prop_assert!(graph.neighbors(neighbor).unwrap().contains(&content));
            }
        }
    }

    #[test]
    fn test_repeated_process_is_stable(
        edges in edge_list(),
        start_pick in any::<Index>(),
        end_pick in any::<Index>(),
    ) {
        let graph = Graph::new(edges);
        let vertices: Vec<u8> = graph.nodes().map(|n| *n.content()).collect();
        if vertices.is_empty() {
            return Ok(());
        }
        for kind in SearchKind::ALL {
            let mut search = kind.build(graph.clone(), SearchConfig::default());
            search.set_start(vertices[start_pick.index(vertices.len())]);
            search.set_end(vertices[end_pick.index(vertices.len())]);
            let first = search.process().unwrap();
            let first_path: Vec<u8> = search.result().into_iter().copied().collect();
            let second = search.process().unwrap();
            let second_path: Vec<u8> = search.result().into_iter().copied().collect();
            prop_assert_eq!(first, second);
            prop_assert_eq!(first_path, second_path);
        }
    }
}
