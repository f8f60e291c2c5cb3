#[cfg(test)]
mod tests {
    use crate::node::*;

    // Arena of bare nodes with the given contents, ids in order
    fn arena(contents: &[i32]) -> Vec<Node<i32>> {
        contents.iter().copied().map(Node::new).collect()
    }

    fn link(nodes: &mut [Node<i32>], from: usize, to: usize) -> bool {
        let position = {
            let target = nodes[to].content();
            nodes[from].neighbor_position(target, |id| nodes[id.index()].content())
        };
        nodes[from].add_neighbor(position, NodeId(to))
    }

    fn neighbor_contents(nodes: &[Node<i32>], of: usize) -> Vec<i32> {
        nodes[of]
            .adjacency()
            .iter()
            .map(|id| *nodes[id.index()].content())
            .collect()
    }

    #[test]
    fn test_add_neighbor_keeps_sorted_order() {
        let mut nodes = arena(&[5, 9, 1, 7, 3]);
        for to in [1, 2, 3, 4] {
            assert!(link(&mut nodes, 0, to));
        }

        assert_eq!(neighbor_contents(&nodes, 0), vec![1, 3, 7, 9]);
        assert_eq!(nodes[0].degree(), 4);
    }

    #[test]
    fn test_add_neighbor_is_noop_when_present() {
        let mut nodes = arena(&[0, 1, 2]);
        assert!(link(&mut nodes, 0, 1));
        assert!(link(&mut nodes, 0, 2));
        assert!(!link(&mut nodes, 0, 1));
        assert!(!link(&mut nodes, 0, 2));

        assert_eq!(neighbor_contents(&nodes, 0), vec![1, 2]);
    }

    #[test]
    fn test_node_equality_and_order_follow_content() {
        let mut a = Node::new(4);
        let b = Node::new(4);
        let c = Node::new(6);
        a.add_neighbor(Err(0), NodeId(2));

        assert_eq!(a, b);
        assert!(a < c);
        assert_eq!(a.cmp(&c), std::cmp::Ordering::Less);
    }

    #[test]
    fn test_visit_lifecycle() {
        let mut visit = Visit::default();
        assert_eq!(visit.state(), NodeState::NotFound);
        assert_eq!(visit.parent(), None);

        visit.open();
        assert_eq!(visit.state(), NodeState::Open);
        visit.set_parent(NodeId(3));
        assert_eq!(visit.parent(), Some(NodeId(3)));
        visit.close();
        assert_eq!(visit.state(), NodeState::Closed);

        visit.reset();
        assert_eq!(visit, Visit::default());
        assert_eq!(visit.cursor(), 0);
    }

    #[test]
    fn test_next_skips_discovered_neighbors() {
        let adjacency = [NodeId(1), NodeId(2), NodeId(3)];
        let mut visits = Visits::with_len(4);
        visits.open(NodeId(1));

        assert_eq!(visits.next(NodeId(0), &adjacency), Some(NodeId(2)));
        assert_eq!(visits.get(NodeId(0)).cursor(), 2);

        // Discovered between calls: skipped on resume
        visits.close(NodeId(3));
        assert_eq!(visits.next(NodeId(0), &adjacency), None);
        assert_eq!(visits.get(NodeId(0)).cursor(), 3);
        assert_eq!(visits.next(NodeId(0), &adjacency), None);
    }

    #[test]
    fn test_next_resumes_from_cursor() {
        let adjacency = [NodeId(1), NodeId(2)];
        let mut visits = Visits::with_len(3);

        assert_eq!(visits.next(NodeId(0), &adjacency), Some(NodeId(1)));
        // Neighbor 1 is still NotFound but the cursor has moved past it
        assert_eq!(visits.next(NodeId(0), &adjacency), Some(NodeId(2)));
        assert_eq!(visits.next(NodeId(0), &adjacency), None);
    }

    #[test]
    fn test_reset_all_clears_every_record() {
        let adjacency = [NodeId(1)];
        let mut visits = Visits::with_len(2);
        visits.open(NodeId(0));
        visits.set_parent(NodeId(1), NodeId(0));
        visits.next(NodeId(0), &adjacency);

        visits.reset_all();

        for id in [NodeId(0), NodeId(1)] {
            assert_eq!(*visits.get(id), Visit::default());
        }
    }

    #[test]
    fn test_ensure_grows_table() {
        let mut visits = Visits::default();
        assert!(visits.is_empty());
        visits.ensure(NodeId(4));
        assert_eq!(visits.len(), 5);
        visits.ensure(NodeId(2));
        assert_eq!(visits.len(), 5);
    }

    #[test]
    fn test_visit_lookup_rejects_foreign_id() {
        let mut visits = Visits::with_len(2);
        visits.open(NodeId(1));

        assert_eq!(visits.visit(NodeId(1)).map(Visit::state), Some(NodeState::Open));
        assert_eq!(visits.visit(NodeId(0)), Some(&Visit::default()));
        // An id minted by a bigger graph
        assert_eq!(visits.visit(NodeId(7)), None);
    }

    #[test]
    fn test_node_id_display() {
        assert_eq!(NodeId(3).to_string(), "#3");
        assert_eq!(NodeId(3).index(), 3);
    }

    #[test]
    fn test_node_state_serde() {
        let json = serde_json::to_string(&NodeState::NotFound).unwrap();
        assert_eq!(json, "\"not_found\"");
        assert_eq!(NodeState::default(), NodeState::NotFound);
    }
}
