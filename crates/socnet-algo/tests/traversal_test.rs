use socnet_algo::traversal::{bfs, dfs};
use socnet_algo::{Payload, StepEvent};
use socnet_graph::{Graph, NewNode, NodeId};

// 1 - 2 - 4
// |   |
// 3 --+     5 (isolated)
fn sample() -> Graph {
    let mut g = Graph::default();
    for _ in 0..5 {
        g.add_node(NewNode::new()).unwrap();
    }
    g.add_edge(1, 2).unwrap();
    g.add_edge(1, 3).unwrap();
    g.add_edge(2, 3).unwrap();
    g.add_edge(2, 4).unwrap();
    g
}

#[test]
fn bfs_visits_level_by_level_in_adjacency_order() {
    let g = sample();
    let r = bfs(&g, 1);
    assert!(r.success);
    let Payload::Bfs(out) = &r.payload else {
        panic!("unexpected payload: {:?}", r.payload);
    };
    assert_eq!(out.visit_order, vec![1, 2, 3, 4]);
    assert_eq!(out.levels[&1], 0);
    assert_eq!(out.levels[&3], 1);
    assert_eq!(out.levels[&4], 2);
    assert_eq!(out.visited_count, 4);
    assert!(!out.levels.contains_key(&5));

    let discovered: Vec<NodeId> = r.events("discover").filter_map(|e| e.node()).collect();
    assert_eq!(discovered, vec![2, 3, 4]);
    assert_eq!(r.message, "4 nodes visited");
}

#[test]
fn bfs_levels_never_decrease_along_the_visit_order() {
    let g = socnet_graph::sample::generate(30, 0.15, 11);
    let start = g.node_ids()[0];
    let r = bfs(&g, start);
    let levels: Vec<usize> = r
        .events("visit")
        .map(|e| match e {
            StepEvent::Visit { level, .. } => *level,
            other => panic!("unexpected event {other:?}"),
        })
        .collect();
    assert!(levels.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn unknown_start_fails_without_payload() {
    let g = sample();
    for r in [bfs(&g, 42), dfs(&g, 42)] {
        assert!(!r.success);
        assert_eq!(r.payload, Payload::None);
        assert!(r.steps.is_empty());
        assert!(r.message.contains("42"));
    }
}

#[test]
fn dfs_numbers_nodes_in_pre_and_post_order() {
    let g = sample();
    let r = dfs(&g, 1);
    assert!(r.success);
    let Payload::Dfs(out) = &r.payload else {
        panic!("unexpected payload: {:?}", r.payload);
    };
    // 1 -> 2 -> 3 (back to 1 already seen), then 2 -> 4.
    assert_eq!(out.visit_order, vec![1, 2, 3, 4]);
    assert_eq!(out.discovery_time[&1], 1);
    assert_eq!(out.discovery_time[&2], 2);
    assert_eq!(out.discovery_time[&3], 3);
    assert_eq!(out.finish_time[&3], 4);
    assert_eq!(out.discovery_time[&4], 5);
    assert_eq!(out.finish_time[&4], 6);
    assert_eq!(out.finish_time[&2], 7);
    assert_eq!(out.finish_time[&1], 8);

    let explored: Vec<(NodeId, NodeId)> = r
        .steps
        .iter()
        .filter_map(|s| match s.event {
            StepEvent::ExploreEdge { from, to, .. } => Some((from, to)),
            _ => None,
        })
        .collect();
    assert_eq!(explored, vec![(1, 2), (2, 3), (2, 4)]);
}

#[test]
fn dfs_handles_long_chains_without_recursion() {
    let mut g = Graph::default();
    let ids: Vec<NodeId> = (0..20_000)
        .map(|_| g.add_node(NewNode::new().at(0.0, 0.0)).unwrap())
        .collect();
    for w in ids.windows(2) {
        g.add_edge(w[0], w[1]).unwrap();
    }
    let r = dfs(&g, ids[0]);
    let Payload::Dfs(out) = &r.payload else {
        panic!("unexpected payload");
    };
    assert_eq!(out.visited_count, ids.len());
    assert_eq!(out.finish_time[&ids[0]], 2 * ids.len() as u32);
}

#[test]
fn traversal_is_reproducible() {
    let g = socnet_graph::sample::generate(25, 0.2, 5);
    let start = g.node_ids()[3];
    let a = dfs(&g, start);
    let b = dfs(&g, start);
    assert_eq!(a.payload, b.payload);
    let ea: Vec<_> = a.steps.iter().map(|s| &s.event).collect();
    let eb: Vec<_> = b.steps.iter().map(|s| &s.event).collect();
    assert_eq!(ea, eb);
}
