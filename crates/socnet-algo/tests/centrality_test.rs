use socnet_algo::centrality::degree_centrality;
use socnet_algo::{CentralityOptions, CentralityOutput, Payload};
use socnet_graph::{Graph, NewNode, NodeId};

fn centrality_of(g: &Graph, top_k: usize) -> CentralityOutput {
    match degree_centrality(g, &CentralityOptions { top_k }).payload {
        Payload::Centrality(c) => c,
        other => panic!("unexpected payload: {other:?}"),
    }
}

fn star(leaves: usize) -> (Graph, NodeId) {
    let mut g = Graph::default();
    let hub = g.add_node(NewNode::named("hub")).unwrap();
    for _ in 0..leaves {
        let leaf = g.add_node(NewNode::new()).unwrap();
        g.add_edge(hub, leaf).unwrap();
    }
    (g, hub)
}

#[test]
fn star_hub_ranks_first() {
    let (g, hub) = star(4);
    let r = degree_centrality(&g, &CentralityOptions::default());
    assert!(r.success);
    assert_eq!(r.message, "most central node: hub (degree 4)");

    let out = centrality_of(&g, 5);
    assert_eq!(out.centrality[&hub], 1.0);
    assert_eq!(out.centrality[&2], 0.25);
    assert_eq!(out.top_k.len(), 5);
    assert_eq!(out.top_k[0].node, hub);
    assert_eq!(out.top_k[0].rank, 1);
    // Leaf ties keep node order.
    let leaves: Vec<NodeId> = out.top_k[1..].iter().map(|r| r.node).collect();
    assert_eq!(leaves, vec![2, 3, 4, 5]);

    assert_eq!(out.statistics.max_centrality, 1.0);
    assert_eq!(out.statistics.min_centrality, 0.25);
    assert_eq!(out.statistics.max_degree, 4);
    assert_eq!(out.statistics.min_degree, 1);
    assert!((out.statistics.average_degree - 1.6).abs() < 1e-12);
}

#[test]
fn top_k_is_sorted_and_truncated() {
    let g = socnet_graph::sample::generate(40, 0.1, 21);
    let out = centrality_of(&g, 7);
    assert_eq!(out.top_k.len(), 7);
    for w in out.top_k.windows(2) {
        assert!(
            (w[0].centrality, w[0].degree) >= (w[1].centrality, w[1].degree),
            "{:?} before {:?}",
            w[0],
            w[1]
        );
    }
    let ranks: Vec<usize> = out.top_k.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, (1..=7).collect::<Vec<_>>());
}

#[test]
fn single_node_and_empty_graph() {
    let mut g = Graph::default();
    let r = degree_centrality(&g, &CentralityOptions::default());
    assert!(r.success);
    assert_eq!(r.message, "graph is empty");

    let id = g.add_node(NewNode::named("solo")).unwrap();
    let out = centrality_of(&g, 5);
    assert_eq!(out.centrality[&id], 0.0);
    assert_eq!(out.top_k.len(), 1);
}

#[test]
fn records_one_calculate_event_per_node_and_one_rank_per_entry() {
    let (g, _) = star(6);
    let r = degree_centrality(&g, &CentralityOptions { top_k: 3 });
    assert_eq!(r.events("calculate").count(), 7);
    assert_eq!(r.events("rank").count(), 3);
}
