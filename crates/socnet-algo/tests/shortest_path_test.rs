use socnet_algo::shortest_path::{a_star, dijkstra};
use socnet_algo::{A_STAR_HEURISTIC_SCALE, Payload, PathOutput, StepEvent};
use socnet_graph::{Graph, NewNode, NodeId};

fn path_of(r: &socnet_algo::AlgorithmResult) -> &PathOutput {
    match &r.payload {
        Payload::Path(p) => p,
        other => panic!("unexpected payload: {other:?}"),
    }
}

/// A square a-b-c-d-a where the a-b-c side links similar users and the a-d-c side does not.
fn square() -> (Graph, [NodeId; 4]) {
    let mut g = Graph::default();
    let a = g.add_node(NewNode::named("a").at(0.0, 0.0).interaction(1.0)).unwrap();
    let b = g.add_node(NewNode::named("b").at(100.0, 0.0).interaction(1.0)).unwrap();
    let c = g.add_node(NewNode::named("c").at(100.0, 100.0).interaction(1.0)).unwrap();
    let d = g.add_node(NewNode::named("d").at(0.0, 100.0).interaction(30.0)).unwrap();
    g.add_edge(a, b).unwrap();
    g.add_edge(b, c).unwrap();
    g.add_edge(a, d).unwrap();
    g.add_edge(d, c).unwrap();
    (g, [a, b, c, d])
}

#[test]
fn dijkstra_prefers_the_similar_chain() {
    let (g, [a, b, c, _]) = square();
    let r = dijkstra(&g, a, c);
    assert!(r.success, "{}", r.message);
    let p = path_of(&r);
    assert_eq!(p.path, vec![a, b, c]);
    assert_eq!(p.path_edges, vec![(a, b), (b, c)]);
    let expected = g.edge(a, b).unwrap().cost() + g.edge(b, c).unwrap().cost();
    assert!((p.total_cost.unwrap() - expected).abs() < 1e-12);
    assert_eq!(p.distances[&a], 0.0);
    assert!(r.message.starts_with("path found: 3 nodes"));
}

#[test]
fn dijkstra_to_unreachable_node_keeps_reachable_distances() {
    let mut g = Graph::default();
    let a = g.add_node(NewNode::named("A")).unwrap();
    let b = g.add_node(NewNode::named("B")).unwrap();
    let z = g.add_node(NewNode::named("Z")).unwrap();
    g.add_edge(a, b).unwrap();

    let r = dijkstra(&g, a, z);
    assert!(!r.success);
    assert!(r.message.contains("no path"));
    let p = path_of(&r);
    assert!(p.path.is_empty());
    assert_eq!(p.total_cost, None);
    let keys: Vec<NodeId> = p.distances.keys().copied().collect();
    assert_eq!(keys, vec![a, b]);
    assert!(p.distances.values().all(|d| d.is_finite()));
}

#[test]
fn unknown_endpoints_fail_with_distinct_messages() {
    let (g, [a, ..]) = square();
    let r = dijkstra(&g, 99, a);
    assert!(!r.success);
    assert!(r.message.contains("start node 99"));
    assert_eq!(r.payload, Payload::None);

    let r = a_star(&g, a, 77);
    assert!(!r.success);
    assert!(r.message.contains("end node 77"));
}

#[test]
fn same_start_and_end_is_a_zero_cost_path() {
    let (g, [a, ..]) = square();
    for r in [dijkstra(&g, a, a), a_star(&g, a, a)] {
        assert!(r.success);
        let p = path_of(&r);
        assert_eq!(p.path, vec![a]);
        assert_eq!(p.total_cost, Some(0.0));
        assert!(p.path_edges.is_empty());
    }
}

#[test]
fn a_star_agrees_with_dijkstra_on_the_square() {
    let (g, [a, b, c, _]) = square();
    let r = a_star(&g, a, c);
    assert!(r.success);
    let p = path_of(&r);
    assert_eq!(p.path, vec![a, b, c]);
    assert!(p.nodes_explored >= 2);
    assert!(r.events("expand").count() >= 2);
}

#[test]
fn a_star_estimates_add_scaled_layout_distance() {
    let (g, [a, _, c, _]) = square();
    let goal = g.node(c).unwrap();
    let r = a_star(&g, a, c);
    let mut seen = 0;
    for e in r.events("update_estimate") {
        let StepEvent::UpdateEstimate {
            node,
            g_score,
            f_score,
            ..
        } = *e
        else {
            unreachable!()
        };
        let h = g.node(node).unwrap().distance_to(goal) * 0.01;
        assert!(
            (f_score - (g_score + h)).abs() < 1e-12,
            "node {node}: f={f_score} g={g_score} h={h}"
        );
        seen += 1;
    }
    assert!(seen >= 2);
    assert_eq!(A_STAR_HEURISTIC_SCALE, 0.01);
}

/// `p` is the cheap first hop but sits far from the goal in layout space; `q` is the expensive
/// hop placed next to the goal.
fn decoy() -> (Graph, [NodeId; 4]) {
    let mut g = Graph::default();
    let s = g.add_node(NewNode::named("s").at(0.0, 0.0).interaction(1.0)).unwrap();
    let p = g.add_node(NewNode::named("p").at(-2_000.0, 0.0).interaction(1.0)).unwrap();
    let q = g.add_node(NewNode::named("q").at(990.0, 0.0).interaction(3.0)).unwrap();
    let t = g.add_node(NewNode::named("t").at(1_000.0, 0.0).interaction(1.0)).unwrap();
    g.add_edge(s, p).unwrap();
    g.add_edge(s, q).unwrap();
    g.add_edge(p, t).unwrap();
    g.add_edge(q, t).unwrap();
    (g, [s, p, q, t])
}

#[test]
fn layout_heuristic_reorders_expansion_away_from_dijkstra() {
    let (g, [s, p, q, t]) = decoy();
    // Costs: s-p = 1, p-t = 1, s-q = 3, q-t = 3.
    assert!((g.edge(s, p).unwrap().cost() - 1.0).abs() < 1e-12);
    assert!((g.edge(s, q).unwrap().cost() - 3.0).abs() < 1e-12);

    let exact = dijkstra(&g, s, t);
    let settled: Vec<NodeId> = exact.events("settle").filter_map(|e| e.node()).collect();
    assert_eq!(settled, vec![s, p, t]);
    assert_eq!(path_of(&exact).path, vec![s, p, t]);
    assert!((path_of(&exact).total_cost.unwrap() - 2.0).abs() < 1e-12);

    // h(p) = 30 outweighs the cheaper g, so A* commits to the q side.
    let guided = a_star(&g, s, t);
    assert!(guided.success);
    let expanded: Vec<NodeId> = guided.events("expand").filter_map(|e| e.node()).collect();
    assert_eq!(expanded, vec![s, q, t]);
    assert_eq!(path_of(&guided).path, vec![s, q, t]);
    assert!((path_of(&guided).total_cost.unwrap() - 6.0).abs() < 1e-12);
}

#[test]
fn a_star_failure_reports_partial_scores() {
    let mut g = Graph::default();
    let a = g.add_node(NewNode::new()).unwrap();
    let b = g.add_node(NewNode::new()).unwrap();
    let z = g.add_node(NewNode::new()).unwrap();
    g.add_edge(a, b).unwrap();
    let r = a_star(&g, a, z);
    assert!(!r.success);
    let p = path_of(&r);
    assert_eq!(p.distances.len(), 2);
    assert_eq!(p.nodes_explored, 2);
}

#[test]
fn dijkstra_stops_once_the_target_settles() {
    let mut g = Graph::default();
    let ids: Vec<NodeId> = (0..6).map(|_| g.add_node(NewNode::new()).unwrap()).collect();
    for w in ids.windows(2) {
        g.add_edge(w[0], w[1]).unwrap();
    }
    let r = dijkstra(&g, ids[0], ids[2]);
    assert!(r.success);
    let settled: Vec<NodeId> = r.events("settle").filter_map(|e| e.node()).collect();
    assert_eq!(settled, vec![ids[0], ids[1], ids[2]]);
    assert_eq!(path_of(&r).nodes_explored, 3);
}
