use proptest::prelude::*;
use socnet_graph::weight::calculate_weight;
use socnet_graph::{EdgeKey, Graph, NewNode, NodeId, NodeUpdate};
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum Op {
    AddNode { activity: f64, interaction: f64 },
    RemoveNode(usize),
    AddEdge(usize, usize),
    RemoveEdge(usize, usize),
    Update(usize, f64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0.0f64..1.0, prop_oneof![3 => 0.0f64..20.0, 1 => 0.0f64..1e300])
            .prop_map(|(activity, interaction)| Op::AddNode { activity, interaction }),
        1 => (0usize..32).prop_map(Op::RemoveNode),
        5 => (0usize..32, 0usize..32).prop_map(|(a, b)| Op::AddEdge(a, b)),
        2 => (0usize..32, 0usize..32).prop_map(|(a, b)| Op::RemoveEdge(a, b)),
        1 => (0usize..32, -1.0f64..2.0).prop_map(|(i, a)| Op::Update(i, a)),
    ]
}

fn pick(g: &Graph, i: usize) -> Option<NodeId> {
    let ids = g.node_ids();
    if ids.is_empty() {
        None
    } else {
        Some(ids[i % ids.len()])
    }
}

fn apply(g: &mut Graph, op: &Op) {
    match *op {
        Op::AddNode {
            activity,
            interaction,
        } => {
            g.add_node(NewNode::new().activity(activity).interaction(interaction))
                .unwrap();
        }
        Op::RemoveNode(i) => {
            if let Some(id) = pick(g, i) {
                g.remove_node(id);
            }
        }
        Op::AddEdge(a, b) => {
            if let (Some(a), Some(b)) = (pick(g, a), pick(g, b)) {
                g.add_edge(a, b);
            }
        }
        Op::RemoveEdge(a, b) => {
            if let (Some(a), Some(b)) = (pick(g, a), pick(g, b)) {
                g.remove_edge(a, b);
            }
        }
        Op::Update(i, activity) => {
            if let Some(id) = pick(g, i) {
                g.update_node(id, NodeUpdate::new().activity(activity));
            }
        }
    }
}

fn check_invariants(g: &Graph) -> Result<(), TestCaseError> {
    let mut keys = HashSet::new();
    for e in g.edges() {
        prop_assert_ne!(e.source(), e.target());
        prop_assert!(keys.insert(e.key()), "duplicate edge {:?}", e.key());
        prop_assert!(g.has_node(e.source()) && g.has_node(e.target()));

        let (a, b) = (g.node(e.source()).unwrap(), g.node(e.target()).unwrap());
        prop_assert!(e.weight() > 0.0 && e.weight() <= 1.0);
        prop_assert_eq!(e.weight(), calculate_weight(a, b));
        prop_assert_eq!(calculate_weight(a, b), calculate_weight(b, a));
    }

    let mut adjacency_pairs = HashSet::new();
    for n in g.nodes() {
        prop_assert_eq!(n.connection_count(), g.degree(n.id()));
        for &m in g.neighbor_ids(n.id()) {
            prop_assert!(g.neighbor_ids(m).contains(&n.id()));
            adjacency_pairs.insert(EdgeKey::new(n.id(), m));
        }
    }
    prop_assert_eq!(adjacency_pairs, keys);
    Ok(())
}

proptest! {
    #[test]
    fn mutations_preserve_graph_invariants(ops in proptest::collection::vec(op(), 0..120)) {
        let mut g = Graph::default();
        for op in &ops {
            apply(&mut g, op);
            check_invariants(&g)?;
        }
    }
}
