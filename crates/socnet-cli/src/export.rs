//! Human-readable adjacency dumps. Write-only; nothing parses these back.

use socnet_graph::Graph;
use std::fmt::Write as _;

pub fn adjacency_list_text(graph: &Graph) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "# adjacency list: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    for (id, neighbors) in graph.adjacency_list() {
        let name = graph.node(id).map_or("", |n| n.name.as_str());
        let joined = neighbors
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "{id} ({name}): {joined}");
    }
    out
}

pub fn adjacency_matrix_text(graph: &Graph) -> String {
    let m = graph.adjacency_matrix();
    let width = m
        .node_ids
        .iter()
        .map(|id| id.to_string().len())
        .max()
        .unwrap_or(1)
        .max(5);

    let mut out = String::new();
    let _ = write!(out, "{:>width$}", "");
    for id in &m.node_ids {
        let _ = write!(out, " {id:>width$}");
    }
    out.push('\n');
    for (i, id) in m.node_ids.iter().enumerate() {
        let _ = write!(out, "{id:>width$}");
        for w in &m.weights[i] {
            let _ = write!(out, " {w:>width$.3}");
        }
        out.push('\n');
    }
    out
}
