#![forbid(unsafe_code)]

//! Weighted undirected graph of social-network users.
//!
//! The container keeps four invariants at every mutation: no self-loops, at most one edge per
//! unordered pair, an adjacency cache consistent with the edge set, and a `connection_count` on
//! every node equal to its degree. Edge weights are derived from endpoint similarity (see
//! [`weight`]) and are recomputed whenever a mutation changes an endpoint's properties or degree.
//!
//! Iteration over nodes and neighbours follows insertion order, so every consumer that walks the
//! graph gets reproducible results for identical mutation histories.

pub mod edge;
pub mod error;
pub mod graph;
pub mod node;
pub mod records;
pub mod rng;
pub mod sample;
pub mod weight;

pub use edge::{Edge, EdgeKey};
pub use error::{GraphError, Result};
pub use graph::{AdjacencyMatrix, Graph, GraphOptions, GraphStatistics};
pub use node::{Annotation, NewNode, Node, NodeId, NodeProperties, NodeUpdate, Rgb};
pub use records::{CSV_HEADER, CsvRow, EdgeRecord, GraphRecord, NodeRecord};
