//! Priority-queue driven graph engine for weighted undirected graphs.
//!
//! A graph is built once from `(u, v, weight)` triples and is immutable
//! afterwards. Two frontier-expansion engines answer queries against it:
//! single-source shortest paths (Dijkstra) and minimum spanning trees
//! (Prim). Both use lazy deletion on the frontier: improvements push
//! fresh entries, stale entries are discarded at pop time.
//!
//! Absent vertices and disconnected graphs are normal answers ("no
//! path", a partial tree), never panics. The one rejected input is a
//! negative edge weight, surfaced as [`BuildError`] at construction.
//!
//! # Example
//!
//! ```
//! use minpath::WeightedGraph;
//!
//! let graph = WeightedGraph::from_edges([
//!     ("coruna", "vigo", 171),
//!     ("vigo", "valladolid", 356),
//!     ("coruna", "valladolid", 455),
//! ])?;
//!
//! let route = graph.shortest_path(&"coruna", &"valladolid").unwrap();
//! assert_eq!(route.weight(), 455);
//! assert_eq!(route.vertices(), &["coruna", "valladolid"]);
//!
//! let tree = graph.minimum_spanning_tree(&"coruna");
//! assert_eq!(tree.total_weight(), 171 + 356);
//! assert!(tree.is_spanning(&graph));
//! # Ok::<(), minpath::BuildError>(())
//! ```

pub mod error;
pub mod graphs;

pub use error::BuildError;
pub use graphs::adjacency::AdjacencyList;
pub use graphs::batch::shortest_path_trees;
pub use graphs::dijkstra::{GraphDijkstra, Route, ShortestPaths};
pub use graphs::frontier::MinFrontier;
pub use graphs::graph::WeightedGraph;
pub use graphs::labels::VertexLabels;
pub use graphs::prim::{GraphPrim, SpanningTree};
pub use graphs::visited::Visited;
pub use graphs::weighted::{connecting, Weight, Weighted};
