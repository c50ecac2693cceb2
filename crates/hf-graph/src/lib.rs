//! hf-graph: graph layer for hydrantflow.
//!
//! Provides:
//! - Core graph data structures (Node, Link, Graph)
//! - Incremental graph builder with validation
//! - Name lookup from string identifiers to compact IDs
//! - Stack-based traversals (BFS, post-order, cycle search, reachability)
//!
//! # Example
//!
//! ```
//! use hf_graph::{GraphBuilder, traverse};
//!
//! let mut builder = GraphBuilder::new();
//! let s = builder.add_node("S");
//! let h = builder.add_node("H1");
//! builder.add_link("P1", s, h);
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.nodes().len(), 2);
//! assert_eq!(traverse::bfs_order(&graph, s), vec![s, h]);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod indexing;
pub mod traverse;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::{Graph, Link, Node};
pub use indexing::NameIndex;
pub use traverse::CycleWitness;
