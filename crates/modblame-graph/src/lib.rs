//! # modblame-graph
//!
//! Pure directed-graph engine for module dependency graphs.
//!
//! This crate provides the graph primitives used by the `modblame` CLI
//! without any process or file-system logic. It works over any node identity
//! that is `Clone + Eq + Hash`, typically a module path such as
//! `golang.org/x/text@v0.3.7`.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                  Graph<T>                    │
//! │   add / remove / queries / subgraph_*        │
//! └──────────┬───────────────────┬───────────────┘
//!            │                   │
//!            ▼                   ▼
//!   ┌─────────────────┐  ┌─────────────────┐
//!   │ Multimap<T, T>  │  │ Multimap<T, T>  │   ┌──────────┐
//!   │ (forward edges) │  │ (reverse edges) │   │  Set<T>  │
//!   └────────┬────────┘  └────────┬────────┘   │ (nodes)  │
//!            └──────────┬─────────┘            └──────────┘
//!                       ▼
//!                  ┌──────────┐
//!                  │  Set<T>  │
//!                  └──────────┘
//! ```
//!
//! Data flows one way: edges are ingested with [`read_edges`], narrowed by
//! zero or more derivation passes ([`Graph::subgraph_from`],
//! [`Graph::subgraph_to`], [`Graph::subgraph_until`], [`retain_cycles`],
//! [`Graph::map`]), and finally consumed by [`EmissionOrder`] for rendering.
//!
//! ## Quick Start
//!
//! ```rust
//! use modblame_graph::{Graph, retain_cycles};
//!
//! let mut graph: Graph<&str> = [("app", "lib"), ("lib", "util"), ("util", "lib")]
//!     .into_iter()
//!     .collect();
//!
//! // Everything `lib` depends on, transitively.
//! let below = graph.subgraph_from(|m| *m == "lib");
//! assert_eq!(below.edge_count(), 2);
//!
//! // Keep only the circular part.
//! retain_cycles(&mut graph);
//! assert!(!graph.contains_node(&"app"));
//! assert_eq!(graph.node_count(), 2);
//! ```
//!
//! ## Thread Safety
//!
//! The engine is single-threaded. Derivations never mutate their receiver;
//! [`Graph::add`] and [`Graph::remove`] are the only mutators.

pub mod graph;
pub mod ingest;
pub mod multimap;
pub mod order;
pub mod peel;
pub mod set;
pub mod statistics;

pub use graph::Graph;
pub use ingest::{IngestError, parse_edge, read_edges};
pub use multimap::Multimap;
pub use order::EmissionOrder;
pub use peel::retain_cycles;
pub use set::Set;
pub use statistics::GraphStatistics;
