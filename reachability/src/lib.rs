//! Reachability over an undirected graph whose vertices can be opened
//! and closed at runtime.
//!
//! Vertices implement [Traversable], which gives the graph an identity and
//! a live "traversable" flag. The graph only ever reads that flag, so the
//! owner of a node can flip it and the next query will see the change.
//!
//! ```
//! use std::rc::Rc;
//! use reachability::{ReachabilityGraph, Vertex};
//!
//! let root = Rc::new(Vertex::new("root", true));
//! let a = Rc::new(Vertex::new("a", false));
//! let b = Rc::new(Vertex::new("b", false));
//!
//! let mut graph = ReachabilityGraph::new(root.clone());
//! graph.add_vertices(vec![a.clone(), b.clone()]);
//! assert!(graph.add_edges(&*root, vec![&*a]));
//! assert!(graph.add_edges(&*a, vec![&*b]));
//!
//! // The destination does not need to be open, but everything between does.
//! assert!(graph.has_path(&*root, &*a));
//! assert!(!graph.has_path(&*root, &*b));
//!
//! a.set_traversable(true);
//! assert!(graph.has_path(&*root, &*b));
//! ```

mod errors;
pub mod frontier;
mod graph;
mod node;

pub use errors::GraphError;
pub use errors::Result as GraphResult;
pub use graph::ReachabilityGraph;
pub use node::Traversable;
pub use node::Vertex;
