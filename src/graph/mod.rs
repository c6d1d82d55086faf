//! Static navigation graph: node dataset, validation, and shortest-path
//! queries.
//!
//! The graph is loaded once at startup and never mutated. Every neighbor id
//! must resolve to a node; edges do not have to be symmetric, although
//! authored datasets normally list them in both directions.

mod navigation;
mod node;
mod pathfind;

pub use navigation::NavigationGraph;
pub use node::{Node, NodeId, PayloadRef};
pub use pathfind::PathError;
