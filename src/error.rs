//! Crate-level error types.

use std::fmt;

use crate::graph::{NodeId, PathError};

/// Errors produced by the wayfarer crate.
///
/// Only setup paths (dataset loading, option files, the viewer event loop)
/// are fallible. Runtime navigation degrades instead of erroring.
#[derive(Debug)]
pub enum WayfarerError {
    /// The node dataset could not be parsed.
    GraphParse(String),
    /// Two nodes in the dataset share an id.
    DuplicateNode(NodeId),
    /// A node lists a neighbor id that does not exist in the dataset.
    DanglingNeighbor {
        /// Node whose neighbor list is broken.
        node: NodeId,
        /// The missing neighbor id.
        neighbor: NodeId,
    },
    /// The start node (or another setup-time node reference) is invalid.
    Path(PathError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for WayfarerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GraphParse(msg) => write!(f, "node dataset parse error: {msg}"),
            Self::DuplicateNode(id) => write!(f, "duplicate node id '{id}'"),
            Self::DanglingNeighbor { node, neighbor } => {
                write!(f, "node '{node}' references unknown neighbor '{neighbor}'")
            }
            Self::Path(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for WayfarerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Path(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for WayfarerError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<PathError> for WayfarerError {
    fn from(e: PathError) -> Self {
        Self::Path(e)
    }
}

impl From<serde_json::Error> for WayfarerError {
    fn from(e: serde_json::Error) -> Self {
        Self::GraphParse(e.to_string())
    }
}
