use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Stable identifier of a showcase node (e.g. `"node-3"`).
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Wrap a string id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Opaque reference to whatever the node showcases (a project slug, an
/// asset key). Resolved by the host through
/// [`DetailSource`](crate::showcase::DetailSource).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayloadRef(String);

impl PayloadRef {
    /// Wrap a payload key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Borrow the payload key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One point of the navigable graph.
///
/// Serialized as a dataset record:
/// ```json
/// { "id": "node-1", "position": [0.0, 0.0, 0.0],
///   "payload": "intro", "neighbors": ["node-2"] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    position: Vec3,
    payload: PayloadRef,
    #[serde(default)]
    neighbors: Vec<NodeId>,
}

impl Node {
    /// Create a node record. Neighbor order is significant: it decides
    /// tie-breaks during pathfinding.
    #[must_use]
    pub fn new(
        id: NodeId,
        position: Vec3,
        payload: PayloadRef,
        neighbors: Vec<NodeId>,
    ) -> Self {
        Self {
            id,
            position,
            payload,
            neighbors,
        }
    }

    /// Node id.
    #[must_use]
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// World-space position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Payload reference.
    #[must_use]
    pub fn payload(&self) -> &PayloadRef {
        &self.payload
    }

    /// Ordered neighbor ids.
    #[must_use]
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }
}
