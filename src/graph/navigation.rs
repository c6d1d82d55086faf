use std::path::Path;

use glam::Vec3;
use rustc_hash::{FxHashMap, FxHashSet};

use super::node::{Node, NodeId};
use crate::error::WayfarerError;

/// Immutable node/edge dataset with index-based adjacency.
///
/// Nodes keep their dataset order; adjacency lists keep each node's
/// neighbor order so traversal is deterministic.
#[derive(Debug, Clone)]
pub struct NavigationGraph {
    nodes: Vec<Node>,
    index: FxHashMap<NodeId, usize>,
    /// Per-node neighbor indices, parallel to `nodes`.
    pub(super) adjacency: Vec<Vec<usize>>,
}

impl NavigationGraph {
    /// Build and validate a graph.
    ///
    /// Fails on duplicate ids and on neighbor ids that do not exist.
    /// One-directional edges are accepted but logged.
    pub fn new(nodes: Vec<Node>) -> Result<Self, WayfarerError> {
        let mut index =
            FxHashMap::with_capacity_and_hasher(nodes.len(), Default::default());
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.id().clone(), i).is_some() {
                return Err(WayfarerError::DuplicateNode(node.id().clone()));
            }
        }

        let mut adjacency = Vec::with_capacity(nodes.len());
        for node in &nodes {
            let mut row = Vec::with_capacity(node.neighbors().len());
            for neighbor in node.neighbors() {
                let Some(&j) = index.get(neighbor) else {
                    return Err(WayfarerError::DanglingNeighbor {
                        node: node.id().clone(),
                        neighbor: neighbor.clone(),
                    });
                };
                row.push(j);
            }
            adjacency.push(row);
        }

        let graph = Self {
            nodes,
            index,
            adjacency,
        };
        for (from, to) in graph.asymmetric_edges() {
            log::warn!("one-directional edge {from} -> {to}");
        }
        log::debug!("navigation graph: {} nodes", graph.len());
        Ok(graph)
    }

    /// Parse a JSON array of node records.
    pub fn from_json(json: &str) -> Result<Self, WayfarerError> {
        let nodes: Vec<Node> = serde_json::from_str(json)?;
        Self::new(nodes)
    }

    /// Load a JSON node dataset from disk.
    pub fn load(path: &Path) -> Result<Self, WayfarerError> {
        let content = std::fs::read_to_string(path).map_err(WayfarerError::Io)?;
        Self::from_json(&content)
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the dataset has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Look up a node by id.
    #[must_use]
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.index_of(id).map(|i| &self.nodes[i])
    }

    /// World position of a node.
    #[must_use]
    pub fn position(&self, id: &NodeId) -> Option<Vec3> {
        self.node(id).map(Node::position)
    }

    /// Neighbors of a node, in authored order. Unknown ids yield nothing.
    pub fn neighbors<'a>(
        &'a self,
        id: &NodeId,
    ) -> impl Iterator<Item = &'a Node> + 'a {
        let row = self
            .index_of(id)
            .map_or(&[][..], |i| self.adjacency[i].as_slice());
        row.iter().map(move |&j| &self.nodes[j])
    }

    /// Edges `(from, to)` whose reverse is not listed.
    #[must_use]
    pub fn asymmetric_edges(&self) -> Vec<(NodeId, NodeId)> {
        let edges: FxHashSet<(usize, usize)> = self
            .adjacency
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().map(move |&j| (i, j)))
            .collect();
        let mut missing: Vec<(usize, usize)> = edges
            .iter()
            .copied()
            .filter(|&(i, j)| !edges.contains(&(j, i)))
            .collect();
        missing.sort_unstable();
        missing
            .into_iter()
            .map(|(i, j)| (self.nodes[i].id().clone(), self.nodes[j].id().clone()))
            .collect()
    }

    pub(super) fn index_of(&self, id: &NodeId) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(super) fn id_at(&self, index: usize) -> &NodeId {
        self.nodes[index].id()
    }
}
