//! Breadth-first shortest-hop queries.

use std::collections::VecDeque;
use std::fmt;

use super::navigation::NavigationGraph;
use super::node::NodeId;

/// Why a path query failed. Callers treat any failure as "no move".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// One of the endpoints is not in the dataset.
    UnknownNode(NodeId),
    /// Both endpoints exist but no edge sequence connects them.
    Unreachable {
        /// Query origin.
        from: NodeId,
        /// Query destination.
        to: NodeId,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode(id) => write!(f, "unknown node '{id}'"),
            Self::Unreachable { from, to } => {
                write!(f, "no path from '{from}' to '{to}'")
            }
        }
    }
}

impl std::error::Error for PathError {}

impl NavigationGraph {
    /// Shortest-hop path from `from` to `to`, both endpoints included.
    ///
    /// The graph is unweighted, so any minimal-edge-count path is valid;
    /// among equal-length paths the one discovered first in adjacency order
    /// wins. `pathfind(a, a)` is `[a]`.
    pub fn pathfind(
        &self,
        from: &NodeId,
        to: &NodeId,
    ) -> Result<Vec<NodeId>, PathError> {
        let start = self
            .index_of(from)
            .ok_or_else(|| PathError::UnknownNode(from.clone()))?;
        let goal = self
            .index_of(to)
            .ok_or_else(|| PathError::UnknownNode(to.clone()))?;
        if start == goal {
            return Ok(vec![from.clone()]);
        }

        let mut parent: Vec<Option<usize>> = vec![None; self.len()];
        let mut visited = vec![false; self.len()];
        visited[start] = true;
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            for &next in &self.adjacency[current] {
                if visited[next] {
                    continue;
                }
                visited[next] = true;
                parent[next] = Some(current);
                if next == goal {
                    return Ok(self.unwind(&parent, goal));
                }
                queue.push_back(next);
            }
        }

        Err(PathError::Unreachable {
            from: from.clone(),
            to: to.clone(),
        })
    }

    /// Number of edges on the shortest path, if one exists.
    #[must_use]
    pub fn hop_distance(&self, from: &NodeId, to: &NodeId) -> Option<usize> {
        self.pathfind(from, to).ok().map(|path| path.len() - 1)
    }

    fn unwind(&self, parent: &[Option<usize>], goal: usize) -> Vec<NodeId> {
        let mut path = vec![self.id_at(goal).clone()];
        let mut cursor = goal;
        while let Some(prev) = parent[cursor] {
            path.push(self.id_at(prev).clone());
            cursor = prev;
        }
        path.reverse();
        path
    }
}
