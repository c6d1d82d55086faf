//! Directional intent → neighbor resolution.

use glam::Vec2;

use crate::graph::{NavigationGraph, Node, NodeId};

/// Neighbor picked for a directional intent.
#[derive(Debug, Clone, Copy)]
pub struct DirectionChoice<'a> {
    /// The neighbor to move to.
    pub node: &'a Node,
    /// Alignment score: cosine between intent and edge direction.
    pub score: f32,
}

/// Pick the neighbor of `from` best aligned with `intent` on the XZ plane.
///
/// Each candidate is scored by the dot product of the normalized intent
/// with the unit vector from `from` to the neighbor. The best score wins
/// (earlier neighbors win exact ties) and is accepted only if it exceeds
/// `min_alignment`; 0.3 admits roughly a 72° half-cone. Height
/// differences are ignored. A zero intent or a node without neighbors
/// yields `None`.
#[must_use]
pub fn resolve_direction<'a>(
    graph: &'a NavigationGraph,
    from: &NodeId,
    intent: Vec2,
    min_alignment: f32,
) -> Option<DirectionChoice<'a>> {
    let intent = intent.try_normalize()?;
    let origin = graph.position(from)?;

    let mut best: Option<DirectionChoice<'a>> = None;
    for node in graph.neighbors(from) {
        let offset = node.position() - origin;
        let Some(edge) = Vec2::new(offset.x, offset.z).try_normalize() else {
            continue;
        };
        let score = edge.dot(intent);
        if best.is_none_or(|b| score > b.score) {
            best = Some(DirectionChoice { node, score });
        }
    }

    best.filter(|b| b.score > min_alignment)
}
