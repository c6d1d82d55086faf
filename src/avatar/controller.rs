//! Avatar movement across the navigation graph.

use glam::{Vec2, Vec3};

use super::direction::resolve_direction;
use super::traversal::{arc_point, yaw_towards, AvatarTraversal};
use crate::graph::{NavigationGraph, NodeId, PathError};
use crate::options::AvatarOptions;

/// Conditions outside the controller that suppress movement requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveGate {
    /// The project-detail overlay is open.
    pub overlay_open: bool,
    /// The camera is zooming onto a node.
    pub focus_active: bool,
}

impl MoveGate {
    fn is_blocked(self) -> bool {
        self.overlay_open || self.focus_active
    }
}

/// Result of a movement request.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    /// Traversal started toward `to` over `hops` edges.
    Started {
        /// Final node.
        to: NodeId,
        /// Number of edges to cross.
        hops: usize,
    },
    /// The requested node is the current node.
    AlreadyThere,
    /// A traversal is already in flight; the request was dropped.
    Busy,
    /// The overlay or a camera focus blocks movement.
    Blocked,
    /// No neighbor is aligned with the requested direction.
    NoAlignedNeighbor,
    /// Pathfinding failed; treated as no move.
    NoPath(PathError),
}

impl MoveOutcome {
    /// Whether the request started a traversal.
    #[must_use]
    pub fn started(&self) -> bool {
        matches!(self, Self::Started { .. })
    }
}

/// Notable changes produced by [`AvatarController::tick`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarEvent {
    /// Reached an intermediate node and began the next edge.
    EdgeStarted {
        /// Node just reached.
        from: NodeId,
        /// Node the new edge leads to.
        to: NodeId,
    },
    /// Reached the end of the path; the traversal is cleared.
    Arrived(NodeId),
}

/// Owns the avatar's node, world position, facing and in-flight traversal.
#[derive(Debug, Clone)]
pub struct AvatarController {
    node: NodeId,
    position: Vec3,
    /// Yaw about +Y, radians.
    facing: f32,
    traversal: Option<AvatarTraversal>,
    options: AvatarOptions,
}

impl AvatarController {
    /// Place the avatar on `start`.
    pub fn new(
        graph: &NavigationGraph,
        start: &NodeId,
        options: AvatarOptions,
    ) -> Result<Self, PathError> {
        let position = graph
            .position(start)
            .ok_or_else(|| PathError::UnknownNode(start.clone()))?;
        Ok(Self {
            node: start.clone(),
            position,
            facing: 0.0,
            traversal: None,
            options,
        })
    }

    /// Node the avatar is standing on, or the last node it passed.
    #[must_use]
    pub fn current_node(&self) -> &NodeId {
        &self.node
    }

    /// World position (on the hop arc while moving).
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Yaw about +Y in radians.
    #[must_use]
    pub fn facing(&self) -> f32 {
        self.facing
    }

    /// In-flight traversal, if any.
    #[must_use]
    pub fn traversal(&self) -> Option<&AvatarTraversal> {
        self.traversal.as_ref()
    }

    /// Whether a traversal is in flight.
    #[must_use]
    pub fn is_traversing(&self) -> bool {
        self.traversal.is_some()
    }

    /// Replace the traversal parameters. Applies from the next tick.
    pub fn set_options(&mut self, options: AvatarOptions) {
        self.options = options;
    }

    /// Single-step move toward the neighbor best aligned with
    /// `intent = (dx, dz)`.
    pub fn request_move(
        &mut self,
        graph: &NavigationGraph,
        intent: Vec2,
        gate: MoveGate,
    ) -> MoveOutcome {
        if let Some(refusal) = self.refusal(gate) {
            return refusal;
        }
        let Some(choice) = resolve_direction(
            graph,
            &self.node,
            intent,
            self.options.min_alignment,
        ) else {
            return MoveOutcome::NoAlignedNeighbor;
        };
        let path = vec![self.node.clone(), choice.node.id().clone()];
        self.begin(graph, path)
    }

    /// Multi-hop move to `target` along a shortest path.
    pub fn select_node(
        &mut self,
        graph: &NavigationGraph,
        target: &NodeId,
        gate: MoveGate,
    ) -> MoveOutcome {
        if let Some(refusal) = self.refusal(gate) {
            return refusal;
        }
        match graph.pathfind(&self.node, target) {
            Ok(path) if path.len() < 2 => MoveOutcome::AlreadyThere,
            Ok(path) => self.begin(graph, path),
            Err(e) => {
                log::debug!("select_node {target}: {e}");
                MoveOutcome::NoPath(e)
            }
        }
    }

    fn refusal(&self, gate: MoveGate) -> Option<MoveOutcome> {
        if self.traversal.is_some() {
            Some(MoveOutcome::Busy)
        } else if gate.is_blocked() {
            Some(MoveOutcome::Blocked)
        } else {
            None
        }
    }

    fn begin(&mut self, graph: &NavigationGraph, path: Vec<NodeId>) -> MoveOutcome {
        let hops = path.len() - 1;
        let Some(traversal) = AvatarTraversal::new(path) else {
            return MoveOutcome::AlreadyThere;
        };
        let to = traversal.destination().clone();
        self.face_edge(graph, &traversal);
        log::debug!("avatar {} -> {to} ({hops} hops)", self.node);
        self.traversal = Some(traversal);
        MoveOutcome::Started { to, hops }
    }

    fn face_edge(&mut self, graph: &NavigationGraph, traversal: &AvatarTraversal) {
        if let (Some(a), Some(b)) = (
            graph.position(traversal.current()),
            graph.position(traversal.next()),
        ) {
            if let Some(yaw) = yaw_towards(a, b) {
                self.facing = yaw;
            }
        }
    }

    /// Advance the in-flight traversal by one fixed step.
    ///
    /// Must run before the camera reads [`position`](Self::position) in the
    /// same frame.
    pub fn tick(&mut self, graph: &NavigationGraph) -> Option<AvatarEvent> {
        let step = self.options.edge_step.max(1e-4);
        let traversal = self.traversal.as_mut()?;
        traversal.advance(step);

        let (Some(from), Some(to)) = (
            graph.position(traversal.current()),
            graph.position(traversal.next()),
        ) else {
            self.traversal = None;
            return None;
        };
        self.position = arc_point(from, to, self.options.hop_height, traversal.progress());

        if traversal.progress() < 1.0 {
            return None;
        }

        self.node = traversal.next().clone();
        if traversal.next_edge() {
            let event = AvatarEvent::EdgeStarted {
                from: self.node.clone(),
                to: traversal.next().clone(),
            };
            let traversal = traversal.clone();
            self.face_edge(graph, &traversal);
            return Some(event);
        }

        self.position = to;
        self.traversal = None;
        log::debug!("avatar arrived at {}", self.node);
        Some(AvatarEvent::Arrived(self.node.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Node, PayloadRef};

    /// `n` nodes along +X, 4 units apart, linked both ways.
    fn line(n: usize) -> NavigationGraph {
        let id = |i: usize| NodeId::new(format!("node-{}", i + 1));
        let nodes = (0..n)
            .map(|i| {
                let mut neighbors = Vec::new();
                if i > 0 {
                    neighbors.push(id(i - 1));
                }
                if i + 1 < n {
                    neighbors.push(id(i + 1));
                }
                Node::new(
                    id(i),
                    Vec3::new(i as f32 * 4.0, 0.0, 0.0),
                    PayloadRef::new("p"),
                    neighbors,
                )
            })
            .collect();
        NavigationGraph::new(nodes).unwrap()
    }

    fn options(edge_step: f32) -> AvatarOptions {
        AvatarOptions {
            edge_step,
            ..AvatarOptions::default()
        }
    }

    fn run_to_arrival(
        avatar: &mut AvatarController,
        graph: &NavigationGraph,
    ) -> Vec<AvatarEvent> {
        let mut events = Vec::new();
        for _ in 0..10_000 {
            if let Some(e) = avatar.tick(graph) {
                let done = matches!(e, AvatarEvent::Arrived(_));
                events.push(e);
                if done {
                    break;
                }
            }
        }
        events
    }

    #[test]
    fn single_step_move_arrives_at_neighbor() {
        let g = line(3);
        let mut avatar =
            AvatarController::new(&g, &"node-2".into(), options(0.25)).unwrap();
        let outcome = avatar.request_move(&g, Vec2::new(1.0, 0.0), MoveGate::default());
        assert_eq!(
            outcome,
            MoveOutcome::Started {
                to: "node-3".into(),
                hops: 1
            }
        );
        for _ in 0..3 {
            assert_eq!(avatar.tick(&g), None);
        }
        assert_eq!(avatar.tick(&g), Some(AvatarEvent::Arrived("node-3".into())));
        assert_eq!(avatar.position(), Vec3::new(8.0, 0.0, 0.0));
        assert!(!avatar.is_traversing());
        assert_eq!(avatar.current_node().as_str(), "node-3");
    }

    #[test]
    fn unaligned_direction_is_dropped() {
        let g = line(3);
        let mut avatar =
            AvatarController::new(&g, &"node-2".into(), options(0.25)).unwrap();
        let outcome = avatar.request_move(&g, Vec2::new(0.0, -1.0), MoveGate::default());
        assert_eq!(outcome, MoveOutcome::NoAlignedNeighbor);
        assert!(!avatar.is_traversing());
    }

    #[test]
    fn requests_during_flight_or_behind_gates_are_ignored() {
        let g = line(4);
        let mut avatar =
            AvatarController::new(&g, &"node-1".into(), options(0.1)).unwrap();

        let blocked = MoveGate {
            overlay_open: true,
            focus_active: false,
        };
        assert_eq!(avatar.request_move(&g, Vec2::X, blocked), MoveOutcome::Blocked);
        let focusing = MoveGate {
            overlay_open: false,
            focus_active: true,
        };
        assert_eq!(
            avatar.select_node(&g, &"node-4".into(), focusing),
            MoveOutcome::Blocked
        );

        assert!(avatar.request_move(&g, Vec2::X, MoveGate::default()).started());
        let _ = avatar.tick(&g);
        let before = avatar.traversal().cloned();
        assert_eq!(
            avatar.select_node(&g, &"node-4".into(), MoveGate::default()),
            MoveOutcome::Busy
        );
        assert_eq!(avatar.traversal().cloned(), before);
    }

    #[test]
    fn multi_hop_walks_each_edge_in_order() {
        let g = line(5);
        let mut avatar =
            AvatarController::new(&g, &"node-1".into(), options(0.5)).unwrap();
        let outcome = avatar.select_node(&g, &"node-4".into(), MoveGate::default());
        assert_eq!(
            outcome,
            MoveOutcome::Started {
                to: "node-4".into(),
                hops: 3
            }
        );
        let events = run_to_arrival(&mut avatar, &g);
        assert_eq!(
            events,
            [
                AvatarEvent::EdgeStarted {
                    from: "node-2".into(),
                    to: "node-3".into()
                },
                AvatarEvent::EdgeStarted {
                    from: "node-3".into(),
                    to: "node-4".into()
                },
                AvatarEvent::Arrived("node-4".into()),
            ]
        );
        assert_eq!(avatar.position(), Vec3::new(12.0, 0.0, 0.0));
    }

    #[test]
    fn progress_is_monotonic_within_an_edge_and_cursor_in_bounds() {
        let g = line(9);
        let mut avatar =
            AvatarController::new(&g, &"node-1".into(), options(0.07)).unwrap();
        assert!(avatar
            .select_node(&g, &"node-9".into(), MoveGate::default())
            .started());

        let mut last = (0usize, 0.0f32);
        while let Some(t) = avatar.traversal() {
            let (cursor, progress) = (t.cursor(), t.progress());
            assert!(cursor + 1 < t.path().len());
            assert!((0.0..=1.0).contains(&progress));
            if cursor == last.0 {
                assert!(progress >= last.1);
            } else {
                assert_eq!(cursor, last.0 + 1);
            }
            last = (cursor, progress);
            let _ = avatar.tick(&g);
        }
        assert_eq!(avatar.current_node().as_str(), "node-9");
    }

    #[test]
    fn hop_arcs_above_the_segment() {
        let g = line(2);
        let mut avatar =
            AvatarController::new(&g, &"node-1".into(), options(0.5)).unwrap();
        assert!(avatar.request_move(&g, Vec2::X, MoveGate::default()).started());
        let _ = avatar.tick(&g);
        let mid = avatar.position();
        let expected_apex = AvatarOptions::default().hop_height / 2.0;
        assert!((mid.y - expected_apex).abs() < 1e-5);
        assert!((mid.x - 2.0).abs() < 1e-5);
    }

    #[test]
    fn facing_is_set_at_edge_start() {
        let g = line(3);
        let mut avatar =
            AvatarController::new(&g, &"node-3".into(), options(0.5)).unwrap();
        assert!(avatar.request_move(&g, -Vec2::X, MoveGate::default()).started());
        // Facing −X.
        assert!((avatar.facing() + std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn select_current_or_unknown_node_does_not_move() {
        let g = line(2);
        let mut avatar =
            AvatarController::new(&g, &"node-1".into(), options(0.5)).unwrap();
        assert_eq!(
            avatar.select_node(&g, &"node-1".into(), MoveGate::default()),
            MoveOutcome::AlreadyThere
        );
        assert_eq!(
            avatar.select_node(&g, &"elsewhere".into(), MoveGate::default()),
            MoveOutcome::NoPath(PathError::UnknownNode("elsewhere".into()))
        );
        assert!(!avatar.is_traversing());
    }

    #[test]
    fn unknown_start_is_rejected() {
        let g = line(2);
        assert!(AvatarController::new(&g, &"ghost".into(), AvatarOptions::default()).is_err());
    }
}
