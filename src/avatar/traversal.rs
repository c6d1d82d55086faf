//! In-flight movement along a node path.

use glam::Vec3;

use crate::graph::NodeId;

/// Movement from the current node along a path, one edge at a time.
///
/// `path[cursor] → path[cursor + 1]` is the edge being crossed, so the
/// cursor always stays below `path.len() - 1` while the traversal exists.
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarTraversal {
    path: Vec<NodeId>,
    cursor: usize,
    progress: f32,
}

impl AvatarTraversal {
    /// Start at `path[0]`. Paths with fewer than two nodes describe no
    /// movement and yield `None`.
    #[must_use]
    pub fn new(path: Vec<NodeId>) -> Option<Self> {
        (path.len() >= 2).then_some(Self {
            path,
            cursor: 0,
            progress: 0.0,
        })
    }

    /// Node the current edge starts from.
    #[must_use]
    pub fn current(&self) -> &NodeId {
        &self.path[self.cursor]
    }

    /// Node the current edge leads to.
    #[must_use]
    pub fn next(&self) -> &NodeId {
        &self.path[self.cursor + 1]
    }

    /// Final node of the path.
    #[must_use]
    pub fn destination(&self) -> &NodeId {
        &self.path[self.path.len() - 1]
    }

    /// Full path including the starting node.
    #[must_use]
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    /// Index of the current edge's starting node in [`path`](Self::path).
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Progress along the current edge in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Add `step` to the edge progress, saturating at 1.
    pub(crate) fn advance(&mut self, step: f32) {
        self.progress = (self.progress + step).min(1.0);
    }

    /// Move on to the next edge. Returns `false` (and changes nothing) if
    /// the current edge is the last one.
    pub(crate) fn next_edge(&mut self) -> bool {
        if self.cursor + 2 >= self.path.len() {
            return false;
        }
        self.cursor += 1;
        self.progress = 0.0;
        true
    }
}

/// Point on the arcing hop from `start` to `end` at `t`.
///
/// Quadratic Bézier whose control point sits `height` above the segment
/// midpoint, so the apex of the hop is `height / 2` above the straight
/// line.
#[must_use]
pub fn arc_point(start: Vec3, end: Vec3, height: f32, t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    let control = (start + end) * 0.5 + Vec3::Y * height;
    let omt = 1.0 - t;
    start * (omt * omt) + control * (2.0 * omt * t) + end * (t * t)
}

/// Yaw (rotation about +Y, 0 facing +Z) pointing from `from` to `to`.
/// Returns `None` when the points coincide on the XZ plane.
#[must_use]
pub fn yaw_towards(from: Vec3, to: Vec3) -> Option<f32> {
    let d = to - from;
    (d.x.abs() > f32::EPSILON || d.z.abs() > f32::EPSILON).then(|| d.x.atan2(d.z))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(ids: &[&str]) -> Vec<NodeId> {
        ids.iter().map(|&s| NodeId::from(s)).collect()
    }

    #[test]
    fn single_node_path_is_not_a_traversal() {
        assert!(AvatarTraversal::new(path(&["a"])).is_none());
        assert!(AvatarTraversal::new(Vec::new()).is_none());
    }

    #[test]
    fn cursor_stops_at_last_edge() {
        let mut t = AvatarTraversal::new(path(&["a", "b", "c"])).unwrap();
        assert_eq!(t.next().as_str(), "b");
        assert!(t.next_edge());
        assert_eq!(t.current().as_str(), "b");
        assert_eq!(t.next().as_str(), "c");
        assert!(!t.next_edge());
        assert_eq!(t.cursor(), 1);
        assert_eq!(t.destination().as_str(), "c");
    }

    #[test]
    fn progress_saturates() {
        let mut t = AvatarTraversal::new(path(&["a", "b"])).unwrap();
        t.advance(0.7);
        t.advance(0.7);
        assert_eq!(t.progress(), 1.0);
    }

    #[test]
    fn arc_hits_endpoints_and_rises_mid_hop() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(4.0, 0.0, 0.0);
        assert_eq!(arc_point(a, b, 2.0, 0.0), a);
        assert_eq!(arc_point(a, b, 2.0, 1.0), b);
        let mid = arc_point(a, b, 2.0, 0.5);
        assert!((mid - Vec3::new(2.0, 1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn yaw_faces_edge_direction() {
        let yaw = yaw_towards(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)).unwrap();
        assert!((yaw - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        let yaw = yaw_towards(Vec3::ZERO, Vec3::new(0.0, 3.0, 2.0)).unwrap();
        assert!(yaw.abs() < 1e-6);
        assert!(yaw_towards(Vec3::ONE, Vec3::new(1.0, 5.0, 1.0)).is_none());
    }
}
