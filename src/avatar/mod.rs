//! Avatar movement: direction resolution, path traversal and the
//! controller that ties them to the navigation graph.

/// Avatar controller and movement requests.
pub mod controller;
/// Intent → neighbor scoring.
pub mod direction;
/// Path traversal state and hop interpolation.
pub mod traversal;

pub use controller::{AvatarController, AvatarEvent, MoveGate, MoveOutcome};
pub use direction::{resolve_direction, DirectionChoice};
pub use traversal::{arc_point, yaw_towards, AvatarTraversal};
