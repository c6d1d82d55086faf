//! Camera system for following the avatar.
//!
//! Provides a smooth-follow rig with edge look-ahead, a focus zoom onto a
//! single node, and the uniform block consumed by the renderer.

/// Core camera struct and GPU uniform types.
pub mod core;
/// Follow / focus rig driven once per frame.
pub mod rig;

pub use self::core::{Camera, CameraUniform};
pub use rig::{CameraEvent, CameraRig, FollowTarget};
