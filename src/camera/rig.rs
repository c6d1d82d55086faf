use glam::Vec3;

use super::core::{Camera, CameraUniform};
use crate::graph::NodeId;
use crate::options::CameraOptions;

/// What the rig follows this frame, read from the avatar after it moved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowTarget {
    /// Avatar world position.
    pub position: Vec3,
    /// Position of the node at the end of the edge being crossed, if the
    /// avatar is mid-traversal.
    pub heading_to: Option<Vec3>,
}

/// Notable changes produced by [`CameraRig::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraEvent {
    /// The focus zoom onto this node reached its end pose. Reported once
    /// per focus request.
    FocusCompleted(NodeId),
}

#[derive(Debug, Clone)]
struct FocusState {
    node: NodeId,
    start_eye: Vec3,
    start_target: Vec3,
    goal_eye: Vec3,
    goal_target: Vec3,
    progress: f32,
    reported: bool,
}

/// Camera that trails the avatar, or zooms onto a focused node.
///
/// Follow smoothing uses a fixed per-frame blend (not time-scaled), so the
/// rig must be updated exactly once per frame.
#[derive(Debug, Clone)]
pub struct CameraRig {
    /// The camera being driven.
    pub camera: Camera,
    options: CameraOptions,
    focus: Option<FocusState>,
}

impl CameraRig {
    /// Rig already settled behind `avatar`.
    #[must_use]
    pub fn new(options: CameraOptions, aspect: f32, avatar: Vec3) -> Self {
        let camera = Camera {
            eye: avatar + Vec3::from_array(options.follow_offset),
            target: avatar,
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };
        Self {
            camera,
            options,
            focus: None,
        }
    }

    /// Replace the rig parameters.
    pub fn set_options(&mut self, options: CameraOptions) {
        self.camera.fovy = options.fovy;
        self.camera.znear = options.znear;
        self.camera.zfar = options.zfar;
        self.options = options;
    }

    /// Update the viewport aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.camera.aspect = width as f32 / height as f32;
        }
    }

    /// Start zooming onto `node` at `position`, from wherever the camera
    /// is now. Re-focusing the node already focused is a no-op.
    pub fn focus_on(&mut self, node: NodeId, position: Vec3) {
        if self.focus.as_ref().is_some_and(|f| f.node == node) {
            return;
        }
        log::debug!("camera focus -> {node}");
        self.focus = Some(FocusState {
            node,
            start_eye: self.camera.eye,
            start_target: self.camera.target,
            goal_eye: position + Vec3::from_array(self.options.focus_offset),
            goal_target: position,
            progress: 0.0,
            reported: false,
        });
    }

    /// Leave focus mode; following resumes from the current pose.
    pub fn release_focus(&mut self) {
        if let Some(focus) = self.focus.take() {
            log::debug!("camera focus released from {}", focus.node);
        }
    }

    /// Whether a focus zoom is active (in progress or holding).
    #[must_use]
    pub fn is_focus_active(&self) -> bool {
        self.focus.is_some()
    }

    /// Node being focused.
    #[must_use]
    pub fn focused_node(&self) -> Option<&NodeId> {
        self.focus.as_ref().map(|f| &f.node)
    }

    /// Eased focus progress in `[0, 1]`; 0 while following.
    #[must_use]
    pub fn focus_progress(&self) -> f32 {
        self.focus
            .as_ref()
            .map_or(0.0, |f| self.options.focus_easing.evaluate(f.progress))
    }

    /// Per-frame update. In follow mode the eye eases toward
    /// `avatar + offset` and the look-at leans toward the next node while
    /// the avatar is mid-hop.
    pub fn update(&mut self, follow: FollowTarget) -> Option<CameraEvent> {
        if let Some(focus) = self.focus.as_mut() {
            focus.progress = (focus.progress + self.options.focus_rate.max(1e-4)).min(1.0);
            let eased = self.options.focus_easing.evaluate(focus.progress);
            self.camera.eye = focus.start_eye.lerp(focus.goal_eye, eased);
            self.camera.target = focus.start_target.lerp(focus.goal_target, eased);
            if focus.progress >= 1.0 && !focus.reported {
                focus.reported = true;
                return Some(CameraEvent::FocusCompleted(focus.node.clone()));
            }
            return None;
        }

        let desired_eye = follow.position + Vec3::from_array(self.options.follow_offset);
        let blend = self.options.follow_blend.clamp(0.0, 1.0);
        self.camera.eye = self.camera.eye.lerp(desired_eye, blend);
        self.camera.target = match follow.heading_to {
            Some(next) => follow.position.lerp(next, self.options.look_ahead),
            None => follow.position,
        };
        None
    }

    /// Uniform block for the current pose.
    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&self.camera, self.focus_progress());
        uniform
    }
}
