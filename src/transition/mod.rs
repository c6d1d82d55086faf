//! Cross-view transition sessions with a scene-readiness handshake.

pub mod handle;
pub mod orchestrator;
pub mod session;

pub use handle::{TransitionCompleted, TransitionHandle, TransitionSignal, TransitionSnapshot};
pub use orchestrator::TransitionOrchestrator;
pub use session::{TransitionDirection, TransitionRequest, TransitionSession};
