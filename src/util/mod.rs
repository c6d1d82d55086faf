//! Shared utilities: easing curves, frame timing, listener registries and
//! the deferred-callback scheduler.

pub mod easing;
pub mod frame_timing;
pub mod listeners;
pub mod scheduler;
