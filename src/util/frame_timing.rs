//! Frame delta clock for the viewer loop.

use std::time::Duration;

use web_time::Instant;

/// Frame clock producing per-frame deltas and a smoothed FPS readout.
///
/// Deltas are clamped to `max_delta` so a stalled frame (window drag,
/// debugger pause) does not make the transition fallback timer fire in a
/// single step.
pub struct FrameClock {
    /// Last frame timestamp
    last_frame: Instant,
    /// Upper bound for a single frame delta
    max_delta: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Create a clock whose deltas never exceed `max_delta`.
    #[must_use]
    pub fn new(max_delta: Duration) -> Self {
        Self {
            last_frame: Instant::now(),
            max_delta,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Mark the start of a frame and return the clamped delta since the
    /// previous one.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + (1.0 / frame_time) * self.smoothing;
        }
        elapsed.min(self.max_delta)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
