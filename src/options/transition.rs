use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Transition", inline)]
#[serde(default)]
/// Cross-view transition timing.
pub struct TransitionOptions {
    /// Time for a full 0 → 1 sweep at normal speed, in seconds.
    #[schemars(title = "Duration", range(min = 0.2, max = 5.0), extend("step" = 0.1))]
    pub duration_secs: f32,
    /// Fraction of the sweep after which a scene-waiting transition slows
    /// down.
    #[schemars(skip)]
    pub checkpoint: f32,
    /// Speed multiplier while waiting past the checkpoint.
    #[schemars(skip)]
    pub slow_factor: f32,
    /// Time after start at which a missing scene-ready signal is assumed.
    #[schemars(skip)]
    pub fallback_secs: f32,
}

impl TransitionOptions {
    /// Full-sweep duration. Negative or NaN values mean zero; values too
    /// large for a [`Duration`] fall back to the default.
    #[must_use]
    pub fn duration(&self) -> Duration {
        seconds(self.duration_secs, Self::default().duration_secs)
    }

    /// Scene-ready fallback delay, sanitized like [`Self::duration`].
    #[must_use]
    pub fn fallback(&self) -> Duration {
        seconds(self.fallback_secs, Self::default().fallback_secs)
    }
}

fn seconds(value: f32, default: f32) -> Duration {
    Duration::try_from_secs_f32(value.max(0.0))
        .unwrap_or_else(|_| Duration::from_secs_f32(default))
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            duration_secs: 1.6,
            checkpoint: 0.75,
            slow_factor: 0.1,
            fallback_secs: 3.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrepresentable_durations_do_not_panic() {
        let options = TransitionOptions {
            duration_secs: f32::NAN,
            fallback_secs: f32::INFINITY,
            ..TransitionOptions::default()
        };
        assert_eq!(options.duration(), Duration::ZERO);
        assert_eq!(options.fallback(), TransitionOptions::default().fallback());

        let options = TransitionOptions {
            duration_secs: -2.0,
            fallback_secs: 1e30,
            ..TransitionOptions::default()
        };
        assert_eq!(options.duration(), Duration::ZERO);
        assert_eq!(options.fallback().as_millis(), 3500);
    }
}
