//! Startup loading progress.
//!
//! Two sources feed the progress bar. The asset loader reports an
//! authoritative percentage when it can; until it does, a simulated
//! sequence of weighted pseudo-assets keeps the bar moving. The first
//! authoritative report retires the simulation for good.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::options::LoadingOptions;

#[derive(Debug, Clone)]
struct ScheduledAsset {
    name: String,
    weight: f32,
    /// Elapsed time at which this asset counts as loaded.
    done_at: Duration,
}

/// Merges authoritative and simulated progress and decides when the
/// loading screen is dismissed.
#[derive(Debug, Clone)]
pub struct LoadingCoordinator {
    assets: Vec<ScheduledAsset>,
    total_weight: f32,
    elapsed: Duration,
    completed: usize,
    authoritative: Option<f32>,
    synthetic_enabled: bool,
    dismissed: bool,
}

impl LoadingCoordinator {
    /// Coordinator with the simulated sequence laid out from `options`.
    /// Delays are jittered deterministically from `options.seed`.
    #[must_use]
    pub fn new(options: &LoadingOptions) -> Self {
        let mut rng = StdRng::seed_from_u64(options.seed);
        let jitter = if options.jitter.is_nan() {
            0.0
        } else {
            options.jitter.clamp(0.0, 0.9)
        };

        let mut at = Duration::ZERO;
        let assets: Vec<ScheduledAsset> = options
            .assets
            .iter()
            .map(|asset| {
                let scale = 1.0 + rng.random_range(-jitter..=jitter);
                let nanos = asset.delay_ms as f64 * 1e6 * f64::from(scale);
                at += Duration::from_nanos(nanos.round() as u64);
                ScheduledAsset {
                    name: asset.name.clone(),
                    weight: if asset.weight.is_finite() {
                        asset.weight.max(0.0)
                    } else {
                        0.0
                    },
                    done_at: at,
                }
            })
            .collect();
        let total_weight = assets.iter().map(|a| a.weight).sum();

        Self {
            assets,
            total_weight,
            elapsed: Duration::ZERO,
            completed: 0,
            authoritative: None,
            synthetic_enabled: true,
            dismissed: false,
        }
    }

    /// Authoritative percentage from the asset loader, clamped to
    /// `[0, 100]`. Never decreases the displayed value.
    pub fn report_progress(&mut self, percent: f32) {
        let percent = percent.clamp(0.0, 100.0);
        if self.synthetic_enabled {
            log::debug!("authoritative load progress received; simulation off");
            self.synthetic_enabled = false;
        }
        let value = self.authoritative.map_or(percent, |prev| prev.max(percent));
        self.authoritative = Some(value);
        if value >= 100.0 && !self.dismissed {
            log::info!("loading complete");
            self.dismissed = true;
        }
    }

    /// Advance the simulated sequence.
    pub fn tick(&mut self, dt: Duration) {
        if !self.synthetic_enabled || self.dismissed {
            return;
        }
        self.elapsed += dt;
        while let Some(asset) = self.assets.get(self.completed) {
            if self.elapsed < asset.done_at {
                break;
            }
            log::debug!("loaded {}", asset.name);
            self.completed += 1;
        }
        if self.completed == self.assets.len() && self.authoritative.is_none() {
            log::info!("loading complete (simulated)");
            self.dismissed = true;
        }
    }

    /// Percentage to display.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.authoritative.unwrap_or_else(|| self.synthetic_progress())
    }

    /// Simulated percentage, independent of whether it is still in use.
    #[must_use]
    pub fn synthetic_progress(&self) -> f32 {
        if self.total_weight <= 0.0 {
            return if self.completed == self.assets.len() { 100.0 } else { 0.0 };
        }
        let done: f32 = self.assets[..self.completed].iter().map(|a| a.weight).sum();
        (done / self.total_weight * 100.0).min(100.0)
    }

    /// Whether an authoritative value has ever been reported.
    #[must_use]
    pub fn is_authoritative(&self) -> bool {
        self.authoritative.is_some()
    }

    /// Whether the loading screen should be gone.
    #[must_use]
    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Label of the pseudo-asset being "loaded", while simulating.
    #[must_use]
    pub fn current_asset(&self) -> Option<&str> {
        if !self.synthetic_enabled || self.dismissed {
            return None;
        }
        self.assets.get(self.completed).map(|a| a.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::PseudoAsset;

    fn steady() -> LoadingOptions {
        LoadingOptions {
            jitter: 0.0,
            ..LoadingOptions::default()
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn synthetic_progress_follows_weights() {
        let mut loading = LoadingCoordinator::new(&steady());
        assert_eq!(loading.progress(), 0.0);
        assert_eq!(loading.current_asset(), Some("scene geometry"));
        loading.tick(ms(900));
        assert!((loading.progress() - 40.0).abs() < 1e-4);
        assert_eq!(loading.current_asset(), Some("textures"));
        loading.tick(ms(700));
        assert!((loading.progress() - 65.0).abs() < 1e-4);
        assert!(!loading.is_dismissed());
    }

    #[test]
    fn synthetic_completion_dismisses() {
        let mut loading = LoadingCoordinator::new(&steady());
        for _ in 0..200 {
            loading.tick(ms(16));
        }
        assert!(loading.is_dismissed());
        assert_eq!(loading.progress(), 100.0);
        assert_eq!(loading.current_asset(), None);
    }

    #[test]
    fn authoritative_report_retires_simulation() {
        let mut loading = LoadingCoordinator::new(&steady());
        loading.tick(ms(900));
        loading.report_progress(10.0);
        assert_eq!(loading.progress(), 10.0);
        for _ in 0..500 {
            loading.tick(ms(16));
        }
        assert_eq!(loading.progress(), 10.0);
        assert!(!loading.is_dismissed());
        assert_eq!(loading.current_asset(), None);

        loading.report_progress(100.0);
        assert!(loading.is_dismissed());
    }

    #[test]
    fn authoritative_progress_never_regresses() {
        let mut loading = LoadingCoordinator::new(&steady());
        loading.report_progress(60.0);
        loading.report_progress(30.0);
        assert_eq!(loading.progress(), 60.0);
        loading.report_progress(250.0);
        assert_eq!(loading.progress(), 100.0);
        assert!(loading.is_dismissed());
    }

    #[test]
    fn jitter_is_deterministic_per_seed() {
        let options = LoadingOptions::default();
        let a = LoadingCoordinator::new(&options);
        let b = LoadingCoordinator::new(&options);
        let times = |c: &LoadingCoordinator| c.assets.iter().map(|a| a.done_at).collect::<Vec<_>>();
        assert_eq!(times(&a), times(&b));

        let base = LoadingCoordinator::new(&steady());
        for (jittered, plain) in a.assets.iter().zip(&base.assets) {
            let ratio = jittered.done_at.as_secs_f32() / plain.done_at.as_secs_f32();
            assert!((0.75..=1.25).contains(&ratio), "{ratio}");
        }
    }

    #[test]
    fn empty_sequence_completes_immediately() {
        let options = LoadingOptions {
            assets: Vec::new(),
            ..LoadingOptions::default()
        };
        let mut loading = LoadingCoordinator::new(&options);
        loading.tick(Duration::ZERO);
        assert!(loading.is_dismissed());

        let options = LoadingOptions {
            assets: vec![PseudoAsset {
                name: "weightless".to_owned(),
                weight: 0.0,
                delay_ms: 100,
            }],
            jitter: 0.0,
            seed: 1,
        };
        let mut loading = LoadingCoordinator::new(&options);
        assert_eq!(loading.progress(), 0.0);
        loading.tick(ms(100));
        assert_eq!(loading.progress(), 100.0);
    }

    #[test]
    fn non_finite_parameters_degrade_to_plain_schedule() {
        let mut options = steady();
        options.jitter = f32::NAN;
        options.assets[0].weight = f32::INFINITY;
        let mut loading = LoadingCoordinator::new(&options);
        let plain = LoadingCoordinator::new(&steady());
        assert_eq!(loading.assets[1].done_at, plain.assets[1].done_at);

        loading.tick(ms(900));
        assert_eq!(loading.progress(), 0.0);
        for _ in 0..200 {
            loading.tick(ms(16));
        }
        assert_eq!(loading.progress(), 100.0);
    }
}
