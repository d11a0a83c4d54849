//! Simulated asset loading screen.
//!
//! Progress grows by a random amount every tick interval until it reaches
//! 100%, then the menu fades in after a fixed delay. Any key skips the delay
//! once loading is complete.

use fastrand::Rng;
use showroom_config::LoadingConfig;

const COMPLETE: f64 = 100.0;

/// Where the loading screen is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadingPhase {
    Loading { percent: f64 },
    /// Complete, waiting for the fade.
    Ready,
    /// Screen hidden, menu visible.
    Dismissed,
}

#[derive(Debug)]
pub struct LoadingScreen {
    progress: f64,
    tick_interval_ms: f64,
    max_increment: f64,
    fade_delay_ms: f64,
    last_tick_ms: f64,
    completed_at_ms: Option<f64>,
    dismissed: bool,
    rng: Rng,
}

impl LoadingScreen {
    pub fn new(config: &LoadingConfig, now_ms: f64) -> Self {
        Self::with_rng(config, now_ms, Rng::new())
    }

    /// Deterministic increments.
    pub fn with_seed(config: &LoadingConfig, now_ms: f64, seed: u64) -> Self {
        Self::with_rng(config, now_ms, Rng::with_seed(seed))
    }

    fn with_rng(config: &LoadingConfig, now_ms: f64, rng: Rng) -> Self {
        Self {
            progress: 0.0,
            // A zero interval would never stop catching up.
            tick_interval_ms: config.tick_interval_ms.max(1.0),
            max_increment: config.max_increment.max(0.0),
            fade_delay_ms: config.fade_delay_ms.max(0.0),
            last_tick_ms: now_ms,
            completed_at_ms: None,
            dismissed: false,
            rng,
        }
    }

    /// Apply every tick interval elapsed since the last update.
    pub fn update(&mut self, now_ms: f64) -> LoadingPhase {
        while self.completed_at_ms.is_none() && now_ms - self.last_tick_ms >= self.tick_interval_ms
        {
            self.last_tick_ms += self.tick_interval_ms;
            self.progress = (self.progress + self.rng.f64() * self.max_increment).min(COMPLETE);
            log::trace!("loading {:.0}%", self.progress);
            if self.progress >= COMPLETE {
                log::info!("assets loaded");
                self.completed_at_ms = Some(self.last_tick_ms);
            }
        }

        let faded = self
            .completed_at_ms
            .is_some_and(|completed| now_ms - completed >= self.fade_delay_ms);
        if faded && !self.dismissed {
            self.dismiss();
        }
        self.phase()
    }

    /// A key press; only dismisses once loading is complete.
    pub fn skip(&mut self) -> bool {
        if self.is_complete() && !self.dismissed {
            self.dismiss();
            return true;
        }
        false
    }

    fn dismiss(&mut self) {
        log::debug!("loading screen dismissed");
        self.dismissed = true;
    }

    pub fn phase(&self) -> LoadingPhase {
        if self.dismissed {
            LoadingPhase::Dismissed
        } else if self.is_complete() {
            LoadingPhase::Ready
        } else {
            LoadingPhase::Loading {
                percent: self.progress,
            }
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_complete(&self) -> bool {
        self.completed_at_ms.is_some()
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    pub fn status_text(&self) -> String {
        if self.is_complete() {
            "Press Any Key to Continue".to_string()
        } else {
            format!("Loading Assets... {}%", self.progress.floor())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LoadingConfig {
        LoadingConfig::default()
    }

    #[test]
    fn test_progress_is_bounded_per_tick() {
        let mut screen = LoadingScreen::with_seed(&config(), 0.0, 7);
        assert_eq!(screen.status_text(), "Loading Assets... 0%");

        screen.update(499.0);
        assert_eq!(screen.progress(), 0.0);

        screen.update(500.0);
        assert!(screen.progress() < 15.0);
        let after_one = screen.progress();

        screen.update(1000.0);
        assert!(screen.progress() >= after_one);
        assert!(screen.progress() - after_one < 15.0);
    }

    #[test]
    fn test_completion_and_fade() {
        let mut screen = LoadingScreen::with_seed(&config(), 0.0, 42);
        let mut now = 0.0;
        while !screen.is_complete() {
            now += 500.0;
            screen.update(now);
            assert!(now < 1.0e6, "loading never completed");
        }
        assert_eq!(screen.progress(), 100.0);
        assert_eq!(screen.phase(), LoadingPhase::Ready);
        assert_eq!(screen.status_text(), "Press Any Key to Continue");

        assert_eq!(screen.update(now + 999.0), LoadingPhase::Ready);
        assert_eq!(screen.update(now + 1000.0), LoadingPhase::Dismissed);
    }

    #[test]
    fn test_skip_only_when_complete() {
        let mut screen = LoadingScreen::with_seed(&config(), 0.0, 1);
        assert!(!screen.skip());

        let patient = LoadingConfig {
            fade_delay_ms: 1.0e9,
            ..config()
        };
        let mut screen = LoadingScreen::with_seed(&patient, 0.0, 1);
        screen.update(1.0e6);
        assert!(screen.is_complete());
        assert_eq!(screen.phase(), LoadingPhase::Ready);
        assert!(screen.skip());
        assert!(screen.is_dismissed());
        assert!(!screen.skip());
    }
}
