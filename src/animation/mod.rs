//! Reveal animation state machine.
//!
//! The controller owns the scalar reveal progress and nothing else. It never
//! schedules timers: the host event loop (or a test) feeds elapsed
//! milliseconds through [`RevealAnimation::advance`], which keeps every
//! transition deterministic and single-threaded. Progress grows linearly,
//! with no easing.

use serde::{Deserialize, Serialize};

/// Delays at or below this threshold skip the animation entirely: the chart
/// comes up fully revealed and never ticks.
pub const REVEAL_SKIP_THRESHOLD_MS: u64 = 1;

/// Fixed reveal duration used when the host does not override it.
pub const DEFAULT_REVEAL_DURATION_MS: u64 = 2000;

/// Reveal timing supplied at widget construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Wait before the reveal starts. At most [`REVEAL_SKIP_THRESHOLD_MS`]
    /// means "no animation".
    pub delay_ms: u64,
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

fn default_duration_ms() -> u64 {
    DEFAULT_REVEAL_DURATION_MS
}

impl RevealConfig {
    #[must_use]
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            duration_ms: DEFAULT_REVEAL_DURATION_MS,
        }
    }

    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealPhase {
    /// Waiting out the initial delay; progress is pinned at 0.
    Pending,
    /// Interpolating progress from 0 to 1 over the configured duration.
    Running,
    /// Terminal. Reached at progress 1, or frozen early by cancellation.
    Done,
}

/// Outcome of one [`RevealAnimation::advance`] step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTick {
    /// Nothing visible changed; no repaint required.
    Idle,
    /// Progress moved; the widget should request a repaint.
    RedrawNeeded,
    /// Progress reached 1 during this step; final repaint required.
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealAnimation {
    config: RevealConfig,
    phase: RevealPhase,
    progress: f64,
    waited_ms: u64,
    run_elapsed_ms: u64,
}

impl RevealAnimation {
    #[must_use]
    pub fn new(config: RevealConfig) -> Self {
        if config.delay_ms <= REVEAL_SKIP_THRESHOLD_MS {
            Self {
                config,
                phase: RevealPhase::Done,
                progress: 1.0,
                waited_ms: 0,
                run_elapsed_ms: 0,
            }
        } else {
            Self {
                config,
                phase: RevealPhase::Pending,
                progress: 0.0,
                waited_ms: 0,
                run_elapsed_ms: 0,
            }
        }
    }

    #[must_use]
    pub fn config(self) -> RevealConfig {
        self.config
    }

    #[must_use]
    pub fn phase(self) -> RevealPhase {
        self.phase
    }

    /// Current reveal progress, always within `[0, 1]`.
    #[must_use]
    pub fn progress(self) -> f64 {
        self.progress
    }

    #[must_use]
    pub fn is_animating(self) -> bool {
        matches!(self.phase, RevealPhase::Pending | RevealPhase::Running)
    }

    /// Resets the machine to its construction state.
    pub fn restart(&mut self) {
        *self = Self::new(self.config);
    }

    /// Freezes the machine terminal without touching progress.
    ///
    /// Called on widget teardown so no later `advance` can mutate state that
    /// a disposed host might still observe.
    pub fn cancel(&mut self) {
        self.phase = RevealPhase::Done;
    }

    /// Steps the machine by `delta_ms` of host time.
    ///
    /// Delta left over when the delay elapses spills directly into the
    /// running phase, so a coarse host tick does not stall the reveal.
    pub fn advance(&mut self, delta_ms: u64) -> RevealTick {
        match self.phase {
            RevealPhase::Done => RevealTick::Idle,
            RevealPhase::Pending => {
                self.waited_ms = self.waited_ms.saturating_add(delta_ms);
                if self.waited_ms < self.config.delay_ms {
                    return RevealTick::Idle;
                }
                let spill = self.waited_ms - self.config.delay_ms;
                self.phase = RevealPhase::Running;
                self.run_elapsed_ms = 0;
                self.advance_running(spill)
            }
            RevealPhase::Running => self.advance_running(delta_ms),
        }
    }

    fn advance_running(&mut self, delta_ms: u64) -> RevealTick {
        self.run_elapsed_ms = self.run_elapsed_ms.saturating_add(delta_ms);

        if self.config.duration_ms == 0 || self.run_elapsed_ms >= self.config.duration_ms {
            self.progress = 1.0;
            self.phase = RevealPhase::Done;
            return RevealTick::Completed;
        }

        self.progress =
            (self.run_elapsed_ms as f64 / self.config.duration_ms as f64).clamp(0.0, 1.0);
        RevealTick::RedrawNeeded
    }
}

#[cfg(test)]
mod tests {
    use super::{RevealAnimation, RevealConfig, RevealPhase, RevealTick};

    #[test]
    fn zero_delay_skips_the_animation() {
        let mut reveal = RevealAnimation::new(RevealConfig::new(0));
        assert_eq!(reveal.phase(), RevealPhase::Done);
        assert_eq!(reveal.progress(), 1.0);
        assert_eq!(reveal.advance(16), RevealTick::Idle);
    }

    #[test]
    fn delay_boundary_spills_into_running() {
        let mut reveal = RevealAnimation::new(RevealConfig::new(100).with_duration_ms(1000));
        assert_eq!(reveal.advance(80), RevealTick::Idle);
        assert_eq!(reveal.progress(), 0.0);

        // 120 ms total: 20 ms past the delay must already count as run time.
        assert_eq!(reveal.advance(40), RevealTick::RedrawNeeded);
        assert_eq!(reveal.phase(), RevealPhase::Running);
        assert!((reveal.progress() - 0.02).abs() < 1e-12);
    }

    #[test]
    fn cancel_freezes_progress() {
        let mut reveal = RevealAnimation::new(RevealConfig::new(100).with_duration_ms(1000));
        reveal.advance(100);
        reveal.advance(500);
        let frozen = reveal.progress();

        reveal.cancel();
        assert_eq!(reveal.advance(10_000), RevealTick::Idle);
        assert_eq!(reveal.progress(), frozen);
    }
}
