//! Transient confirmation state

use std::time::{Duration, Instant};

/// Auto-hiding confirmation with a single owned timer.
///
/// Arming while already visible restarts the delay instead of queueing a
/// second hide.
#[derive(Debug, Clone)]
pub struct Notifier {
    /// When the confirmation was (re)armed; `None` while hidden
    shown_at: Option<Instant>,
    /// How long the confirmation stays visible
    duration: Duration,
}

impl Notifier {
    /// Default visibility window (3 seconds)
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);
    /// Entrance animation length
    const SLIDE_IN: Duration = Duration::from_millis(250);

    pub fn new(duration: Duration) -> Self {
        Self {
            shown_at: None,
            duration,
        }
    }

    /// Show the confirmation, replacing any pending hide
    pub fn arm(&mut self, now: Instant) {
        self.shown_at = Some(now);
    }

    /// Hide immediately and drop the pending hide
    pub fn cancel(&mut self) {
        self.shown_at = None;
    }

    pub fn is_visible(&self) -> bool {
        self.shown_at.is_some()
    }

    /// Time left before the confirmation hides itself
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.shown_at
            .map(|at| self.duration.saturating_sub(now.saturating_duration_since(at)))
    }

    /// Advance the timer. Returns true if the confirmation was hidden by
    /// this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.remaining(now) {
            Some(left) if left.is_zero() => {
                self.shown_at = None;
                true
            }
            _ => false,
        }
    }

    /// Rows still to travel during the entrance animation
    pub fn slide_offset(&self, now: Instant, distance: u16) -> u16 {
        let Some(at) = self.shown_at else {
            return 0;
        };
        let elapsed = now.saturating_duration_since(at);
        if elapsed >= Self::SLIDE_IN {
            return 0;
        }
        let progress = elapsed.as_secs_f32() / Self::SLIDE_IN.as_secs_f32();
        // Cubic ease-out: fast start, gentle landing
        let eased = simple_easing::cubic_out(progress);
        ((1.0 - eased) * distance as f32).round() as u16
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION)
    }
}
