//! Idle-timeout watchdog.
//!
//! Tracks the time of the last recorded input and decides, on each tick,
//! whether the text surface must be cleared. All methods take the current
//! time as an argument so the policy is deterministic under test; the event
//! loop passes `Instant::now()`.
//!
//! # Timing
//!
//! The host loop asks [`Watchdog::next_wake`] how long it may sleep and ticks
//! when it wakes. Wake-ups are never further apart than the tick interval, so
//! a clear happens no later than `timeout + tick_interval` after the last
//! activity and never before `timeout` has elapsed.

use crate::error::ConfigError;
use crate::surface::SurfaceControl;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Determine whether the idle threshold has been reached.
///
/// Uses `>=`: a tick exactly on the boundary clears.
pub(crate) fn idle_expired(last_activity: Instant, now: Instant, timeout: Duration) -> bool {
    now.saturating_duration_since(last_activity) >= timeout
}

/// Mutable watchdog state, created by [`Watchdog::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchdogState {
    /// Time of the last keystroke, restart, or successful clear
    pub last_activity_at: Instant,
    /// Idle period after which the surface is cleared
    pub timeout: Duration,
    /// Whether ticks are evaluated
    pub running: bool,
}

/// Why an activity timestamp was not recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActivityError {
    /// The watchdog has not been started or has been stopped.
    #[error("watchdog is not running")]
    NotRunning,

    /// The timestamp is older than the last recorded activity.
    #[error("activity timestamp is {0:?} older than the last recorded activity")]
    OutOfOrder(Duration),
}

/// Idle watchdog driving the clear-and-refocus policy.
#[derive(Debug)]
pub struct Watchdog {
    state: Option<WatchdogState>,
    tick_interval: Duration,
    clear_count: u64,
}

impl Watchdog {
    /// Create an unarmed watchdog whose host loop wakes at least every `tick_interval`.
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            state: None,
            tick_interval: tick_interval.max(Duration::from_millis(1)),
            clear_count: 0,
        }
    }

    /// Arm the watchdog and start the idle clock at `now`.
    ///
    /// Calling `start` on a running watchdog re-arms it with the new timeout.
    pub fn start(&mut self, timeout: Duration, now: Instant) -> Result<(), ConfigError> {
        if timeout.is_zero() {
            return Err(ConfigError::Validation(
                "idle timeout must be greater than zero".to_string(),
            ));
        }
        if now.checked_add(timeout).is_none() {
            return Err(ConfigError::Validation(format!(
                "idle timeout {timeout:?} is too large"
            )));
        }
        self.state = Some(WatchdogState {
            last_activity_at: now,
            timeout,
            running: true,
        });
        crate::debug_info!("WATCHDOG", "Armed with timeout {:?}", timeout);
        Ok(())
    }

    /// Halt ticking. Idempotent.
    pub fn stop(&mut self) {
        if let Some(state) = self.state.as_mut()
            && state.running
        {
            state.running = false;
            crate::debug_info!("WATCHDOG", "Stopped after {} clears", self.clear_count);
        }
    }

    /// Record input activity now.
    pub fn note_activity(&mut self) -> Result<(), ActivityError> {
        self.note_activity_at(Instant::now())
    }

    /// Record input activity at `now`, restarting the idle clock.
    ///
    /// The stored timestamp never moves backwards.
    pub fn note_activity_at(&mut self, now: Instant) -> Result<(), ActivityError> {
        let state = self
            .state
            .as_mut()
            .filter(|s| s.running)
            .ok_or(ActivityError::NotRunning)?;
        if now < state.last_activity_at {
            return Err(ActivityError::OutOfOrder(state.last_activity_at - now));
        }
        state.last_activity_at = now;
        Ok(())
    }

    /// Evaluate the idle condition at `now`.
    ///
    /// Returns `Ok(true)` when the surface was cleared, `Ok(false)` when no
    /// clear was due or the watchdog is not running. A failed clear leaves the
    /// idle clock untouched so the next tick retries immediately; a failed
    /// focus after a successful clear is only logged.
    pub fn tick(
        &mut self,
        now: Instant,
        surface: &mut impl SurfaceControl,
    ) -> Result<bool, crate::error::SurfaceError> {
        let Some(state) = self.state.as_mut().filter(|s| s.running) else {
            return Ok(false);
        };
        if !idle_expired(state.last_activity_at, now, state.timeout) {
            return Ok(false);
        }

        surface.clear()?;
        if let Err(e) = surface.focus() {
            log::warn!("Cleared text surface but could not focus it: {}", e);
        }
        state.last_activity_at = now;
        self.clear_count += 1;
        crate::debug_log!("WATCHDOG", "Idle timeout reached, cleared surface");
        Ok(true)
    }

    /// Whether ticks are currently evaluated
    pub fn is_running(&self) -> bool {
        self.state.is_some_and(|s| s.running)
    }

    /// Snapshot of the current state (`None` before the first `start`)
    pub fn state(&self) -> Option<WatchdogState> {
        self.state
    }

    /// Time of the last recorded activity
    pub fn last_activity_at(&self) -> Option<Instant> {
        self.state.map(|s| s.last_activity_at)
    }

    /// Number of successful clears since creation
    pub fn clear_count(&self) -> u64 {
        self.clear_count
    }

    /// Maximum sleep between ticks
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Instant at which the next clear becomes due, if running
    pub fn deadline(&self) -> Option<Instant> {
        self.state
            .filter(|s| s.running)
            .and_then(|s| s.last_activity_at.checked_add(s.timeout))
    }

    /// Time left before the next clear (zero once overdue), if running
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline().map(|d| d.saturating_duration_since(now))
    }

    /// When the host loop should wake up for the next tick.
    ///
    /// Never later than the deadline and never more than one tick interval
    /// away; an overdue deadline (a failed clear awaiting retry) is retried
    /// one tick interval later instead of spinning.
    pub fn next_wake(&self, now: Instant) -> Option<Instant> {
        let deadline = self.deadline()?;
        let cadence = now + self.tick_interval;
        Some(if deadline > now {
            deadline.min(cadence)
        } else {
            cadence
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SurfaceError;

    #[derive(Default)]
    struct CountingSurface {
        clears: usize,
        focuses: usize,
        fail_focus: bool,
    }

    impl SurfaceControl for CountingSurface {
        fn clear(&mut self) -> Result<(), SurfaceError> {
            self.clears += 1;
            Ok(())
        }

        fn focus(&mut self) -> Result<(), SurfaceError> {
            self.focuses += 1;
            if self.fail_focus {
                Err(SurfaceError::Destroyed)
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_idle_expired_after_threshold() {
        let now = Instant::now();
        let past = now - Duration::from_secs(6);
        assert!(idle_expired(past, now, Duration::from_secs(5)));
    }

    #[test]
    fn test_idle_not_expired_before_threshold() {
        let now = Instant::now();
        let recent = now - Duration::from_secs(3);
        assert!(!idle_expired(recent, now, Duration::from_secs(5)));
    }

    #[test]
    fn test_idle_expired_on_boundary() {
        let now = Instant::now();
        let at_threshold = now - Duration::from_secs(5);
        assert!(idle_expired(at_threshold, now, Duration::from_secs(5)));
    }

    #[test]
    fn test_start_rejects_zero_timeout() {
        let mut watchdog = Watchdog::new(Duration::from_millis(100));
        assert!(watchdog.start(Duration::ZERO, Instant::now()).is_err());
        assert!(!watchdog.is_running());
    }

    #[test]
    fn test_tick_before_start_does_nothing() {
        let mut watchdog = Watchdog::new(Duration::from_millis(100));
        let mut surface = CountingSurface::default();
        assert_eq!(watchdog.tick(Instant::now(), &mut surface), Ok(false));
        assert_eq!(surface.clears, 0);
    }

    #[test]
    fn test_focus_failure_still_resets_clock() {
        let t0 = Instant::now();
        let mut watchdog = Watchdog::new(Duration::from_millis(100));
        watchdog.start(Duration::from_secs(5), t0).unwrap();
        let mut surface = CountingSurface {
            fail_focus: true,
            ..Default::default()
        };

        let t5 = t0 + Duration::from_secs(5);
        assert_eq!(watchdog.tick(t5, &mut surface), Ok(true));
        assert_eq!(surface.focuses, 1);
        assert_eq!(watchdog.last_activity_at(), Some(t5));
    }

    #[test]
    fn test_out_of_order_activity_is_rejected() {
        let t0 = Instant::now();
        let mut watchdog = Watchdog::new(Duration::from_millis(100));
        watchdog
            .start(Duration::from_secs(5), t0 + Duration::from_secs(2))
            .unwrap();
        assert_eq!(
            watchdog.note_activity_at(t0),
            Err(ActivityError::OutOfOrder(Duration::from_secs(2)))
        );
        assert_eq!(
            watchdog.last_activity_at(),
            Some(t0 + Duration::from_secs(2))
        );
    }

    #[test]
    fn test_start_rejects_unrepresentable_timeout() {
        let t0 = Instant::now();
        let mut watchdog = Watchdog::new(Duration::from_millis(100));
        assert!(matches!(
            watchdog.start(Duration::MAX, t0),
            Err(ConfigError::Validation(_))
        ));
        assert!(!watchdog.is_running());
        assert_eq!(watchdog.deadline(), None);
    }

    #[test]
    fn test_next_wake_is_bounded_by_tick_interval() {
        let t0 = Instant::now();
        let mut watchdog = Watchdog::new(Duration::from_millis(100));
        watchdog.start(Duration::from_secs(5), t0).unwrap();

        assert_eq!(
            watchdog.next_wake(t0),
            Some(t0 + Duration::from_millis(100))
        );

        let near_deadline = t0 + Duration::from_millis(4950);
        assert_eq!(
            watchdog.next_wake(near_deadline),
            Some(t0 + Duration::from_secs(5))
        );

        let overdue = t0 + Duration::from_secs(6);
        assert_eq!(
            watchdog.next_wake(overdue),
            Some(overdue + Duration::from_millis(100))
        );
    }

    #[test]
    fn test_remaining_counts_down() {
        let t0 = Instant::now();
        let mut watchdog = Watchdog::new(Duration::from_millis(100));
        assert_eq!(watchdog.remaining(t0), None);
        watchdog.start(Duration::from_secs(5), t0).unwrap();
        assert_eq!(
            watchdog.remaining(t0 + Duration::from_secs(2)),
            Some(Duration::from_secs(3))
        );
        assert_eq!(
            watchdog.remaining(t0 + Duration::from_secs(9)),
            Some(Duration::ZERO)
        );
    }
}
