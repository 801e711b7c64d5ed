use std::time::{Duration, Instant};

/// A monotonic-clock expiry owned by the phase that scheduled it.
///
/// The owning phase state holds the deadline by value: entering a phase arms
/// it, leaving the phase drops it. A stale timer can therefore never fire
/// against a collection that is no longer displayed.
#[derive(Debug, Clone)]
pub struct Deadline {
    due: Instant,
    interval: Duration,
}

impl Deadline {
    pub fn after(interval: Duration) -> Self {
        Self {
            due: Instant::now() + interval,
            interval,
        }
    }

    pub fn is_due(&self) -> bool {
        Instant::now() >= self.due
    }

    /// Re-arm for the next interval, measured from now (not from the previous
    /// due point), so a long frame cannot queue up back-to-back ticks.
    pub fn restart(&mut self) {
        self.due = Instant::now() + self.interval;
    }

    /// Pull the expiry to now. Used by the manual-refresh hotkey.
    pub fn force(&mut self) {
        self.due = Instant::now();
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until expiry, zero if already due. Feeds repaint scheduling.
    pub fn remaining(&self) -> Duration {
        self.due.saturating_duration_since(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_due_before_interval_elapses() {
        let deadline = Deadline::after(Duration::from_secs(3600));
        assert!(!deadline.is_due());
        assert!(deadline.remaining() > Duration::from_secs(3500));
    }

    #[test]
    fn due_once_interval_has_passed() {
        let deadline = Deadline::after(Duration::ZERO);
        assert!(deadline.is_due());
        assert_eq!(deadline.remaining(), Duration::ZERO);
    }

    #[test]
    fn force_then_restart_round_trips() {
        let mut deadline = Deadline::after(Duration::from_secs(3600));
        deadline.force();
        assert!(deadline.is_due());
        deadline.restart();
        assert!(!deadline.is_due());
        assert_eq!(deadline.interval(), Duration::from_secs(3600));
    }
}
