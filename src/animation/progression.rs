use std::time::Duration;

use crate::animation::ease::Ease;

/// Repeating, time-driven value progression from `from` to `to`.
///
/// Time zero is anchored at the first sample, so a progression created during one frame starts
/// from `from` on the next frame no matter how long the host took to tick it.
#[derive(Clone, Debug)]
pub struct RepeatingProgression {
    from: f64,
    to: f64,
    period: Duration,
    ease: Ease,
    origin: Option<Duration>,
}

impl RepeatingProgression {
    /// `period` of zero is treated as one nanosecond.
    pub fn new(from: f64, to: f64, period: Duration, ease: Ease) -> Self {
        Self {
            from,
            to,
            period: period.max(Duration::from_nanos(1)),
            ease,
            origin: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_started(&self) -> bool {
        self.origin.is_some()
    }

    /// Fraction of the current iteration, in `[0, 1)`.
    pub fn fraction_at(&mut self, now: Duration) -> f64 {
        let elapsed = self.elapsed(now);
        let period = self.period.as_nanos();
        let into = elapsed.as_nanos() % period;
        into as f64 / period as f64
    }

    /// Number of completed iterations at `now`.
    pub fn iteration_at(&mut self, now: Duration) -> u64 {
        let elapsed = self.elapsed(now);
        (elapsed.as_nanos() / self.period.as_nanos()) as u64
    }

    pub fn value_at(&mut self, now: Duration) -> f64 {
        let t = self.ease.apply(self.fraction_at(now));
        self.from + (self.to - self.from) * t
    }

    fn elapsed(&mut self, now: Duration) -> Duration {
        let origin = *self.origin.get_or_insert(now);
        now.saturating_sub(origin)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/progression.rs"]
mod tests;
