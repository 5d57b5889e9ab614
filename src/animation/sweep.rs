use std::time::Duration;

use crate::{
    animation::{ease::Ease, progression::RepeatingProgression},
    geometry::mask::SweepBounds,
};

/// Direction the band travels across the view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepDirection {
    /// Left to right.
    #[default]
    Forward,
    /// Right to left.
    Reverse,
}

/// Timing parameters of one sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SweepTiming {
    pub period: Duration,
    pub direction: SweepDirection,
    pub ease: Ease,
}

/// Snapshot of a running sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationState {
    /// Horizontal translation of the mask for the current frame.
    pub current_offset_x: i64,
    pub direction: SweepDirection,
    pub running: bool,
    pub start_bound: i64,
    pub end_bound: i64,
    pub period: Duration,
}

/// Result of one animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    pub offset_x: i64,
    /// Whether the band is visible (or about to be) and the host should repaint.
    pub repaint: bool,
}

#[derive(Clone, Debug)]
struct RunningSweep {
    state: AnimationState,
    mask_width: u32,
    progression: RepeatingProgression,
}

/// Drives the looping mask offset. `Idle` until [`SweepAnimator::begin`], back to `Idle` on
/// [`SweepAnimator::end`].
#[derive(Clone, Debug, Default)]
pub struct SweepAnimator {
    running: Option<RunningSweep>,
}

impl SweepAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Transition to `Running`. Returns `false` (and changes nothing) when already running.
    pub fn begin(&mut self, bounds: SweepBounds, mask_width: u32, timing: SweepTiming) -> bool {
        if self.running.is_some() {
            return false;
        }

        let span = bounds.full_span() as f64;
        let (from, to) = match timing.direction {
            SweepDirection::Forward => (0.0, span),
            SweepDirection::Reverse => (span, 0.0),
        };
        let progression = RepeatingProgression::new(from, to, timing.period, timing.ease);

        self.running = Some(RunningSweep {
            state: AnimationState {
                current_offset_x: bounds.start + from as i64,
                direction: timing.direction,
                running: true,
                start_bound: bounds.start,
                end_bound: bounds.end,
                period: progression.period(),
            },
            mask_width,
            progression,
        });
        true
    }

    /// Advance to `now`. `None` while idle.
    pub fn tick(&mut self, now: Duration) -> Option<Tick> {
        let sweep = self.running.as_mut()?;
        let value = sweep.progression.value_at(now);
        let offset_x = sweep.state.start_bound + value as i64;
        sweep.state.current_offset_x = offset_x;

        let repaint = offset_x.saturating_add(i64::from(sweep.mask_width)) >= 0;
        tracing::trace!(offset_x, repaint, "sweep tick");
        Some(Tick { offset_x, repaint })
    }

    /// Transition to `Idle`. Returns whether a sweep was running.
    pub fn end(&mut self) -> bool {
        self.running.take().is_some()
    }

    pub fn state(&self) -> Option<AnimationState> {
        self.running.as_ref().map(|s| s.state)
    }

    pub fn offset_x(&self) -> Option<i64> {
        self.running.as_ref().map(|s| s.state.current_offset_x)
    }

    pub fn mask_width(&self) -> Option<u32> {
        self.running.as_ref().map(|s| s.mask_width)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/sweep.rs"]
mod tests;
