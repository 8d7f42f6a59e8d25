//! Fixed-timestep scheduling.
//!
//! Wall-clock frame time is measured by a [`FrameClock`] and poured into a
//! [`FixedStepper`], which meters it back out in [`MS_PER_UPDATE`]-sized
//! steps. However irregular the frame times, simulation only ever advances
//! in constant quanta, which is what keeps trajectories reproducible.

use std::num::NonZeroU32;
use std::time::Instant;

use crate::constants::MS_PER_UPDATE;

/// Measures elapsed wall-clock time between render frames.
///
/// Time is owned here and handed down explicitly; no subsystem reads a
/// process-wide clock.
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
    elapsed: f32,
}

impl FrameClock {
    /// Starts the clock at the current instant.
    #[must_use]
    pub fn start() -> Self {
        Self {
            last: Instant::now(),
            elapsed: 0.0,
        }
    }

    /// Returns the seconds since the previous `tick` (or since `start`).
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        self.elapsed += dt;
        dt
    }

    /// Total seconds observed since `start`.
    #[must_use]
    pub const fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

/// Accumulator turning irregular frame times into fixed simulation steps.
///
/// After any sequence of `accumulate`/`try_step` calls that drains the
/// accumulator, the leftover lag is in `[0, MS_PER_UPDATE)`.
///
/// By default the catch-up loop is unbounded: a long frame hitch is repaid
/// with as many back-to-back steps as it takes, visible as a freeze rather
/// than as lost simulated time. [`Self::with_max_steps`] opts into a cap,
/// after which the excess lag is discarded.
#[derive(Debug, Default)]
pub struct FixedStepper {
    lag: f32,
    max_steps: Option<NonZeroU32>,
    steps_this_frame: u32,
}

impl FixedStepper {
    /// Creates an unbounded stepper with an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps catch-up at `max_steps` steps per frame. When the cap engages,
    /// lag beyond one step is dropped, trading simulated time for liveness.
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: NonZeroU32) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Banks one frame's worth of wall-clock time.
    pub fn accumulate(&mut self, frame_dt: f32) {
        debug_assert!(
            frame_dt.is_finite() && frame_dt >= 0.0,
            "frame delta must be finite and non-negative, got {frame_dt}"
        );
        self.lag += frame_dt;
        self.steps_this_frame = 0;
    }

    /// Consumes one step's worth of lag if at least one step is banked.
    ///
    /// Call in a loop until it returns `false`; each `true` means run one
    /// simulation step.
    pub fn try_step(&mut self) -> bool {
        if self.lag < MS_PER_UPDATE {
            return false;
        }
        if let Some(cap) = self.max_steps {
            if self.steps_this_frame >= cap.get() {
                // Cap reached: forfeit the remaining whole steps.
                self.lag %= MS_PER_UPDATE;
                return false;
            }
        }
        self.lag -= MS_PER_UPDATE;
        self.steps_this_frame += 1;
        true
    }

    /// Unsimulated time currently banked, in seconds.
    #[must_use]
    pub const fn lag(&self) -> f32 {
        self.lag
    }
}
