//! Logical input device exposed to input behaviours.
//!
//! The simulation never talks to a windowing or event system directly. The
//! host pumps whatever events it has into an [`InputState`] once per render
//! frame, and behaviours read the resulting axis amounts and button edges.

/// A discrete button with an edge-triggered read primitive.
///
/// `press` registers a press only on a rising edge, so a key held across
/// many frames produces exactly one pending press. `check_clear` consumes
/// the pending press; until the button is released and pressed again it
/// keeps returning `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Button {
    pending: bool,
    held: bool,
}

impl Button {
    /// Registers the button as down. Repeat calls while held are ignored.
    pub fn press(&mut self) {
        if !self.held {
            self.pending = true;
            self.held = true;
        }
    }

    /// Registers the button as up, re-arming the next press.
    pub fn release(&mut self) {
        self.held = false;
    }

    /// Reports and consumes the pending press.
    ///
    /// Returns `true` at most once per physical press, no matter how many
    /// times it is polled while the button stays held.
    pub fn check_clear(&mut self) -> bool {
        let was_pending = self.pending;
        self.pending = false;
        was_pending
    }

    /// Whether the button is currently held down.
    #[must_use]
    pub const fn is_held(&self) -> bool {
        self.held
    }
}

/// Snapshot of the logical device: two analog axes and the button set.
///
/// Axis amounts are in `[-1, 1]`. The host is responsible for mapping real
/// keys, sticks or scripts onto these controls.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Horizontal amount of the primary stick.
    pub axis1_x: f32,
    /// Vertical amount of the primary stick.
    pub axis1_y: f32,
    /// Jump button.
    pub jump: Button,
    /// Back button; hosts conventionally map this to a quit request.
    pub back: Button,
}

/// Host-side event source feeding the logical device.
///
/// Called exactly once per render frame, before input behaviours are polled.
/// Returning `true` requests that the match loop terminate; the request is
/// honoured at the frame boundary, never mid-step.
pub trait EventPump {
    /// Pumps pending host events into `device`; returns `true` to quit.
    fn pump(&mut self, device: &mut InputState) -> bool;
}

/// Event pump for headless runs: no input, quit after a frame budget.
#[derive(Debug)]
pub struct FrameBudget {
    remaining: u64,
}

impl FrameBudget {
    /// Creates a pump that requests quit once `frames` frames have elapsed.
    #[must_use]
    pub const fn new(frames: u64) -> Self {
        Self { remaining: frames }
    }
}

impl EventPump for FrameBudget {
    fn pump(&mut self, _device: &mut InputState) -> bool {
        if self.remaining == 0 {
            return true;
        }
        self.remaining -= 1;
        false
    }
}
