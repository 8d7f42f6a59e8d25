//! Game physics and scheduling constants used across systems.
//!
//! The integrator scale factors are part of the observable motion contract,
//! not incidental tuning: changing them changes every trajectory in the game.
use glam::Vec3;

/// Duration of one fixed simulation step, in seconds.
///
/// Every physics update advances exactly this much simulated time, however
/// fast or slow render frames arrive. The resting check in the Newton
/// integrator assumes steps of roughly this size; see [`RESTING_EPSILON`].
pub const MS_PER_UPDATE: f32 = 0.001;

/// Linear drag factor applied against horizontal velocity each step.
///
/// Damps horizontal motion toward rest in the absence of input.
pub const HORIZONTAL_DRAG: f32 = 5.0;

/// Gravity multiplier while an actor is moving downward (y-down coordinates).
pub const FALLING_GRAVITY_SCALE: f32 = 5.0;

/// Gravity multiplier while an actor is moving upward.
///
/// Falls are heavier than rises, which gives jumps a floaty peak and a fast
/// descent.
pub const RISING_GRAVITY_SCALE: f32 = 3.0;

/// Per-step vertical displacement below which a grounded actor is considered
/// at rest and has its vertical velocity zeroed.
pub const RESTING_EPSILON: f32 = 1e-4;

/// Vertical acceleration applied for the single poll in which a jump press
/// is consumed. Negative is up in y-down screen coordinates.
pub const JUMP_ACCELERATION: f32 = -10.0;

/// Distance below the foot edge sampled by the ground-contact probe.
pub const GROUND_PROBE_OFFSET: f32 = 0.01;

/// Lower clamp bound, in tiles, on both axes for world-clipped actors.
pub const WORLD_EDGE_MARGIN: f32 = 1.0;

/// Default downward pull, in tiles per second squared, before the
/// integrator's rise/fall scaling is applied.
pub const DEFAULT_GRAVITY: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Actor name with match-outcome significance: when an actor carrying this
/// name is deactivated, the match is lost.
pub const PLAYER_NAME: &str = "Player";
