//! Swappable actor behaviours.
//!
//! Behaviours are stateless strategy objects bound per-actor through shared
//! ownership. An input behaviour decides *what an actor wants* (written as
//! acceleration); a physics behaviour decides *how it moves* (velocity and
//! position). Each one mutates only its designated fields of the actor
//! handed to it.

mod input;
mod physics;

pub use input::{JumpingInput, RandomInput, SimpleInput};
pub use physics::{touching_ground, NewtonPhysics, SimplePhysics};

use glam::Vec3;

use crate::actor::Actor;
use crate::input::InputState;
use crate::map::TileMap;
use crate::presentation::AudioSink;
use crate::random::Xorshift32;

/// Everything an input behaviour may consult during a poll.
pub struct InputContext<'a> {
    /// The logical device, including edge-triggered button reads.
    pub device: &'a mut InputState,
    /// Seeded generator for ambient randomness.
    pub rng: &'a mut Xorshift32,
    /// Sink for one-shot event sounds (for example a jump blip).
    pub audio: &'a mut dyn AudioSink,
}

/// Terrain and constants visible to a physics behaviour.
pub struct Environment<'a> {
    /// The loaded tile grid.
    pub map: &'a TileMap,
    /// Downward pull before rise/fall scaling.
    pub gravity: Vec3,
}

/// Decides an actor's intent for the upcoming fixed steps.
///
/// Invoked once per render frame for every active actor. Implementations
/// write only `actor.acceleration`; velocity and position belong to the
/// physics phase.
pub trait InputBehavior: Send + Sync {
    /// Writes the actor's desired acceleration.
    fn apply(&self, actor: &mut Actor, ctx: &mut InputContext<'_>);
}

/// Advances an actor's motion by one fixed step.
///
/// Invoked once per fixed step for every active actor, after the world has
/// snapshotted `actor.dt`.
pub trait PhysicsBehavior: Send + Sync {
    /// Integrates velocity and position over `actor.dt`.
    fn integrate(&self, actor: &mut Actor, env: &Environment<'_>);

    /// Resolves contact between two moving actors.
    ///
    /// The baseline policy is pass-through: no interpenetration response,
    /// returning `false` to report that nothing was resolved.
    fn collide_dynamic(&self, _a: &mut Actor, _b: &mut Actor) -> bool {
        false
    }

    /// Resolves contact between a moving actor and a static one.
    ///
    /// Pass-through baseline, as for [`Self::collide_dynamic`].
    fn collide_static(&self, _a: &mut Actor, _b: &mut Actor) -> bool {
        false
    }
}
