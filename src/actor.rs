//! Actor records and their behaviour slots.
//!
//! An [`Actor`] is plain data: transform, motion state and a pair of shared
//! strategy objects deciding how it is driven and how it moves. Behaviours
//! carry no per-actor state of their own, so a single instance is safely
//! shared by any number of actors.

use std::fmt;
use std::sync::Arc;

use glam::Vec3;

use crate::behavior::{InputBehavior, PhysicsBehavior};

/// One simulated entity.
///
/// Field write access is split by phase: input behaviours own
/// `acceleration`, physics behaviours own `velocity` and `position`, the
/// world update pass owns the `dt` snapshot and `last_position`.
pub struct Actor {
    /// World-space position of the top-left corner, in tiles. The z
    /// component is unused by the 2D logic and reserved for draw depth.
    pub position: Vec3,
    /// Position as of the previous fixed step; measures per-step
    /// displacement, nothing else.
    pub last_position: Vec3,
    /// Bounding-box extent, in tiles.
    pub size: Vec3,
    /// Current velocity, tiles per second.
    pub velocity: Vec3,
    /// Acceleration for the upcoming steps, written by the input behaviour.
    pub acceleration: Vec3,
    /// Fixed step duration snapshotted for the current update, seconds.
    pub dt: f32,
    /// Liveness flag. Inactive actors stay registered for bookkeeping but
    /// are skipped by every simulation pass.
    pub active: bool,
    /// When set, position is clamped into world bounds after integration.
    pub clip_to_world: bool,
    pub(crate) name: String,
    /// Input strategy; writes only `acceleration`.
    pub input: Arc<dyn InputBehavior>,
    /// Physics strategy; writes `velocity` and `position`.
    pub physics: Arc<dyn PhysicsBehavior>,
}

impl Actor {
    /// Creates an active, world-clipped actor at rest.
    #[must_use]
    pub fn new(
        position: Vec3,
        size: Vec3,
        input: Arc<dyn InputBehavior>,
        physics: Arc<dyn PhysicsBehavior>,
    ) -> Self {
        Self {
            position,
            last_position: position,
            size,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            dt: 0.0,
            active: true,
            clip_to_world: true,
            name: String::new(),
            input,
            physics,
        }
    }

    /// Assigns a name. Names are looked up through the world's registry, so
    /// name an actor before registering it.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// This actor's name; empty for anonymous actors.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Removes the actor from play without deleting its record.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// The point at the horizontal centre of the actor's foot edge.
    ///
    /// Ground probes sample the tile column below this point.
    #[must_use]
    pub fn center_bottom(&self) -> Vec3 {
        let mut point = self.position + self.size * 0.5;
        point.y = self.position.y + self.size.y;
        point
    }
}

impl fmt::Debug for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Actor")
            .field("name", &self.name)
            .field("position", &self.position)
            .field("velocity", &self.velocity)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}
