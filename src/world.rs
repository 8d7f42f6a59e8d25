//! The world: terrain, gravity and the actor population.
//!
//! The world owns every actor for the duration of a match. Actors are
//! addressed through stable [`ActorId`] handles handed out at registration;
//! records are never removed, only flagged inactive, so a handle can never
//! dangle.

use std::path::Path;
use std::sync::Arc;

use glam::Vec3;
use hashbrown::HashMap;
use log::{info, warn};

use crate::actor::Actor;
use crate::behavior::{Environment, InputContext};
use crate::constants::DEFAULT_GRAVITY;
use crate::input::InputState;
use crate::map::TileMap;
use crate::presentation::AudioSink;
use crate::random::Xorshift32;

/// Stable handle to an actor slot. Valid for the lifetime of the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(usize);

/// Terrain, physics constants and the actor registry.
pub struct World {
    map: TileMap,
    gravity: Vec3,
    actors: Vec<Actor>,
    names: HashMap<String, ActorId>,
}

impl World {
    /// Creates an empty world with default gravity and no terrain.
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: TileMap::empty(),
            gravity: DEFAULT_GRAVITY,
            actors: Vec::new(),
            names: HashMap::new(),
        }
    }

    /// Replaces the default gravity. Gravity is fixed for the match, so
    /// call this during level setup only.
    #[must_use]
    pub fn with_gravity(mut self, gravity: Vec3) -> Self {
        self.gravity = gravity;
        self
    }

    /// Installs an already-parsed terrain grid.
    #[must_use]
    pub fn with_map(mut self, map: TileMap) -> Self {
        self.map = map;
        self
    }

    /// Loads terrain from a map file, replacing the current grid.
    ///
    /// On failure the current grid is retained and a warning is logged;
    /// a missing or corrupt map is degraded content, not a crash. Returns
    /// whether the load succeeded.
    pub fn load_map(&mut self, path: &Path) -> bool {
        match TileMap::load(path) {
            Ok(map) => {
                info!(
                    "loaded map {} ({}x{})",
                    path.display(),
                    map.width(),
                    map.height()
                );
                self.map = map;
                true
            }
            Err(err) => {
                warn!("map {} not loaded: {err}", path.display());
                false
            }
        }
    }

    /// The current terrain grid.
    #[must_use]
    pub const fn map(&self) -> &TileMap {
        &self.map
    }

    /// The world gravity vector, before integrator scaling.
    #[must_use]
    pub const fn gravity(&self) -> Vec3 {
        self.gravity
    }

    /// Registers an actor, indexing it by name, and returns its handle.
    ///
    /// Insertion order is spawn order. A repeated name rebinds the name
    /// index to the newest actor.
    pub fn add_actor(&mut self, actor: Actor) -> ActorId {
        let id = ActorId(self.actors.len());
        if !actor.name().is_empty() {
            self.names.insert(actor.name().to_owned(), id);
        }
        self.actors.push(actor);
        id
    }

    /// Borrows an actor by handle.
    #[must_use]
    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(id.0)
    }

    /// Mutably borrows an actor by handle.
    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(id.0)
    }

    /// Looks up an actor handle by name.
    #[must_use]
    pub fn actor_by_name(&self, name: &str) -> Option<ActorId> {
        self.names.get(name).copied()
    }

    /// All registered actors, active and inactive, in spawn order.
    #[must_use]
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// Mutable view of all registered actors.
    pub fn actors_mut(&mut self) -> &mut [Actor] {
        &mut self.actors
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Runs every active actor's input behaviour once.
    ///
    /// Called once per render frame, before the fixed-step catch-up loop;
    /// the accelerations written here feed every step run this frame.
    pub fn poll_inputs(
        &mut self,
        device: &mut InputState,
        rng: &mut Xorshift32,
        audio: &mut dyn AudioSink,
    ) {
        for actor in &mut self.actors {
            if !actor.active {
                continue;
            }
            let behavior = Arc::clone(&actor.input);
            let mut ctx = InputContext {
                device: &mut *device,
                rng: &mut *rng,
                audio: &mut *audio,
            };
            behavior.apply(actor, &mut ctx);
        }
    }

    /// Per-step world update hook: snapshots the step duration into each
    /// active actor so the physics pass is self-contained.
    pub fn update(&mut self, dt: f32) {
        for actor in &mut self.actors {
            if actor.active {
                actor.dt = dt;
            }
        }
    }

    /// Runs every active actor's physics behaviour for one fixed step.
    ///
    /// Consumes the `dt` snapshotted by [`Self::update`]. After each actor
    /// integrates, its pre-step position is recorded so that entering the
    /// next step `last_position` holds the position as of this step's start.
    /// Integration is followed by a pairwise contact sweep delegating to
    /// each actor's own collision policy.
    pub fn physics(&mut self) {
        let env = Environment {
            map: &self.map,
            gravity: self.gravity,
        };
        for actor in &mut self.actors {
            if !actor.active {
                continue;
            }
            let behavior = Arc::clone(&actor.physics);
            let before = actor.position;
            behavior.integrate(actor, &env);
            actor.last_position = before;
        }

        self.resolve_contacts();
    }

    /// Offers every active pair to the first actor's collision policy.
    ///
    /// The shipped policies are pass-through, so this is a dispatch point,
    /// not a response; a `true` return records that a policy resolved
    /// something.
    fn resolve_contacts(&mut self) {
        let actor_count = self.actors.len();
        for first in 0..actor_count {
            for second in (first + 1)..actor_count {
                let (head, tail) = self.actors.split_at_mut(second);
                let (Some(a), Some(b)) = (head.get_mut(first), tail.first_mut()) else {
                    continue;
                };
                if !a.active || !b.active {
                    continue;
                }
                let policy = Arc::clone(&a.physics);
                if policy.collide_dynamic(a, b) {
                    log::trace!("contact resolved between {:?} and {:?}", a.name(), b.name());
                }
            }
        }
    }
}
