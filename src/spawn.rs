//! Level initialisation: authored spawn data into registered actors.
//!
//! A [`LevelSpec`] is the JSON contract between level authoring and the
//! simulation: where actors start, which behaviour variants drive them and
//! whether they are clipped to the world. Behaviour instances are stateless,
//! so one instance per variant is shared across every actor that uses it.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use glam::Vec3;
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::actor::Actor;
use crate::behavior::{
    InputBehavior, JumpingInput, NewtonPhysics, PhysicsBehavior, RandomInput, SimpleInput,
    SimplePhysics,
};
use crate::constants::PLAYER_NAME;
use crate::world::{ActorId, World};

/// Input behaviour variants nameable from level data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// Axes map directly onto acceleration.
    Simple,
    /// Horizontal steering with a debounced jump.
    Jumping,
    /// Seeded ambient wander.
    Random,
}

/// Physics behaviour variants nameable from level data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhysicsKind {
    /// Baseline explicit-Euler integration.
    Simple,
    /// The shipped drag-and-gravity integrator.
    Newton,
}

/// One authored actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorSpec {
    /// Optional name; the player must be named [`PLAYER_NAME`].
    #[serde(default)]
    pub name: Option<String>,
    /// Starting position, in tiles.
    pub position: [f32; 2],
    /// Bounding-box extent, in tiles.
    #[serde(default = "default_actor_size")]
    pub size: [f32; 2],
    /// Input behaviour variant.
    pub input: InputKind,
    /// Physics behaviour variant.
    pub physics: PhysicsKind,
    /// Whether to clamp the actor into world bounds after integration.
    #[serde(default = "default_clip")]
    pub clip_to_world: bool,
}

const fn default_clip() -> bool {
    true
}

const fn default_actor_size() -> [f32; 2] {
    [1.0, 1.0]
}

/// One authored level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelSpec {
    /// Map file name, resolved through the search paths by the host.
    #[serde(default)]
    pub map: Option<String>,
    /// Gravity override; `[x, y]` in tiles per second squared.
    #[serde(default)]
    pub gravity: Option<[f32; 2]>,
    /// Actors to register, in spawn order.
    pub actors: Vec<ActorSpec>,
}

/// Errors produced while reading or parsing a level file.
#[derive(Debug, Error)]
pub enum LevelError {
    /// The level file could not be read.
    #[error("failed to read level file {path}: {source}")]
    Io {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The level JSON did not match the schema.
    #[error("failed to parse level file {path}: {source}")]
    Parse {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying decode failure.
        source: serde_json::Error,
    },
}

/// Reads and parses a level file.
pub fn load_level(path: &Path) -> Result<LevelSpec, LevelError> {
    let text = fs::read_to_string(path).map_err(|source| LevelError::Io {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| LevelError::Parse {
        path: path.to_owned(),
        source,
    })
}

/// Shared behaviour instances handed to every spawned actor.
struct BehaviorSet {
    simple_input: Arc<dyn InputBehavior>,
    jumping_input: Arc<dyn InputBehavior>,
    random_input: Arc<dyn InputBehavior>,
    simple_physics: Arc<dyn PhysicsBehavior>,
    newton_physics: Arc<dyn PhysicsBehavior>,
}

impl BehaviorSet {
    fn new() -> Self {
        Self {
            simple_input: Arc::new(SimpleInput),
            jumping_input: Arc::new(JumpingInput),
            random_input: Arc::new(RandomInput),
            simple_physics: Arc::new(SimplePhysics),
            newton_physics: Arc::new(NewtonPhysics),
        }
    }

    fn input(&self, kind: InputKind) -> Arc<dyn InputBehavior> {
        match kind {
            InputKind::Simple => Arc::clone(&self.simple_input),
            InputKind::Jumping => Arc::clone(&self.jumping_input),
            InputKind::Random => Arc::clone(&self.random_input),
        }
    }

    fn physics(&self, kind: PhysicsKind) -> Arc<dyn PhysicsBehavior> {
        match kind {
            PhysicsKind::Simple => Arc::clone(&self.simple_physics),
            PhysicsKind::Newton => Arc::clone(&self.newton_physics),
        }
    }
}

/// Instantiates and registers every actor in the spec.
///
/// Returns the handles in spawn order. Gravity overrides are applied by the
/// caller before the world is sealed into a match; this function only
/// populates actors.
pub fn spawn_level(world: &mut World, spec: &LevelSpec) -> Vec<ActorId> {
    let behaviors = BehaviorSet::new();
    let mut ids = Vec::with_capacity(spec.actors.len());

    for actor_spec in &spec.actors {
        let [x, y] = actor_spec.position;
        let [w, h] = actor_spec.size;
        let mut actor = Actor::new(
            Vec3::new(x, y, 0.0),
            Vec3::new(w, h, 0.0),
            behaviors.input(actor_spec.input),
            behaviors.physics(actor_spec.physics),
        );
        actor.clip_to_world = actor_spec.clip_to_world;
        if let Some(name) = &actor_spec.name {
            actor = actor.named(name.clone());
        }

        info!(
            "spawned {:?} ({:?}/{:?}) at ({x}, {y})",
            actor.name(),
            actor_spec.input,
            actor_spec.physics
        );
        ids.push(world.add_actor(actor));
    }

    ids
}

/// The built-in arena: a jumping player at centre stage and two wandering
/// rivals, used whenever no level file is supplied.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "Map extents are tiny relative to f32 precision."
)]
pub fn default_arena(world: &World) -> LevelSpec {
    let cx = world.map().width() as f32 * 0.5;
    let cy = world.map().height() as f32 * 0.5;

    LevelSpec {
        map: None,
        gravity: None,
        actors: vec![
            ActorSpec {
                name: Some(PLAYER_NAME.to_owned()),
                position: [cx + 6.0, cy],
                size: default_actor_size(),
                input: InputKind::Jumping,
                physics: PhysicsKind::Newton,
                clip_to_world: true,
            },
            ActorSpec {
                name: None,
                position: [16.0, 6.0],
                size: default_actor_size(),
                input: InputKind::Random,
                physics: PhysicsKind::Newton,
                clip_to_world: true,
            },
            ActorSpec {
                name: None,
                position: [6.0, 6.0],
                size: default_actor_size(),
                input: InputKind::Random,
                physics: PhysicsKind::Newton,
                clip_to_world: true,
            },
        ],
    }
}
