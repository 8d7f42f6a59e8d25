//! Shared fixtures and helpers for the integration tests.

use std::sync::Arc;

use glam::Vec3;
use varena::actor::Actor;
use varena::behavior::{InputBehavior, NewtonPhysics, PhysicsBehavior, SimpleInput};
use varena::map::TileMap;
use varena::world::World;

/// A 16x10 arena with a solid floor strip and solid side walls.
pub const ARENA_TEXT: &str = "16 10\n\
                              ................\n\
                              ................\n\
                              ................\n\
                              ................\n\
                              ................\n\
                              ................\n\
                              ................\n\
                              ................\n\
                              #..............#\n\
                              ################\n";

/// Parses the shared arena fixture.
#[must_use]
pub fn arena_map() -> TileMap {
    TileMap::parse(ARENA_TEXT).expect("arena fixture should parse")
}

/// A world with the arena terrain and default gravity.
#[must_use]
pub fn arena_world() -> World {
    World::new().with_map(arena_map())
}

/// An actor standing on the arena floor (foot edge on the solid row).
#[expect(
    dead_code,
    reason = "Test utility function used across multiple test files"
)]
#[must_use]
pub fn standing_actor() -> Actor {
    actor_at(Vec3::new(8.0, 8.0, 0.0), Arc::new(NewtonPhysics))
}

/// An actor at `position` with a unit box, simple input and the given
/// physics behaviour.
#[must_use]
pub fn actor_at(position: Vec3, physics: Arc<dyn PhysicsBehavior>) -> Actor {
    let input: Arc<dyn InputBehavior> = Arc::new(SimpleInput);
    Actor::new(position, Vec3::new(1.0, 1.0, 0.0), input, physics)
}
