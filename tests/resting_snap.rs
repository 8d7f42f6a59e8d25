//! A grounded actor must settle, not creep or bounce.
//!
//! Gravity keeps feeding the integrator while an actor stands on terrain;
//! the resting snap has to hold the vertical velocity at (effectively) zero
//! step after step instead of letting integration noise accumulate.

mod common;

use common::{arena_world, standing_actor};
use varena::constants::{DEFAULT_GRAVITY, MS_PER_UPDATE, RISING_GRAVITY_SCALE};

#[test]
fn standing_actor_does_not_accumulate_fall_speed() {
    let mut world = arena_world();
    let id = world.add_actor(standing_actor());

    // One step's worth of scaled gravity is all the residual the snap can
    // leave behind after any single step.
    let residual = RISING_GRAVITY_SCALE * DEFAULT_GRAVITY.y * MS_PER_UPDATE;

    for _ in 0..2_000 {
        world.update(MS_PER_UPDATE);
        world.physics();

        let vy = world.actor(id).map_or(f32::NAN, |a| a.velocity.y);
        assert!(
            vy.abs() <= residual + f32::EPSILON,
            "vertical velocity {vy} escaped the resting band"
        );
    }
}

#[test]
fn standing_actor_stays_put_over_time() {
    let mut world = arena_world();
    let id = world.add_actor(standing_actor());
    let start_y = world.actor(id).map_or(f32::NAN, |a| a.position.y);

    for _ in 0..2_000 {
        world.update(MS_PER_UPDATE);
        world.physics();
    }

    let end_y = world.actor(id).map_or(f32::NAN, |a| a.position.y);
    // Two simulated seconds of standing still must not add up to visible
    // sinking; a freely falling body would cover metres in that time.
    assert!(
        (end_y - start_y).abs() < 0.01,
        "actor drifted from {start_y} to {end_y} while resting"
    );
}

#[test]
fn airborne_actor_is_not_snapped() {
    let mut world = arena_world();
    let id = world.add_actor(common::actor_at(
        glam::Vec3::new(8.0, 2.0, 0.0),
        std::sync::Arc::new(varena::behavior::NewtonPhysics),
    ));

    for _ in 0..200 {
        world.update(MS_PER_UPDATE);
        world.physics();
    }

    let vy = world.actor(id).map_or(0.0, |a| a.velocity.y);
    assert!(vy > 0.0, "an airborne actor should be gaining fall speed");
}
