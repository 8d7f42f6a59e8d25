//! Physics behaviour variants.
//!
//! [`NewtonPhysics`] is the integrator the game actually ships:
//! drag, asymmetric gravity and a trapezoidal position update against an
//! explicit-Euler velocity update. [`SimplePhysics`] is the baseline the
//! collision hooks fall through to.

use crate::actor::Actor;
use crate::behavior::{Environment, PhysicsBehavior};
use crate::constants::{
    FALLING_GRAVITY_SCALE, GROUND_PROBE_OFFSET, HORIZONTAL_DRAG, RESTING_EPSILON,
    RISING_GRAVITY_SCALE, WORLD_EDGE_MARGIN,
};
use crate::map::TileMap;
use crate::numeric::{debug_assert_finite, floor_to_i32};

/// Whether the actor's foot edge rests on solid terrain.
///
/// Samples the tile in the actor's centre-bottom column, just below the foot
/// edge. No probe is made above the head: only downward contact matters to
/// the integrator.
#[must_use]
pub fn touching_ground(actor: &Actor, map: &TileMap) -> bool {
    let foot = actor.center_bottom();
    let column = floor_to_i32(foot.x);
    let below_foot = floor_to_i32(foot.y + GROUND_PROBE_OFFSET);
    map.solid(column, below_foot)
}

/// Clamps a world-clipped actor's position into the playable area.
///
/// The vertical band keeps one extra tile of margin at the bottom. Velocity
/// is left untouched: an actor pressed against a boundary keeps its speed
/// into the wall.
#[expect(
    clippy::cast_precision_loss,
    reason = "Map extents are tiny relative to f32 precision."
)]
fn clip_to_world(actor: &mut Actor, map: &TileMap) {
    // A degenerate grid (nothing loaded yet) pins clipped actors to the
    // margin instead of producing an inverted clamp range.
    let max_x = (map.width() as f32 - actor.size.x).max(WORLD_EDGE_MARGIN);
    let max_y = (map.height() as f32 - actor.size.y - 1.0).max(WORLD_EDGE_MARGIN);
    actor.position.x = actor.position.x.clamp(WORLD_EDGE_MARGIN, max_x);
    actor.position.y = actor.position.y.clamp(WORLD_EDGE_MARGIN, max_y);
}

/// Baseline integrator: explicit Euler over the supplied acceleration.
///
/// No drag, no gravity scaling; whatever the input behaviour wrote is
/// integrated as-is. Also supplies the pass-through collision policy that
/// [`NewtonPhysics`] delegates to.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimplePhysics;

impl PhysicsBehavior for SimplePhysics {
    fn integrate(&self, actor: &mut Actor, env: &Environment<'_>) {
        debug_assert_finite(actor.acceleration, "acceleration");

        actor.velocity += actor.acceleration * actor.dt;
        actor.position += actor.velocity * actor.dt;

        if actor.clip_to_world {
            clip_to_world(actor, env.map);
        }
    }
}

/// The shipped integrator.
///
/// Per step: probe ground contact, snap a resting actor's vertical velocity
/// to zero, assemble drag and scaled gravity on top of the input-supplied
/// acceleration, then integrate with
/// `v' = v + a·dt` and `p' = p + (v + v')/2·dt`.
///
/// The position update is trapezoidal while the velocity update is explicit
/// Euler. The pairing is deliberate and every trajectory in the game depends
/// on it; do not "fix" it to a symplectic scheme.
#[derive(Debug, Default, Clone, Copy)]
pub struct NewtonPhysics;

impl PhysicsBehavior for NewtonPhysics {
    fn integrate(&self, actor: &mut Actor, env: &Environment<'_>) {
        debug_assert_finite(actor.acceleration, "acceleration");

        // Residual float noise while standing shows up as sub-epsilon
        // vertical drift; zero it so resting actors do not creep or bounce.
        let step_rise = (actor.position.y - actor.last_position.y).abs();
        if touching_ground(actor, env.map) && step_rise < RESTING_EPSILON {
            actor.velocity.y = 0.0;
        }

        let mut acceleration = actor.acceleration;
        acceleration.x += actor.velocity.x * -HORIZONTAL_DRAG;
        let gravity_scale = if actor.velocity.y > 0.0 {
            FALLING_GRAVITY_SCALE
        } else {
            RISING_GRAVITY_SCALE
        };
        acceleration += gravity_scale * env.gravity;

        let v_old = actor.velocity;
        let v_new = v_old + acceleration * actor.dt;
        actor.velocity = v_new;
        actor.position += 0.5 * (v_old + v_new) * actor.dt;

        if actor.clip_to_world {
            clip_to_world(actor, env.map);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use approx::assert_relative_eq;
    use glam::Vec3;

    use super::*;
    use crate::behavior::SimpleInput;
    use crate::constants::MS_PER_UPDATE;

    /// An obviously airborne spot well clear of any fixture terrain.
    const AIRBORNE: Vec3 = Vec3::new(5.0, 2.0, 0.0);

    const FLOOR: &str = "12 8\n\
                         ............\n\
                         ............\n\
                         ............\n\
                         ............\n\
                         ............\n\
                         ............\n\
                         ............\n\
                         ############\n";

    fn floor_map() -> TileMap {
        TileMap::parse(FLOOR).expect("floor fixture should parse")
    }

    fn actor_at(position: Vec3) -> Actor {
        let mut actor = Actor::new(
            position,
            Vec3::new(1.0, 1.0, 0.0),
            Arc::new(SimpleInput),
            Arc::new(NewtonPhysics),
        );
        actor.dt = MS_PER_UPDATE;
        actor
    }

    #[test]
    fn probe_reports_contact_on_the_floor_row() {
        let map = floor_map();
        // Foot edge at y = 7, the row above the solid strip.
        let standing = actor_at(Vec3::new(5.0, 6.0, 0.0));
        assert!(touching_ground(&standing, &map));

        let airborne = actor_at(AIRBORNE);
        assert!(!touching_ground(&airborne, &map));
    }

    #[test]
    fn probe_is_calm_at_the_world_edge() {
        let map = floor_map();
        let outside = actor_at(Vec3::new(-30.0, -30.0, 0.0));
        assert!(!touching_ground(&outside, &map));
    }

    #[test]
    fn trapezoidal_position_update_matches_the_formula() {
        let map = TileMap::empty();
        let env = Environment {
            map: &map,
            gravity: Vec3::new(0.0, 1.0, 0.0),
        };
        let mut actor = actor_at(AIRBORNE);
        actor.clip_to_world = false;
        actor.velocity = Vec3::new(0.0, 2.0, 0.0);
        // Distinct last position so the resting snap stays out of the way.
        actor.last_position = AIRBORNE - Vec3::new(0.0, 1.0, 0.0);

        let v_old = actor.velocity;
        let p_old = actor.position;
        // Falling (v.y > 0), so gravity is scaled by 5.
        let a = Vec3::new(0.0, 5.0, 0.0);

        NewtonPhysics.integrate(&mut actor, &env);

        let v_new = v_old + a * MS_PER_UPDATE;
        assert_relative_eq!(actor.velocity.y, v_new.y, max_relative = 1e-6);
        let expected = p_old + 0.5 * (v_old + v_new) * MS_PER_UPDATE;
        assert_relative_eq!(actor.position.y, expected.y, max_relative = 1e-6);
    }

    #[test]
    fn gravity_scales_differ_between_rise_and_fall() {
        let map = TileMap::empty();
        let env = Environment {
            map: &map,
            gravity: Vec3::new(0.0, 1.0, 0.0),
        };

        let mut rising = actor_at(AIRBORNE);
        rising.clip_to_world = false;
        rising.velocity = Vec3::new(0.0, -1.0, 0.0);
        rising.last_position = AIRBORNE - Vec3::ONE;
        NewtonPhysics.integrate(&mut rising, &env);
        assert_relative_eq!(
            rising.velocity.y,
            -1.0 + RISING_GRAVITY_SCALE * MS_PER_UPDATE,
            max_relative = 1e-6
        );

        let mut falling = actor_at(AIRBORNE);
        falling.clip_to_world = false;
        falling.velocity = Vec3::new(0.0, 1.0, 0.0);
        falling.last_position = AIRBORNE - Vec3::ONE;
        NewtonPhysics.integrate(&mut falling, &env);
        assert_relative_eq!(
            falling.velocity.y,
            1.0 + FALLING_GRAVITY_SCALE * MS_PER_UPDATE,
            max_relative = 1e-6
        );
    }

    #[test]
    fn drag_opposes_horizontal_velocity() {
        let map = TileMap::empty();
        let env = Environment {
            map: &map,
            gravity: Vec3::ZERO,
        };
        let mut actor = actor_at(AIRBORNE);
        actor.clip_to_world = false;
        actor.velocity = Vec3::new(2.0, 0.0, 0.0);
        actor.last_position = AIRBORNE - Vec3::ONE;

        NewtonPhysics.integrate(&mut actor, &env);
        assert_relative_eq!(
            actor.velocity.x,
            2.0 - 2.0 * HORIZONTAL_DRAG * MS_PER_UPDATE,
            max_relative = 1e-6
        );
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "non-finite acceleration")]
    fn nan_acceleration_fails_loudly() {
        let map = TileMap::empty();
        let env = Environment {
            map: &map,
            gravity: Vec3::ZERO,
        };
        let mut actor = actor_at(AIRBORNE);
        actor.acceleration = Vec3::new(f32::NAN, 0.0, 0.0);
        NewtonPhysics.integrate(&mut actor, &env);
    }
}
