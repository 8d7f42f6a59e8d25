//! Input behaviour variants.

use crate::actor::Actor;
use crate::behavior::{InputBehavior, InputContext};
use crate::constants::JUMP_ACCELERATION;
use crate::presentation::CLIP_JUMP;

/// Maps the device axes directly onto acceleration, every poll.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleInput;

impl InputBehavior for SimpleInput {
    fn apply(&self, actor: &mut Actor, ctx: &mut InputContext<'_>) {
        actor.acceleration.x = ctx.device.axis1_x;
        actor.acceleration.y = ctx.device.axis1_y;
    }
}

/// Continuous horizontal steering with a discrete, debounced jump.
///
/// The horizontal axis tracks the stick each poll. The vertical component
/// is edge-triggered: consuming the jump button press applies
/// [`JUMP_ACCELERATION`] for this poll only, and a held button produces no
/// further impulses until it is released and pressed again.
#[derive(Debug, Default, Clone, Copy)]
pub struct JumpingInput;

impl InputBehavior for JumpingInput {
    fn apply(&self, actor: &mut Actor, ctx: &mut InputContext<'_>) {
        actor.acceleration.x = ctx.device.axis1_x;

        if ctx.device.jump.check_clear() {
            actor.acceleration.y = JUMP_ACCELERATION;
            ctx.audio.play_clip(CLIP_JUMP);
        } else {
            actor.acceleration.y = 0.0;
        }
    }
}

/// Ambient wander for NPCs: random horizontal pushes, the occasional hop.
///
/// Draws from the seeded world generator, so a match replayed with the same
/// seed wanders identically.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomInput;

/// Probability per poll that a wandering actor hops.
const HOP_CHANCE: f32 = 0.02;

impl InputBehavior for RandomInput {
    fn apply(&self, actor: &mut Actor, ctx: &mut InputContext<'_>) {
        actor.acceleration.x = ctx.rng.range(-1.0, 1.0);
        actor.acceleration.y = if ctx.rng.chance(HOP_CHANCE) {
            JUMP_ACCELERATION
        } else {
            0.0
        };
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use glam::Vec3;

    use super::*;
    use crate::input::InputState;
    use crate::presentation::{AudioSink, ClipId, NullAudio};
    use crate::random::Xorshift32;

    fn actor() -> Actor {
        Actor::new(
            Vec3::new(2.0, 2.0, 0.0),
            Vec3::ONE,
            Arc::new(SimpleInput),
            Arc::new(crate::behavior::SimplePhysics),
        )
    }

    struct CountingAudio {
        clips: Vec<ClipId>,
    }

    impl AudioSink for CountingAudio {
        fn play_clip(&mut self, clip: ClipId) {
            self.clips.push(clip);
        }
    }

    #[test]
    fn simple_input_mirrors_the_axes() {
        let mut actor = actor();
        let mut device = InputState {
            axis1_x: 0.25,
            axis1_y: -0.75,
            ..InputState::default()
        };
        let mut rng = Xorshift32::new(1);
        let mut audio = NullAudio;
        let mut ctx = InputContext {
            device: &mut device,
            rng: &mut rng,
            audio: &mut audio,
        };

        SimpleInput.apply(&mut actor, &mut ctx);
        assert!((actor.acceleration.x - 0.25).abs() < f32::EPSILON);
        assert!((actor.acceleration.y + 0.75).abs() < f32::EPSILON);
    }

    #[test]
    fn jump_impulse_fires_once_per_press_and_blips() {
        let mut actor = actor();
        let mut device = InputState::default();
        device.jump.press();
        let mut rng = Xorshift32::new(1);
        let mut audio = CountingAudio { clips: Vec::new() };

        let mut impulses = 0;
        for _ in 0..5 {
            let mut ctx = InputContext {
                device: &mut device,
                rng: &mut rng,
                audio: &mut audio,
            };
            JumpingInput.apply(&mut actor, &mut ctx);
            if actor.acceleration.y == JUMP_ACCELERATION {
                impulses += 1;
            }
        }

        assert_eq!(impulses, 1);
        assert_eq!(audio.clips, vec![CLIP_JUMP]);
    }

    #[test]
    fn random_input_is_reproducible_from_the_seed() {
        let mut first = actor();
        let mut second = actor();
        let mut device = InputState::default();
        let mut audio = NullAudio;

        let mut rng = Xorshift32::new(7);
        let mut ctx = InputContext {
            device: &mut device,
            rng: &mut rng,
            audio: &mut audio,
        };
        RandomInput.apply(&mut first, &mut ctx);

        let mut rng = Xorshift32::new(7);
        let mut ctx = InputContext {
            device: &mut device,
            rng: &mut rng,
            audio: &mut audio,
        };
        RandomInput.apply(&mut second, &mut ctx);

        assert_eq!(first.acceleration, second.acceleration);
        assert!(first.acceleration.x.abs() <= 1.0);
    }
}
