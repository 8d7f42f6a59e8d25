//! The match loop.
//!
//! [`Game`] ties the pieces together: once per render frame it pumps host
//! events, polls input behaviours, repays banked wall-clock time in fixed
//! simulation steps, draws, and classifies the match state. The loop ends
//! on a win or loss signal or on a host quit request, never by crashing
//! over degraded content.

use std::thread;

use log::{debug, info};

use crate::constants::MS_PER_UPDATE;
use crate::input::{EventPump, InputState};
use crate::outcome::{evaluate, MatchOutcome};
use crate::presentation::{AudioSink, DrawSurface};
use crate::random::Xorshift32;
use crate::schedule::{FixedStepper, FrameClock};
use crate::world::World;

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// The win signal was raised (one actor left standing).
    Won,
    /// The loss signal was raised without a win (the player fell).
    Lost,
    /// The host requested termination before either signal fired.
    Quit,
}

/// Owns one match's world and timing state.
pub struct Game {
    world: World,
    device: InputState,
    rng: Xorshift32,
    stepper: FixedStepper,
}

impl Game {
    /// Wraps a prepared world in a fresh match.
    #[must_use]
    pub fn new(world: World) -> Self {
        Self {
            world,
            device: InputState::default(),
            rng: Xorshift32::default(),
            stepper: FixedStepper::new(),
        }
    }

    /// Seeds the ambient random source, for reproducible matches.
    #[must_use]
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.rng = Xorshift32::new(seed);
        self
    }

    /// Replaces the default stepper, e.g. to cap catch-up steps.
    #[must_use]
    pub fn with_stepper(mut self, stepper: FixedStepper) -> Self {
        self.stepper = stepper;
        self
    }

    /// The world under simulation.
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the world, for embedding game rules.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The logical input device fed by the host.
    pub fn device_mut(&mut self) -> &mut InputState {
        &mut self.device
    }

    /// Advances the simulation by one render frame's worth of time.
    ///
    /// Input behaviours are polled once, then the fixed-step loop repays
    /// `frame_dt` in whole steps of [`MS_PER_UPDATE`], each step being one
    /// world-update pass followed by one physics pass. Returns the outcome
    /// of the post-step population scan.
    pub fn advance_frame(&mut self, frame_dt: f32, audio: &mut dyn AudioSink) -> MatchOutcome {
        self.world
            .poll_inputs(&mut self.device, &mut self.rng, audio);

        self.stepper.accumulate(frame_dt);
        while self.stepper.try_step() {
            self.world.update(MS_PER_UPDATE);
            self.world.physics();
        }

        evaluate(&self.world)
    }

    /// Runs the match to completion.
    ///
    /// When the frame that ends the match raises both the win and the loss
    /// signal, the result is reported as [`MatchResult::Won`].
    pub fn play(
        &mut self,
        events: &mut dyn EventPump,
        draw: &mut dyn DrawSurface,
        audio: &mut dyn AudioSink,
    ) -> MatchResult {
        let mut clock = FrameClock::start();
        let mut frames: u64 = 0;

        let result = loop {
            let frame_dt = clock.tick();

            if events.pump(&mut self.device) {
                break MatchResult::Quit;
            }

            let outcome = self.advance_frame(frame_dt, audio);

            draw.clear();
            draw.draw_tiles(self.world.map());
            for actor in self.world.actors() {
                if actor.active {
                    draw.draw_actor(actor);
                }
            }

            frames += 1;
            // Courtesy to the host scheduler; one writer thread either way.
            thread::yield_now();

            if outcome.is_over() {
                break if outcome.win {
                    MatchResult::Won
                } else {
                    MatchResult::Lost
                };
            }
        };

        let elapsed = clock.elapsed().max(f32::EPSILON);
        #[expect(
            clippy::cast_precision_loss,
            reason = "Frame counts small enough for a rate log line."
        )]
        let fps = frames as f32 / elapsed;
        debug!("frames/sec = {fps:.1}");
        info!("match over after {frames} frames: {result:?}");
        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use glam::Vec3;

    use super::*;
    use crate::actor::Actor;
    use crate::behavior::{NewtonPhysics, RandomInput, SimpleInput, SimplePhysics};
    use crate::constants::PLAYER_NAME;
    use crate::input::FrameBudget;
    use crate::presentation::{NullAudio, NullDraw};

    fn populated_world(actors: usize) -> World {
        let mut world = World::new();
        for index in 0..actors {
            let actor = Actor::new(
                Vec3::new(2.0 + index as f32, 2.0, 0.0),
                Vec3::ONE,
                Arc::new(RandomInput),
                Arc::new(NewtonPhysics),
            )
            .named(format!("npc-{index}"));
            world.add_actor(actor);
        }
        world
    }

    #[test]
    fn quit_request_ends_a_stalemate() {
        let mut game = Game::new(populated_world(3)).with_seed(9);
        let mut pump = FrameBudget::new(4);
        let result = game.play(&mut pump, &mut NullDraw, &mut NullAudio);
        assert_eq!(result, MatchResult::Quit);
    }

    #[test]
    fn sole_survivor_wins_immediately() {
        let mut game = Game::new(populated_world(1));
        let mut pump = FrameBudget::new(100);
        let result = game.play(&mut pump, &mut NullDraw, &mut NullAudio);
        assert_eq!(result, MatchResult::Won);
    }

    #[test]
    fn fallen_player_loses() {
        let mut world = populated_world(2);
        let player = Actor::new(
            Vec3::new(4.0, 2.0, 0.0),
            Vec3::ONE,
            Arc::new(SimpleInput),
            Arc::new(SimplePhysics),
        )
        .named(PLAYER_NAME);
        let id = world.add_actor(player);
        if let Some(actor) = world.actor_mut(id) {
            actor.deactivate();
        }

        let mut game = Game::new(world);
        let mut pump = FrameBudget::new(100);
        let result = game.play(&mut pump, &mut NullDraw, &mut NullAudio);
        assert_eq!(result, MatchResult::Lost);
    }

    #[test]
    fn dual_signal_frame_reports_a_win() {
        // Player down with exactly one rival standing raises both signals.
        let mut world = populated_world(1);
        let player = Actor::new(
            Vec3::new(4.0, 2.0, 0.0),
            Vec3::ONE,
            Arc::new(SimpleInput),
            Arc::new(SimplePhysics),
        )
        .named(PLAYER_NAME);
        let id = world.add_actor(player);
        if let Some(actor) = world.actor_mut(id) {
            actor.deactivate();
        }

        let mut game = Game::new(world);
        let outcome = game.advance_frame(0.0, &mut NullAudio);
        assert!(outcome.win && outcome.loss, "both signals should be raised");

        let mut pump = FrameBudget::new(100);
        let result = game.play(&mut pump, &mut NullDraw, &mut NullAudio);
        assert_eq!(result, MatchResult::Won);
    }
}
