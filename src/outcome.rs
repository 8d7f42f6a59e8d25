//! Match outcome evaluation.
//!
//! Once per render frame, after the catch-up loop, the full actor
//! population is scanned and two independent signals derived from it. The
//! signals are deliberately not reconciled here: a frame in which the
//! player falls while exactly one rival survives raises both, and callers
//! decide what that means.

use crate::constants::PLAYER_NAME;
use crate::world::World;

/// Signals raised by one evaluation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchOutcome {
    /// Exactly one actor remains active.
    pub win: bool,
    /// An actor named [`PLAYER_NAME`] has been deactivated.
    pub loss: bool,
}

impl MatchOutcome {
    /// Whether either terminal signal was raised.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.win || self.loss
    }
}

/// Scans the actor population and classifies the match state.
///
/// Active actors are counted; inactive ones are checked for the
/// distinguished player name. The two checks are independent by design.
#[must_use]
pub fn evaluate(world: &World) -> MatchOutcome {
    let mut active_count = 0usize;
    let mut player_down = false;
    for actor in world.actors() {
        if actor.active {
            active_count += 1;
        } else if actor.name() == PLAYER_NAME {
            player_down = true;
        }
    }
    MatchOutcome {
        win: active_count == 1,
        loss: player_down,
    }
}
