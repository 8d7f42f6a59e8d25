//! Library crate providing the core match simulation.
//!
//! The simulation is a fixed-timestep loop over a world of actors on a tile
//! grid: input behaviours decide intent, physics behaviours integrate
//! motion, and a per-frame population scan classifies the match as ongoing,
//! won or lost. Rendering, audio and the event system live behind traits so
//! the whole thing runs headless, byte-for-byte reproducibly, under test.
pub mod actor;
pub mod behavior;
pub mod constants;
pub mod game;
pub mod input;
pub mod logging;
pub mod map;
pub mod numeric;
pub mod outcome;
pub mod presentation;
pub mod random;
pub mod schedule;
pub mod spawn;
pub mod world;

pub use constants::*;

// Re-export commonly used items
pub use actor::Actor;
pub use behavior::{
    touching_ground, Environment, InputBehavior, InputContext, JumpingInput, NewtonPhysics,
    PhysicsBehavior, RandomInput, SimpleInput, SimplePhysics,
};
pub use game::{Game, MatchResult};
pub use input::{Button, EventPump, FrameBudget, InputState};
pub use logging::init as init_logging;
pub use map::{resolve_search_path, MapError, Tile, TileMap};
pub use outcome::{evaluate, MatchOutcome};
pub use presentation::{
    AudioSink, ClipId, DrawSurface, NullAudio, NullDraw, TraceAudio, TraceDraw, CLIP_JUMP,
};
pub use random::Xorshift32;
pub use schedule::{FixedStepper, FrameClock};
pub use spawn::{
    default_arena, load_level, spawn_level, ActorSpec, InputKind, LevelError, LevelSpec,
    PhysicsKind,
};
pub use world::{ActorId, World};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use varena::prelude::*;
    //! ```

    pub use crate::actor::Actor;
    pub use crate::behavior::{JumpingInput, NewtonPhysics, RandomInput};
    pub use crate::game::{Game, MatchResult};
    pub use crate::map::TileMap;
    pub use crate::presentation::{NullAudio, NullDraw};
    pub use crate::world::World;
    pub use crate::MS_PER_UPDATE;
}
