//! Draw and audio surfaces the simulation calls out to.
//!
//! The core owns no pixels and no samples. Once per render frame it tells a
//! [`DrawSurface`] what exists, and whenever a one-shot event happens it
//! tells an [`AudioSink`] which clip to play. How either request is honoured
//! is entirely the host's business; the null implementations here make
//! headless runs and tests trivial.

use log::{debug, trace};

use crate::actor::Actor;
use crate::map::TileMap;

/// Identifier of a preloaded audio clip.
pub type ClipId = u32;

/// Clip played when a jump impulse is applied.
pub const CLIP_JUMP: ClipId = 0;

/// Receiver for per-frame draw calls.
pub trait DrawSurface {
    /// Begins a fresh frame.
    fn clear(&mut self);
    /// Draws the terrain layer.
    fn draw_tiles(&mut self, map: &TileMap);
    /// Draws one actor.
    fn draw_actor(&mut self, actor: &Actor);
}

/// Receiver for one-shot sound events.
pub trait AudioSink {
    /// Plays a preloaded clip.
    fn play_clip(&mut self, clip: ClipId);
}

/// Draw surface that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDraw;

impl DrawSurface for NullDraw {
    fn clear(&mut self) {}
    fn draw_tiles(&mut self, _map: &TileMap) {}
    fn draw_actor(&mut self, _actor: &Actor) {}
}

/// Audio sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play_clip(&mut self, _clip: ClipId) {}
}

/// Draw surface that logs its calls, for headless debugging.
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceDraw;

impl DrawSurface for TraceDraw {
    fn clear(&mut self) {
        trace!("frame clear");
    }

    fn draw_tiles(&mut self, map: &TileMap) {
        trace!("draw tiles {}x{}", map.width(), map.height());
    }

    fn draw_actor(&mut self, actor: &Actor) {
        trace!(
            "draw actor {:?} at ({:.2}, {:.2})",
            actor.name(),
            actor.position.x,
            actor.position.y
        );
    }
}

/// Audio sink that logs requested clips.
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceAudio;

impl AudioSink for TraceAudio {
    fn play_clip(&mut self, clip: ClipId) {
        debug!("play clip {clip}");
    }
}
