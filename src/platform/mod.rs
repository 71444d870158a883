//! Platform abstraction layer
//!
//! The game core only needs a few things from a window/graphics backend:
//! - Input events (two jump keys and a close request)
//! - Frame timing
//! - Presenting a read-only view of the round
//! - Asset bytes loaded once at startup

pub mod assets;
pub mod headless;

pub use assets::{AssetError, Assets};
pub use headless::HeadlessPlatform;

use glam::Vec2;

use crate::ledger::ScoreEntry;
use crate::sim::{Actor, ActorId, ObstacleSegment};

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Jump for the first bird
    Up,
    /// Jump for the second bird
    W,
    Other,
}

impl Key {
    /// Bird controlled by this key
    pub fn jump_target(self) -> Option<ActorId> {
        match self {
            Key::Up => Some(0),
            Key::W => Some(1),
            Key::Other => None,
        }
    }
}

/// Discrete input events polled once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    /// Window close / quit request
    Close,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    pub round: u32,
    pub playfield: Vec2,
    pub actors: &'a [Actor],
    pub segments: &'a [ObstacleSegment],
    /// Best ledger entries, highest first
    pub top_scores: Vec<ScoreEntry>,
    /// False when no font could be loaded
    pub show_scores: bool,
}

/// Window/graphics backend seen from the game loop
pub trait Platform {
    /// Drain input events since the last call
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Seconds elapsed since the previous frame
    fn frame_time(&mut self) -> f32;

    /// Draw and flip
    fn present(&mut self, frame: &Frame<'_>);
}
