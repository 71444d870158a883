//! Flappy Duo - two birds, one stream of pipes
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacle track, collisions, scoring)
//! - `round`: Round orchestration, game-over handling and score persistence
//! - `ledger`: Flat-file high score ledger
//! - `game_loop`: Fixed timestep driver between the platform and the round
//! - `platform`: Input/present/asset abstraction (headless implementation included)
//! - `settings`: Data-driven game tuning

pub mod game_loop;
pub mod ledger;
pub mod platform;
pub mod round;
pub mod settings;
pub mod sim;

pub use game_loop::{GameLoop, SessionSummary};
pub use ledger::{ScoreEntry, ScoreLedger};
pub use round::{RoundController, RoundPhase};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Simulation tick rate. Physics values are expressed per tick at this rate.
    pub const TICK_RATE: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame time fed to the accumulator (seconds)
    pub const MAX_FRAME_TIME: f32 = 0.25;

    /// Playfield dimensions (y grows downward, 0 is the top edge)
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Downward acceleration, units per tick per tick
    pub const GRAVITY: f32 = 0.5;
    /// Vertical velocity set by a jump (negative = up)
    pub const JUMP_VELOCITY: f32 = -10.0;

    /// Bird sprite footprint
    pub const BIRD_WIDTH: f32 = 34.0;
    pub const BIRD_HEIGHT: f32 = 24.0;

    /// Pipe defaults
    pub const PIPE_GAP: f32 = 200.0;
    pub const PIPE_WIDTH: f32 = 52.0;
    pub const PIPE_HEIGHT: f32 = 320.0;
    /// Leftward pipe movement per tick
    pub const SCROLL_SPEED: f32 = 2.0;
    /// Ticks between pipe spawns (1 = a new pair every tick)
    pub const SPAWN_INTERVAL_TICKS: u32 = 90;
    /// Keep the gap at least this far from the top/bottom of the playfield
    pub const GAP_MARGIN_TOP: f32 = 100.0;
    pub const GAP_MARGIN_BOTTOM: f32 = 100.0;

    /// Number of high score lines shown on screen
    pub const DISPLAYED_SCORES: usize = 5;
    /// Default ledger location
    pub const HIGH_SCORES_FILE: &str = "highscores.txt";
}
