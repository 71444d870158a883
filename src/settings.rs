//! Game settings and tuning
//!
//! Persisted as JSON next to the executable. Missing or broken files fall back
//! to defaults so a bad edit never keeps the game from starting.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Default settings file name (looked up in the working directory)
pub const SETTINGS_FILE: &str = "settings.json";

/// Error reading or writing the settings file
#[derive(Debug)]
pub enum SettingsError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "settings I/O error: {}", e),
            SettingsError::Parse(e) => write!(f, "settings parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for SettingsError {
    fn from(e: io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Game settings/tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Physics (per tick) ===
    pub gravity: f32,
    pub jump_velocity: f32,
    pub bird_width: f32,
    pub bird_height: f32,

    // === Obstacles ===
    pub pipe_gap: f32,
    pub pipe_width: f32,
    pub pipe_height: f32,
    pub scroll_speed: f32,
    /// Ticks between spawns; 1 reproduces the tight one-pair-per-tick packing
    pub spawn_interval_ticks: u32,
    pub gap_margin_top: f32,
    pub gap_margin_bottom: f32,

    // === Rules ===
    /// Falling below the playfield ends the round
    pub floor_is_fatal: bool,
    /// Write 0-point rounds to the ledger as well
    pub persist_zero_scores: bool,
    /// Ledger names, one per bird. Also decides how many birds spawn.
    pub player_names: Vec<String>,

    // === Loop ===
    pub tick_rate: u32,
    /// Fixed RNG seed; random per session when unset
    pub seed: Option<u64>,
    /// Let the built-in pilot fly the birds
    pub autopilot: bool,
    /// Stop the headless session after this many frames
    pub max_frames: Option<u64>,

    // === Files ===
    pub ledger_path: PathBuf,
    pub asset_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playfield_width: WINDOW_WIDTH,
            playfield_height: WINDOW_HEIGHT,

            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,

            pipe_gap: PIPE_GAP,
            pipe_width: PIPE_WIDTH,
            pipe_height: PIPE_HEIGHT,
            scroll_speed: SCROLL_SPEED,
            spawn_interval_ticks: SPAWN_INTERVAL_TICKS,
            gap_margin_top: GAP_MARGIN_TOP,
            gap_margin_bottom: GAP_MARGIN_BOTTOM,

            floor_is_fatal: true,
            persist_zero_scores: true,
            player_names: vec!["player1".to_string(), "player2".to_string()],

            tick_rate: TICK_RATE,
            seed: None,
            autopilot: true,
            max_frames: Some(60 * 60),

            ledger_path: PathBuf::from(HIGH_SCORES_FILE),
            asset_dir: PathBuf::from("assets"),
        }
    }
}

impl Settings {
    /// Inclusive range the top of a pipe gap may be placed in
    pub fn gap_band(&self) -> (f32, f32) {
        (
            self.gap_margin_top,
            self.playfield_height - self.gap_margin_bottom - self.pipe_gap,
        )
    }

    /// Start position of bird `index` (birds spread evenly across the width)
    pub fn spawn_position(&self, index: usize) -> (f32, f32) {
        let count = self.player_names.len().max(1) as f32;
        let x = if count <= 2.0 {
            // Classic layout: a quarter and three quarters across
            self.playfield_width * (1.0 + 2.0 * index as f32) / 4.0
        } else {
            self.playfield_width * (index as f32 + 0.5) / count
        };
        (x, self.playfield_height / 2.0)
    }

    /// Fixed timestep in seconds for the configured tick rate
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }

    /// Fix values that would stall or break the simulation
    pub fn validate(&mut self) {
        if self.tick_rate == 0 {
            log::warn!("tick_rate must be positive, using {}", TICK_RATE);
            self.tick_rate = TICK_RATE;
        }
        if self.spawn_interval_ticks == 0 {
            log::warn!("spawn_interval_ticks must be at least 1, using 1");
            self.spawn_interval_ticks = 1;
        }
        if self.pipe_gap <= 0.0 {
            log::warn!("pipe_gap must be positive, using {}", PIPE_GAP);
            self.pipe_gap = PIPE_GAP;
        }
        if self.player_names.is_empty() {
            log::warn!("No player names configured, spawning a single bird");
            self.player_names.push("player1".to_string());
        }
        for name in &mut self.player_names {
            if name.is_empty() || name.contains(char::is_whitespace) {
                let fixed = crate::ledger::sanitize_name(name);
                log::warn!("Player name {:?} is not ledger-safe, using {:?}", name, fixed);
                *name = fixed;
            }
        }
    }

    /// Read settings from a JSON file
    pub fn read(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        let mut settings: Settings = serde_json::from_str(&json)?;
        settings.validate();
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No settings file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
