//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (speeds are per tick)
//! - Seeded RNG only
//! - Stable iteration order (birds by id, pipes oldest first)
//! - No file, rendering or platform dependencies

pub mod aabb;
pub mod autopilot;
pub mod collision;
pub mod state;
pub mod tick;
pub mod track;

pub use aabb::Aabb;
pub use collision::{check_game_over, find_collision, out_of_bounds, update_scores};
pub use state::{
    Actor, ActorId, GameEvent, ObstacleSegment, Piece, PieceKind, RoundEndCause, RoundState,
    SegmentId,
};
pub use tick::{TickOutcome, apply_jumps, tick};
pub use track::ObstacleTrack;
