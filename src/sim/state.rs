//! Round state and core simulation types
//!
//! Coordinates follow the screen: x grows to the right, y grows downward and
//! y = 0 is the top of the playfield. Speeds are units per tick.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::aabb::Aabb;
use super::track::ObstacleTrack;
use crate::settings::Settings;

/// Index of a bird within its round
pub type ActorId = u32;
/// Per-round unique pipe pair id
pub type SegmentId = u32;

/// A bird
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub id: ActorId,
    /// Top-left corner of the sprite
    pub pos: Vec2,
    pub vel: Vec2,
    /// Collision footprint
    pub size: Vec2,
    /// Pipes passed this round
    pub score: u32,
}

impl Actor {
    pub fn new(id: ActorId, pos: Vec2, size: Vec2) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            size,
            score: 0,
        }
    }

    /// One tick of gravity
    pub fn apply_gravity(&mut self, gravity: f32) {
        self.vel.y += gravity;
    }

    /// Move by one tick of velocity
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Replace vertical velocity with `impulse`. Returns false (and does
    /// nothing) once the bird is pinned against the top edge.
    pub fn jump(&mut self, impulse: f32) -> bool {
        if self.pos.y > 0.0 {
            self.vel.y = impulse;
            true
        } else {
            false
        }
    }

    /// Keep the bird from leaving through the top. There is no bottom clamp.
    pub fn clamp_to_playfield(&mut self) {
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
        }
    }

    /// Gravity, movement and clamping for one tick
    pub fn step(&mut self, gravity: f32) {
        self.apply_gravity(gravity);
        self.integrate();
        self.clamp_to_playfield();
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Which half of a pipe pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    /// Hangs from above, drawn mirrored so its mouth faces down
    Upper,
    /// Stands below the gap
    Lower,
}

/// One drawable/collidable pipe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    pub kind: PieceKind,
    pub bounds: Aabb,
}

/// A pair of pipes sharing one gap. Both pieces are derived from the same
/// position, so they always move and retire together.
#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleSegment {
    pub id: SegmentId,
    /// Left edge of both pieces
    pub x: f32,
    pub width: f32,
    /// Height of each piece
    pub piece_height: f32,
    /// Y of the bottom of the upper piece
    pub gap_top: f32,
    /// Vertical opening between the pieces
    pub gap: f32,
    /// Birds already credited for passing this pair
    pub scored_by: Vec<ActorId>,
}

impl ObstacleSegment {
    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_top + self.gap
    }

    pub fn upper_bounds(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, self.gap_top - self.piece_height),
            Vec2::new(self.right_edge(), self.gap_top),
        )
    }

    pub fn lower_bounds(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, self.gap_bottom()),
            Vec2::new(self.right_edge(), self.gap_bottom() + self.piece_height),
        )
    }

    pub fn pieces(&self) -> [Piece; 2] {
        [
            Piece {
                kind: PieceKind::Upper,
                bounds: self.upper_bounds(),
            },
            Piece {
                kind: PieceKind::Lower,
                bounds: self.lower_bounds(),
            },
        ]
    }

    /// True if `bounds` overlaps either piece
    pub fn hits(&self, bounds: &Aabb) -> bool {
        self.pieces().iter().any(|p| p.bounds.intersects(bounds))
    }

    /// Move both pieces left
    pub fn scroll(&mut self, dx: f32) {
        self.x -= dx;
    }

    /// Entirely past the left edge of the playfield
    pub fn is_off_screen(&self) -> bool {
        self.right_edge() < 0.0
    }

    pub fn is_scored_by(&self, actor: ActorId) -> bool {
        self.scored_by.contains(&actor)
    }
}

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEndCause {
    /// A bird touched a pipe
    HitPipe { actor: ActorId, segment: SegmentId },
    /// A bird dropped below the playfield
    FellOut { actor: ActorId },
}

/// Something that happened during a tick (for audio/HUD/logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Spawned { segment: SegmentId },
    Retired { segment: SegmentId },
    Scored { actor: ActorId, segment: SegmentId, total: u32 },
    RoundOver { cause: RoundEndCause },
}

/// Everything one round needs, owned by the round controller
#[derive(Debug, Clone)]
pub struct RoundState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Pipe placement RNG (continues across rounds)
    pub rng: Pcg32,
    /// Live birds, indexed by id
    pub actors: Vec<Actor>,
    /// Live pipe pairs
    pub track: ObstacleTrack,
    /// Ticks simulated this round
    pub time_ticks: u64,
}

impl RoundState {
    /// Fresh state with birds at their start positions
    pub fn new(seed: u64, settings: &Settings) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            actors: Vec::new(),
            track: ObstacleTrack::new(),
            time_ticks: 0,
        };
        state.spawn_actors(settings);
        state
    }

    /// Clear birds and pipes and respawn. The RNG keeps running so the next
    /// round gets a different (but reproducible) pipe sequence.
    pub fn reset(&mut self, settings: &Settings) {
        self.actors.clear();
        self.track.clear();
        self.time_ticks = 0;
        self.spawn_actors(settings);
    }

    fn spawn_actors(&mut self, settings: &Settings) {
        let size = Vec2::new(settings.bird_width, settings.bird_height);
        for index in 0..settings.player_names.len() {
            let (x, y) = settings.spawn_position(index);
            self.actors
                .push(Actor::new(index as ActorId, Vec2::new(x, y), size));
        }
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id == id)
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|a| a.id == id)
    }
}
