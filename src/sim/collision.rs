//! Collision detection and scoring
//!
//! Birds and pipes are plain AABBs, so everything here is an overlap test.
//! At two birds and a handful of live pairs the all-pairs loop is cheap.

use super::state::{Actor, ActorId, ObstacleSegment, SegmentId};

/// First (bird, pair) that overlap, in bird order then pair order
pub fn find_collision(
    actors: &[Actor],
    segments: &[ObstacleSegment],
) -> Option<(ActorId, SegmentId)> {
    actors.iter().find_map(|actor| {
        let bounds = actor.bounds();
        segments
            .iter()
            .find(|segment| segment.hits(&bounds))
            .map(|segment| (actor.id, segment.id))
    })
}

/// Any bird touching any pipe ends the round
pub fn check_game_over(actors: &[Actor], segments: &[ObstacleSegment]) -> bool {
    find_collision(actors, segments).is_some()
}

/// Bird has dropped completely below the playfield
pub fn out_of_bounds(actor: &Actor, playfield_height: f32) -> bool {
    actor.pos.y >= playfield_height
}

/// Credit each bird once for every pair whose right edge is behind it.
///
/// A pair stays "passed" for many ticks, so `scored_by` records who was
/// already paid. Returns the newly credited (bird, pair) combinations.
pub fn update_scores(
    actors: &mut [Actor],
    segments: &mut [ObstacleSegment],
) -> Vec<(ActorId, SegmentId)> {
    let mut credited = Vec::new();

    for actor in actors.iter_mut() {
        let bounds = actor.bounds();
        for segment in segments.iter_mut() {
            if segment.is_scored_by(actor.id) {
                continue;
            }
            if segment.right_edge() < actor.pos.x && !segment.hits(&bounds) {
                segment.scored_by.push(actor.id);
                actor.score += 1;
                credited.push((actor.id, segment.id));
            }
        }
    }

    credited
}
