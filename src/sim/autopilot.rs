//! Idle/demo mode: a simple pilot that flaps each bird through the next gap

use super::state::{Actor, ActorId, ObstacleSegment, RoundState};
use crate::settings::Settings;

/// Flap once the bird's bottom edge sinks this far above the lower pipe
const FLAP_CLEARANCE: f32 = 40.0;

/// Birds that should jump this tick
pub fn choose_jumps(state: &RoundState, settings: &Settings) -> Vec<ActorId> {
    state
        .actors
        .iter()
        .filter(|actor| {
            let target = next_segment(actor, state.track.segments());
            wants_to_flap(actor, target, settings)
        })
        .map(|actor| actor.id)
        .collect()
}

/// Closest pair the bird still has to clear
fn next_segment<'a>(
    actor: &Actor,
    segments: &'a [ObstacleSegment],
) -> Option<&'a ObstacleSegment> {
    segments
        .iter()
        .filter(|s| s.right_edge() >= actor.pos.x)
        .min_by(|a, b| a.x.total_cmp(&b.x))
}

fn wants_to_flap(actor: &Actor, target: Option<&ObstacleSegment>, settings: &Settings) -> bool {
    // One flap per climb; a bird pinned to the top can't flap at all
    if actor.pos.y <= 0.0 || actor.vel.y < 0.0 {
        return false;
    }

    // With nothing ahead, hover around the middle of the playfield
    let floor = match target {
        Some(segment) => segment.gap_bottom(),
        None => (settings.playfield_height + settings.pipe_gap) / 2.0,
    };
    actor.pos.y + actor.size.y > floor - FLAP_CLEARANCE
}
