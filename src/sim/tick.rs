//! Fixed timestep simulation tick
//!
//! Advances a `RoundState` deterministically: birds, then pipes, then
//! collisions, then scoring.

use super::collision::{find_collision, out_of_bounds, update_scores};
use super::state::{ActorId, GameEvent, RoundEndCause, RoundState};
use crate::settings::Settings;

/// Result of one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    pub events: Vec<GameEvent>,
    /// Set when the round ended this tick
    pub round_over: Option<RoundEndCause>,
}

/// Apply jump requests. Unknown ids are ignored, birds stuck at the top
/// edge can't jump. Returns the birds that actually jumped.
pub fn apply_jumps(
    state: &mut RoundState,
    requested: &[ActorId],
    settings: &Settings,
) -> Vec<ActorId> {
    let mut jumped = Vec::new();
    for &id in requested {
        if jumped.contains(&id) {
            continue;
        }
        if let Some(actor) = state.actor_mut(id) {
            if actor.jump(settings.jump_velocity) {
                jumped.push(id);
            }
        }
    }
    jumped
}

/// Advance the round by one tick
pub fn tick(state: &mut RoundState, settings: &Settings) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    state.time_ticks += 1;

    // Birds
    for actor in &mut state.actors {
        actor.step(settings.gravity);
    }

    // Pipes: scroll/retire first so a fresh pair starts at the right edge
    for segment in state.track.scroll(settings.scroll_speed) {
        outcome.events.push(GameEvent::Retired { segment });
    }
    if let Some(segment) = state.track.maybe_spawn(&mut state.rng, settings) {
        outcome.events.push(GameEvent::Spawned { segment });
    }

    // Round end
    let cause = find_collision(&state.actors, state.track.segments())
        .map(|(actor, segment)| RoundEndCause::HitPipe { actor, segment })
        .or_else(|| {
            if !settings.floor_is_fatal {
                return None;
            }
            state
                .actors
                .iter()
                .find(|a| out_of_bounds(a, settings.playfield_height))
                .map(|a| RoundEndCause::FellOut { actor: a.id })
        });

    if let Some(cause) = cause {
        outcome.events.push(GameEvent::RoundOver { cause });
        outcome.round_over = Some(cause);
        return outcome;
    }

    // Scoring
    for (actor, segment) in update_scores(&mut state.actors, state.track.segments_mut()) {
        let total = state.actor(actor).map(|a| a.score).unwrap_or_default();
        outcome.events.push(GameEvent::Scored {
            actor,
            segment,
            total,
        });
    }

    outcome
}
