//! Round orchestration
//!
//! Owns the `RoundState` and the score ledger. Each tick runs the pure
//! simulation; when a round ends the scores are written out and a new round
//! starts straight away.

use crate::ledger::{ScoreEntry, ScoreLedger};
use crate::settings::Settings;
use crate::sim::{self, ActorId, GameEvent, RoundEndCause, RoundState};

/// Where the controller is in the round lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Loading scores and spawning birds
    Initializing,
    /// Active gameplay
    Playing,
    /// A bird crashed; scores are being saved before the reset
    RoundOver,
}

/// What happened in a finished round
#[derive(Debug, Clone, PartialEq)]
pub struct RoundSummary {
    pub round: u32,
    pub cause: RoundEndCause,
    /// One entry per bird, in bird order
    pub scores: Vec<ScoreEntry>,
    pub ticks: u64,
}

pub struct RoundController {
    settings: Settings,
    state: RoundState,
    ledger: ScoreLedger,
    phase: RoundPhase,
    /// 1-based number of the round in progress
    round: u32,
    last_round: Option<RoundSummary>,
}

impl RoundController {
    /// Create a controller and start the first round
    pub fn new(mut settings: Settings, seed: u64) -> Self {
        settings.validate();
        let mut controller = Self {
            ledger: ScoreLedger::new(settings.ledger_path.clone()),
            state: RoundState::new(seed, &settings),
            settings,
            phase: RoundPhase::Initializing,
            round: 0,
            last_round: None,
        };
        controller.reset();
        controller
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn last_round(&self) -> Option<&RoundSummary> {
        self.last_round.as_ref()
    }

    /// Jump the requested birds. Returns the ones that actually jumped.
    pub fn handle_input(&mut self, jump_requested: &[ActorId]) -> Vec<ActorId> {
        if self.phase != RoundPhase::Playing {
            return Vec::new();
        }
        sim::apply_jumps(&mut self.state, jump_requested, &self.settings)
    }

    /// Advance one tick. A round that ends here is saved and replaced before
    /// this returns.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let outcome = sim::tick(&mut self.state, &self.settings);

        for event in &outcome.events {
            if let GameEvent::Scored { actor, total, .. } = event {
                log::debug!("Bird {} scored ({} total)", actor, total);
            }
        }

        if let Some(cause) = outcome.round_over {
            self.phase = RoundPhase::RoundOver;
            self.finish_round(cause);
            self.reset();
        }

        outcome.events
    }

    /// Reload the ledger and put fresh birds on an empty track
    pub fn reset(&mut self) {
        self.phase = RoundPhase::Initializing;
        self.ledger.reload_or_empty();
        self.state.reset(&self.settings);
        self.round += 1;
        self.phase = RoundPhase::Playing;
        log::info!(
            "Round {} started (seed {}, {} birds, best so far {:?})",
            self.round,
            self.state.seed,
            self.state.actors.len(),
            self.ledger.best()
        );
    }

    /// Copy the birds' scores into the ledger and write it out
    fn finish_round(&mut self, cause: RoundEndCause) {
        let scores: Vec<ScoreEntry> = self
            .state
            .actors
            .iter()
            .map(|actor| ScoreEntry::new(self.player_name(actor.id), actor.score))
            .collect();

        log::info!(
            "Round {} over after {} ticks ({:?}): {}",
            self.round,
            self.state.time_ticks,
            cause,
            scores
                .iter()
                .map(|e| format!("{}={}", e.name, e.score))
                .collect::<Vec<_>>()
                .join(", ")
        );

        for entry in &scores {
            if entry.score == 0 && !self.settings.persist_zero_scores {
                continue;
            }
            self.ledger.record(&entry.name, entry.score);
        }
        if let Err(e) = self.ledger.save() {
            log::warn!(
                "Failed to save high scores to {}: {}",
                self.ledger.path().display(),
                e
            );
        }

        self.last_round = Some(RoundSummary {
            round: self.round,
            cause,
            scores,
            ticks: self.state.time_ticks,
        });
    }

    fn player_name(&self, id: ActorId) -> &str {
        self.settings
            .player_names
            .get(id as usize)
            .map(String::as_str)
            .unwrap_or("player")
    }

    /// Test hook: mutable access to the live round
    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut RoundState {
        &mut self.state
    }
}
