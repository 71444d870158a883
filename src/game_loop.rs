//! Frame loop: poll input, run fixed ticks, present
//!
//! The platform reports real frame time; the simulation only ever advances in
//! whole ticks, with leftover time carried in an accumulator.

use glam::Vec2;

use crate::consts::{DISPLAYED_SCORES, MAX_FRAME_TIME, MAX_SUBSTEPS};
use crate::platform::{Frame, InputEvent, Platform};
use crate::round::RoundController;
use crate::sim::{ActorId, GameEvent, autopilot};

/// Totals for one run of the loop
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub frames: u64,
    pub ticks: u64,
    pub rounds_finished: u32,
    /// Best single-round score across the session
    pub best_score: Option<u32>,
}

pub struct GameLoop {
    controller: RoundController,
    accumulator: f32,
    /// Draw the high score table (needs a font)
    show_scores: bool,
    summary: SessionSummary,
}

impl GameLoop {
    pub fn new(controller: RoundController, show_scores: bool) -> Self {
        Self {
            controller,
            accumulator: 0.0,
            show_scores,
            summary: SessionSummary::default(),
        }
    }

    pub fn controller(&self) -> &RoundController {
        &self.controller
    }

    pub fn summary(&self) -> &SessionSummary {
        &self.summary
    }

    /// Run frames until the platform asks to quit
    pub fn run<P: Platform>(&mut self, platform: &mut P) -> SessionSummary {
        while self.frame(platform) {}
        log::info!(
            "Session over: {} frames, {} ticks, {} rounds, best {:?}",
            self.summary.frames,
            self.summary.ticks,
            self.summary.rounds_finished,
            self.summary.best_score
        );
        self.summary.clone()
    }

    /// One frame. Returns false once a close request arrives.
    pub fn frame<P: Platform>(&mut self, platform: &mut P) -> bool {
        let events = platform.poll_events();
        if events.contains(&InputEvent::Close) {
            return false;
        }

        let mut jumps: Vec<ActorId> = events
            .iter()
            .filter_map(|event| match event {
                InputEvent::KeyDown(key) => key.jump_target(),
                InputEvent::Close => None,
            })
            .collect();

        // Clamp huge frame gaps (debugger, window drag)
        let dt = self.controller.settings().tick_dt();
        self.accumulator += platform.frame_time().min(MAX_FRAME_TIME);

        let mut substeps = 0;
        while self.accumulator >= dt && substeps < MAX_SUBSTEPS {
            if self.controller.settings().autopilot {
                jumps.extend(autopilot::choose_jumps(
                    self.controller.state(),
                    self.controller.settings(),
                ));
            }
            // One-shot inputs apply to the first tick only
            self.controller.handle_input(&jumps);
            jumps.clear();

            let events = self.controller.tick();
            self.record(&events);

            self.accumulator -= dt;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS && self.accumulator >= dt {
            log::debug!("Dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator = 0.0;
        }

        // Keep input that arrived on a frame with no tick
        if !jumps.is_empty() {
            self.controller.handle_input(&jumps);
        }

        self.present(platform);
        self.summary.frames += 1;
        true
    }

    fn record(&mut self, events: &[GameEvent]) {
        self.summary.ticks += 1;
        for event in events {
            match event {
                GameEvent::Scored { total, .. } => {
                    self.summary.best_score = self.summary.best_score.max(Some(*total));
                }
                GameEvent::RoundOver { .. } => {
                    self.summary.rounds_finished += 1;
                    // Zero-point rounds still count as a result
                    if self.summary.best_score.is_none() {
                        self.summary.best_score = Some(0);
                    }
                }
                _ => {}
            }
        }
    }

    fn present<P: Platform>(&self, platform: &mut P) {
        let settings = self.controller.settings();
        let state = self.controller.state();
        let frame = Frame {
            round: self.controller.round(),
            playfield: Vec2::new(settings.playfield_width, settings.playfield_height),
            actors: &state.actors,
            segments: state.track.segments(),
            top_scores: if self.show_scores {
                self.controller.ledger().top(DISPLAYED_SCORES)
            } else {
                Vec::new()
            },
            show_scores: self.show_scores,
        };
        platform.present(&frame);
    }
}
