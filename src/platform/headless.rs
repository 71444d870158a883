//! Windowless platform: scripted input, fixed frame time, no drawing
//!
//! Used by the demo binary (with the autopilot flying) and by tests.

use std::collections::VecDeque;

use super::{Frame, InputEvent, Platform};

#[derive(Debug, Clone)]
pub struct HeadlessPlatform {
    /// Reported time per frame
    frame_dt: f32,
    /// Event batches, one per frame, consumed front to back
    script: VecDeque<Vec<InputEvent>>,
    /// Send `Close` once this many frames have been presented
    max_frames: Option<u64>,
    frames: u64,
    last_round: u32,
    best_seen: u32,
}

impl HeadlessPlatform {
    pub fn new(frame_dt: f32) -> Self {
        Self {
            frame_dt,
            script: VecDeque::new(),
            max_frames: None,
            frames: 0,
            last_round: 0,
            best_seen: 0,
        }
    }

    pub fn with_max_frames(mut self, max_frames: Option<u64>) -> Self {
        self.max_frames = max_frames;
        self
    }

    /// Queue per-frame input batches
    pub fn with_script(mut self, batches: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        self.script.extend(batches);
        self
    }

    /// Frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Highest round number seen in a presented frame
    pub fn last_round(&self) -> u32 {
        self.last_round
    }

    /// Highest live bird score seen in a presented frame
    pub fn best_seen(&self) -> u32 {
        self.best_seen
    }
}

impl Platform for HeadlessPlatform {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        if self.max_frames.is_some_and(|max| self.frames >= max) {
            return vec![InputEvent::Close];
        }
        self.script.pop_front().unwrap_or_default()
    }

    fn frame_time(&mut self) -> f32 {
        self.frame_dt
    }

    fn present(&mut self, frame: &Frame<'_>) {
        self.frames += 1;
        if frame.round != self.last_round {
            log::debug!("Frame {}: round {}", self.frames, frame.round);
            self.last_round = frame.round;
        }
        if let Some(best) = frame.actors.iter().map(|a| a.score).max() {
            self.best_seen = self.best_seen.max(best);
        }
        log::trace!(
            "Frame {}: birds {:?}, {} pairs",
            self.frames,
            frame
                .actors
                .iter()
                .map(|a| (a.pos.y.round(), a.score))
                .collect::<Vec<_>>(),
            frame.segments.len()
        );
    }
}
