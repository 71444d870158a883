//! Obstacle track: spawns pipe pairs at the right edge, scrolls them left,
//! and retires them once they are fully off screen.

use rand::Rng;

use super::state::{ObstacleSegment, SegmentId};
use crate::settings::Settings;

#[derive(Debug, Clone, Default)]
pub struct ObstacleTrack {
    /// Live pairs, oldest first
    segments: Vec<ObstacleSegment>,
    /// Ticks left until the next spawn (0 = spawn on the next call)
    ticks_until_spawn: u32,
    next_id: SegmentId,
}

impl ObstacleTrack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[ObstacleSegment] {
        &self.segments
    }

    pub fn segments_mut(&mut self) -> &mut [ObstacleSegment] {
        &mut self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Drop every pair and restart the spawn cadence
    pub fn clear(&mut self) {
        self.segments.clear();
        self.ticks_until_spawn = 0;
        self.next_id = 0;
    }

    /// Move every pair left and retire the ones that left the playfield.
    /// Returns the retired ids.
    pub fn scroll(&mut self, speed: f32) -> Vec<SegmentId> {
        for segment in &mut self.segments {
            segment.scroll(speed);
        }

        let mut retired = Vec::new();
        self.segments.retain(|s| {
            if s.is_off_screen() {
                retired.push(s.id);
                false
            } else {
                true
            }
        });
        retired
    }

    /// Count down the spawn cadence and spawn when it runs out
    pub fn maybe_spawn<R: Rng>(&mut self, rng: &mut R, settings: &Settings) -> Option<SegmentId> {
        if self.ticks_until_spawn > 0 {
            self.ticks_until_spawn -= 1;
            return None;
        }
        self.ticks_until_spawn = settings.spawn_interval_ticks.saturating_sub(1);
        Some(self.spawn(rng, settings))
    }

    /// Add a pair at the right edge of the playfield
    pub fn spawn<R: Rng>(&mut self, rng: &mut R, settings: &Settings) -> SegmentId {
        let id = self.next_id;
        self.next_id += 1;

        self.segments.push(ObstacleSegment {
            id,
            x: settings.playfield_width,
            width: settings.pipe_width,
            piece_height: settings.pipe_height,
            gap_top: random_gap_top(rng, settings),
            gap: settings.pipe_gap,
            scored_by: Vec::new(),
        });
        id
    }
}

#[cfg(test)]
impl ObstacleTrack {
    /// Place a hand-built pair
    pub(crate) fn push(&mut self, segment: ObstacleSegment) {
        self.segments.push(segment);
    }
}

/// Uniform gap position that keeps the whole gap inside the margins
pub fn random_gap_top<R: Rng>(rng: &mut R, settings: &Settings) -> f32 {
    let (low, high) = settings.gap_band();
    if high > low {
        rng.random_range(low..=high)
    } else {
        if high < low {
            log::warn!(
                "Pipe gap {} does not fit a {} tall playfield with margins {}/{}",
                settings.pipe_gap,
                settings.playfield_height,
                settings.gap_margin_top,
                settings.gap_margin_bottom
            );
        }
        low
    }
}
