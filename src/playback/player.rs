//! Timed playback over a [`Timeline`]

use super::timeline::Timeline;
use std::time::{Duration, Instant};

/// Animation speed on a 1..=100 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Speed(u8);

impl Speed {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    /// Clamp `value` into the valid range
    pub fn new(value: u8) -> Self {
        Speed(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Delay between two advances: `1000 - speed * 9` milliseconds
    pub fn delay(self) -> Duration {
        Duration::from_millis(1000 - u64::from(self.0) * 9)
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            0..=32 => "Slow",
            33..=65 => "Medium",
            _ => "Fast",
        }
    }

    pub fn faster(self, by: u8) -> Self {
        Self::new(self.0.saturating_add(by))
    }

    pub fn slower(self, by: u8) -> Self {
        Self::new(self.0.saturating_sub(by))
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed(50)
    }
}

/// A timeline that advances by itself while playing
///
/// Advances happen only from [`tick`](Player::tick), at most one per call, so
/// two advances never overlap. Pausing simply stops future advances.
#[derive(Debug, Clone)]
pub struct Player<S> {
    pub timeline: Timeline<S>,
    speed: Speed,
    is_playing: bool,
    last_advance: Option<Instant>,
}

impl<S> Player<S> {
    pub fn new(steps: Vec<S>, speed: Speed) -> Self {
        Player {
            timeline: Timeline::new(steps),
            speed,
            is_playing: false,
            last_advance: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Only the delay before the next advance is affected
    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    /// Start playing; a finished timeline restarts from the beginning
    pub fn play(&mut self, now: Instant) {
        if self.timeline.is_at_end() {
            self.timeline.rewind_to_start();
        }
        self.is_playing = true;
        self.last_advance = Some(now);
    }

    pub fn pause(&mut self) {
        self.is_playing = false;
        self.last_advance = None;
    }

    pub fn toggle(&mut self, now: Instant) {
        if self.is_playing {
            self.pause();
        } else {
            self.play(now);
        }
    }

    /// Stop and rewind, discarding any pending advance
    pub fn reset(&mut self) {
        self.pause();
        self.timeline.rewind_to_start();
    }

    /// Load a new trace; playback stops and the position rewinds
    pub fn load(&mut self, steps: Vec<S>) {
        self.pause();
        self.timeline.replace(steps);
    }

    /// Advance one step if playing and the delay has elapsed
    ///
    /// Returns `true` if the position moved. Playback stops on the last step.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_playing {
            return false;
        }

        let due = self
            .last_advance
            .map_or(true, |last| now.saturating_duration_since(last) >= self.speed.delay());
        if !due {
            return false;
        }

        match self.timeline.step_forward() {
            Ok(()) => {
                self.last_advance = Some(now);
                if self.timeline.is_at_end() {
                    self.pause();
                }
                true
            }
            Err(_) => {
                self.pause();
                false
            }
        }
    }
}
