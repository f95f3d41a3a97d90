//! Playback clock for the editing session.
//!
//! One clock per session is the single time authority: the frame loop calls
//! `tick` with the elapsed wall-clock delta, everything else reads
//! `current_time`/`progress`. State is only mutated through the clock's own
//! operations.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::constants::{
    ANIMATION_DEFAULT_DURATION, ANIMATION_MAX_DURATION, ANIMATION_MIN_DURATION,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Paused,
    Playing,
}

/// Serializable view of the clock, for UI bindings and session restore.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TimelineState {
    pub current_time: f64,
    pub duration: f64,
    pub is_playing: bool,
}

/// The shared playhead.
///
/// Transitions: `play` resumes from the paused time (0 when stopped),
/// `pause` holds the current time, `stop` rewinds to 0, `seek` clamps into
/// `[0, duration]` without changing the play state.
///
/// End-of-timeline policy is looping: a tick that overshoots the duration
/// wraps the overshoot back to the start (a sawtooth repeat), it does not
/// clamp at the end. Stop-at-end is deliberately not offered; mixing the
/// two policies is how inconsistent playback bugs start.
#[derive(Clone, Debug)]
pub struct TimelineClock {
    current_time: f64,
    duration: f64,
    state: PlaybackState,
}

impl Default for TimelineClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineClock {
    pub fn new() -> Self {
        Self {
            current_time: 0.0,
            duration: ANIMATION_DEFAULT_DURATION,
            state: PlaybackState::Stopped,
        }
    }

    pub fn with_duration(duration: f64) -> Self {
        let mut clock = Self::new();
        clock.set_duration(duration);
        clock
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Normalized playhead position in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            self.current_time / self.duration
        } else {
            0.0
        }
    }

    pub fn play(&mut self) {
        self.state = PlaybackState::Playing;
    }

    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    pub fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
        self.current_time = 0.0;
    }

    pub fn toggle_play(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn seek(&mut self, time: f64) {
        if !time.is_finite() {
            warn!("Ignoring seek to non-finite time {time}");
            return;
        }
        self.current_time = time.clamp(0.0, self.duration);
    }

    /// Clamp to the allowed duration range. Keyframe times are relative
    /// fractions, so changing the duration rescales playback speed without
    /// touching any keyframe.
    pub fn set_duration(&mut self, duration: f64) {
        let duration = if duration.is_finite() {
            duration.clamp(ANIMATION_MIN_DURATION, ANIMATION_MAX_DURATION)
        } else {
            warn!("Ignoring non-finite duration {duration}");
            return;
        };
        self.duration = duration;
        self.current_time = self.current_time.min(self.duration);
    }

    /// Advance by an elapsed wall-clock delta (milliseconds).
    ///
    /// Re-checks the play state so a tick scheduled before `pause`/`stop`
    /// applies nothing stale. Overshooting the duration wraps.
    pub fn tick(&mut self, delta_ms: f64) {
        if self.state != PlaybackState::Playing {
            return;
        }
        if !delta_ms.is_finite() || delta_ms <= 0.0 {
            return;
        }
        let mut next = self.current_time + delta_ms;
        if next > self.duration {
            next %= self.duration;
        }
        self.current_time = next;
    }

    pub fn timeline_state(&self) -> TimelineState {
        TimelineState {
            current_time: self.current_time,
            duration: self.duration,
            is_playing: self.is_playing(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seek_clamps_into_range() {
        let mut clock = TimelineClock::with_duration(2000.0);
        clock.seek(-50.0);
        assert_eq!(clock.current_time(), 0.0);
        clock.seek(5000.0);
        assert_eq!(clock.current_time(), 2000.0);
        clock.seek(1234.0);
        assert_eq!(clock.current_time(), 1234.0);
    }

    #[test]
    fn tick_wraps_instead_of_clamping() {
        let mut clock = TimelineClock::with_duration(1000.0);
        clock.play();
        clock.seek(950.0);
        clock.tick(100.0);
        assert_eq!(clock.current_time(), 50.0);
    }

    #[test]
    fn stale_tick_after_pause_applies_nothing() {
        let mut clock = TimelineClock::with_duration(1000.0);
        clock.play();
        clock.tick(100.0);
        clock.pause();
        clock.tick(500.0);
        assert_eq!(clock.current_time(), 100.0);
        assert_eq!(clock.state(), PlaybackState::Paused);
    }

    #[test]
    fn stop_rewinds_and_play_resumes_from_pause() {
        let mut clock = TimelineClock::with_duration(1000.0);
        clock.play();
        clock.tick(400.0);
        clock.pause();
        clock.play();
        assert_eq!(clock.current_time(), 400.0);
        clock.stop();
        assert_eq!(clock.current_time(), 0.0);
        assert_eq!(clock.state(), PlaybackState::Stopped);
    }

    #[test]
    fn duration_is_clamped_to_limits() {
        let mut clock = TimelineClock::new();
        clock.set_duration(5.0);
        assert_eq!(clock.duration(), ANIMATION_MIN_DURATION);
        clock.set_duration(50000.0);
        assert_eq!(clock.duration(), ANIMATION_MAX_DURATION);
    }
}
