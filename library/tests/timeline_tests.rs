//! Timeline clock state machine and wrap-around policy.

use animator::timeline::{PlaybackState, TimelineClock};

#[test]
fn test_seek_is_clamped() {
    let mut clock = TimelineClock::with_duration(2000.0);
    clock.seek(-50.0);
    assert_eq!(clock.current_time(), 0.0);
    clock.seek(5000.0);
    assert_eq!(clock.current_time(), 2000.0);
}

#[test]
fn test_seek_preserves_play_state() {
    let mut clock = TimelineClock::with_duration(1000.0);
    clock.play();
    clock.seek(300.0);
    assert_eq!(clock.state(), PlaybackState::Playing);
    clock.pause();
    clock.seek(700.0);
    assert_eq!(clock.state(), PlaybackState::Paused);
    assert_eq!(clock.current_time(), 700.0);
}

#[test]
fn test_playback_wraps_at_duration() {
    let mut clock = TimelineClock::with_duration(1000.0);
    clock.play();
    clock.seek(950.0);
    clock.tick(100.0);
    assert_eq!(clock.current_time(), 50.0, "wrapped, not clamped to 1000");
}

#[test]
fn test_ticks_are_ignored_unless_playing() {
    let mut clock = TimelineClock::with_duration(1000.0);
    clock.tick(100.0);
    assert_eq!(clock.current_time(), 0.0, "stopped clock must not advance");

    clock.play();
    clock.tick(250.0);
    clock.pause();
    clock.tick(250.0);
    assert_eq!(clock.current_time(), 250.0, "paused clock must not advance");
}

#[test]
fn test_stop_rewinds_to_zero_from_any_state() {
    let mut clock = TimelineClock::with_duration(1000.0);
    clock.play();
    clock.tick(600.0);
    clock.stop();
    assert_eq!(clock.state(), PlaybackState::Stopped);
    assert_eq!(clock.current_time(), 0.0);

    clock.play();
    assert_eq!(clock.current_time(), 0.0, "play after stop starts at 0");
}

#[test]
fn test_set_duration_clamps_and_keeps_playhead_in_range() {
    let mut clock = TimelineClock::with_duration(5000.0);
    clock.seek(4500.0);
    clock.set_duration(1000.0);
    assert_eq!(clock.duration(), 1000.0);
    assert_eq!(clock.current_time(), 1000.0, "playhead clamped into range");

    clock.set_duration(1.0);
    assert_eq!(clock.duration(), 100.0, "minimum duration enforced");
    clock.set_duration(1e9);
    assert_eq!(clock.duration(), 10000.0, "maximum duration enforced");
}

#[test]
fn test_progress_derives_from_time_and_duration() {
    let mut clock = TimelineClock::with_duration(2000.0);
    clock.seek(500.0);
    assert_eq!(clock.progress(), 0.25);

    let state = clock.timeline_state();
    assert_eq!(state.current_time, 500.0);
    assert_eq!(state.duration, 2000.0);
    assert!(!state.is_playing);
}
