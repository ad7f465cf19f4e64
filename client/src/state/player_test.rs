use super::*;

fn player(current_time: f64, duration: f64) -> PlayerState {
    PlayerState { current_time, duration, ..PlayerState::default() }
}

#[test]
fn progress_is_zero_until_duration_known() {
    assert_eq!(player(5.0, 0.0).progress_percent(), 0.0);
    assert_eq!(player(5.0, f64::NAN).progress_percent(), 0.0);
    assert_eq!(player(25.0, 100.0).progress_percent(), 25.0);
}

#[test]
fn skip_is_clamped_to_media_bounds() {
    let p = player(5.0, 60.0);
    assert_eq!(p.skip_target(-SKIP_SECS), 0.0);
    assert_eq!(p.skip_target(SKIP_SECS), 15.0);
    assert_eq!(player(55.0, 60.0).skip_target(SKIP_SECS), 60.0);
}

#[test]
fn skip_without_duration_only_clamps_at_zero() {
    assert_eq!(player(5.0, 0.0).skip_target(SKIP_SECS), 15.0);
}

#[test]
fn seek_maps_fraction_onto_duration() {
    assert_eq!(player(0.0, 200.0).seek_target(0.25), Some(50.0));
    assert_eq!(player(0.0, 200.0).seek_target(1.5), Some(200.0));
    assert_eq!(player(0.0, 0.0).seek_target(0.5), None);
}

#[test]
fn click_fraction_handles_edges() {
    assert_eq!(click_fraction(50.0, 200.0), 0.25);
    assert_eq!(click_fraction(-4.0, 200.0), 0.0);
    assert_eq!(click_fraction(250.0, 200.0), 1.0);
    assert_eq!(click_fraction(10.0, 0.0), 0.0);
}

#[test]
fn labels_follow_state() {
    let mut p = PlayerState::default();
    assert_eq!(p.play_label(), "Play");
    p.toggle_play();
    assert_eq!(p.play_label(), "Pause");
    p.toggle_mute();
    assert_eq!(p.mute_label(), "Unmute");
}

#[test]
fn official_video_starts_playing_muted_with_controls() {
    let s = OfficialVideoState::default();
    assert!(s.player.playing);
    assert!(s.player.muted);
    assert!(s.controls_shown());
}

#[test]
fn controls_hide_after_latest_interaction_only() {
    let mut s = OfficialVideoState::default();
    let first = s.interact();
    let second = s.interact();
    assert!(!s.hide_controls(first));
    assert!(s.controls_shown());
    assert!(s.hide_controls(second));
    assert!(!s.controls_shown());
}

#[test]
fn paused_video_never_hides_controls() {
    let mut s = OfficialVideoState::default();
    let seq = s.toggle_play();
    assert!(!s.player.playing);
    assert!(!s.hide_controls(seq));
    s.toggle_play();
    assert!(s.controls_shown());
}

#[test]
fn overlay_open_resumes_playback() {
    let mut s = OfficialVideoState::default();
    s.toggle_play();
    s.open_overlay();
    assert!(s.overlay_open);
    assert!(s.player.playing);
    s.close_overlay();
    assert!(!s.overlay_open);
}
