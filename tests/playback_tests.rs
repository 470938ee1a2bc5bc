mod common;

use common::{chart, ms, records};
use gpui_animated_chart::playback::{PlaybackController, PlaybackTick};
use gpui_animated_chart::{ChartMode, PlaybackState, Theme};

#[test]
fn test_controller_walks_once_then_resets() {
    let mut playback = PlaybackController::new(ms(500));
    assert!(playback.start(ms(0)));
    assert!(!playback.start(ms(10)));
    assert_eq!(playback.next_tick(), Some(ms(500)));

    assert_eq!(playback.tick(3), PlaybackTick::Advanced(1));
    assert_eq!(playback.next_tick(), Some(ms(1000)));
    assert_eq!(playback.tick(3), PlaybackTick::Advanced(2));
    assert_eq!(playback.tick(3), PlaybackTick::Finished);
    assert_eq!(playback.state(), PlaybackState::default());
    assert_eq!(playback.next_tick(), None);
}

#[test]
fn test_playback_steps_through_records() {
    let (mut chart, log) = chart(&[10.0, 20.0, 30.0, 40.0], ChartMode::Line);
    assert!(chart.start_playback());
    assert!(chart.playback().is_playing);

    chart.advance(ms(499));
    assert_eq!(chart.playback().step, 0);

    let mut steps = Vec::new();
    for _ in 0..3 {
        chart.advance(ms(500));
        steps.push(chart.playback().step);
    }
    // step 3 is the last record; the next tick ends the pass
    assert_eq!(steps, vec![1, 2, 3]);
    assert!(chart.playback().is_playing);

    chart.advance(ms(500));
    assert_eq!(
        chart.playback(),
        PlaybackState {
            is_playing: false,
            step: 0
        }
    );
    // initial props, three advanced steps, then the reset back to step 0
    assert_eq!(log.len(), 5);

    chart.advance(ms(5000));
    assert_eq!(log.len(), 5);
}

#[test]
fn test_start_while_playing_is_ignored() {
    let (mut chart, _) = chart(&[10.0, 20.0, 30.0], ChartMode::Bar);
    assert!(chart.start_playback());
    chart.advance(ms(250));
    assert!(!chart.start_playback());

    // the original cadence is kept
    chart.advance(ms(250));
    assert_eq!(chart.playback().step, 1);
}

#[test]
fn test_single_tick_advance_processes_every_tick() {
    let (mut chart, log) = chart(&[10.0, 20.0, 30.0], ChartMode::Line);
    chart.start_playback();
    chart.advance(ms(10_000));
    assert_eq!(chart.playback(), PlaybackState::default());
    // initial props, steps 1 and 2, and the reset
    assert_eq!(log.len(), 4);
}

#[test]
fn test_single_record_finishes_without_redraw() {
    let (mut chart, log) = chart(&[10.0], ChartMode::Line);
    chart.start_playback();
    chart.advance(ms(500));
    assert!(!chart.playback().is_playing);
    assert_eq!(log.len(), 1);
}

#[test]
fn test_input_change_cancels_playback() {
    let (mut chart, _) = chart(&[10.0, 20.0, 30.0], ChartMode::Line);
    chart.start_playback();
    chart.advance(ms(600));
    assert_eq!(chart.playback().step, 1);

    chart.set_theme(Theme::Light);
    assert_eq!(chart.playback(), PlaybackState::default());
    chart.advance(ms(2000));
    assert_eq!(chart.playback().step, 0);

    assert!(chart.start_playback());
    chart.set_records(records(&[1.0, 2.0]));
    assert!(!chart.playback().is_playing);
}

#[test]
fn test_explicit_redraw_cancels_playback() {
    let (mut chart, log) = chart(&[10.0, 20.0, 30.0], ChartMode::Line);
    assert!(chart.start_playback());
    chart.redraw();
    assert_eq!(chart.playback(), PlaybackState::default());

    chart.advance(ms(500));
    assert_eq!(chart.playback(), PlaybackState::default());
    assert_eq!(log.len(), 2);
}

#[test]
fn test_step_redraw_restarts_entrance() {
    let (mut chart, _) = chart(&[10.0, 20.0], ChartMode::Line);
    chart.advance(ms(2500));
    assert!(!chart.is_animating());

    chart.start_playback();
    chart.advance(ms(500));
    assert_eq!(chart.playback().step, 1);
    assert!(chart.frame().points().all(|p| p.attrs.radius == 0.0));
    assert_eq!(chart.frame().line_path().and_then(|l| l.visible_length()), Some(0.0));
}
