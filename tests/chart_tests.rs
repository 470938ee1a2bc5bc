mod common;

use common::{chart, ms, records};
use gpui_animated_chart::scene::ElementKind;
use gpui_animated_chart::{
    AnimatedChart, ChartConfig, ChartMode, ChartProps, HeightLog, RenderState, Theme,
};
use parking_lot::Mutex;
use std::sync::Arc;

#[test]
fn test_two_record_line_scenario() {
    let (mut chart, log) = chart(&[100.0, 200.0], ChartMode::Line);

    assert_eq!(log.heights(), vec![450.0]);
    assert_eq!(chart.render_state(), RenderState::Idle);

    let frame = chart.frame();
    assert_eq!(frame.points().count(), 2);
    assert!(frame.points().all(|p| p.attrs.radius == 0.0));
    assert!(frame.area_path().is_none());
    assert_eq!(frame.background, Theme::Dark.palette().background);

    chart.advance(ms(600));
    assert!(chart.frame().points().all(|p| p.attrs.radius == 5.0));

    chart.advance(ms(1400));
    let line = chart.frame().line_path().cloned().unwrap();
    let ElementKind::LinePath { length, width, .. } = line.kind else {
        panic!("not a line");
    };
    assert_eq!(width, 3.0);
    assert_eq!(line.stroke, Some(Theme::Dark.palette().primary));
    assert!((line.visible_length().unwrap() - length).abs() < 1e-3);
    assert!(!chart.is_animating());
    assert_eq!(log.len(), 1);
}

#[test]
fn test_empty_input_draws_nothing() {
    let (chart, log) = chart(&[], ChartMode::Line);
    assert!(chart.scene().is_empty());
    assert!(chart.frame().is_empty());
    assert_eq!(log.heights(), vec![450.0]);
}

#[test]
fn test_area_mode_layers() {
    let (chart, _) = chart(&[100.0, 200.0, 150.0], ChartMode::Area);
    let elements = chart.scene().elements();

    let area = elements
        .iter()
        .position(|e| matches!(e.kind, ElementKind::AreaPath { .. }))
        .unwrap();
    let line = elements
        .iter()
        .position(|e| matches!(e.kind, ElementKind::LinePath { .. }))
        .unwrap();
    let first_point = elements.iter().position(|e| e.kind.is_point()).unwrap();
    assert!(area < line && line < first_point);

    if let ElementKind::AreaPath { gradient, .. } = &elements[area].kind {
        assert_eq!(gradient.color, Theme::Dark.palette().primary);
        assert_eq!(gradient.opacity_at(400.0), 0.0);
        assert!((gradient.opacity_at(0.0) - 0.8).abs() < 1e-6);
    }
}

#[test]
fn test_unsupported_mode_draws_axes_only() {
    let log = HeightLog::new();
    let mut chart = AnimatedChart::new(ChartConfig::default(), Box::new(log.clone()));
    chart.apply_props_json(
        r#"{"data":[{"date":"2024-01-01","total":10},{"date":"2024-01-02","total":20}],
            "chartType":"pie","theme":"dark"}"#,
    );

    assert_eq!(chart.mode(), ChartMode::Unsupported);
    assert!(!chart.scene().is_empty());
    assert!(chart.scene().elements().iter().all(|e| matches!(
        e.kind,
        ElementKind::AxisLine { .. } | ElementKind::AxisTick { .. } | ElementKind::AxisLabel { .. }
    )));
    assert_eq!(log.heights(), vec![450.0]);
}

#[test]
fn test_malformed_date_renders_blank() {
    let (mut chart, log) = chart(&[100.0, 200.0], ChartMode::Line);
    chart.apply_props_json(r#"{"data":[{"date":"not a date","total":10}],"chartType":"line"}"#);

    assert!(chart.scene().is_empty());
    assert!(chart.records().is_empty());
    assert_eq!(log.len(), 2);
}

#[test]
fn test_redraw_is_idempotent() {
    let (mut chart, _) = chart(&[100.0, 250.0, 175.0], ChartMode::Area);
    let first = chart.scene().clone();

    chart.advance(ms(700));
    chart.redraw();
    assert_eq!(chart.scene(), &first);
    assert_eq!(chart.frame().points().filter(|p| p.attrs.radius > 0.0).count(), 0);

    chart.set_mode(ChartMode::Bar);
    chart.set_mode(ChartMode::Area);
    assert_eq!(chart.scene(), &first);
}

#[test]
fn test_changes_redraw_and_notify_host() {
    let (mut chart, log) = chart(&[100.0, 200.0], ChartMode::Line);
    let generation = chart.timeline().generation();

    chart.set_mode(ChartMode::Line);
    chart.set_theme(Theme::Dark);
    assert_eq!(log.len(), 1);

    chart.set_mode(ChartMode::Bar);
    chart.set_theme(Theme::Light);
    chart.set_records(records(&[5.0, 6.0, 7.0]));
    assert_eq!(log.heights(), vec![450.0; 4]);
    assert_eq!(chart.redraw_count(), 4);
    assert!(chart.timeline().generation() > generation);

    let frame = chart.frame();
    assert_eq!(frame.bars().count(), 3);
    assert!(frame
        .bars()
        .all(|b| b.fill == Some(Theme::Light.palette().primary)));
}

#[test]
fn test_redraw_cancels_running_transitions() {
    let (mut chart, _) = chart(&[100.0, 200.0], ChartMode::Line);
    chart.advance(ms(300));
    chart.set_theme(Theme::Light);

    // the new generation starts from scratch at the current time
    let line = chart.frame().line_path().cloned().unwrap();
    assert_eq!(line.visible_length(), Some(0.0));
    chart.advance(ms(1999));
    assert!(chart.is_animating());
    chart.advance(ms(1));
    assert!(!chart.is_animating());
}

#[test]
fn test_closure_host_receives_height() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let config = ChartConfig {
        frame_padding: 20.0,
        ..ChartConfig::default()
    };
    let props = ChartProps::new(records(&[1.0]), ChartMode::Bar, Theme::Light);
    let _chart = AnimatedChart::with_props(
        config,
        props,
        Box::new(move |height: f32| sink.lock().push(height)),
    );
    assert_eq!(*seen.lock(), vec![420.0]);
}
