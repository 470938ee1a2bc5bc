mod common;

use common::{chart, ms};
use glam::Vec2;
use gpui_animated_chart::scene::{ElementId, ElementKind, Property};
use gpui_animated_chart::{ChartMode, PointerEvent, Theme};

fn point_ids(chart: &gpui_animated_chart::AnimatedChart) -> Vec<ElementId> {
    chart.frame().points().map(|p| p.id).collect()
}

#[test]
fn test_points_become_hoverable_after_growing() {
    let (mut chart, _) = chart(&[100.0, 200.0], ChartMode::Line);
    let ids = point_ids(&chart);

    assert!(!chart.pointer(PointerEvent::Enter(ids[0])));
    assert!(chart.tooltip().is_none());

    chart.advance(ms(500));
    assert!(chart.is_hoverable(ids[0]));
    assert!(!chart.is_hoverable(ids[1]));

    chart.advance(ms(100));
    assert!(chart.is_hoverable(ids[1]));
}

#[test]
fn test_tooltip_lifecycle() {
    let (mut chart, _) = chart(&[1234.56, 200.0], ChartMode::Line);
    chart.advance(ms(600));
    let id = point_ids(&chart)[0];

    assert!(chart.pointer(PointerEvent::Enter(id)));
    let tooltip = chart.tooltip().unwrap();
    assert_eq!(tooltip.text, "R$ 1.234,56");
    assert_eq!(tooltip.anchor, Vec2::new(50.0, 10.0));
    assert_eq!(chart.frame().tooltip().count(), 2);
    assert!(chart.frame().tooltip().all(|e| e.attrs.opacity == 0.0));

    chart.advance(ms(200));
    let frame = chart.frame();
    for element in frame.tooltip() {
        match &element.kind {
            ElementKind::TooltipBox { offset, size, corner_radius, .. } => {
                assert!((element.attrs.opacity - 0.9).abs() < 1e-6);
                assert_eq!(*offset, Vec2::new(-40.0, -25.0));
                assert_eq!(*size, Vec2::new(80.0, 20.0));
                assert_eq!(*corner_radius, 5.0);
            }
            ElementKind::TooltipText { text, font_size, offset_y, .. } => {
                assert_eq!(element.attrs.opacity, 1.0);
                assert_eq!(text, "R$ 1.234,56");
                assert_eq!(*font_size, 12.0);
                assert_eq!(*offset_y, -10.0);
            }
            other => panic!("unexpected tooltip element {:?}", other),
        }
    }

    assert!(chart.pointer(PointerEvent::Leave(id)));
    assert!(chart.tooltip().is_none());
    assert_eq!(chart.frame().tooltip().count(), 0);
    assert!(!chart.pointer(PointerEvent::Leave(id)));
}

#[test]
fn test_leave_cancels_tooltip_fade() {
    let (mut chart, _) = chart(&[100.0, 200.0], ChartMode::Line);
    chart.advance(ms(600));
    let id = point_ids(&chart)[1];

    chart.pointer(PointerEvent::Enter(id));
    chart.advance(ms(50));
    let pending = chart.timeline().pending_count();
    chart.pointer(PointerEvent::Leave(id));
    assert_eq!(chart.timeline().pending_count(), pending - 2);
}

#[test]
fn test_at_most_one_tooltip() {
    let (mut chart, _) = chart(&[100.0, 200.0, 300.0], ChartMode::Area);
    chart.advance(ms(800));
    let ids = point_ids(&chart);

    chart.pointer(PointerEvent::Enter(ids[0]));
    chart.pointer(PointerEvent::Enter(ids[2]));
    assert_eq!(chart.frame().tooltip().count(), 2);
    assert_eq!(chart.tooltip().map(|t| t.owner), Some(ids[2]));
}

#[test]
fn test_redraw_drops_tooltip() {
    let (mut chart, _) = chart(&[100.0, 200.0], ChartMode::Line);
    chart.advance(ms(600));
    let id = point_ids(&chart)[0];
    chart.pointer(PointerEvent::Enter(id));
    assert!(chart.tooltip().is_some());

    chart.set_theme(Theme::Light);
    assert!(chart.tooltip().is_none());
    assert_eq!(chart.frame().tooltip().count(), 0);
    assert!(!chart.is_hoverable(id));
}

#[test]
fn test_bar_mode_has_no_tooltip() {
    let (mut chart, _) = chart(&[100.0, 200.0], ChartMode::Bar);
    chart.advance(ms(2000));

    let ids: Vec<_> = chart.frame().bars().map(|b| b.id).collect();
    for id in ids {
        assert!(!chart.is_hoverable(id));
        assert!(!chart.pointer(PointerEvent::Enter(id)));
    }
    assert!(!chart.pointer_moved(Vec2::new(50.0, 190.0)));
    assert!(chart.tooltip().is_none());
}

#[test]
fn test_pointer_moves_are_hit_tested() {
    let (mut chart, _) = chart(&[100.0, 200.0], ChartMode::Line);
    chart.advance(ms(600));

    assert!(chart.pointer_moved(Vec2::new(52.0, 191.0)));
    assert_eq!(chart.tooltip().map(|t| t.text.as_str()), Some("R$ 100,00"));
    // still over the same point
    assert!(!chart.pointer_moved(Vec2::new(50.0, 190.0)));

    assert!(chart.pointer_moved(Vec2::new(400.0, 300.0)));
    assert!(chart.tooltip().is_none());
}

#[test]
fn test_tooltip_uses_theme_colors() {
    let (mut chart, _) = chart(&[100.0, 200.0], ChartMode::Line);
    chart.advance(ms(600));
    let id = point_ids(&chart)[0];
    chart.pointer(PointerEvent::Enter(id));

    let palette = Theme::Dark.palette();
    let frame = chart.frame();
    let bg = frame
        .tooltip()
        .find(|e| matches!(e.kind, ElementKind::TooltipBox { .. }))
        .unwrap();
    assert_eq!(bg.fill, Some(palette.background));
    assert_eq!(bg.stroke, Some(palette.primary));
    assert!(chart
        .timeline()
        .transitions_for(bg.id)
        .iter()
        .all(|t| t.property == Property::Opacity && t.duration == ms(200)));
}
