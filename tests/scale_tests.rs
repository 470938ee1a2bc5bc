mod common;

use common::{day, records};
use gpui_animated_chart::data_types::Viewport;
use gpui_animated_chart::scales::{ChartScale, ScaleMapper};
use gpui_animated_chart::utils::date_formatter::{date_to_millis, format_axis_date, millis_to_date};
use rand::Rng;

#[test]
fn test_chart_scale_linear() {
    let scale = ChartScale::new_linear((0.0, 100.0), (0.0, 500.0));

    assert_eq!(scale.map(0.0), 0.0);
    assert_eq!(scale.map(50.0), 250.0);
    assert_eq!(scale.map(100.0), 500.0);

    assert_eq!(scale.invert(0.0), 0.0);
    assert_eq!(scale.invert(250.0), 50.0);
    assert_eq!(scale.invert(500.0), 100.0);

    let flipped = ChartScale::new_linear((0.0, 100.0), (500.0, 0.0));
    assert_eq!(flipped.invert(125.0), 75.0);
    assert!((flipped.invert(flipped.map(33.0)) - 33.0).abs() < 1e-9);
}

#[test]
fn test_zero_width_domain_maps_to_midpoint() {
    let scale = ChartScale::new_linear((7.0, 7.0), (360.0, 20.0));
    assert!((scale.map(7.0) - 190.0).abs() < 1e-3);
}

#[test]
fn test_mapper_uses_viewport_ranges() {
    let viewport = Viewport::default();
    let mapper = ScaleMapper::new(&records(&[100.0, 200.0]), &viewport);

    assert!((mapper.x_for_date(day(1)) - 50.0).abs() < 1e-3);
    assert!((mapper.x_for_date(day(2)) - 770.0).abs() < 1e-3);
    // vertical axis is inverted and starts at zero
    assert!((mapper.y_for_total(0.0) - 360.0).abs() < 1e-3);
    assert!((mapper.y_for_total(200.0) - 20.0).abs() < 1e-3);
    assert!((mapper.y_for_total(100.0) - 190.0).abs() < 1e-3);
    assert_eq!(mapper.date_at(770.0), Some(day(2)));
}

#[test]
fn test_degenerate_inputs_do_not_panic() {
    let viewport = Viewport::default();

    let single = ScaleMapper::new(&records(&[42.0]), &viewport);
    assert!((single.x_for_date(day(1)) - 410.0).abs() < 1e-3);
    assert!(single.y_for_total(42.0).is_finite());

    let zeros = ScaleMapper::new(&records(&[0.0, 0.0, 0.0]), &viewport);
    assert!((zeros.y_for_total(0.0) - 190.0).abs() < 1e-3);

    let empty = ScaleMapper::new(&[], &viewport);
    assert!(empty.x_for_date(day(1)).is_finite());
}

#[test]
fn test_random_records_map_monotonically() {
    let mut rng = rand::rng();
    let viewport = Viewport::default();

    for _ in 0..20 {
        let totals: Vec<f64> = (0..rng.random_range(2..30))
            .map(|_| rng.random_range(0.0..50_000.0))
            .collect();
        let mapper = ScaleMapper::new(&records(&totals), &viewport);

        let mut sorted = totals.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        for pair in sorted.windows(2) {
            assert!(mapper.y_for_total(pair[0]) >= mapper.y_for_total(pair[1]));
        }
        for i in 1..totals.len() as u32 {
            assert!(mapper.x_for_date(day(i)) < mapper.x_for_date(day(i + 1)));
        }
        for total in &totals {
            let y = mapper.y_for_total(*total);
            assert!((20.0..=360.0).contains(&y), "y {} out of range", y);
        }
    }
}

#[test]
fn test_ticks_cover_both_axes() {
    let viewport = Viewport::default();
    let mapper = ScaleMapper::new(&records(&[100.0, 150.0, 200.0]), &viewport);
    let ticks = mapper.ticks(10);

    assert_eq!(ticks.x, vec![date_to_millis(day(1)), date_to_millis(day(2)), date_to_millis(day(3))]);
    assert!(!ticks.y.is_empty());
    assert!(ticks.y.len() <= 15);
    assert!(ticks.y.windows(2).all(|w| w[0] < w[1]));
    assert!(ticks.y.iter().all(|t| (0.0..=200.0).contains(t)));
}

#[test]
fn test_date_helpers() {
    assert_eq!(millis_to_date(date_to_millis(day(15))), Some(day(15)));
    assert_eq!(date_to_millis(chrono::NaiveDate::from_ymd_opt(1970, 1, 2).unwrap()), 86_400_000.0);
    assert_eq!(format_axis_date(day(5)), "05/01");
    assert_eq!(millis_to_date(f64::NAN), None);
    assert_eq!(
        millis_to_date(-1.0),
        chrono::NaiveDate::from_ymd_opt(1969, 12, 31)
    );
}

#[test]
fn test_long_ranges_thin_out_to_midnight_ticks() {
    let viewport = Viewport::default();
    for span in [30u64, 365] {
        let first = day(1);
        let last = first + chrono::Days::new(span);
        let data = vec![
            gpui_animated_chart::Record::new(first, 10.0),
            gpui_animated_chart::Record::new(last, 20.0),
        ];
        let ticks = ScaleMapper::new(&data, &viewport).ticks(10).x;

        assert!(!ticks.is_empty() && ticks.len() <= 10, "{} ticks for {} days", ticks.len(), span);
        assert!(ticks.windows(2).all(|w| w[0] < w[1]));
        for tick in &ticks {
            assert_eq!(tick % 86_400_000.0, 0.0);
            assert!(*tick >= date_to_millis(first) && *tick <= date_to_millis(last));
        }
    }
}
