use glam::DVec2;
use smooth_chart::chart::SmoothLineChart;
use smooth_chart::data_types::{clip_zones, SmoothLineConfig, Zone};
use smooth_chart::theme::Color;
use smooth_chart::transform::Viewport;

const VIEWPORT: Viewport = Viewport {
    width: 300.0,
    height: 200.0,
};

fn scenario_points() -> Vec<DVec2> {
    vec![
        DVec2::new(3.0, 32.0),
        DVec2::new(0.0, 17.0),
        DVec2::new(2.0, 60.0),
        DVec2::new(1.0, 23.0),
    ]
}

fn red() -> Color {
    Color::rgb(0xff, 0, 0)
}

#[test]
fn test_zones_clipped_to_data_range() {
    let zones = vec![
        Zone::new(0.0, 10.0, red()),
        Zone::new(10.0, 30.0, red()),
        Zone::new(20.0, 40.0, red()),
        Zone::new(50.0, 100.0, red()),
        Zone::new(61.0, 70.0, red()),
    ];
    let chart = SmoothLineChart::new(scenario_points(), SmoothLineConfig::default().zones(zones.clone()));
    assert_eq!(
        chart.zones(),
        &[
            Zone::new(17.0, 30.0, red()),
            Zone::new(20.0, 40.0, red()),
            Zone::new(50.0, 60.0, red()),
        ]
    );
    assert_eq!(clip_zones(&zones, &chart.data().extents()), chart.zones());
}

#[test]
fn test_layout_contents() {
    let config = SmoothLineConfig::default()
        .points(true)
        .ticks(3, 4)
        .zones(vec![Zone::new(10.0, 30.0, red())]);
    let mut chart = SmoothLineChart::new(scenario_points(), config);
    let layout = chart.layout(VIEWPORT);

    assert_eq!(layout.vertical_ticks, vec!["60.0", "49.25", "38.5", "27.75", "17.0"]);
    assert_eq!(layout.horizontal_ticks, vec!["0.0", "1.0", "2.0", "3.0"]);
    assert_eq!(layout.horizontal_lines, vec![0.0, 50.0, 100.0, 150.0, 200.0]);
    assert_eq!(layout.vertical_lines, vec![0.0, 100.0, 200.0, 300.0]);
    assert_eq!(layout.markers, chart.data().to_screen(VIEWPORT));
    assert_eq!(layout.path.vertices(), layout.markers);
    assert!(!chart.lookup().is_empty());

    assert_eq!(layout.zones.len(), 1);
    let band = layout.zones[0];
    let expected_height = 13.0 / 43.0 * 200.0;
    assert!((band.top - (200.0 - expected_height)).abs() < 1e-9);
    assert!((band.height - expected_height).abs() < 1e-9);
}

#[test]
fn test_markers_hidden_by_default() {
    let mut chart = SmoothLineChart::new(scenario_points(), SmoothLineConfig::default());
    assert!(chart.layout(VIEWPORT).markers.is_empty());
}

#[test]
fn test_press_pipeline() {
    let mut chart = SmoothLineChart::new(scenario_points(), SmoothLineConfig::default());
    chart.layout(VIEWPORT);

    let state = chart.press(DVec2::new(205.0, 50.0), VIEWPORT).clone();
    assert!(state.visible);
    assert_eq!(state.text, "60.0");
    assert!(state.selection_changed);
    assert_eq!(state.press_position, DVec2::new(205.0, 50.0));
    assert!((state.indicator.x - 205.0).abs() <= 1.0);

    // Same label again: no selection change
    let state = chart.press(DVec2::new(195.0, 10.0), VIEWPORT).clone();
    assert!(state.visible);
    assert_eq!(state.text, "60.0");
    assert!(!state.selection_changed);

    let state = chart.press(DVec2::new(40.0, 10.0), VIEWPORT).clone();
    assert_eq!(state.text, "17.0");
    assert!(state.selection_changed);

    chart.release();
    assert!(!chart.press_state().visible);
}

#[test]
fn test_press_outside_viewport_hides() {
    let mut chart = SmoothLineChart::new(scenario_points(), SmoothLineConfig::default());
    chart.layout(VIEWPORT);

    chart.press(DVec2::new(100.0, 10.0), VIEWPORT);
    assert!(chart.press_state().visible);

    let state = chart.press(DVec2::new(-1.0, 10.0), VIEWPORT);
    assert!(!state.visible);
    assert_eq!(state.press_position, DVec2::new(-1.0, 10.0));
    assert!(!chart.press(DVec2::new(301.0, 10.0), VIEWPORT).visible);
}

#[test]
fn test_press_before_layout_is_hidden() {
    let mut chart = SmoothLineChart::new(scenario_points(), SmoothLineConfig::default());
    assert!(!chart.press(DVec2::new(100.0, 10.0), VIEWPORT).visible);
}

#[test]
fn test_empty_and_single_point_charts() {
    let mut empty: SmoothLineChart<DVec2> = SmoothLineChart::new(vec![], SmoothLineConfig::default());
    let layout = empty.layout(VIEWPORT);
    assert!(layout.path.is_empty());
    assert!(layout.horizontal_lines.is_empty());
    assert!(layout.vertical_ticks.is_empty());
    assert!(layout.horizontal_ticks.is_empty());
    assert!(!empty.press(DVec2::new(10.0, 10.0), VIEWPORT).visible);

    let mut single = SmoothLineChart::new(vec![DVec2::new(1.0, 2.0)], SmoothLineConfig::default().points(true));
    let layout = single.layout(VIEWPORT);
    assert!(layout.path.is_empty());
    assert_eq!(layout.markers, vec![DVec2::ZERO]);
    assert_eq!(layout.vertical_ticks.len(), 5);
    assert!(single.lookup().is_empty());
    assert!(!single.press(DVec2::new(10.0, 10.0), VIEWPORT).visible);
}

#[test]
fn test_natural_chart_layout() {
    let mut chart = SmoothLineChart::new(scenario_points(), SmoothLineConfig::default().natural());
    let layout = chart.layout(VIEWPORT);
    assert_eq!(layout.path.curves().len(), 3);
    assert_eq!(chart.press(DVec2::new(290.0, 0.0), VIEWPORT).text, "32.0");
}

#[test]
fn test_invalid_viewport_is_neutral() {
    for config in [SmoothLineConfig::default(), SmoothLineConfig::default().natural()] {
        for viewport in [Viewport::new(0.0, 200.0), Viewport::new(-100.0, 200.0)] {
            let mut chart = SmoothLineChart::new(scenario_points(), config.clone());
            assert!(chart.path(viewport).is_empty());
            let layout = chart.layout(viewport);
            assert!(layout.path.is_empty());
            assert!(layout.zones.is_empty());
            assert!(chart.lookup().is_empty());
            assert!(!chart.press(DVec2::new(0.0, 10.0), viewport).visible);
        }
    }
}
