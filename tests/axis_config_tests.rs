use radar_chart_rs::ChartError;
use radar_chart_rs::api::{DeviceScale, REFERENCE_SCREEN_WIDTH, RadarAxisConfig, RadarChartGeometry};
use radar_chart_rs::core::Size;
use radar_chart_rs::render::{Color, FontDescriptor};

#[test]
fn partial_json_fills_in_defaults() {
    let config = RadarAxisConfig::from_json_str(
        r#"{ "labels": ["Speed", null, "Stamina"], "label_width": 32.0 }"#,
    )
    .expect("parse axis config");

    assert_eq!(
        config.labels,
        vec![Some("Speed".to_owned()), None, Some("Stamina".to_owned())]
    );
    assert!(config.enabled);
    assert!(config.draw_labels_enabled);
    assert_eq!(config.label_width, 32.0);
    assert_eq!(config.label_height, 10.0);
    assert_eq!(config.label_font, FontDescriptor::new("Sans", 10.0));
}

#[test]
fn json_round_trip_preserves_styling() {
    let config = RadarAxisConfig::new(["A", "B"])
        .with_font(FontDescriptor::new("Inter", 12.0))
        .with_text_colors(vec![Color::rgb(1.0, 0.0, 0.0), Color::rgb(0.0, 0.0, 1.0)])
        .with_label_size(40.0, 14.0);

    let json = config.to_json_pretty().expect("serialize");
    let restored = RadarAxisConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored, config);
}

#[test]
fn out_of_range_colors_are_rejected() {
    let err = RadarAxisConfig::from_json_str(
        r#"{ "label_text_color": { "red": 2.0, "green": 0.0, "blue": 0.0, "alpha": 1.0 } }"#,
    )
    .expect_err("invalid color");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = RadarAxisConfig::from_json_str("{ labels: ").expect_err("malformed");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn negative_label_box_is_rejected() {
    let err = RadarAxisConfig::default()
        .with_label_size(-1.0, 10.0)
        .validate()
        .expect_err("negative width");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn text_color_falls_back_unless_parallel() {
    let red = Color::rgb(1.0, 0.0, 0.0);
    let config = RadarAxisConfig::new(["A", "B", "C"]).with_text_colors(vec![red, red]);
    assert!(!config.has_per_label_colors());
    assert_eq!(config.text_color_at(0), Color::BLACK);
}

#[test]
fn default_config_color_lookup_does_not_panic() {
    let config = RadarAxisConfig::default().with_text_color(Color::rgb(0.1, 0.2, 0.3));
    assert!(config.has_per_label_colors());
    assert_eq!(config.text_color_at(0), Color::rgb(0.1, 0.2, 0.3));
    assert_eq!(config.text_color_at(7), Color::rgb(0.1, 0.2, 0.3));
}

#[test]
fn centered_geometry_derives_slice_angle() {
    let geometry = RadarChartGeometry::centered(Size::new(300.0, 200.0), 5);
    assert_eq!(geometry.slice_angle, 72.0);
    assert_eq!(geometry.center.x, 150.0);
    assert_eq!(geometry.center.y, 100.0);
    assert!(geometry.validate().is_ok());

    let empty = RadarChartGeometry::centered(Size::new(300.0, 200.0), 0);
    assert_eq!(empty.slice_angle, 0.0);
}

#[test]
fn device_scale_is_relative_to_reference_width() {
    assert_eq!(DeviceScale::default().factor(), 1.0);
    assert_eq!(DeviceScale::from_screen_width(REFERENCE_SCREEN_WIDTH / 2.0).factor(), 0.5);
    assert_eq!(DeviceScale::from_screen_width(0.0).factor(), 1.0);
}
