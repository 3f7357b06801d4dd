#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use radar_chart_rs::api::{RadarAxisConfig, RadarChartGeometry, RadialLabelRenderer};
use radar_chart_rs::core::{Point, Size};
use radar_chart_rs::render::{
    CairoSurface, Color, DrawingSurface, FontDescriptor, TextAttributes, TextHAlign,
};
use radar_chart_rs::text::draw_multiline_text;

#[test]
fn cairo_surface_draws_radar_labels() {
    let image = ImageSurface::create(Format::ARgb32, 400, 400).expect("image surface");
    let context = Context::new(&image).expect("context");
    let mut surface = CairoSurface::new(&context);

    let axis = RadarAxisConfig::new(["Speed", "Power", "Stamina", "Technique", "Agility"]);
    let geometry =
        RadarChartGeometry::centered(Size::new(400.0, 400.0), 5).with_radial_scale(100.0, 1.5);

    RadialLabelRenderer::default()
        .render_axis_labels(&mut surface, &axis, &geometry)
        .expect("render labels");

    let stats = surface.stats();
    assert_eq!(stats.texts_drawn, 5);
    assert_eq!(stats.pushes, 5);
}

#[test]
fn cairo_surface_measures_non_empty_text() {
    let image = ImageSurface::create(Format::ARgb32, 200, 100).expect("image surface");
    let context = Context::new(&image).expect("context");
    let surface = CairoSurface::new(&context);
    let attributes = TextAttributes::new(
        FontDescriptor::new("Sans", 12.0),
        Color::BLACK,
        TextHAlign::Left,
    );

    let single = surface.measure_text("Communication", &attributes);
    let wrapped = surface.measure_text("Communication\nSkills", &attributes);
    assert!(single.width > 0.0);
    assert!(wrapped.height > single.height);
}

#[test]
fn cairo_surface_rejects_invalid_colors() {
    let image = ImageSurface::create(Format::ARgb32, 200, 100).expect("image surface");
    let context = Context::new(&image).expect("context");
    let mut surface = CairoSurface::new(&context);
    let attributes = TextAttributes::new(
        FontDescriptor::new("Sans", 12.0),
        Color::rgb(3.0, 0.0, 0.0),
        TextHAlign::Center,
    );

    let result = draw_multiline_text(
        &mut surface,
        "one two",
        Point::new(100.0, 10.0),
        TextHAlign::Center,
        &attributes,
        Size::new(80.0, 40.0),
    );
    assert!(result.is_err());
    assert_eq!(surface.stats().pushes, 1);
}
