use std::io::Cursor;

use agro_valorization_dashboard::{
    assets::{self, LogoError, LogoSlot},
    chart::ChartLabels,
    dashboard::DashboardSnapshot,
    scenario::{Metric, ScenarioInput},
};

#[test]
fn logo_failures_do_not_block_metrics_or_charts() {
    // 잘못된 주소는 네트워크 없이 즉시 실패한다
    let logos = assets::load_logos(&["not a url", "http://"]);
    assert_eq!(logos.len(), 2);
    assert!(logos.iter().all(|slot| !slot.is_loaded()));

    let snap = DashboardSnapshot::build(&ScenarioInput::default(), &ChartLabels::default(), logos);
    assert_eq!(snap.logo_errors().len(), 2);
    assert!((snap.metrics.avoided_agrochemicals_kg - 2000.0).abs() < 1e-9);
    assert_eq!(snap.charts.len(), 3);
    for (chart, metric) in snap.charts.iter().zip(Metric::ALL) {
        assert_eq!(chart.metric, metric);
        assert_eq!(snap.chart(metric).metric, metric);
    }
}

#[test]
fn snapshot_clamps_inputs_before_evaluating() {
    let input = ScenarioInput {
        production_kg_per_year: 99_999.0,
        substitution_factor: 0.0,
        secondary_pct: 60.0,
        unit_price: 3000.0,
    };
    let snap = DashboardSnapshot::build(&input, &ChartLabels::default(), Vec::new());
    assert_eq!(snap.input.production_kg_per_year, 20000.0);
    assert_eq!(snap.input.substitution_factor, 0.1);
    assert!((snap.metrics.avoided_agrochemicals_kg - 2000.0).abs() < 1e-9);
    assert!(snap.logo_errors().is_empty());
}

#[test]
fn fetch_reports_request_error_for_bad_url() {
    let err = assets::fetch_logo("not a url").unwrap_err();
    assert!(matches!(err, LogoError::Request(_)));
    assert!(err.to_string().starts_with("logo request failed"));
}

#[test]
fn decode_rejects_non_image_bytes() {
    let err = assets::decode_logo("https://example.org/x.png", b"<html>not found</html>").unwrap_err();
    assert!(matches!(err, LogoError::Decode(_)));
}

#[test]
fn decode_accepts_png_logo() {
    let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageOutputFormat::Png).expect("encode");
    let logo = assets::decode_logo("mem://logo", buf.get_ref()).expect("decode");
    assert_eq!((logo.width, logo.height), (3, 2));
    assert_eq!(logo.rgba.len(), 3 * 2 * 4);
    assert_eq!(&logo.rgba[..4], &[10, 20, 30, 255]);
    assert!(LogoSlot::Loaded(logo).is_loaded());
}
