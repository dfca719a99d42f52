use image::GenericImageView;

use agro_valorization_dashboard::{
    chart::{self, ChartError, ChartLabels, ChartSize, ComparisonChart, HEADROOM},
    scenario::{compute_metrics, Metric, ScenarioInput},
};

fn chart_with(metric: Metric, baseline: f64, projected: f64) -> ComparisonChart {
    ComparisonChart {
        metric,
        title: "t".into(),
        baseline_label: "Baseline".into(),
        projected_label: "Projection".into(),
        axis_desc: "kg / year".into(),
        currency_symbol: "$".into(),
        baseline,
        projected,
    }
}

#[test]
fn y_upper_has_headroom_over_max_value() {
    let metrics = compute_metrics(&ScenarioInput::default());
    let labels = ChartLabels::default();
    for metric in Metric::ALL {
        let c = ComparisonChart::new(metric, &metrics, &labels);
        let max = c.baseline.max(c.projected);
        assert!(c.y_upper() >= HEADROOM * max - 1e-9, "{metric:?}");
        assert!(c.y_upper() >= metric.axis_floor());
    }
    let revenue = ComparisonChart::new(Metric::Revenue, &metrics, &labels);
    assert!((revenue.y_upper() - 34_500_000.0).abs() < 1e-3);
}

#[test]
fn y_upper_uses_baseline_when_it_dominates() {
    let c = chart_with(Metric::ValorizedMaterial, 800.0, 400.0);
    assert!((c.y_upper() - 920.0).abs() < 1e-9);
}

#[test]
fn y_upper_falls_back_to_metric_floor() {
    assert_eq!(chart_with(Metric::AvoidedAgrochemicals, 0.0, 0.0).y_upper(), 1.0);
    assert_eq!(chart_with(Metric::ValorizedMaterial, 0.0, 50.0).y_upper(), 100.0);
    assert_eq!(chart_with(Metric::Revenue, 0.0, 10_000.0).y_upper(), 100_000.0);
}

#[test]
fn chart_pairs_baseline_with_projection() {
    let metrics = compute_metrics(&ScenarioInput::default());
    let c = ComparisonChart::new(Metric::ValorizedMaterial, &metrics, &ChartLabels::default());
    assert_eq!(c.values()[0], 800.0);
    assert!((c.values()[1] - 6000.0).abs() < 1e-9);
    assert_eq!(c.title, "Valorized material");
}

#[test]
fn value_labels_follow_metric_units() {
    let mass = chart_with(Metric::AvoidedAgrochemicals, 0.0, 2000.0);
    assert_eq!(mass.value_label(2000.0), "2,000 kg");
    assert_eq!(mass.value_label(150.5), "150.5 kg");
    let money = chart_with(Metric::Revenue, 0.0, 30_000_000.0);
    assert_eq!(money.value_label(30_000_000.0), "$30,000,000");
    assert_eq!(money.value_label(0.0), "$0");
}

#[test]
fn small_axes_get_one_decimal() {
    assert_eq!(chart_with(Metric::AvoidedAgrochemicals, 0.0, 0.0).axis_decimals(), 1);
    assert_eq!(chart_with(Metric::AvoidedAgrochemicals, 0.0, 200.0).axis_decimals(), 0);
}

#[test]
fn export_file_names_per_metric() {
    assert_eq!(chart::file_name(Metric::AvoidedAgrochemicals), "avoided_agrochemicals.png");
    assert_eq!(chart::file_name(Metric::ValorizedMaterial), "valorized_material.png");
    assert_eq!(chart::file_name(Metric::Revenue), "revenue.png");
}

#[test]
fn encode_png_produces_decodable_image() {
    let size = ChartSize { width: 4, height: 3 };
    let png = chart::encode_png(vec![200u8; size.rgb_len()], size).expect("encode");
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    let decoded = image::load_from_memory(&png).expect("decode");
    assert_eq!(decoded.dimensions(), (4, 3));
}

#[test]
fn encode_png_rejects_short_buffer() {
    let size = ChartSize { width: 4, height: 3 };
    match chart::encode_png(vec![0u8; 10], size) {
        Err(ChartError::BufferSize { expected, actual }) => {
            assert_eq!(expected, 36);
            assert_eq!(actual, 10);
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn render_rejects_empty_canvas() {
    let c = chart_with(Metric::Revenue, 0.0, 1.0);
    let res = chart::render_rgb(&c, ChartSize { width: 0, height: 300 });
    assert!(matches!(res, Err(ChartError::EmptyCanvas)));
}

#[test]
fn png_bytes_renders_full_chart() {
    let metrics = compute_metrics(&ScenarioInput::default());
    let c = ComparisonChart::new(Metric::Revenue, &metrics, &ChartLabels::default());
    let size = ChartSize::default();
    let png = chart::png_bytes(&c, size).expect("render");
    let decoded = image::load_from_memory(&png).expect("decode");
    assert_eq!(decoded.dimensions(), (size.width, size.height));
}

fn count_pixels(rgb: &[u8], color: [u8; 3]) -> usize {
    rgb.chunks_exact(3).filter(|px| *px == color).count()
}

#[test]
fn render_draws_baseline_and_projection_bars() {
    let metrics = compute_metrics(&ScenarioInput::default());
    let c = ComparisonChart::new(Metric::ValorizedMaterial, &metrics, &ChartLabels::default());
    let size = ChartSize::default();
    let rgb = chart::render_rgb(&c, size).expect("render");
    assert_eq!(rgb.len(), size.rgb_len());

    let grey = count_pixels(&rgb, [158, 158, 158]);
    let green = count_pixels(&rgb, [46, 125, 50]);
    // 800 kg 막대 < 6,000 kg 막대
    assert!(grey > 0, "baseline bar missing");
    assert!(green > grey, "green={green} grey={grey}");
}

#[test]
fn render_zero_baseline_keeps_projection_bar() {
    let metrics = compute_metrics(&ScenarioInput::default());
    let c = ComparisonChart::new(Metric::Revenue, &metrics, &ChartLabels::default());
    let rgb = chart::render_rgb(&c, ChartSize::default()).expect("render");
    assert!(count_pixels(&rgb, [46, 125, 50]) > 0);
}
