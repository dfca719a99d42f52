use std::fs;
use std::path::PathBuf;

use image::GenericImageView;

use agro_valorization_dashboard::{
    app::{self, CliOptions},
    assets::{DecodedLogo, LogoSlot},
    chart::{self, ChartSize},
    config::Config,
    dashboard::DashboardSnapshot,
    i18n::{self, Translator},
    scenario::{Metric, ScenarioInput},
    ui_cli,
};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "agro_valorization_{name}_{}",
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn english_snapshot() -> (Translator, DashboardSnapshot) {
    let tr = Translator::new("en");
    let labels = tr.chart_labels("$");
    let snap = DashboardSnapshot::build(&ScenarioInput::default(), &labels, Vec::new());
    (tr, snap)
}

#[test]
fn report_lists_metrics_with_baseline_deltas() {
    let (tr, snap) = english_snapshot();
    let report = ui_cli::report_lines(&tr, &snap).join("\n");
    assert!(report.contains("Avoided agrochemicals: 2,000 kg (+2,000 kg vs baseline"), "{report}");
    assert!(report.contains("Valorized material: 6,000 kg (+5,200 kg vs baseline"), "{report}");
    assert!(report.contains("Generated revenue: $30,000,000 (+$30,000,000 vs baseline"), "{report}");
    assert!(report.contains("y-axis upper: 34,500,000"), "{report}");
    assert!(report.contains("Partnerships: 5"));
    assert!(report.contains("Industrial symbioses: 6"));
}

#[test]
fn report_is_translated() {
    let tr = Translator::new("es");
    let labels = tr.chart_labels("$");
    let snap = DashboardSnapshot::build(&ScenarioInput::default(), &labels, Vec::new());
    let report = ui_cli::report_lines(&tr, &snap).join("\n");
    assert!(report.contains("Agroquímicos evitados: 2,000 kg"), "{report}");
    assert!(report.contains("Alianzas: 5"));
}

#[test]
fn logo_status_lines() {
    let tr = Translator::new("en");
    let lines = ui_cli::logo_lines(
        &tr,
        &[
            LogoSlot::Loaded(DecodedLogo {
                url: "https://a.example/a.png".into(),
                width: 10,
                height: 5,
                rgba: vec![0; 200],
            }),
            LogoSlot::Failed {
                url: "https://b.example/b.png".into(),
                message: "timed out".into(),
            },
        ],
    );
    assert_eq!(lines[0], "Logo OK: https://a.example/a.png (10x5)");
    assert_eq!(lines[1], "Logo failed: https://b.example/b.png: timed out");
}

#[test]
fn command_line_values_override_config_initials() {
    let opts = CliOptions {
        production: Some(15000.0),
        unit_price: Some(4500.0),
        ..Default::default()
    };
    let merged = opts.apply_to(ScenarioInput::default());
    assert_eq!(merged.production_kg_per_year, 15000.0);
    assert_eq!(merged.unit_price, 4500.0);
    assert_eq!(merged.substitution_factor, 0.2);
    assert_eq!(merged.secondary_pct, 60.0);
}

#[test]
fn language_resolution_order() {
    assert_eq!(i18n::resolve_language("es", Some("en")), "es");
    assert_eq!(i18n::resolve_language("auto", Some("en-US")), "en");
    assert_eq!(i18n::resolve_language("", Some("es_CO")), "es");
}

#[test]
fn unknown_language_falls_back_to_english() {
    let tr = Translator::new("fr");
    assert_eq!(tr.language(), i18n::Language::En);
    assert_eq!(tr.t(i18n::keys::BASELINE), "Baseline");
    assert_eq!(tr.t("no.such.key"), "no.such.key");
}

#[test]
fn export_dir_receives_three_decodable_pngs() {
    let dir = scratch_dir("export").join("nested");
    let opts = CliOptions {
        export_dir: Some(dir.clone()),
        ..Default::default()
    };
    app::run(&Config::default(), &Translator::new("en"), &opts).expect("cli run");

    let size = ChartSize::default();
    for metric in Metric::ALL {
        let path = dir.join(chart::file_name(metric));
        let bytes = fs::read(&path).unwrap_or_else(|e| panic!("{}: {e}", path.display()));
        let img = image::load_from_memory(&bytes).expect("decode");
        assert_eq!(img.dimensions(), (size.width, size.height), "{metric:?}");
    }
    let _ = fs::remove_dir_all(dir.parent().expect("parent"));
}

#[test]
fn language_pack_overrides_nested_tables() {
    let dir = scratch_dir("pack_tables");
    fs::create_dir_all(&dir).expect("mkdir");
    fs::write(dir.join("en.toml"), "[charts]\nbaseline = \"Reference\"\n").expect("write");

    let tr = Translator::new_with_pack("en", dir.to_str());
    assert_eq!(tr.t(i18n::keys::BASELINE), "Reference");
    // 팩에 없는 키는 내장 문자열
    assert_eq!(tr.t(i18n::keys::PROJECTION), "Projection");
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn language_pack_overrides_dotted_keys() {
    let dir = scratch_dir("pack_dotted");
    fs::create_dir_all(&dir).expect("mkdir");
    fs::write(dir.join("es.toml"), "charts.baseline = \"Referencia\"\n").expect("write");

    let tr = Translator::new_with_pack("es", dir.to_str());
    assert_eq!(tr.t(i18n::keys::BASELINE), "Referencia");
    assert_eq!(tr.chart_labels("$").baseline, "Referencia");
    assert_eq!(tr.t(i18n::keys::PROJECTION), "Proyección");
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn empty_language_pack_is_ignored() {
    let dir = scratch_dir("pack_empty");
    fs::create_dir_all(&dir).expect("mkdir");
    fs::write(dir.join("en.toml"), "count = 3\n").expect("write");

    let tr = Translator::new_with_pack("en", dir.to_str());
    assert_eq!(tr.t(i18n::keys::BASELINE), "Baseline");
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn error_prefix_has_builtin_text() {
    for lang in ["en", "es"] {
        let tr = Translator::new(lang);
        assert_eq!(tr.t(i18n::keys::ERROR_PREFIX), "Error", "{lang}");
    }
}
