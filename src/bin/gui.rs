#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 대시보드 진입점.

use agro_valorization_dashboard::{
    assets::{self, LogoSlot},
    chart::{self, ComparisonChart},
    config,
    dashboard::DashboardSnapshot,
    format::{fill_template, format_delta},
    i18n::{self, keys},
    scenario::{
        InputRange, Metric, ScenarioInput, PRODUCTION_RANGE, SECONDARY_PCT_RANGE,
        SUBSTITUTION_RANGE, UNIT_PRICE_RANGE,
    },
};
use clap::Parser;
use eframe::{egui, App, Frame};
use rfd::FileDialog;

/// 데스크톱 대시보드 실행 옵션.
#[derive(Debug, Parser)]
#[command(name = "agro_valorization_dashboard", version, about)]
struct Args {
    /// 언어 (auto/en/es)
    #[arg(short = 'L', long)]
    lang: Option<String>,
    /// 디버그 로그 출력
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), eframe::Error> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let mut app_cfg = config::load_or_default().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "falling back to default config");
        config::Config::default()
    });
    if let Some(lang_cli) = args.lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1180.0, 860.0])
            .with_min_inner_size([760.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Agro Valorization Dashboard",
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg))),
    )
}

/// 차트 한 장의 텍스처 캐시와 상태 문구.
#[derive(Default)]
struct ChartView {
    /// 텍스처를 만든 시점의 차트 데이터. 다르면 다시 그린다.
    rendered: Option<ComparisonChart>,
    texture: Option<egui::TextureHandle>,
    error: Option<String>,
    export_status: Option<String>,
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    input: ScenarioInput,
    logos_requested: bool,
    logos: Vec<LogoSlot>,
    logo_textures: Vec<Option<egui::TextureHandle>>,
    chart_views: [ChartView; 3],
    show_formula_modal: bool,
    show_help_modal: bool,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        Self {
            input: config.initial.clamped(),
            lang_input: lang_code,
            tr,
            config,
            logos_requested: false,
            logos: Vec::new(),
            logo_textures: Vec::new(),
            chart_views: Default::default(),
            show_formula_modal: false,
            show_help_modal: false,
        }
    }

    /// 현재 슬라이더 값으로 화면 전체 값을 다시 계산한다.
    fn snapshot(&self) -> DashboardSnapshot {
        let labels = self.tr.chart_labels(&self.config.currency_symbol);
        DashboardSnapshot::build(&self.input, &labels, self.logos.clone())
    }

    fn reset_inputs(&mut self) {
        self.input = self.config.initial.clamped();
    }

    fn set_language(&mut self, code: &str) {
        let resolved = i18n::resolve_language(code, Some(self.config.language.as_str()));
        self.tr = i18n::Translator::new_with_pack(&resolved, self.config.language_pack_dir.as_deref());
        self.lang_input = resolved;
    }

    /// 로고를 동기식으로 받아 텍스처로 올린다. 실패는 슬롯에 남아 화면에 표시된다.
    fn reload_logos(&mut self, ctx: &egui::Context) {
        self.logos_requested = true;
        self.logos = assets::load_logos(&self.config.logo_urls);
        self.logo_textures = self
            .logos
            .iter()
            .enumerate()
            .map(|(i, slot)| match slot {
                LogoSlot::Loaded(logo) => {
                    let image = egui::ColorImage::from_rgba_unmultiplied(
                        [logo.width as usize, logo.height as usize],
                        &logo.rgba,
                    );
                    Some(ctx.load_texture(format!("logo-{i}"), image, egui::TextureOptions::LINEAR))
                }
                LogoSlot::Failed { .. } => None,
            })
            .collect();
    }

    /// 차트 데이터가 바뀐 경우에만 다시 래스터화한다.
    fn ensure_chart_texture(&mut self, ctx: &egui::Context, idx: usize, data: &ComparisonChart) {
        let size = self.config.chart;
        let view = &mut self.chart_views[idx];
        if view.rendered.as_ref() == Some(data) {
            return;
        }
        match chart::render_rgb(data, size) {
            Ok(rgb) => {
                let image = egui::ColorImage::from_rgb(
                    [size.width as usize, size.height as usize],
                    &rgb,
                );
                match &mut view.texture {
                    Some(tex) => tex.set(image, egui::TextureOptions::LINEAR),
                    None => {
                        view.texture = Some(ctx.load_texture(
                            format!("chart-{}", data.metric.file_stem()),
                            image,
                            egui::TextureOptions::LINEAR,
                        ))
                    }
                }
                view.error = None;
            }
            Err(e) => {
                tracing::warn!(metric = ?data.metric, error = %e, "chart render failed");
                view.texture = None;
                view.error = Some(fill_template(
                    &self.tr.t(keys::CHART_RENDER_FAILED),
                    &[("error", e.to_string())],
                ));
            }
        }
        view.rendered = Some(data.clone());
    }

    /// 저장 대화상자로 경로를 받아 차트를 PNG로 내보낸다.
    fn export_chart(&mut self, idx: usize, data: &ComparisonChart) {
        let Some(path) = FileDialog::new()
            .set_file_name(chart::file_name(data.metric))
            .add_filter("PNG", &["png"])
            .save_file()
        else {
            return;
        };
        let status = match chart::write_png(data, self.config.chart, &path) {
            Ok(()) => fill_template(
                &self.tr.t(keys::EXPORT_SAVED),
                &[("path", path.display().to_string())],
            ),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "chart export failed");
                fill_template(&self.tr.t(keys::EXPORT_FAILED), &[("error", e.to_string())])
            }
        };
        self.chart_views[idx].export_status = Some(status);
    }

    fn ui_inputs(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        ui.heading(tr.t(keys::INPUTS_HEADING));
        ui.add_space(8.0);
        input_slider(
            ui,
            &mut self.input.production_kg_per_year,
            PRODUCTION_RANGE,
            0,
            &tr.t(keys::INPUT_PRODUCTION),
            &tr.t(keys::TIP_PRODUCTION),
        );
        input_slider(
            ui,
            &mut self.input.substitution_factor,
            SUBSTITUTION_RANGE,
            2,
            &tr.t(keys::INPUT_SUBSTITUTION),
            &tr.t(keys::TIP_SUBSTITUTION),
        );
        input_slider(
            ui,
            &mut self.input.secondary_pct,
            SECONDARY_PCT_RANGE,
            0,
            &tr.t(keys::INPUT_SECONDARY_PCT),
            &tr.t(keys::TIP_SECONDARY_PCT),
        );
        input_slider(
            ui,
            &mut self.input.unit_price,
            UNIT_PRICE_RANGE,
            0,
            &tr.t(keys::INPUT_UNIT_PRICE),
            &tr.t(keys::TIP_UNIT_PRICE),
        );
        ui.add_space(12.0);
        ui.separator();
        if ui.button(tr.t(keys::RESET_DEFAULTS)).clicked() {
            self.reset_inputs();
        }
        if ui.button(tr.t(keys::RELOAD_LOGOS)).clicked() {
            let ctx = ui.ctx().clone();
            self.reload_logos(&ctx);
        }
    }

    fn ui_logos(&self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for tex in self.logo_textures.iter().flatten() {
                ui.add(egui::Image::new(tex).max_height(72.0));
                ui.add_space(16.0);
            }
        });
        for (url, message) in self
            .logos
            .iter()
            .filter_map(|slot| match slot {
                LogoSlot::Failed { url, message } => Some((url, message)),
                LogoSlot::Loaded(_) => None,
            })
        {
            ui.colored_label(
                ui.visuals().error_fg_color,
                fill_template(
                    &self.tr.t(keys::LOGO_ERROR),
                    &[("url", url.clone()), ("error", message.clone())],
                ),
            );
        }
    }

    fn ui_metrics(&self, ui: &mut egui::Ui, snapshot: &DashboardSnapshot) {
        ui.heading(self.tr.t(keys::METRICS_HEADING));
        egui::Grid::new("metric_cards")
            .num_columns(5)
            .spacing([24.0, 8.0])
            .show(ui, |ui| {
                for (metric, key) in [
                    (Metric::AvoidedAgrochemicals, keys::METRIC_AVOIDED),
                    (Metric::ValorizedMaterial, keys::METRIC_VALORIZED),
                    (Metric::Revenue, keys::METRIC_REVENUE),
                ] {
                    let data = snapshot.chart(metric);
                    let delta = metric.delta(&snapshot.metrics);
                    let delta_text = fill_template(
                        &self.tr.t(keys::DELTA_VS_BASELINE),
                        &[("delta", format_delta(&data.value_label(delta.abs()), delta))],
                    );
                    metric_card(
                        ui,
                        &self.tr.t(key),
                        &data.value_label(data.projected),
                        Some((delta_text, delta)),
                    );
                }
                metric_card(
                    ui,
                    &self.tr.t(keys::METRIC_PARTNERSHIPS),
                    &snapshot.metrics.partnerships.to_string(),
                    None,
                );
                metric_card(
                    ui,
                    &self.tr.t(keys::METRIC_SYMBIOSES),
                    &snapshot.metrics.symbioses.to_string(),
                    None,
                );
                ui.end_row();
            });
    }

    fn ui_chart(&mut self, ui: &mut egui::Ui, idx: usize, data: &ComparisonChart) {
        let ctx = ui.ctx().clone();
        self.ensure_chart_texture(&ctx, idx, data);
        ui.vertical(|ui| {
            let view = &self.chart_views[idx];
            if let Some(tex) = &view.texture {
                let width = ui.available_width();
                ui.add(egui::Image::new(tex).max_width(width));
            }
            if let Some(err) = &view.error {
                ui.colored_label(ui.visuals().error_fg_color, err);
            }
            if ui.button(self.tr.t(keys::DOWNLOAD_PNG)).clicked() {
                self.export_chart(idx, data);
            }
            if let Some(status) = &self.chart_views[idx].export_status {
                ui.small(status);
            }
        });
    }

    fn ui_charts(&mut self, ui: &mut egui::Ui, snapshot: &DashboardSnapshot) {
        ui.heading(self.tr.t(keys::CHARTS_HEADING));
        let chart_width = self.config.chart.width as f32;
        if ui.available_width() >= chart_width * 1.5 {
            ui.columns(3, |columns| {
                for (idx, column) in columns.iter_mut().enumerate() {
                    self.ui_chart(column, idx, &snapshot.charts[idx]);
                }
            });
        } else {
            for (idx, data) in snapshot.charts.iter().enumerate() {
                self.ui_chart(ui, idx, data);
                ui.add_space(12.0);
            }
        }
    }
}

fn input_slider(
    ui: &mut egui::Ui,
    value: &mut f64,
    range: InputRange,
    decimals: usize,
    label: &str,
    tip: &str,
) {
    ui.label(label).on_hover_text(tip);
    ui.add(
        egui::Slider::new(value, range.min..=range.max)
            .step_by(range.step)
            .fixed_decimals(decimals),
    );
    ui.add_space(6.0);
}

fn metric_card(ui: &mut egui::Ui, label: &str, value: &str, delta: Option<(String, f64)>) {
    ui.vertical(|ui| {
        ui.small(label);
        ui.heading(value);
        if let Some((text, d)) = delta {
            let color = if d > 0.0 {
                egui::Color32::from_rgb(46, 125, 50)
            } else if d < 0.0 {
                ui.visuals().error_fg_color
            } else {
                ui.visuals().weak_text_color()
            };
            ui.colored_label(color, text);
        }
    });
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if !self.logos_requested {
            self.reload_logos(ctx);
        }
        let tr = self.tr.clone();

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(tr.t(keys::APP_TITLE));
                ui.separator();
                if ui.button(tr.t(keys::FORMULA_BUTTON)).clicked() {
                    self.show_formula_modal = true;
                }
                if ui.button(tr.t(keys::ABOUT_BUTTON)).clicked() {
                    self.show_help_modal = true;
                }
                ui.separator();
                ui.label(tr.t(keys::LANGUAGE));
                let mut selected = self.lang_input.clone();
                egui::ComboBox::from_id_source("lang_choice")
                    .selected_text(&selected)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut selected, "en".to_string(), "English");
                        ui.selectable_value(&mut selected, "es".to_string(), "Español");
                    });
                if selected != self.lang_input {
                    self.set_language(&selected);
                }
            });
        });

        if self.show_formula_modal {
            egui::Window::new(tr.t(keys::FORMULA_BUTTON))
                .collapsible(true)
                .resizable(true)
                .open(&mut self.show_formula_modal)
                .show(ctx, |ui| {
                    ui.label(tr.t(keys::FORMULA_AVOIDED));
                    ui.label(tr.t(keys::FORMULA_VALORIZED));
                    ui.label(tr.t(keys::FORMULA_REVENUE));
                    ui.separator();
                    ui.label(tr.t(keys::FORMULA_CONSTANTS));
                    ui.label(tr.t(keys::FORMULA_AXIS));
                });
        }

        if self.show_help_modal {
            egui::Window::new(tr.t(keys::ABOUT_BUTTON))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.heading(tr.t(keys::APP_TITLE));
                    ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                    ui.separator();
                    ui.label(tr.t(keys::ABOUT_BODY));
                });
        }

        egui::SidePanel::left("inputs")
            .resizable(true)
            .min_width(220.0)
            .default_width(280.0)
            .show(ctx, |ui| {
                self.ui_inputs(ui);
            });

        // 매 프레임 전체 재계산 (입력 → 지표 → 차트)
        let snapshot = self.snapshot();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.ui_logos(ui);
                    ui.separator();
                    self.ui_metrics(ui, &snapshot);
                    ui.add_space(12.0);
                    ui.separator();
                    self.ui_charts(ui, &snapshot);
                    ui.add_space(12.0);
                    ui.separator();
                    ui.heading(tr.t(keys::INFO_HEADING));
                    ui.label(tr.t(keys::INFO_BODY));
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_does_not_touch_network() {
        let app = GuiApp::new(config::Config::default());
        assert!(!app.logos_requested);
        assert!(app.logos.is_empty());
        assert!(app.chart_views.iter().all(|v| v.rendered.is_none()));
    }

    #[test]
    fn reset_restores_initial_inputs() {
        let mut app = GuiApp::new(config::Config::default());
        app.input.production_kg_per_year = 20000.0;
        app.input.unit_price = 9000.0;
        app.reset_inputs();
        assert_eq!(app.input, ScenarioInput::default());
    }

    #[test]
    fn initial_inputs_from_config_are_clamped() {
        let mut cfg = config::Config::default();
        cfg.initial.secondary_pct = 95.0;
        let app = GuiApp::new(cfg);
        assert_eq!(app.input.secondary_pct, 70.0);
    }

    #[test]
    fn snapshot_reflects_slider_values() {
        let mut app = GuiApp::new(config::Config::default());
        app.input.production_kg_per_year = 5000.0;
        let snap = app.snapshot();
        assert!((snap.metrics.avoided_agrochemicals_kg - 1000.0).abs() < 1e-9);
        assert!((snap.metrics.revenue - 15_000_000.0).abs() < 1e-6);
    }

    #[test]
    fn language_switch_retitles_charts() {
        let mut app = GuiApp::new(config::Config::default());
        app.set_language("es");
        assert_eq!(app.lang_input, "es");
        let snap = app.snapshot();
        assert_eq!(snap.charts[0].baseline_label, "Línea base");
        app.set_language("en");
        let snap = app.snapshot();
        assert_eq!(snap.charts[0].baseline_label, "Baseline");
    }
}
