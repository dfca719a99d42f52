use std::fs;
use std::path::PathBuf;

use crate::assets;
use crate::chart::{self, ChartError};
use crate::config::Config;
use crate::dashboard::DashboardSnapshot;
use crate::format::fill_template;
use crate::i18n::{keys, Translator};
use crate::scenario::ScenarioInput;
use crate::ui_cli;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일/표준입출력 오류
    Io(std::io::Error),
    /// 설정 로드 오류
    Config(crate::config::ConfigError),
    /// 차트 렌더링/내보내기 오류
    Chart(ChartError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Config(e) => write!(f, "configuration error: {e}"),
            AppError::Chart(e) => write!(f, "chart error: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ChartError> for AppError {
    fn from(value: ChartError) -> Self {
        AppError::Chart(value)
    }
}

/// CLI에서 넘겨받은 실행 옵션. 비어 있는 입력은 설정의 초기값을 쓴다.
#[derive(Debug, Clone, Default)]
pub struct CliOptions {
    pub production: Option<f64>,
    pub substitution: Option<f64>,
    pub secondary_pct: Option<f64>,
    pub unit_price: Option<f64>,
    /// 표준입력으로 네 값을 차례로 묻는다
    pub interactive: bool,
    /// 차트 PNG를 저장할 디렉터리
    pub export_dir: Option<PathBuf>,
    /// 로고를 실제로 받아 상태를 출력한다
    pub check_logos: bool,
}

impl CliOptions {
    /// 설정의 초기값 위에 명령행 값을 덮어쓴다.
    pub fn apply_to(&self, base: ScenarioInput) -> ScenarioInput {
        ScenarioInput {
            production_kg_per_year: self.production.unwrap_or(base.production_kg_per_year),
            substitution_factor: self.substitution.unwrap_or(base.substitution_factor),
            secondary_pct: self.secondary_pct.unwrap_or(base.secondary_pct),
            unit_price: self.unit_price.unwrap_or(base.unit_price),
        }
    }
}

/// CLI 애플리케이션을 한 번 실행한다: 입력 → 계산 → 보고서 → (선택) 내보내기.
pub fn run(config: &Config, tr: &Translator, opts: &CliOptions) -> Result<(), AppError> {
    let mut input = opts.apply_to(config.initial);
    if opts.interactive {
        input = ui_cli::prompt_inputs(tr)?;
    }
    let clamped = input.clamped();
    if clamped != input {
        tracing::warn!(?input, ?clamped, "inputs clamped to slider ranges");
    }

    let logos = if opts.check_logos {
        assets::load_logos(&config.logo_urls)
    } else {
        Vec::new()
    };
    let labels = tr.chart_labels(&config.currency_symbol);
    let snapshot = DashboardSnapshot::build(&clamped, &labels, logos);

    for line in ui_cli::report_lines(tr, &snapshot) {
        println!("{line}");
    }
    if opts.check_logos {
        for line in ui_cli::logo_lines(tr, &snapshot.logos) {
            println!("{line}");
        }
    }

    if let Some(dir) = &opts.export_dir {
        fs::create_dir_all(dir)?;
        for chart_data in &snapshot.charts {
            let path = dir.join(chart::file_name(chart_data.metric));
            chart::write_png(chart_data, config.chart, &path)?;
            println!(
                "{}",
                fill_template(
                    &tr.t(keys::CLI_EXPORTED),
                    &[("path", path.display().to_string())]
                )
            );
        }
    }
    Ok(())
}
