use std::io::{self, Write};

use crate::app::AppError;
use crate::assets::LogoSlot;
use crate::dashboard::DashboardSnapshot;
use crate::format::{fill_template, format_currency, format_delta, group_thousands};
use crate::i18n::{keys, Translator};
use crate::scenario::{
    InputRange, Metric, ScenarioInput, PRODUCTION_RANGE, SECONDARY_PCT_RANGE,
    SUBSTITUTION_RANGE, UNIT_PRICE_RANGE,
};

/// 네 입력값을 차례로 묻는다. 범위를 벗어난 값은 슬라이더처럼 잘라낸다.
pub fn prompt_inputs(tr: &Translator) -> Result<ScenarioInput, AppError> {
    println!("{}", tr.t(keys::CLI_INPUTS_HEADING));
    Ok(ScenarioInput {
        production_kg_per_year: prompt_in_range(tr, keys::INPUT_PRODUCTION, PRODUCTION_RANGE)?,
        substitution_factor: prompt_in_range(tr, keys::INPUT_SUBSTITUTION, SUBSTITUTION_RANGE)?,
        secondary_pct: prompt_in_range(tr, keys::INPUT_SECONDARY_PCT, SECONDARY_PCT_RANGE)?,
        unit_price: prompt_in_range(tr, keys::INPUT_UNIT_PRICE, UNIT_PRICE_RANGE)?,
    })
}

fn prompt_in_range(tr: &Translator, name_key: &str, range: InputRange) -> Result<f64, AppError> {
    let prompt = fill_template(
        &tr.t(keys::CLI_PROMPT_VALUE),
        &[
            ("name", tr.t(name_key)),
            ("min", range.min.to_string()),
            ("max", range.max.to_string()),
        ],
    );
    let value = read_f64(tr, &prompt)?;
    let clamped = range.clamp(value);
    if clamped != value {
        println!(
            "{}",
            fill_template(&tr.t(keys::CLI_CLAMPED), &[("value", clamped.to_string())])
        );
    }
    Ok(clamped)
}

/// 지표 보고서 문자열을 만든다.
pub fn report_lines(tr: &Translator, snapshot: &DashboardSnapshot) -> Vec<String> {
    let input = &snapshot.input;
    let metrics = &snapshot.metrics;
    let symbol = &snapshot.chart(Metric::Revenue).currency_symbol;
    let mut lines = vec![
        tr.t(keys::CLI_INPUTS_HEADING),
        format!(
            "{}: {}",
            tr.t(keys::INPUT_PRODUCTION),
            group_thousands(input.production_kg_per_year, 0)
        ),
        format!(
            "{}: {:.2}",
            tr.t(keys::INPUT_SUBSTITUTION),
            input.substitution_factor
        ),
        format!("{}: {:.0}", tr.t(keys::INPUT_SECONDARY_PCT), input.secondary_pct),
        format!(
            "{}: {}",
            tr.t(keys::INPUT_UNIT_PRICE),
            format_currency(input.unit_price, symbol)
        ),
        tr.t(keys::CLI_REPORT_HEADING),
    ];

    for (metric, key) in [
        (Metric::AvoidedAgrochemicals, keys::METRIC_AVOIDED),
        (Metric::ValorizedMaterial, keys::METRIC_VALORIZED),
        (Metric::Revenue, keys::METRIC_REVENUE),
    ] {
        let chart = snapshot.chart(metric);
        let delta = metric.delta(metrics);
        let delta_text = format_delta(&chart.value_label(delta.abs()), delta);
        lines.push(format!(
            "{}: {} ({}; {}: {})",
            tr.t(key),
            chart.value_label(chart.projected),
            fill_template(&tr.t(keys::DELTA_VS_BASELINE), &[("delta", delta_text)]),
            tr.t(keys::CLI_AXIS_UPPER),
            group_thousands(chart.y_upper(), chart.axis_decimals()),
        ));
    }
    lines.push(format!("{}: {}", tr.t(keys::METRIC_PARTNERSHIPS), metrics.partnerships));
    lines.push(format!("{}: {}", tr.t(keys::METRIC_SYMBIOSES), metrics.symbioses));
    lines
}

/// 로고 로드 결과 문자열을 만든다.
pub fn logo_lines(tr: &Translator, logos: &[LogoSlot]) -> Vec<String> {
    logos
        .iter()
        .map(|slot| match slot {
            LogoSlot::Loaded(logo) => fill_template(
                &tr.t(keys::CLI_LOGO_OK),
                &[
                    ("url", logo.url.clone()),
                    ("width", logo.width.to_string()),
                    ("height", logo.height.to_string()),
                ],
            ),
            LogoSlot::Failed { url, message } => fill_template(
                &tr.t(keys::CLI_LOGO_FAILED),
                &[("url", url.clone()), ("error", message.clone())],
            ),
        })
        .collect()
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    let n = io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    if n == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed",
        )));
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
